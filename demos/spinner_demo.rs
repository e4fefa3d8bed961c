//! Spinner Demo: Animations playing while blocking work runs.
//!
//! Runs a few simulated jobs, each with a different animation:
//! the default bar, a spinner with an inline annotation, and a
//! multi-line animation built with `stack_lines`.

use reelkit::{run, stack_lines, Animation, Animator, Annotation};
use std::thread;
use std::time::Duration;

/// Simulate a job that takes `millis` milliseconds.
fn job(millis: u64) -> u64 {
    thread::sleep(Duration::from_millis(millis));
    millis
}

fn main() {
    println!("Reelkit Spinner Demo");
    println!("====================");
    println!();

    let elapsed = run(|| job(1500), &Animation::default(), Duration::from_millis(100));
    println!("Default animation finished after {elapsed}ms");
    println!();

    let spinner = Animator::new(Animation::cycle(["|", "/", "-", "\\"]))
        .interval(Duration::from_millis(80))
        .hide_cursor(true)
        .annotate(Annotation::new().start_inline("Downloading ").end("ok"));
    spinner.run(|| job(1500));
    println!();

    let wave = Animation::from_fn(stack_lines(
        || [".  ", ".. ", "...", " ..", "  .", "   "],
        3,
        2,
    ));
    let result: Result<u64, String> = Animator::new(wave)
        .interval(Duration::from_millis(120))
        .annotate(Annotation::new().start("Indexing").end("Indexed"))
        .try_run(|| Ok(job(2000)));
    println!("Multi-line job returned {result:?}");
    println!();

    println!("Done.");
}
