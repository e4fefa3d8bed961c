//! Vertical stacking of single-line frame sources into multi-line frames.

use super::LINE_SEPARATOR;

/// Iterator yielded by the function returned from [`stack_lines`].
///
/// Each item joins the next line from every row with [`LINE_SEPARATOR`].
/// The stack ends as soon as any row ends.
#[derive(Debug, Clone)]
pub struct Stacked<I> {
    rows: Vec<I>,
}

impl<I> Stacked<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    fn new(mut rows: Vec<I>, offset: usize) -> Self {
        for (index, row) in rows.iter_mut().enumerate() {
            for _ in 0..index * offset {
                if row.next().is_none() {
                    break;
                }
            }
        }
        Self { rows }
    }
}

impl<I> Iterator for Stacked<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.rows.is_empty() {
            return None;
        }

        let mut frame = String::new();
        for (index, row) in self.rows.iter_mut().enumerate() {
            let line = row.next()?;
            if index > 0 {
                frame.push(LINE_SEPARATOR);
            }
            frame.push_str(line.as_ref());
        }
        Some(frame)
    }
}

/// Turn a single-line frame function into a multi-line one.
///
/// The returned function builds `height` fresh copies of `source` and
/// advances copy `i` by `i * offset` frames, so an offset of 2 starts the
/// second line two frames ahead of the first, the third four frames
/// ahead, and so on.
///
/// # Example
///
/// ```
/// use reelkit::frame::stack_lines;
///
/// let frames = stack_lines(|| ["a", "b", "c", "d"].into_iter(), 2, 1);
/// assert_eq!(frames().collect::<Vec<_>>(), vec!["a\nb", "b\nc", "c\nd"]);
/// ```
pub fn stack_lines<F, I>(
    source: F,
    height: usize,
    offset: usize,
) -> impl Fn() -> Stacked<I::IntoIter> + Send + Sync + 'static
where
    F: Fn() -> I + Send + Sync + 'static,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    move || {
        let rows = (0..height).map(|_| source().into_iter()).collect();
        Stacked::new(rows, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::validate_all;

    fn bars() -> impl Iterator<Item = String> {
        (0..5).map(|i| format!("{:<4}", "#".repeat(i)))
    }

    #[test]
    fn test_stack_no_offset() {
        let frames = stack_lines(bars, 3, 0);
        let first = frames().next().unwrap();
        assert_eq!(first, "    \n    \n    ");
        assert_eq!(frames().count(), 5);
    }

    #[test]
    fn test_stack_with_offset() {
        let frames = stack_lines(bars, 2, 1);
        let collected: Vec<String> = frames().collect();
        // The second row starts one frame ahead, so it runs out first.
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[0], "    \n#   ");
        assert_eq!(collected[3], "### \n####");
    }

    #[test]
    fn test_stack_is_uniform() {
        let frames = stack_lines(bars, 4, 1);
        let shape = validate_all(frames()).unwrap().unwrap();
        assert_eq!(shape.height, 4);
        assert_eq!(shape.width, 4);
    }

    #[test]
    fn test_stack_zero_height() {
        let frames = stack_lines(bars, 0, 1);
        assert_eq!(frames().next(), None);
    }

    #[test]
    fn test_stack_restarts() {
        let frames = stack_lines(bars, 2, 0);
        assert_eq!(frames().count(), frames().count());
    }
}
