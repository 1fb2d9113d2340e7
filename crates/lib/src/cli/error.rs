use core::fmt;

use crate::input::{IStr, IStrError, NL};

/// Used to associate a parse position with an error raised by a solver.
#[doc(hidden)]
pub fn error_context<E>(path: &'static str, input: IStr, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);

    let Some(index) = error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(|e| e.span().start)
    else {
        return error.context(path);
    };

    let pos = pos_from(input.as_data(), index.saturating_sub(input.index()));
    error.context(ErrorContext { path, pos })
}

/// A line and column combination, both zero-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Get the line and column of `index` in `data`.
pub(crate) fn pos_from(data: &[u8], index: usize) -> LineCol {
    let head = &data[..index.min(data.len())];
    let line = memchr::memchr_iter(NL, head).count();

    let column = match memchr::memrchr(NL, head) {
        Some(n) => head.len() - n - 1,
        None => head.len(),
    };

    LineCol::new(line, column)
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::{error_context, pos_from, LineCol};
    use crate::input::IStr;

    #[test]
    fn test_pos_from() {
        let data = b"abc\ndef\nghi";
        assert_eq!(pos_from(data, 0), LineCol::new(0, 0));
        assert_eq!(pos_from(data, 5), LineCol::new(1, 1));
        assert_eq!(pos_from(data, 8), LineCol::new(2, 0));
        assert_eq!(pos_from(data, 100), LineCol::new(2, 3));
    }

    #[test]
    fn test_error_context() {
        let input = IStr::new(b"1\n2\nx\n");
        let mut p = input;

        let error = p.iter::<u32>().collect::<Result<Vec<_>, _>>().unwrap_err();
        let error = error_context("inputs/d01.txt", input, error);

        assert_eq!(error.to_string(), "inputs/d01.txt:3:1");
    }
}
