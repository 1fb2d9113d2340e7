use lib::prelude::*;

lib::entry!("d06.txt", solve);

fn solve(input: IStr) -> Result<(u64, u64)> {
    let mut rows = input.as_data().lines().collect::<Vec<_>>();

    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }

    let Some((&ops, rows)) = rows.split_last() else {
        return Ok((0, 0));
    };

    let sheet = Sheet { rows, ops };

    let mut part1 = 0;
    let mut part2 = 0;

    for columns in sheet.problems() {
        let op = sheet.op(columns.clone())?;

        let mut horizontal = Vec::new();

        for row in rows {
            if let Some(n) = number(columns.clone().map(|c| cell(row, c)))? {
                horizontal.push(n);
            }
        }

        let mut vertical = Vec::new();

        for c in columns {
            if let Some(n) = number(rows.iter().map(|row| cell(row, c)))? {
                vertical.push(n);
            }
        }

        part1 += op.apply(&horizontal);
        part2 += op.apply(&vertical);
    }

    Ok((part1, part2))
}

/// A worksheet, with rows of digits and a final row of operators.
struct Sheet<'a> {
    rows: &'a [&'a [u8]],
    ops: &'a [u8],
}

impl Sheet<'_> {
    fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.len())
            .chain([self.ops.len()])
            .max()
            .unwrap_or_default()
    }

    fn is_blank(&self, c: usize) -> bool {
        self.rows.iter().chain([&self.ops]).all(|row| cell(row, c) == b' ')
    }

    /// Column ranges of each problem, separated by blank columns.
    fn problems(&self) -> Vec<std::ops::Range<usize>> {
        let mut problems = Vec::new();
        let mut start = None;

        for c in 0..self.width() {
            match (start, self.is_blank(c)) {
                (Some(s), true) => {
                    problems.push(s..c);
                    start = None;
                }
                (None, false) => {
                    start = Some(c);
                }
                _ => {}
            }
        }

        if let Some(s) = start {
            problems.push(s..self.width());
        }

        problems
    }

    fn op(&self, columns: std::ops::Range<usize>) -> Result<Op> {
        let range = columns.clone();

        let Some(b) = columns.map(|c| cell(self.ops, c)).find(|&b| b != b' ') else {
            bail!("missing operator in columns {range:?}");
        };

        match b {
            b'+' => Ok(Op::Add),
            b'*' => Ok(Op::Mul),
            b => bail!("bad operator `{}` in columns {range:?}", b as char),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, numbers: &[u64]) -> u64 {
        match self {
            Op::Add => numbers.iter().sum(),
            Op::Mul => numbers.iter().product(),
        }
    }
}

/// Cells past the end of a row read as blank.
#[inline]
fn cell(row: &[u8], c: usize) -> u8 {
    row.get(c).copied().unwrap_or(b' ')
}

/// Read a number out of cells, skipping blanks.
fn number(cells: impl IntoIterator<Item = u8>) -> Result<Option<u64>> {
    let mut n = None::<u64>;

    for b in cells {
        if b == b' ' {
            continue;
        }

        ensure!(b.is_ascii_digit(), "bad digit `{}`", b as char);
        n = Some(n.unwrap_or_default() * 10 + u64::from(b - b'0'));
    }

    Ok(n)
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const EXAMPLE: &[u8] = b"123 328  51 64\n 45 64  387 23\n  6 98  215 314\n*   +   *   +  \n";

    #[test]
    fn test_example() -> Result<()> {
        assert_eq!(super::solve(IStr::new(EXAMPLE))?, (4277556, 3263827));
        Ok(())
    }

    #[test]
    fn test_single_problem() -> Result<()> {
        assert_eq!(super::solve(IStr::new(b"12\n 3\n+ \n"))?, (15, 24));
        assert_eq!(super::solve(IStr::new(b""))?, (0, 0));
        Ok(())
    }

    #[test]
    fn test_bad_operator() {
        assert!(super::solve(IStr::new(b"1 2\n3 4\n- +\n")).is_err());
    }
}
