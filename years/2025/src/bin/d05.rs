use lib::prelude::*;

lib::entry!("d05.txt", solve);

fn solve(mut input: IStr) -> Result<(usize, u64)> {
    let mut ranges = Vec::new();

    while let Some(range) = input.try_line::<Fresh>()? {
        ranges.push(range);
    }

    let mut part1 = 0;

    while let Some(id) = input.try_line::<u64>()? {
        if ranges.iter().any(|r| r.contains(id)) {
            part1 += 1;
        }
    }

    Ok((part1, count_fresh(&mut ranges)?))
}

/// An inclusive range of fresh ingredient IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Fresh {
    start: u64,
    end: u64,
}

impl Fresh {
    #[inline]
    fn contains(&self, id: u64) -> bool {
        (self.start..=self.end).contains(&id)
    }

    /// Number of IDs in the range, if it fits in a `u64`.
    fn size(&self) -> Option<u64> {
        (self.end - self.start).checked_add(1)
    }
}

lib::from_input! {
    |Split((start, end)): Split<'-', (u64, u64)>| -> Fresh {
        ensure!(start <= end, "reversed range {start}-{end}");
        Ok(Fresh { start, end })
    }
}

/// Count the IDs covered by the union of all ranges.
fn count_fresh(ranges: &mut [Fresh]) -> Result<u64> {
    ranges.sort_unstable();

    let mut total = 0u64;
    let mut current = None::<Fresh>;

    for &range in ranges.iter() {
        current = match current {
            Some(c) if range.start <= c.end.saturating_add(1) => Some(Fresh {
                start: c.start,
                end: c.end.max(range.end),
            }),
            Some(c) => {
                total = add_size(total, c)?;
                Some(range)
            }
            None => Some(range),
        };
    }

    if let Some(c) = current {
        total = add_size(total, c)?;
    }

    Ok(total)
}

fn add_size(total: u64, range: Fresh) -> Result<u64> {
    range
        .size()
        .and_then(|size| total.checked_add(size))
        .with_context(|| format!("fresh ID count overflows at {}-{}", range.start, range.end))
}
