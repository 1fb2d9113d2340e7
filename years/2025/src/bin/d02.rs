use lib::prelude::*;

lib::entry!("d02.txt", solve);

fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut part1 = 0;
    let mut part2 = 0;

    while let Some(mut line) = input.try_line::<IStr>()? {
        for mut part in line.split(b',') {
            let Some(IdRange { start, end }) = part.try_next::<IdRange>()? else {
                continue;
            };

            for id in start..=end {
                let digits = digits(id);

                if digits % 2 == 0 && is_repeated(id, digits, digits / 2) {
                    part1 += id;
                }

                if (1..=digits / 2).any(|len| is_repeated(id, digits, len)) {
                    part2 += id;
                }
            }
        }
    }

    Ok((part1, part2))
}

struct IdRange {
    start: u64,
    end: u64,
}

lib::from_input! {
    |Split((start, end)): Split<'-', (u64, u64)>| -> IdRange {
        ensure!(start <= end, "reversed range {start}-{end}");
        Ok(IdRange { start, end })
    }
}

#[inline]
fn digits(n: u64) -> u32 {
    n.checked_ilog10().unwrap_or(0) + 1
}

/// Test if the `digits` long `id` is a block of `len` digits repeated.
///
/// A number made of `k` copies of a block is the block multiplied by
/// `1 0..01 0..01`, so it's enough to test divisibility by that.
fn is_repeated(id: u64, digits: u32, len: u32) -> bool {
    if len == 0 || len >= digits || digits % len != 0 {
        return false;
    }

    let block = 10u64.pow(len);
    let mut repeat = 0u64;

    for _ in 0..digits / len {
        repeat = repeat * block + 1;
    }

    id % repeat == 0
}
