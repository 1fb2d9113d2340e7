use lib::prelude::*;

lib::entry!("d03.txt", solve);

fn solve(mut input: IStr) -> Result<(u64, u64)> {
    let mut part1 = 0;
    let mut part2 = 0;

    while let Some(bank) = input.try_line::<&[u8]>()? {
        let bank = bank.trim();

        if bank.is_empty() {
            continue;
        }

        ensure!(
            bank.iter().all(u8::is_ascii_digit),
            "bad battery bank `{}`",
            bank.as_bstr()
        );

        part1 += joltage(bank, 2)?;
        part2 += joltage(bank, 12)?;
    }

    Ok((part1, part2))
}

/// The largest number formed by picking `count` batteries in order.
///
/// Each digit is the first largest one which still leaves enough batteries
/// after it for the remaining digits.
fn joltage(bank: &[u8], count: usize) -> Result<u64> {
    ensure!(
        bank.len() >= count,
        "bank `{}` has fewer than {count} batteries",
        bank.as_bstr()
    );

    let mut start = 0;
    let mut value = 0;

    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];

        let Some((index, &digit)) = window.iter().enumerate().rev().max_by_key(|(_, d)| **d) else {
            bail!("empty window");
        };

        value = value * 10 + u64::from(digit - b'0');
        start += index + 1;
    }

    Ok(value)
}
