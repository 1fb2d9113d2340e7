use lib::prelude::*;

lib::entry!("d04.txt", solve);

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';

/// Rolls with fewer neighbouring rolls than this can be reached.
const CROWDED: usize = 4;

fn solve(input: IStr) -> Result<(usize, usize)> {
    let mut data = input.as_data().to_vec();
    let columns = data.find_byte(b'\n').unwrap_or(data.len());

    let mut grid = data.as_grid_mut_with_stride(columns, 1);

    let mut part1 = None;
    let mut part2 = 0;

    loop {
        let removable = accessible(grid.as_grid());

        if removable.is_empty() {
            break;
        }

        part1.get_or_insert(removable.len());
        part2 += removable.len();

        for (row, column) in removable {
            grid.set(row, column, EMPTY);
        }
    }

    Ok((part1.unwrap_or_default(), part2))
}

/// Positions of the rolls which can currently be reached.
fn accessible(grid: Grid<'_, u8>) -> Vec<(usize, usize)> {
    let is_roll = |(row, column): (usize, usize)| grid.try_get(row, column) == Some(&ROLL);

    grid.positions()
        .filter(|&pos| is_roll(pos))
        .filter(|&(row, column)| {
            grid.neighbours(row, column).filter(|&n| is_roll(n)).count() < CROWDED
        })
        .collect()
}
