use lib::prelude::*;

lib::entry!("d01.txt", solve);

/// Number of positions on the dial.
const DIAL: u32 = 100;
const START: u32 = 50;

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut position = START;
    let mut part1 = 0;
    let mut part2 = 0;

    while let Some(Rotation { direction, clicks }) = input.try_line::<Rotation>()? {
        part2 += clicks / DIAL;
        let rest = clicks % DIAL;

        // Landing on or passing zero with the remainder counts once, unless we
        // started on it.
        position = match direction {
            Direction::Left => {
                if position != 0 && rest >= position {
                    part2 += 1;
                }

                (position + DIAL - rest) % DIAL
            }
            Direction::Right => {
                if position != 0 && position + rest >= DIAL {
                    part2 += 1;
                }

                (position + rest) % DIAL
            }
        };

        if position == 0 {
            part1 += 1;
        }
    }

    Ok((part1, part2))
}

enum Direction {
    Left,
    Right,
}

struct Rotation {
    direction: Direction,
    clicks: u32,
}

lib::from_input! {
    |((B(direction), clicks)): (B, u32)| -> Rotation {
        let direction = match direction {
            b'L' => Direction::Left,
            b'R' => Direction::Right,
            other => bail!("bad direction `{}`", other as char),
        };

        Ok(Rotation { direction, clicks })
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const EXAMPLE: &[u8] = b"L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example() -> Result<()> {
        assert_eq!(super::solve(IStr::new(EXAMPLE))?, (3, 6));
        Ok(())
    }

    #[test]
    fn test_full_turns() -> Result<()> {
        assert_eq!(super::solve(IStr::new(b"R1000\n"))?, (0, 10));
        assert_eq!(super::solve(IStr::new(b"L250\n"))?, (1, 3));
        assert_eq!(super::solve(IStr::new(b"R50\nL100\nR0\n"))?, (3, 2));
        Ok(())
    }

    #[test]
    fn test_bad_direction() {
        assert!(super::solve(IStr::new(b"L1\nU5\n")).is_err());
    }
}
