//! Command line parsing for the helper.

use core::fmt;
use std::ffi::OsString;

use thiserror::Error;

/// Usage text printed when no command or an unknown command is given.
pub(crate) const USAGE: &str = "\
Usage: aoc [--verbose] <command> [arguments]

Commands:
  create <day_number>  Create directory structure for a day
  redact <day_number>  Redact answers and puzzle text from conversation
  fetch <day_number>   Fetch puzzle content from adventofcode.com

Examples:
  aoc create 5
  aoc redact 4
  aoc fetch 7
";

/// One of the daily puzzles, between 1 and 25 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Day(u32);

impl Day {
    pub(crate) const FIRST: u32 = 1;
    pub(crate) const LAST: u32 = 25;

    /// Construct a day, returning `None` if it's out of range.
    pub(crate) fn new(day: u32) -> Option<Self> {
        (Self::FIRST..=Self::LAST).contains(&day).then_some(Self(day))
    }

    /// The zero-padded form used in directory and file names.
    pub(crate) fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for Day {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The command to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandKind {
    Create,
    Fetch,
    Redact,
}

impl CommandKind {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "create" => Some(Self::Create),
            "fetch" => Some(Self::Fetch),
            "redact" => Some(Self::Redact),
            _ => None,
        }
    }

    fn example_day(self) -> u32 {
        match self {
            Self::Create => 5,
            Self::Fetch => 7,
            Self::Redact => 1,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Fetch => write!(f, "fetch"),
            Self::Redact => write!(f, "redact"),
        }
    }
}

/// A fully parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Command {
    pub(crate) kind: CommandKind,
    pub(crate) day: Day,
}

/// Errors raised while parsing the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("missing command")]
    NoCommand,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Usage: aoc {0} <day_number>")]
    MissingDay(CommandKind),
    #[error("Error: day number must be between 1 and 25")]
    InvalidDay(String),
    #[error("Error: non-utf8 argument")]
    NonUtf8,
}

impl ParseError {
    /// Print the error the way the user expects to see it.
    pub(crate) fn report(&self) {
        match self {
            Self::NoCommand => {
                print!("{USAGE}");
            }
            Self::UnknownCommand(..) => {
                eprintln!("{self}");
                eprintln!();
                eprint!("{USAGE}");
            }
            Self::MissingDay(kind) => {
                eprintln!("{self}");
                eprintln!("Example: aoc {kind} {}", kind.example_day());
            }
            Self::InvalidDay(..) | Self::NonUtf8 => {
                eprintln!("{self}");
            }
        }
    }
}

/// Helper options.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Opts {
    pub(crate) verbose: bool,
    pub(crate) command: Command,
}

impl Opts {
    /// Parse options from arguments, not including the program name.
    pub(crate) fn parse<I>(args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut verbose = false;
        let mut positional = Vec::new();

        for arg in args {
            let arg = arg.into_string().map_err(|_| ParseError::NonUtf8)?;

            match arg.as_str() {
                "-v" | "--verbose" if positional.is_empty() => {
                    verbose = true;
                }
                _ => {
                    positional.push(arg);
                }
            }
        }

        let mut it = positional.into_iter();

        let name = it.next().ok_or(ParseError::NoCommand)?;
        let kind = CommandKind::parse(&name).ok_or(ParseError::UnknownCommand(name))?;
        let day = it.next().ok_or(ParseError::MissingDay(kind))?;

        let day = day
            .parse()
            .ok()
            .and_then(Day::new)
            .ok_or(ParseError::InvalidDay(day))?;

        Ok(Self {
            verbose,
            command: Command { kind, day },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::{Command, CommandKind, Day, Opts, ParseError};

    fn parse(args: &[&str]) -> Result<Opts, ParseError> {
        Opts::parse(args.iter().map(OsString::from))
    }

    #[test]
    fn test_parse_commands() {
        let opts = parse(&["fetch", "7"]).unwrap();

        assert_eq!(
            opts,
            Opts {
                verbose: false,
                command: Command {
                    kind: CommandKind::Fetch,
                    day: Day::new(7).unwrap(),
                },
            }
        );

        let opts = parse(&["--verbose", "redact", "25"]).unwrap();
        assert!(opts.verbose);
        assert_eq!(opts.command.kind, CommandKind::Redact);
        assert_eq!(opts.command.day.padded(), "25");

        let opts = parse(&["create", "05"]).unwrap();
        assert_eq!(opts.command.day, Day::new(5).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(&[]), Err(ParseError::NoCommand));
        assert_eq!(parse(&["-v"]), Err(ParseError::NoCommand));
        assert_eq!(
            parse(&["frobnicate", "1"]),
            Err(ParseError::UnknownCommand("frobnicate".into()))
        );
        assert_eq!(
            parse(&["create"]),
            Err(ParseError::MissingDay(CommandKind::Create))
        );

        for day in ["0", "26", "-1", "five", ""] {
            assert_eq!(
                parse(&["fetch", day]),
                Err(ParseError::InvalidDay(day.into()))
            );
        }
    }

    #[test]
    fn test_day() {
        assert_eq!(Day::new(0), None);
        assert_eq!(Day::new(26), None);
        assert_eq!(Day::new(3).unwrap().padded(), "03");
        assert_eq!(format!("{:02}", Day::new(9).unwrap()), "09");
        assert_eq!(Day::new(12).unwrap().to_string(), "12");
    }
}
