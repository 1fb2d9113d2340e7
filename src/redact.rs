//! Redaction of answers and puzzle text from conversation transcripts.

use core::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::cli::Day;

#[cfg(test)]
mod tests;

/// Replacement for answers.
pub(crate) const REDACTED: &str = "(REDACTED)";

/// Prefix of a redacted puzzle block, also used to detect them.
const PUZZLE_REDACTED: &str = "(REDACTED) the text in this box is the puzzle";

/// Bodies shorter than this in bytes are never puzzle text.
const MIN_PUZZLE_LEN: usize = 100;

/// Bodies with more lines than this may be puzzle text.
const MIN_PUZZLE_LINES: usize = 10;

const PUZZLE_INDICATORS: [&str; 12] = [
    "you need to",
    "you must",
    "you find",
    "you arrive",
    "your puzzle",
    "for example",
    "--- day",
    "--- part",
    "what is",
    "how many",
    "find the",
    "calculate",
];

const CODE_INDICATORS: [&str; 15] = [
    "func ",
    "package ",
    "import ",
    "def ",
    "class ",
    "public ",
    "private ",
    "const ",
    "let ",
    "var ",
    "function ",
    "return ",
    "if (",
    "for (",
    "while (",
];

static FENCED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\n(.*?)\n```").expect("FENCED: hardcoded regex is valid"));

/// Which part of the puzzle a redacted block is labelled as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Part {
    One,
    Two,
}

impl Part {
    /// Label for the zero-based `n`th redacted block.
    ///
    /// Only the second block is part two, any further blocks fall back to
    /// part one.
    pub(crate) fn nth(n: usize) -> Self {
        if n == 1 {
            Self::Two
        } else {
            Self::One
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Two => write!(f, "two"),
        }
    }
}

/// Parse answers, one per line. Blank lines are ignored.
pub(crate) fn parse_answers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Read answers from a file.
pub(crate) fn read_answers(path: &Path) -> io::Result<Vec<String>> {
    Ok(parse_answers(&fs::read_to_string(path)?))
}

/// Replace every occurrence of every answer with [`REDACTED`].
///
/// Answers are applied in order, each over the output of the previous one.
pub(crate) fn redact_answers(text: &str, answers: &[String]) -> String {
    answers
        .iter()
        .filter(|answer| !answer.is_empty())
        .fold(text.to_owned(), |text, answer| {
            if REDACTED.contains(answer.as_str()) {
                log::warn!("answer `{answer}` also matches redaction markers");
            }

            text.replace(answer.as_str(), REDACTED)
        })
}

/// Replace fenced blocks which look like puzzle text with a placeholder.
///
/// Blocks which are already redacted are left alone, so this can be applied
/// repeatedly.
pub(crate) fn redact_puzzle_blocks(text: &str, day: Day) -> String {
    let (mut out, last, _) = FENCED.captures_iter(text).fold(
        (String::with_capacity(text.len()), 0, 0),
        |(mut out, last, redacted), captures| {
            let Some((block, body)) = block_and_body(&captures) else {
                return (out, last, redacted);
            };

            out.push_str(&text[last..block.start()]);

            if body.contains(PUZZLE_REDACTED) || !is_puzzle_block(body) {
                log::debug!("keeping block at {}..{}", block.start(), block.end());
                out.push_str(block.as_str());
                return (out, block.end(), redacted);
            }

            if redacted >= 2 {
                log::warn!("day {day}: redacting puzzle block number {}", redacted + 1);
            }

            out.push_str(&placeholder(Part::nth(redacted), day));
            (out, block.end(), redacted + 1)
        },
    );

    out.push_str(&text[last..]);
    out
}

fn block_and_body<'t>(captures: &Captures<'t>) -> Option<(regex::Match<'t>, &'t str)> {
    Some((captures.get(0)?, captures.get(1)?.as_str()))
}

fn placeholder(part: Part, day: Day) -> String {
    format!(
        "```\n{PUZZLE_REDACTED}, part {part} of advent of code 2025 day {}\n```",
        day.padded()
    )
}

/// Heuristically decide whether a fenced block body is puzzle text.
pub(crate) fn is_puzzle_block(body: &str) -> bool {
    if body.len() < MIN_PUZZLE_LEN {
        return false;
    }

    let lower = body.to_lowercase();

    if PUZZLE_INDICATORS.iter().any(|i| lower.contains(i)) {
        return true;
    }

    if CODE_INDICATORS.iter().any(|i| lower.contains(i)) {
        return false;
    }

    body.split('\n').count() > MIN_PUZZLE_LINES && body.contains(['?', '!'])
}

/// Redact answers, then puzzle blocks.
pub(crate) fn redact(text: &str, answers: &[String], day: Day) -> String {
    redact_puzzle_blocks(&redact_answers(text, answers), day)
}
