//! Solver output, either human readable or as JSON lines.

use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

pub(crate) enum OutputKind {
    Json,
    Normal,
}

pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(Level::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(Level::Error, m)
    }

    /// Write the answers to both parts of a puzzle.
    pub(crate) fn answers<A, B>(&mut self, part1: &A, part2: &B) -> io::Result<()>
    where
        A: fmt::Display + Serialize,
        B: fmt::Display + Serialize,
    {
        match self.kind {
            OutputKind::Json => self.line(&Line::Answer { part1, part2 }),
            OutputKind::Normal => {
                writeln!(self.out, "Part One: {part1}")?;
                writeln!(self.out, "Part Two: {part2}")
            }
        }
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.line::<(), ()>(&Line::Report(report)),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    fn message(&mut self, level: Level, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.line::<(), ()>(&Line::Message {
                kind: level,
                output: m.to_string(),
            }),
            OutputKind::Normal => writeln!(self.out, "{level}: {m}"),
        }
    }

    fn line<A, B>(&mut self, line: &Line<'_, A, B>) -> io::Result<()>
    where
        A: Serialize,
        B: Serialize,
    {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)
    }

    #[cfg(test)]
    fn into_inner(self) -> O {
        self.out
    }
}

/// One JSON line, `{"type": ..., "data": ...}`.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum Line<'a, A, B> {
    Answer { part1: &'a A, part2: &'a B },
    Message { kind: Level, output: String },
    Report(&'a Report),
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Error => write!(f, "error"),
        }
    }
}
