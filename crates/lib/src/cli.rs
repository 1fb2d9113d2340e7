//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod logger;
mod output;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::input::IStr;

use self::bencher::Bencher;
pub use self::error::LineCol;
pub use self::logger::{install_logger, Target};
use self::output::{Output, OutputKind};

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Solver options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period in milliseconds.
    warmup: Option<u64>,
    /// Bench period in milliseconds.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse options from the process arguments and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            install_logger(Target::Stdout, level)?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if opts.mode != Mode::Default {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, "--count")?);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Parse the value following an option.
fn value<T>(it: &mut impl Iterator<Item = OsString>, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = it
        .next()
        .with_context(|| format!("missing argument to `{name}`"))?;
    let value = value
        .to_str()
        .with_context(|| format!("missing string argument to `{name}`"))?;
    value
        .parse()
        .with_context(|| format!("bad argument to `{name}`"))
}

/// Run a solver over the given input and print its answers.
///
/// Parse errors raised by the solver are reported against `path` with the
/// line and column they occurred on.
pub fn run<F, A, B, E>(opts: &Opts, path: &'static str, input: IStr, mut solve: F) -> Result<()>
where
    F: FnMut(IStr) -> Result<(A, B), E>,
    A: fmt::Display + Serialize,
    B: fmt::Display + Serialize,
    anyhow::Error: From<E>,
{
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    match opts.mode {
        Mode::Default => {
            let (a, b) = match solve(input) {
                Ok(value) => value,
                Err(e) => return Err(error::error_context(path, input, e)),
            };

            o.answers(&a, &b)?;
        }
        Mode::Bench => {
            let mut b = Bencher::new();

            match b.iter(&mut o, opts, || solve(input)) {
                Ok(report) => o.report(&report)?,
                Err(e) => {
                    let e = error::error_context::<anyhow::Error>(path, input, e);
                    o.error(format_args!("{e:#}"))?;
                }
            }
        }
    }

    Ok(())
}

/// Timing report from a benchmark run.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Build a report out of samples which must be sorted.
    pub(crate) fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        let Some((&min, &max)) = samples.first().zip(samples.last()) else {
            return Self::default();
        };

        let sum = samples.iter().sum::<Duration>().as_nanos();
        let avg = u64::try_from(sum / count as u128).unwrap_or(u64::MAX);

        Self {
            count,
            min,
            max,
            avg: Duration::from_nanos(avg),
            p50: percentile(samples, 50),
            p95: percentile(samples, 95),
            p99: percentile(samples, 99),
        }
    }
}

fn percentile(samples: &[Duration], p: usize) -> Duration {
    let index = (samples.len() * p / 100).min(samples.len().saturating_sub(1));
    samples.get(index).copied().unwrap_or_default()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
