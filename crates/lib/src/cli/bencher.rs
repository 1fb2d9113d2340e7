use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Error, Result};

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub(crate) struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, returning a report of the collected samples.
    pub(crate) fn iter<T, O, E>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        mut iter: T,
    ) -> Result<Report>
    where
        T: FnMut() -> Result<O, E>,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                black_box(iter()?);
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample(&mut iter)?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample(&mut iter)?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        log::debug!("collected {} samples", samples.len());
        samples.sort();
        Ok(Report::from_sorted(&samples))
    }
}

/// Time a single invocation.
fn sample<T, O, E>(iter: &mut T) -> Result<Duration>
where
    T: FnMut() -> Result<O, E>,
    Error: From<E>,
{
    let before = Instant::now();
    let value = iter()?;
    let elapsed = before.elapsed();
    black_box(value);
    Ok(elapsed)
}
