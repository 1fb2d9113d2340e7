use anyhow::{anyhow, Result};
use log::Log;

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

static STDOUT_LOGGER: Logger = Logger {
    target: Target::Stdout,
};

static STDERR_LOGGER: Logger = Logger {
    target: Target::Stderr,
};

/// Install the process-wide logger writing to the given target.
pub fn install_logger(target: Target, level: log::LevelFilter) -> Result<()> {
    let logger = match target {
        Target::Stdout => &STDOUT_LOGGER,
        Target::Stderr => &STDERR_LOGGER,
    };

    log::set_logger(logger).map_err(|error| anyhow!("failed to set log: {error}"))?;
    log::set_max_level(level);
    Ok(())
}

struct Logger {
    target: Target,
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match self.target {
            Target::Stdout => println!("{}: {}", record.level(), record.args()),
            Target::Stderr => eprintln!(
                "{file}:{line}: {}: {}",
                record.level(),
                record.args(),
                file = record.file().unwrap_or_default(),
                line = record.line().unwrap_or_default()
            ),
        }
    }

    fn flush(&self) {}
}
