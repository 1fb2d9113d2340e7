//! Helper for setting up, fetching and redacting Advent of Code 2025 days.

mod cli;
mod commands;
mod config;
mod error;
mod extract;
mod html;
mod http;
mod redact;
mod session;

use std::process::ExitCode;

use lib::cli::{install_logger, Target};
use log::LevelFilter;

use crate::cli::Opts;
use crate::config::Config;

fn main() -> ExitCode {
    let opts = match Opts::parse(std::env::args_os().skip(1)) {
        Ok(opts) => opts,
        Err(error) => {
            error.report();
            return ExitCode::FAILURE;
        }
    };

    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if let Err(error) = install_logger(Target::Stderr, level) {
        eprintln!("{error}");
    }

    let config = Config::default();

    if let Err(error) = commands::run(&config, &opts.command) {
        log::debug!("{error:?}");
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
