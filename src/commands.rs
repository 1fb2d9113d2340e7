//! The helper commands.

use std::fs;
use std::path::Path;

use crate::cli::{Command, CommandKind, Day};
use crate::config::Config;
use crate::error::Error;
use crate::extract::extract_puzzle;
use crate::http::Client;
use crate::redact::{read_answers, redact};
use crate::session::load_session;

/// Stub solution written for the human attempt.
const HUMAN_STUB: &str = r#"use std::fs;

fn main() {
    let input = fs::read_to_string("../input").expect("reading input");
    println!("Part One: {}", part1(&input));
    println!("Part Two: {}", part2(&input));
}

fn part1(_input: &str) -> u64 {
    0
}

fn part2(_input: &str) -> u64 {
    0
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_example() {
        let example = "";
        assert_eq!(super::part1(example), 0);
        assert_eq!(super::part2(example), 0);
    }
}
"#;

/// Run the given command.
pub(crate) fn run(config: &Config, command: &Command) -> Result<(), Error> {
    log::debug!("running {} for day {}", command.kind, command.day);

    match command.kind {
        CommandKind::Create => create(config, command.day),
        CommandKind::Fetch => fetch(config, command.day),
        CommandKind::Redact => redact_conversation(config, command.day),
    }
}

/// Create the per-day directory, fetching the puzzle input into it.
pub(crate) fn create(config: &Config, day: Day) -> Result<(), Error> {
    let dir = config.day_dir(day);

    fs::create_dir(&dir).map_err(Error::io(format!("creating directory {}", dir.display())))?;

    let session = load_session(&config.env_path())?;
    let client = Client::new(config, session).map_err(Error::http("fetching input"))?;
    let input = client
        .fetch_input(day)
        .map_err(Error::http("fetching input"))?;

    write(&config.input_path(day), &input, "creating input file")?;
    write(&config.answers_path(day), "", "creating answers file")?;

    fs::create_dir(config.ai_dir(day)).map_err(Error::io("creating ai directory"))?;

    let human = config.human_dir(day);
    fs::create_dir(&human).map_err(Error::io("creating human directory"))?;
    write(&human.join("main.rs"), HUMAN_STUB, "creating main.rs")?;

    println!(
        "Successfully created directory structure for {}",
        dir.display()
    );
    Ok(())
}

/// Fetch the puzzle page and store its narrative.
pub(crate) fn fetch(config: &Config, day: Day) -> Result<(), Error> {
    let session = load_session(&config.env_path())?;
    let client = Client::new(config, session).map_err(Error::http("fetching puzzle HTML"))?;
    let html = client
        .fetch_puzzle(day)
        .map_err(Error::http("fetching puzzle HTML"))?;

    let content = extract_puzzle(&html, day);

    if content.is_empty() {
        log::warn!("no puzzle content found for day {day}");
    }

    let path = config.content_path(day);
    write(&path, &content, "writing content file")?;

    println!(
        "Successfully fetched puzzle content for day {day} to {}",
        path.display()
    );
    Ok(())
}

/// Redact answers and puzzle text from the conversation transcript in place.
pub(crate) fn redact_conversation(config: &Config, day: Day) -> Result<(), Error> {
    let answers =
        read_answers(&config.answers_path(day)).map_err(Error::io("reading answers file"))?;

    log::debug!("day {day}: {} answers to redact", answers.len());

    let path = config.conversation_path(day);
    let conversation =
        fs::read_to_string(&path).map_err(Error::io("reading conversation file"))?;

    let redacted = redact(&conversation, &answers, day);
    write(&path, &redacted, "writing conversation file")?;

    println!("Successfully redacted day {day} conversation");
    Ok(())
}

fn write(path: &Path, contents: &str, what: &'static str) -> Result<(), Error> {
    fs::write(path, contents).map_err(Error::io(what))
}
