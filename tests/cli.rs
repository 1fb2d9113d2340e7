use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_usage() {
    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage: aoc"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("create <day_number>"))
        .stdout(predicate::str::contains("aoc fetch 7"));
}

#[test]
fn test_unknown_command() {
    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.arg("solve")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: solve"))
        .stderr(predicate::str::contains("Usage: aoc"));
}

#[test]
fn test_missing_day() {
    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.arg("redact")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: aoc redact <day_number>"))
        .stderr(predicate::str::contains("Example: aoc redact 1"));
}

#[test]
fn test_invalid_day() {
    for day in ["0", "26", "abc"] {
        let mut cmd = cargo_bin_cmd!("aoc");
        cmd.args(["create", day])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "Error: day number must be between 1 and 25",
            ));
    }
}

#[test]
fn test_fetch_without_session() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.current_dir(dir.path())
        .args(["fetch", "3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with(
            "Error loading session cookie: failed to read .env file:",
        ));
}

#[test]
fn test_create_existing_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("day08")).unwrap();

    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.current_dir(dir.path())
        .args(["create", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error creating directory day08:"));
}

#[test]
fn test_redact() {
    let dir = tempdir().unwrap();
    let day = dir.path().join("day03");
    fs::create_dir_all(day.join("ai")).unwrap();
    fs::write(day.join("answers"), "357\n3121910778619\n").unwrap();

    let puzzle = "--- Day 3: Lobby ---\nYou descend a short staircase.\nWhat is the total output joltage of the batteries in all of the banks?";
    let conversation = format!(
        "Here is the puzzle:\n```\n{puzzle}\n```\nThe answers are 357 and 3121910778619.\n```\nlet x = 1;\n```\n"
    );
    fs::write(day.join("ai/day03_conversation.txt"), conversation).unwrap();

    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.current_dir(dir.path())
        .args(["redact", "3"])
        .assert()
        .success()
        .stdout("Successfully redacted day 3 conversation\n");

    let redacted = fs::read_to_string(day.join("ai/day03_conversation.txt")).unwrap();

    assert_eq!(
        redacted,
        "Here is the puzzle:\n```\n(REDACTED) the text in this box is the puzzle, part one of advent of code 2025 day 03\n```\nThe answers are (REDACTED) and (REDACTED).\n```\nlet x = 1;\n```\n"
    );

    // A second pass leaves the transcript alone.
    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.current_dir(dir.path())
        .args(["redact", "3"])
        .assert()
        .success();

    let again = fs::read_to_string(day.join("ai/day03_conversation.txt")).unwrap();
    assert_eq!(redacted, again);
}

#[test]
fn test_redact_missing_transcript() {
    let dir = tempdir().unwrap();
    let day = dir.path().join("day02");
    fs::create_dir_all(&day).unwrap();
    fs::write(day.join("answers"), "1\n").unwrap();

    let mut cmd = cargo_bin_cmd!("aoc");
    cmd.current_dir(dir.path())
        .args(["redact", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error reading conversation file:"));
}
