use super::{
    is_puzzle_block, parse_answers, redact, redact_answers, redact_puzzle_blocks, Part,
};
use crate::cli::Day;

const NARRATIVE: &str = "The Elves need help sorting their paper rolls.\nHow many rolls of paper can be accessed by a forklift in the warehouse?";

const CODE: &str = "fn main() {\n    let input = std::fs::read_to_string(\"input\").unwrap();\n    println!(\"{}\", input.lines().count());\n}";

fn day(n: u32) -> Day {
    Day::new(n).unwrap()
}

fn fenced(body: &str) -> String {
    format!("```\n{body}\n```")
}

fn answers(answers: &[&str]) -> Vec<String> {
    answers.iter().map(|a| a.to_string()).collect()
}

#[test]
fn test_redact_answers() {
    let text = redact_answers("The answer is 42 and 4242", &answers(&["42"]));
    assert_eq!(text, "The answer is (REDACTED) and (REDACTED)(REDACTED)");

    let text = redact_answers("p1: 357, p2: 3121910778619", &answers(&["357", "3121910778619"]));
    assert_eq!(text, "p1: (REDACTED), p2: (REDACTED)");

    let text = redact_answers("nothing here", &[]);
    assert_eq!(text, "nothing here");
}

#[test]
fn test_answer_order() {
    // A shorter answer applied first mangles a longer one containing it.
    let text = redact_answers("42", &answers(&["4", "42"]));
    assert_eq!(text, "(REDACTED)2");

    let text = redact_answers("42", &answers(&["42", "4"]));
    assert_eq!(text, "(REDACTED)");
}

#[test]
fn test_parse_answers() {
    assert_eq!(parse_answers("  13 \n\n43\r\n   \n"), answers(&["13", "43"]));
    assert!(parse_answers("").is_empty());
}

#[test]
fn test_is_puzzle_block() {
    assert!(is_puzzle_block(NARRATIVE));
    assert!(!is_puzzle_block("How many?"));
    assert!(!is_puzzle_block(CODE));

    // Indicators win over code markers.
    let mixed = format!("For example, consider this:\n{CODE}");
    assert!(is_puzzle_block(&mixed));

    let shouting = "The reactor hums quietly\n".repeat(11) + "Is it safe?";
    assert!(is_puzzle_block(&shouting));

    let short = "The reactor hums quietly\n".repeat(5) + "Is it safe?";
    assert!(!is_puzzle_block(&short));

    let calm = "The reactor hums quietly\n".repeat(12);
    assert!(!is_puzzle_block(&calm));
}

#[test]
fn test_redact_blocks() {
    let text = format!(
        "Here:\n{}\nand then\n{}\nand code\n{}\nend",
        fenced(NARRATIVE),
        fenced(NARRATIVE),
        fenced(CODE)
    );

    let expected = format!(
        "Here:\n{}\nand then\n{}\nand code\n{}\nend",
        fenced("(REDACTED) the text in this box is the puzzle, part one of advent of code 2025 day 07"),
        fenced("(REDACTED) the text in this box is the puzzle, part two of advent of code 2025 day 07"),
        fenced(CODE)
    );

    assert_eq!(redact_puzzle_blocks(&text, day(7)), expected);
}

#[test]
fn test_third_block_is_part_one() {
    let text = [fenced(NARRATIVE), fenced(NARRATIVE), fenced(NARRATIVE)].join("\n\n");
    let out = redact_puzzle_blocks(&text, day(12));

    assert_eq!(out.matches("part one of advent of code 2025 day 12").count(), 2);
    assert_eq!(out.matches("part two of advent of code 2025 day 12").count(), 1);
    assert!(!out.contains("How many"));

    let one = out.find("part one").unwrap();
    let two = out.find("part two").unwrap();
    let last = out.rfind("part one").unwrap();
    assert!(one < two && two < last);
}

#[test]
fn test_redact_is_idempotent() {
    let text = format!(
        "The answer was 1227775554.\n{}\nThen {}\n",
        fenced(NARRATIVE),
        fenced(CODE)
    );
    let answers = answers(&["1227775554"]);

    let once = redact(&text, &answers, day(2));
    let twice = redact(&once, &answers, day(2));

    assert_eq!(once, twice);
    assert!(once.starts_with("The answer was (REDACTED).\n```\n(REDACTED) the text in this box is the puzzle, part one of advent of code 2025 day 02\n```"));
}

#[test]
fn test_redacted_blocks_keep_numbering() {
    let text = format!(
        "{}\n{}",
        fenced("(REDACTED) the text in this box is the puzzle, part one of advent of code 2025 day 03"),
        fenced(NARRATIVE)
    );

    let out = redact_puzzle_blocks(&text, day(3));
    assert!(out.ends_with("part one of advent of code 2025 day 03\n```"));
}

#[test]
fn test_unterminated_block() {
    let text = format!("```\n{NARRATIVE}");
    assert_eq!(redact_puzzle_blocks(&text, day(1)), text);
}

#[test]
fn test_part() {
    assert_eq!(Part::nth(0), Part::One);
    assert_eq!(Part::nth(1), Part::Two);
    assert_eq!(Part::nth(2), Part::One);
    assert_eq!(Part::nth(5), Part::One);
    assert_eq!(Part::One.to_string(), "one");
}
