//! Puzzle narrative extraction from converted page text.

use crate::cli::Day;
use crate::html::html_to_text;

/// Markers which end the narrative, in priority order.
///
/// The first marker present anywhere after the start wins, even when a
/// lower priority marker appears earlier in the text.
const END_MARKERS: [&str; 4] = [
    "To begin, get your puzzle input",
    "Although it hasn't changed",
    "Both parts of this puzzle are complete",
    "At this point, you should return to your Advent calendar",
];

const ANSWER_LINE: &str = "Your puzzle answer was";

/// Convert a puzzle page and extract its narrative.
pub(crate) fn extract_puzzle(html: &str, day: Day) -> String {
    extract_text(&html_to_text(html), day)
}

/// Extract the narrative for `day` out of plain text.
///
/// Returns an empty string if the day heading is missing.
pub(crate) fn extract_text(text: &str, day: Day) -> String {
    let start = format!("--- Day {day}:");

    let Some(start) = text.find(&start) else {
        log::debug!("no heading for day {day}");
        return String::new();
    };

    let content = &text[start..];

    let end = END_MARKERS
        .iter()
        .find_map(|marker| content.find(marker))
        .unwrap_or(content.len());

    remove_answer_lines(&content[..end]).trim().to_owned()
}

/// Drop every line mentioning a submitted answer.
pub(crate) fn remove_answer_lines(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !line.contains(ANSWER_LINE))
        .collect::<Vec<_>>()
        .join("\n")
}
