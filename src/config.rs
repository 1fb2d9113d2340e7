//! Where things live, locally and remotely.

use std::path::PathBuf;

use crate::cli::Day;

const BASE_URL: &str = "https://adventofcode.com";
const YEAR: u32 = 2025;
const ENV_FILE: &str = ".env";

/// Configuration for the helper.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Base URL of the puzzle site.
    pub(crate) base_url: String,
    /// Event year.
    pub(crate) year: u32,
    /// Dotenv-style file holding the session cookie, relative to `root`.
    pub(crate) env_file: PathBuf,
    /// Directory containing the per-day directories.
    pub(crate) root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            year: YEAR,
            env_file: PathBuf::from(ENV_FILE),
            root: PathBuf::new(),
        }
    }
}

impl Config {
    pub(crate) fn env_path(&self) -> PathBuf {
        self.root.join(&self.env_file)
    }

    pub(crate) fn day_dir(&self, day: Day) -> PathBuf {
        self.root.join(format!("day{}", day.padded()))
    }

    pub(crate) fn input_path(&self, day: Day) -> PathBuf {
        self.day_dir(day).join("input")
    }

    pub(crate) fn answers_path(&self, day: Day) -> PathBuf {
        self.day_dir(day).join("answers")
    }

    pub(crate) fn ai_dir(&self, day: Day) -> PathBuf {
        self.day_dir(day).join("ai")
    }

    pub(crate) fn human_dir(&self, day: Day) -> PathBuf {
        self.day_dir(day).join("human")
    }

    pub(crate) fn conversation_path(&self, day: Day) -> PathBuf {
        self.ai_dir(day)
            .join(format!("day{}_conversation.txt", day.padded()))
    }

    pub(crate) fn content_path(&self, day: Day) -> PathBuf {
        self.day_dir(day)
            .join(format!("day{}_content.txt", day.padded()))
    }

    pub(crate) fn puzzle_url(&self, day: Day) -> String {
        format!(
            "{}/{}/day/{day}",
            self.base_url.trim_end_matches('/'),
            self.year
        )
    }

    pub(crate) fn input_url(&self, day: Day) -> String {
        format!("{}/input", self.puzzle_url(day))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Config;
    use crate::cli::Day;

    #[test]
    fn test_layout() {
        let config = Config::default();
        let day = Day::new(4).unwrap();

        assert_eq!(config.env_path(), Path::new(".env"));
        assert_eq!(config.day_dir(day), Path::new("day04"));
        assert_eq!(config.answers_path(day), Path::new("day04/answers"));
        assert_eq!(
            config.conversation_path(day),
            Path::new("day04/ai/day04_conversation.txt")
        );
        assert_eq!(
            config.content_path(day),
            Path::new("day04/day04_content.txt")
        );
    }

    #[test]
    fn test_urls() {
        let config = Config {
            base_url: String::from("http://localhost:1234/"),
            ..Config::default()
        };

        let day = Day::new(7).unwrap();
        assert_eq!(config.puzzle_url(day), "http://localhost:1234/2025/day/7");
        assert_eq!(
            config.input_url(day),
            "http://localhost:1234/2025/day/7/input"
        );
    }
}
