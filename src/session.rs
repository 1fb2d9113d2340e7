use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const PREFIX: &str = "session=";

#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error("failed to read {} file: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("session cookie not found in {} file", .path.display())]
    Missing { path: PathBuf },
}

/// Load the session cookie value from the given dotenv-style file.
pub(crate) fn load_session(path: &Path) -> Result<String, SessionError> {
    let content = fs::read_to_string(path).map_err(|source| SessionError::Read {
        path: path.to_owned(),
        source,
    })?;

    let session = parse_session(&content).ok_or_else(|| SessionError::Missing {
        path: path.to_owned(),
    })?;

    log::debug!("loaded session cookie from {}", path.display());
    Ok(session.to_owned())
}

/// Find the first `session=` line and return what follows it.
///
/// Lines are trimmed before matching, so indentation and trailing carriage
/// returns are ignored.
pub(crate) fn parse_session(content: &str) -> Option<&str> {
    content
        .split('\n')
        .map(str::trim)
        .find_map(|line| line.strip_prefix(PREFIX))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{load_session, parse_session, SessionError};

    #[test]
    fn test_parse_session() {
        assert_eq!(parse_session("session=abc123\n"), Some("abc123"));
        assert_eq!(
            parse_session("# comment\nOTHER=1\n  session=first\r\nsession=second"),
            Some("first")
        );
        assert_eq!(parse_session("session="), Some(""));
        assert_eq!(parse_session("SESSION=abc\nother=1"), None);
        assert_eq!(parse_session(""), None);
    }

    #[test]
    fn test_load_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        let error = load_session(&path).unwrap_err();
        assert!(matches!(error, SessionError::Read { .. }));
        assert!(error.to_string().starts_with("failed to read "));

        fs::write(&path, "TOKEN=1\n").unwrap();
        let error = load_session(&path).unwrap_err();
        assert!(matches!(error, SessionError::Missing { .. }));
        assert!(error.to_string().starts_with("session cookie not found in "));

        fs::write(&path, "TOKEN=1\nsession=deadbeef\n").unwrap();
        assert_eq!(load_session(&path).unwrap(), "deadbeef");
    }
}
