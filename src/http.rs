//! Authenticated requests against the puzzle site.

use reqwest::blocking;
use reqwest::header::COOKIE;
use reqwest::StatusCode;
use thiserror::Error;

use crate::cli::Day;
use crate::config::Config;

const USER_AGENT: &str = concat!("aoc/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub(crate) enum HttpError {
    #[error("failed to build client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("failed to fetch {what}: {source}")]
    Request {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to fetch {what}: status code {status}")]
    Status { what: &'static str, status: u16 },
    #[error("failed to read {what}: {source}")]
    Body {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// A client carrying the session cookie for every request.
pub(crate) struct Client<'a> {
    config: &'a Config,
    session: String,
    client: blocking::Client,
}

impl<'a> Client<'a> {
    pub(crate) fn new(config: &'a Config, session: String) -> Result<Self, HttpError> {
        let client = blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(HttpError::Build)?;

        Ok(Self {
            config,
            session,
            client,
        })
    }

    /// Fetch the raw puzzle input for the given day.
    pub(crate) fn fetch_input(&self, day: Day) -> Result<String, HttpError> {
        self.get(&self.config.input_url(day), "input")
    }

    /// Fetch the puzzle page HTML for the given day.
    pub(crate) fn fetch_puzzle(&self, day: Day) -> Result<String, HttpError> {
        self.get(&self.config.puzzle_url(day), "HTML")
    }

    fn get(&self, url: &str, what: &'static str) -> Result<String, HttpError> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(COOKIE, format!("session={}", self.session))
            .send()
            .map_err(|source| HttpError::Request { what, source })?;

        let status = response.status();

        if status != StatusCode::OK {
            return Err(HttpError::Status {
                what,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|source| HttpError::Body { what, source })?;

        log::debug!("{url}: {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, HttpError};
    use crate::cli::Day;
    use crate::config::Config;

    fn config(server: &mockito::Server) -> Config {
        Config {
            base_url: server.url(),
            ..Config::default()
        }
    }

    #[test]
    fn test_fetch_input() {
        let mut server = mockito::Server::new();

        let mock = server
            .mock("GET", "/2025/day/3/input")
            .match_header("cookie", "session=secret")
            .with_status(200)
            .with_body("987654321111111\n")
            .create();

        let config = config(&server);
        let client = Client::new(&config, String::from("secret")).unwrap();
        let body = client.fetch_input(Day::new(3).unwrap()).unwrap();

        assert_eq!(body, "987654321111111\n");
        mock.assert();
    }

    #[test]
    fn test_status_error() {
        let mut server = mockito::Server::new();

        let mock = server
            .mock("GET", "/2025/day/12")
            .with_status(404)
            .with_body("Not Found")
            .create();

        let config = config(&server);
        let client = Client::new(&config, String::from("secret")).unwrap();
        let error = client.fetch_puzzle(Day::new(12).unwrap()).unwrap_err();

        assert!(matches!(error, HttpError::Status { status: 404, .. }));
        assert_eq!(error.to_string(), "failed to fetch HTML: status code 404");
        mock.assert();
    }
}
