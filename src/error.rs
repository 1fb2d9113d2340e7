use std::io;

use thiserror::Error;

use crate::http::HttpError;
use crate::session::SessionError;

/// Errors raised by helper commands.
///
/// Each renders as a single line naming the failing operation.
#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("Error loading session cookie: {0}")]
    Session(#[from] SessionError),
    #[error("Error {what}: {source}")]
    Io {
        what: String,
        #[source]
        source: io::Error,
    },
    #[error("Error {what}: {source}")]
    Http {
        what: &'static str,
        #[source]
        source: HttpError,
    },
}

impl Error {
    /// Construct a mapper for I/O errors raised while doing `what`.
    pub(crate) fn io(what: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let what = what.into();
        move |source| Self::Io { what, source }
    }

    /// Construct a mapper for HTTP errors raised while doing `what`.
    pub(crate) fn http(what: &'static str) -> impl FnOnce(HttpError) -> Self {
        move |source| Self::Http { what, source }
    }
}
