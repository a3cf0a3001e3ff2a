use reqwest::StatusCode;
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The base URL parsed, but can't have path segments added to it (for
    /// example `mailto:` URLs.)
    #[error("{0} cannot be used as a base URL")]
    BaseUrl(String),

    /// Internship IDs must have something in them.
    #[error("internship ID must not be empty")]
    EmptyId,

    /// We encountered a transport error, for example if the server was
    /// unreachable or sent a body we couldn't decode.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request took longer than the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request was cancelled before it finished.
    #[error("request was cancelled")]
    Cancelled,

    /// The server rejected the request (4xx.)
    #[error("request rejected ({status}): {message}")]
    Client {
        /// The status code the server returned
        status: StatusCode,

        /// What the server said was wrong
        message: String,
    },

    /// The server failed to process the request (5xx.)
    #[error("server error ({0})")]
    Server(StatusCode),

    /// The server returned something we don't expect, like a redirect.
    #[error("unexpected status code {0}")]
    Unexpected(StatusCode),
}

impl Error {
    /// Did the server say the thing we asked for doesn't exist?
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Client { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// The shape of error bodies the server sends back
#[derive(Debug, serde::Deserialize)]
pub struct ErrorResp {
    /// What went wrong
    pub error: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found_is_a_client_error_with_404() {
        let err = Error::Client {
            status: StatusCode::NOT_FOUND,
            message: "no such internship".to_string(),
        };

        assert!(err.is_not_found());
    }

    #[test]
    fn other_client_errors_are_not_not_found() {
        let err = Error::Client {
            status: StatusCode::BAD_REQUEST,
            message: "bad".to_string(),
        };

        assert!(!err.is_not_found());
        assert!(!Error::Server(StatusCode::NOT_FOUND).is_not_found());
    }
}
