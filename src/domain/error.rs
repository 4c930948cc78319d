//! Error types for BMenu.
//!
//! This module defines the centralized error type [`BMenuError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Every variant is fatal: callers propagate with `?` up to the session owner,
//! which drops the connection and exits with a non-zero status.

use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError, ReplyOrIdError};

/// The main error type for BMenu operations.
///
/// Variants follow the three failure classes of the program: acquiring the
/// connection, acquiring the screen, and any checked protocol request failing
/// afterwards.
///
/// # Examples
///
/// ```
/// use bmenu::BMenuError;
///
/// let err = BMenuError::Request { context: "can't open font", code: 2 };
/// assert_eq!(err.error_code(), Some(2));
/// assert_eq!(err.to_string(), "can't open font : 2");
/// ```
#[derive(Debug, Error)]
pub enum BMenuError {
    /// The X server could not be reached.
    #[error("can't connect to an X server: {0}")]
    Connect(#[from] ConnectError),

    /// The connection setup did not describe the requested screen.
    #[error("can't get the current screen (screen {0})")]
    NoScreen(usize),

    /// A checked request was answered with an X11 error.
    ///
    /// `context` names the failed operation, `code` is the error code reported
    /// by the server.
    #[error("{context} : {code}")]
    Request {
        /// Short description of the request that failed.
        context: &'static str,
        /// Server-reported X11 error code.
        code: u8,
    },

    /// The transport to the X server failed.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// The client ran out of resource identifiers.
    #[error("resource ids exhausted")]
    IdsExhausted,

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BMenuError {
    /// Converts a failed checked request into a [`BMenuError`], keeping the
    /// description of the operation alongside the server error code.
    #[must_use]
    pub fn request(context: &'static str, error: ReplyError) -> Self {
        match error {
            ReplyError::X11Error(x11) => Self::Request {
                context,
                code: x11.error_code,
            },
            ReplyError::ConnectionError(e) => Self::Connection(e),
        }
    }

    /// Returns the server-reported error code, if this error carries one.
    #[must_use]
    pub const fn error_code(&self) -> Option<u8> {
        match self {
            Self::Request { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<ReplyOrIdError> for BMenuError {
    fn from(error: ReplyOrIdError) -> Self {
        match error {
            ReplyOrIdError::IdsExhausted => Self::IdsExhausted,
            ReplyOrIdError::ConnectionError(e) => Self::Connection(e),
            ReplyOrIdError::X11Error(x11) => Self::Request {
                context: "request failed",
                code: x11.error_code,
            },
        }
    }
}

/// A specialized `Result` type for BMenu operations.
pub type Result<T> = std::result::Result<T, BMenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_reports_code() {
        let err = BMenuError::Request {
            context: "Failed to grab focus.",
            code: 8,
        };
        assert_eq!(err.error_code(), Some(8));
        assert_eq!(err.to_string(), "Failed to grab focus. : 8");
    }

    #[test]
    fn non_request_errors_have_no_code() {
        assert_eq!(BMenuError::NoScreen(0).error_code(), None);
        assert_eq!(BMenuError::IdsExhausted.error_code(), None);
    }
}
