// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy shared across the crate.
//!
//! Errors are terminal to the operation that produced them: handlers reset
//! their loading flags and leave the displayed window untouched. Nothing is
//! retried automatically.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// User-correctable input problem (blank API key or album id).
    /// Shown inline next to the credentials form.
    Validation(String),

    /// The proxy answered with a non-success status or was unreachable.
    /// Carries the server-supplied message verbatim when one exists.
    Fetch(String),

    /// The response body was not the expected JSON sequence.
    Format(String),

    /// Configuration file could not be read or written.
    Config(String),

    /// Local I/O failure (state file, log directory).
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::Fetch(msg) => write!(f, "Failed to fetch album: {}", msg),
            Error::Format(msg) => write!(f, "Unexpected album response: {}", msg),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // reqwest Display includes the failing URL, which is what we want
        // surfaced for connection and timeout problems.
        Error::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_message_unchanged() {
        let err = Error::Validation("Please enter an album ID".to_string());
        assert_eq!(format!("{}", err), "Please enter an album ID");
    }

    #[test]
    fn fetch_display_includes_prefix() {
        let err = Error::Fetch("status 502".to_string());
        assert_eq!(format!("{}", err), "Failed to fetch album: status 502");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("disk gone");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("disk gone")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_format_variant() {
        let json_error = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn format_display_mentions_album_response() {
        let err = Error::Format("expected a sequence".into());
        assert!(format!("{}", err).contains("Unexpected album response"));
    }
}
