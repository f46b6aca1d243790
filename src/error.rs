// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the interactive session.
//!
//! The astronomical conversions are total; only console I/O can fail.

use thiserror::Error;

/// Errors raised while driving a tracking session.
#[derive(Debug, Error)]
pub enum Error {
    /// The longitude line did not parse as a finite real number.
    #[error("invalid numeric input for longitude: {input:?}")]
    InvalidLongitude { input: String },

    /// Input was closed before a longitude was entered.
    #[error("input closed before a longitude was entered")]
    EndOfInput,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_longitude_quotes_input() {
        let err = Error::InvalidLongitude {
            input: "east".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid numeric input for longitude: \"east\""
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("closed"));
    }
}
