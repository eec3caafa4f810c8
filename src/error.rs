//! Error types for console I/O and style resolution.

use std::io;

/// Errors surfaced by console operations.
///
/// Write and read failures stay distinct so callers can tell a rejected
/// sink apart from an exhausted input source. None of these are retried
/// internally; every failure propagates to the caller on first occurrence.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output sink rejected a write or was closed.
    #[error("write to console sink failed")]
    Write(#[source] io::Error),

    /// The input source failed mid-read.
    #[error("read from console input failed")]
    Read(#[source] io::Error),

    /// The input source was exhausted before a full line was read.
    #[error("console input closed before a line was read")]
    EndOfInput,

    /// A color name did not match any known color.
    #[error("unknown color name '{0}'")]
    UnknownColor(String),

    /// A style name did not match any known text style.
    #[error("unknown style name '{0}'")]
    UnknownStyle(String),

    /// A progress fraction outside the `0.0..=1.0` range.
    #[error("progress must be within 0.0..=1.0, got {0}")]
    ProgressOutOfRange(f64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let err = Error::Write(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(err.to_string().contains("write"));
    }

    #[test]
    fn test_end_of_input_display() {
        let msg = Error::EndOfInput.to_string();
        assert!(msg.contains("closed"));
    }

    #[test]
    fn test_unknown_color_names_offender() {
        let err = Error::UnknownColor("CHARTREUSE".to_string());
        assert!(err.to_string().contains("CHARTREUSE"));
    }

    #[test]
    fn test_write_and_read_are_distinct() {
        let write = Error::Write(io::Error::other("x"));
        let read = Error::Read(io::Error::other("x"));
        assert!(matches!(write, Error::Write(_)));
        assert!(matches!(read, Error::Read(_)));
    }
}
