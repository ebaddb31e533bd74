//! Error types raised by the ranking inspection tool.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a roster file or emitting ranked output.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the roster file failed.
    #[error("failed to read roster file at {path}")]
    ReadRoster {
        /// Requested roster path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The roster file was not valid JSON in the expected shape.
    #[error("failed to parse roster file at {path}")]
    ParseRoster {
        /// Requested roster path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the ranked output to JSON failed.
    #[error("failed to serialise ranked output")]
    Serialise {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
