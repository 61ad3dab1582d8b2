//! Error types for beamcentre-core.

use thiserror::Error;

/// Result type alias for beamcentre-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Instrument name not in the known set.
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
