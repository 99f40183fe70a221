//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// A GeoJSON position cannot be converted into a map point.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
