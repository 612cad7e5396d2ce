use thiserror::Error;

/// Errors produced while decoding or encoding a binary PNM raster.
#[derive(Debug, Error)]
pub enum PnmError {
    /// Malformed magic tag, header or dimensions
    #[error("invalid file format: {0}")]
    Format(String),

    /// Unreadable stream or truncated payload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sample buffer allocation failure
    #[error("cannot allocate {0} bytes for the sample buffer")]
    Allocation(u64),
}
