//! Pipeline-stage errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pnm::PnmError;

/// Error type that records which pipeline stage failed.
///
/// Every variant is fatal: the driver reports one diagnostic line and
/// exits with code 1. Nothing is written to the output path unless the
/// load stage succeeded.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Worker thread pool could not be built
    #[error("could not build the worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Input file could not be opened
    #[error("could not open the input file {}: {}", .path.display(), .source)]
    OpenInput { path: PathBuf, source: io::Error },

    /// Input opened but did not parse as a supported raster
    #[error("{0}")]
    Load(PnmError),

    /// Output file could not be created
    #[error("could not open the output file {}: {}", .path.display(), .source)]
    OpenOutput { path: PathBuf, source: io::Error },

    /// Output file could not be written
    #[error("could not write the output file: {0}")]
    Write(PnmError),
}
