//! Binary PNM reading and writing
//!
//! This module provides the file format boundary of the pipeline: the raw
//! portable-anymap variants P5 (grayscale, one byte per pixel) and P6
//! (RGB, three interleaved bytes per pixel), both restricted to a max
//! sample value of 255.

mod error;
mod reader;
mod writer;

// Re-export public API
pub use error::PnmError;
pub use reader::read_raster;
pub use writer::write_raster;
