//! Contrast stretching
//!
//! The core of the pipeline, three sequential steps over the whole raster:
//! per-channel histogram accumulation, clipping-bound search, and a linear
//! remap of every sample. Each step completes before the next begins; only
//! the histogram build and the remap run in parallel.

mod bounds;
mod histogram;
mod remap;

// Re-export public API
pub use bounds::clip_bounds;
pub use histogram::{BUCKETS, Histogram, gray_histogram, rgb_histograms};
pub use remap::remap_samples;

use crate::raster::Raster;
use crate::types::{ClipBounds, ColorMode};

/// Compute the raster's clipping bounds for the given noise threshold.
///
/// Grayscale rasters use their single channel's bounds directly. RGB
/// rasters get one shared pair applied uniformly to all channels: the
/// minimum of the channel lowers and the maximum of the channel uppers.
#[must_use]
pub fn stretch_bounds(raster: &Raster, noise_threshold: u64) -> ClipBounds {
    match raster.mode() {
        ColorMode::Grayscale => clip_bounds(&gray_histogram(raster.samples()), noise_threshold),
        ColorMode::Rgb => {
            let [red, green, blue] = rgb_histograms(raster.samples());
            clip_bounds(&red, noise_threshold)
                .merge(clip_bounds(&green, noise_threshold))
                .merge(clip_bounds(&blue, noise_threshold))
        }
    }
}

/// Stretch the raster's contrast in place.
pub fn stretch_contrast(raster: &mut Raster, noise_threshold: u64) {
    let bounds = stretch_bounds(raster, noise_threshold);
    remap_samples(raster.samples_mut(), bounds);
}
