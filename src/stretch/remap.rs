//! Parallel linear remap
//!
//! A pure elementwise map: every sample is rewritten from its clipped
//! input range to the full [0, 255] output range. No ordering is required,
//! so workers take disjoint slices of the buffer.

use rayon::prelude::*;

use crate::types::ClipBounds;

/// Rewrite every sample as its rescaled value.
pub fn remap_samples(samples: &mut [u8], bounds: ClipBounds) {
    samples
        .par_iter_mut()
        .for_each(|sample| *sample = bounds.remap(*sample));
}
