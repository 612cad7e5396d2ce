//! Clipping-bound search
//!
//! Each bound walks inward from its end of the histogram, absorbing bucket
//! counts while the cumulative count stays within the noise threshold. The
//! comparison is `<=`, so a threshold of zero still absorbs empty buckets
//! and the bounds settle on the outermost non-empty buckets. The two walks
//! are independent; each carries its own cumulative count and only reads
//! the histogram.

use crate::stretch::histogram::Histogram;
use crate::types::ClipBounds;

/// Find the clipping bounds for one channel.
#[must_use]
pub fn clip_bounds(histogram: &Histogram, noise_threshold: u64) -> ClipBounds {
    ClipBounds::new(
        walk_up(histogram, noise_threshold),
        walk_down(histogram, noise_threshold),
    )
}

fn walk_up(histogram: &Histogram, noise_threshold: u64) -> u8 {
    let mut bound: u8 = 0;
    let mut absorbed = histogram.count(bound);
    while absorbed <= noise_threshold && bound < 255 {
        bound += 1;
        absorbed += histogram.count(bound);
    }
    bound
}

fn walk_down(histogram: &Histogram, noise_threshold: u64) -> u8 {
    let mut bound: u8 = 255;
    let mut absorbed = histogram.count(bound);
    while absorbed <= noise_threshold && bound > 0 {
        bound -= 1;
        absorbed += histogram.count(bound);
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram_of(samples: &[u8]) -> Histogram {
        let mut histogram = Histogram::new();
        for &value in samples {
            histogram.record(value);
        }
        histogram
    }

    #[test]
    fn test_zero_threshold_absorbs_empty_buckets() {
        // Empty buckets satisfy `0 <= 0`, so the walk passes over them and
        // stops on the first populated bucket
        let histogram = histogram_of(&[10, 10, 245, 245]);
        let bounds = clip_bounds(&histogram, 0);

        assert_eq!(bounds, ClipBounds::new(10, 245));
    }

    #[test]
    fn test_zero_threshold_keeps_full_range_endpoints() {
        let histogram = histogram_of(&[0, 37, 128, 255]);
        let bounds = clip_bounds(&histogram, 0);

        assert_eq!(bounds, ClipBounds::new(0, 255));
    }

    #[test]
    fn test_cumulative_count_is_carried_forward() {
        // Buckets: 5 at value 0, 10 at value 1. With threshold 5 the lower
        // walk absorbs bucket 0 (5 <= 5) and stops at value 1 (15 > 5).
        let mut samples = vec![0u8; 5];
        samples.extend(std::iter::repeat_n(1u8, 10));
        samples.push(255);

        let bounds = clip_bounds(&histogram_of(&samples), 5);
        assert_eq!(bounds.lower, 1);
        assert_eq!(bounds.upper, 255);
    }

    #[test]
    fn test_walks_stop_at_range_ends() {
        // A threshold at or above the whole mass drives the walks to the
        // opposite ends; the guards keep the bounds in [0, 255]
        let histogram = histogram_of(&[100, 150]);
        let bounds = clip_bounds(&histogram, 2);

        assert_eq!(bounds.lower, 255);
        assert_eq!(bounds.upper, 0);
    }

    #[test]
    fn test_uniform_histogram_collapses_bounds() {
        let histogram = histogram_of(&[128; 16]);
        let bounds = clip_bounds(&histogram, 0);

        assert_eq!(bounds, ClipBounds::new(128, 128));
    }
}
