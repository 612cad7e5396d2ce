//! Per-channel sample-frequency accumulation
//!
//! Histograms are built by a parallel fold over disjoint chunks of the
//! sample buffer; each worker fills a private partial histogram and the
//! partials are merged by elementwise summation. Bucket totals are exact
//! and independent of how the work was split across threads.

use rayon::prelude::*;

/// Number of distinct 8-bit sample values.
pub const BUCKETS: usize = 256;

/// Samples handed to one fold step.
const FOLD_CHUNK: usize = 4 * 1024;

/// Frequency counts for one channel, indexed by sample value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; BUCKETS],
}

impl Histogram {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: [0; BUCKETS],
        }
    }

    #[inline(always)]
    pub fn record(&mut self, value: u8) {
        self.counts[usize::from(value)] += 1;
    }

    #[inline]
    #[must_use]
    pub fn count(&self, value: u8) -> u64 {
        self.counts[usize::from(value)]
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Elementwise sum, the combine step of the parallel reduction.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for (bucket, &count) in self.counts.iter_mut().zip(other.counts.iter()) {
            *bucket += count;
        }
        self
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Histogram of every sample in a grayscale buffer.
#[must_use]
pub fn gray_histogram(samples: &[u8]) -> Histogram {
    samples
        .par_chunks(FOLD_CHUNK)
        .fold(Histogram::new, |mut histogram, chunk| {
            for &value in chunk {
                histogram.record(value);
            }
            histogram
        })
        .reduce(Histogram::new, |a, b| a.merge(&b))
}

/// Per-channel histograms of an interleaved RGB buffer.
///
/// Chunk boundaries are kept on pixel triples so every worker sees whole
/// pixels.
#[must_use]
pub fn rgb_histograms(samples: &[u8]) -> [Histogram; 3] {
    debug_assert_eq!(samples.len() % 3, 0);

    samples
        .par_chunks(3 * FOLD_CHUNK)
        .fold(
            || [Histogram::new(), Histogram::new(), Histogram::new()],
            |mut histograms, chunk| {
                for pixel in chunk.chunks_exact(3) {
                    histograms[0].record(pixel[0]);
                    histograms[1].record(pixel[1]);
                    histograms[2].record(pixel[2]);
                }
                histograms
            },
        )
        .reduce(
            || [Histogram::new(), Histogram::new(), Histogram::new()],
            |a, b| {
                let [a_red, a_green, a_blue] = a;
                let [b_red, b_green, b_blue] = b;
                [
                    a_red.merge(&b_red),
                    a_green.merge(&b_green),
                    a_blue.merge(&b_blue),
                ]
            },
        )
}
