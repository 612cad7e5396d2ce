//! Domain-specific types for raster processing

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of samples allowed to be absorbed at each histogram tail.
    #[inline]
    #[must_use]
    pub fn noise_threshold(&self, coefficient: f64) -> u64 {
        (self.pixel_count() as f64 * coefficient).round() as u64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{width}x{height}", width = self.width, height = self.height)
    }
}

/// Raster color mode, selected by the PNM magic tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Grayscale,
    Rgb,
}

impl ColorMode {
    /// Mode for a two-byte magic tag, if recognized.
    #[must_use]
    pub fn from_magic(magic: [u8; 2]) -> Option<Self> {
        match &magic {
            b"P5" => Some(Self::Grayscale),
            b"P6" => Some(Self::Rgb),
            _ => None,
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn magic(&self) -> &'static str {
        match self {
            Self::Grayscale => "P5",
            Self::Rgb => "P6",
        }
    }

    /// Samples per pixel: 1 for grayscale, 3 for interleaved RGB.
    #[inline(always)]
    #[must_use]
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Grayscale => 1,
            Self::Rgb => 3,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grayscale => write!(f, "grayscale"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}

/// Clipping bounds: sample values at or beyond which input counts as
/// saturated noise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipBounds {
    pub lower: u8,
    pub upper: u8,
}

impl ClipBounds {
    #[must_use]
    pub fn new(lower: u8, upper: u8) -> Self {
        Self { lower, upper }
    }

    /// Widest extremes of two channels' bounds.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    #[inline(always)]
    #[must_use]
    // Hot path: called for every sample during the remap
    pub fn remap(self, value: u8) -> u8 {
        if value <= self.lower {
            0
        } else if value >= self.upper {
            255
        } else {
            // Only reachable when lower < value < upper, so the divisor is
            // never zero even for degenerate bounds
            (255 * u32::from(value - self.lower) / u32::from(self.upper - self.lower)) as u8
        }
    }
}

impl fmt::Display for ClipBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lower={lower}, upper={upper}",
            lower = self.lower,
            upper = self.upper
        )
    }
}
