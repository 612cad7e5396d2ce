//! Binary PNM parsing
//!
//! Reads the two raw variants accepted by the pipeline: a two-byte magic
//! tag (`P5` grayscale, `P6` RGB), a whitespace-delimited text header of
//! width, height and max sample value, one whitespace byte, then the raw
//! payload.

use std::io::{BufRead, ErrorKind};

use crate::pnm::error::PnmError;
use crate::raster::Raster;
use crate::types::{ColorMode, Dimensions};

/// Read a raster in binary PNM format.
///
/// # Errors
///
/// Returns [`PnmError::Format`] for an unrecognized magic tag, a malformed
/// header, a max sample value other than 255 or non-positive dimensions;
/// [`PnmError::Io`] for stream errors and truncated payloads;
/// [`PnmError::Allocation`] if the sample buffer cannot be allocated.
pub fn read_raster<R: BufRead>(reader: &mut R) -> Result<Raster, PnmError> {
    let mode = read_magic(reader)?;

    let width = read_header_value(reader, "width")?;
    let height = read_header_value(reader, "height")?;
    let max_value = read_header_value(reader, "max sample value")?;

    if max_value != 255 {
        return Err(PnmError::Format(format!(
            "unsupported max sample value {max_value} (expected 255)"
        )));
    }

    let dimensions = Dimensions::new(width, height);
    if !dimensions.is_valid() {
        return Err(PnmError::Format(format!(
            "invalid image dimensions {dimensions}"
        )));
    }

    let samples = read_samples(reader, dimensions, mode)?;
    Ok(Raster::new(dimensions, mode, samples))
}

fn read_magic<R: BufRead>(reader: &mut R) -> Result<ColorMode, PnmError> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => PnmError::Format("missing magic tag".to_string()),
        _ => PnmError::Io(e),
    })?;

    ColorMode::from_magic(magic).ok_or_else(|| {
        PnmError::Format(format!(
            "unrecognized magic tag `{}`",
            String::from_utf8_lossy(&magic)
        ))
    })
}

/// PNM counts space, tab, CR, LF, vertical tab and form feed as whitespace.
const fn is_pnm_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn read_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>, PnmError> {
    let mut byte = [0u8; 1];
    match reader.read_exact(&mut byte) {
        Ok(()) => Ok(Some(byte[0])),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(PnmError::Io(e)),
    }
}

/// Read one decimal header field: skip leading whitespace, accumulate
/// digits, and consume the single byte terminating the run. That byte
/// doubles as the field separator, so for the last field it is the lone
/// whitespace byte preceding the payload.
fn read_header_value<R: BufRead>(reader: &mut R, field: &str) -> Result<u32, PnmError> {
    let mut byte = loop {
        match read_byte(reader)? {
            Some(b) if is_pnm_whitespace(b) => continue,
            Some(b) => break b,
            None => {
                return Err(PnmError::Format(format!("missing {field} in header")));
            }
        }
    };

    if !byte.is_ascii_digit() {
        return Err(PnmError::Format(format!("invalid {field} in header")));
    }

    let mut value: u64 = 0;
    while byte.is_ascii_digit() {
        value = value * 10 + u64::from(byte - b'0');
        if value > u64::from(u32::MAX) {
            return Err(PnmError::Format(format!("{field} out of range")));
        }

        byte = match read_byte(reader)? {
            Some(b) => b,
            // Value complete; a missing payload is caught by the sample read
            None => return Ok(value as u32),
        };
    }

    if !is_pnm_whitespace(byte) {
        return Err(PnmError::Format(format!("malformed {field} in header")));
    }

    Ok(value as u32)
}

fn read_samples<R: BufRead>(
    reader: &mut R,
    dimensions: Dimensions,
    mode: ColorMode,
) -> Result<Vec<u8>, PnmError> {
    // Saturation only matters for absurd dimensions; a saturated size is
    // still far beyond any allocatable buffer and fails below
    let size = dimensions
        .pixel_count()
        .saturating_mul(mode.channel_count() as u64);
    let len = usize::try_from(size).map_err(|_| PnmError::Allocation(size))?;

    let mut samples = Vec::new();
    samples
        .try_reserve_exact(len)
        .map_err(|_| PnmError::Allocation(size))?;
    samples.resize(len, 0);

    reader.read_exact(&mut samples)?;
    Ok(samples)
}
