//! Binary PNM serialization

use std::io::Write;

use crate::pnm::error::PnmError;
use crate::raster::Raster;

/// Serialize a raster in binary PNM format, mirroring the reader byte for
/// byte: magic tag from the raster's mode, text header, one newline, then
/// the raw samples.
///
/// # Errors
///
/// Returns [`PnmError::Io`] if the stream cannot be written.
pub fn write_raster<W: Write>(writer: &mut W, raster: &Raster) -> Result<(), PnmError> {
    let dimensions = raster.dimensions();
    write!(
        writer,
        "{magic}\n{width} {height}\n255\n",
        magic = raster.mode().magic(),
        width = dimensions.width,
        height = dimensions.height
    )?;
    writer.write_all(raster.samples())?;
    writer.flush()?;
    Ok(())
}
