use clap::Parser;
use std::path::PathBuf;

/// A parallel auto-contrast stretcher for binary PNM images
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Worker thread count (0 = one thread per CPU core)
    #[arg(value_name = "THREADS")]
    pub threads: usize,

    /// Input image path (P5 grayscale or P6 RGB)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output image path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Fraction of pixels discarded as noise at each histogram tail
    #[arg(value_name = "COEFFICIENT", value_parser = parse_coefficient)]
    pub coefficient: f64,
}

/// Accepts floats in [0, 0.5).
fn parse_coefficient(raw: &str) -> Result<f64, String> {
    let coefficient: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;

    if !(0.0..0.5).contains(&coefficient) {
        return Err(format!("`{raw}` is outside [0, 0.5)"));
    }

    Ok(coefficient)
}
