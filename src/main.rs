use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::time::Instant;

use clap::Parser;
use pnmstretch::ProcessError;
use pnmstretch::cli::Args;
use pnmstretch::pnm;
use pnmstretch::stretch;

fn main() {
    // clap renders the diagnostic and usage text; the exit code is ours
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = process_image(&args) {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

/// Process a single image: load, stretch in a caller-sized worker pool,
/// report the stretch timing, write.
fn process_image(args: &Args) -> Result<(), ProcessError> {
    // Stage 1: worker pool (0 threads = one per CPU core)
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()?;

    // Stage 2: load the raster
    let input = File::open(&args.input).map_err(|source| ProcessError::OpenInput {
        path: args.input.clone(),
        source,
    })?;
    let mut raster = pnm::read_raster(&mut BufReader::new(input)).map_err(ProcessError::Load)?;

    // Stage 3: stretch, timed
    let noise_threshold = raster.dimensions().noise_threshold(args.coefficient);
    let start = Instant::now();
    pool.install(|| stretch::stretch_contrast(&mut raster, noise_threshold));
    let elapsed = start.elapsed();

    println!(
        "Time ({} thread(s)): {} ms",
        pool.current_num_threads(),
        elapsed.as_millis()
    );

    // Stage 4: write the result
    let output = File::create(&args.output).map_err(|source| ProcessError::OpenOutput {
        path: args.output.clone(),
        source,
    })?;
    pnm::write_raster(&mut BufWriter::new(output), &raster).map_err(ProcessError::Write)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pnmstretch::pnm::PnmError;
    use std::io::Cursor;
    use std::path::Path;

    fn args_for(input: &Path, output: &Path, threads: usize, coefficient: f64) -> Args {
        Args {
            threads,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            coefficient,
        }
    }

    #[test]
    fn test_grayscale_end_to_end() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input_path = dir.path().join("input.pgm");
        let output_path = dir.path().join("output.pgm");

        let mut input = b"P5\n2 2\n255\n".to_vec();
        input.extend_from_slice(&[10, 10, 245, 245]);
        std::fs::write(&input_path, &input).expect("write input file");

        let args = args_for(&input_path, &output_path, 2, 0.0);
        process_image(&args).expect("pipeline should succeed");

        let written = std::fs::read(&output_path).expect("read output file");
        let raster = pnm::read_raster(&mut Cursor::new(written)).expect("reparse output");
        assert_eq!(raster.samples(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_missing_input_is_open_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let args = args_for(
            &dir.path().join("does-not-exist.pgm"),
            &dir.path().join("output.pgm"),
            1,
            0.0,
        );

        let result = process_image(&args);
        assert_matches!(result, Err(ProcessError::OpenInput { .. }));
        assert!(!args.output.exists(), "no partial output may be written");
    }

    #[test]
    fn test_malformed_input_is_load_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input_path = dir.path().join("input.pgm");
        std::fs::write(&input_path, b"BM not a pnm file").expect("write input file");

        let args = args_for(&input_path, &dir.path().join("output.pgm"), 1, 0.0);

        let result = process_image(&args);
        assert_matches!(result, Err(ProcessError::Load(PnmError::Format(_))));
        assert!(!args.output.exists(), "no partial output may be written");
    }

    #[test]
    fn test_unwritable_output_is_open_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input_path = dir.path().join("input.pgm");

        let mut input = b"P5\n1 1\n255\n".to_vec();
        input.push(128);
        std::fs::write(&input_path, &input).expect("write input file");

        let args = args_for(
            &input_path,
            &dir.path().join("missing-subdir").join("output.pgm"),
            1,
            0.0,
        );

        let result = process_image(&args);
        assert_matches!(result, Err(ProcessError::OpenOutput { .. }));
    }
}
