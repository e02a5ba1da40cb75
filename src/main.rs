//! Bucket-fill driver: repaint one connected region of a netpbm image,
//! rewriting the file in place.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use enough::Unstoppable;
use log::debug;

use ppmfill::{Error, RGB8, VisitedMask, flood_fill, pnm};

/// Flood-fill a connected region of a PPM image with a new color.
///
/// The seed pixel's color defines the region: every pixel reachable from
/// the seed through 4-connected neighbors of that exact color is
/// repainted, and the file is rewritten in place using the format variant
/// it was read with (P3 stays P3, P6 stays P6).
#[derive(Parser, Debug)]
#[command(name = "ppmfill", version, about)]
struct Cli {
    /// Image file (P3 or P6), rewritten in place
    image: PathBuf,

    /// Seed pixel row
    row: u64,

    /// Seed pixel column
    col: u64,

    /// Replacement red channel (truncated to 8 bits)
    #[arg(allow_negative_numbers = true)]
    red: i64,

    /// Replacement green channel (truncated to 8 bits)
    #[arg(allow_negative_numbers = true)]
    green: i64,

    /// Replacement blue channel (truncated to 8 bits)
    #[arg(allow_negative_numbers = true)]
    blue: i64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ppmfill: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let data = fs::read(&cli.image).map_err(|source| Error::Io {
        path: cli.image.clone(),
        source,
    })?;
    let mut image = pnm::decode(&data, None, &Unstoppable)?;

    let rows = image.pixels.rows();
    let cols = image.pixels.cols();
    if cli.row >= rows as u64 || cli.col >= cols as u64 {
        return Err(Error::SeedOutOfBounds {
            row: cli.row,
            col: cli.col,
            rows,
            cols,
        });
    }
    let seed = (cli.row as usize, cli.col as usize);

    let target = image.pixels.color_at(seed.0, seed.1);
    let replacement = RGB8 {
        r: cli.red as u8,
        g: cli.green as u8,
        b: cli.blue as u8,
    };

    let mut mask = VisitedMask::new(rows, cols)?;
    let report = flood_fill(
        &mut image.pixels,
        &mut mask,
        seed,
        target,
        replacement,
        &Unstoppable,
    )?;
    debug!(
        "fill from ({}, {}): {:?} -> {:?}, visited {}, repainted {}",
        seed.0, seed.1, target, replacement, report.visited, report.filled
    );

    let encoded = pnm::encode(&image, &Unstoppable)?;
    fs::write(&cli.image, encoded).map_err(|source| Error::Io {
        path: cli.image.clone(),
        source,
    })?;
    Ok(())
}
