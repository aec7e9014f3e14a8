// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Command-line front end.
//!
//! ```text
//! busysteg h <image path> <data path> <output image path>
//! busysteg x <image path> <output data path>
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "busysteg",
    version,
    about = "Hide data in the busy regions of an image",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    op: Op,
}

#[derive(Subcommand)]
enum Op {
    /// [h]ide the contents of DATA in IMAGE, writing the result to OUTPUT
    #[command(name = "h")]
    Hide {
        image: PathBuf,
        data: PathBuf,
        /// Must use a lossless format (png, bmp, tiff, tga, ppm, qoi, webp)
        output: PathBuf,
    },
    /// e[x]tract the data hidden in IMAGE to OUTPUT
    #[command(name = "x")]
    Extract { image: PathBuf, output: PathBuf },
}

fn main() -> ExitCode {
    // Usage errors: clap prints usage to stderr and exits non-zero.
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.op) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(op: Op) -> Result<()> {
    match op {
        Op::Hide { image, data, output } => {
            let payload = fs::read(&data)
                .with_context(|| format!("could not read data file {}", data.display()))?;
            busysteg::hide_file(&image, &payload, &output)
                .with_context(|| format!("could not hide data in {}", image.display()))?;
            info!(bytes = payload.len(), output = %output.display(), "data hidden");
        }
        Op::Extract { image, output } => {
            let payload = busysteg::extract_file(&image)
                .with_context(|| format!("could not extract data from {}", image.display()))?;
            fs::write(&output, &payload)
                .with_context(|| format!("could not write data file {}", output.display()))?;
            info!(bytes = payload.len(), output = %output.display(), "data extracted");
        }
    }
    Ok(())
}
