//! Command-line interface for repocat.
//!
//! Flattens a source directory into a single text artifact containing the
//! tree listing and every file's content.

use clap::Parser;
use repocat::{RepocatError, snapshot_to_file};
use std::path::PathBuf;
use std::process::exit;

/// repocat — flatten a directory tree into one text file
#[derive(Parser)]
#[command(name = "repocat", version, about, long_about = None)]
struct Cli {
    /// Source directory to snapshot
    root: PathBuf,

    /// Path of the output artifact
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    match snapshot_to_file(&cli.root, &cli.output) {
        Ok(_) => {
            println!("Output file has been created: {}", cli.output.display());
        }
        Err(e @ RepocatError::InvalidRoot(_)) => {
            eprintln!("{e}");
            exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}
