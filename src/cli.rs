//! Command-line interface for matrix_exercises.

use clap::Parser;
use matrix_exercises::Language;
use std::path::PathBuf;

/// Matrix Exercises - interactive drills on matrices and lists
#[derive(Parser, Debug)]
#[command(name = "matrix_exercises")]
#[command(about = "Interactive menu of eleven matrix and list exercises", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Language for prompts and output
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Seed for reproducible random values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file (defaults to ./matrix_exercises.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Width each matrix cell is right-aligned to
    #[arg(long)]
    pub cell_width: Option<usize>,
}
