use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "csv-highlighter")]
#[command(about = "Flag CSV rows against an address pattern and export a highlighted .xlsx", long_about = None)]
pub struct Cli {
    /// JSON config file (default column, colour, sheet name, ...)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a copy of the CSV as .xlsx with flagged rows filled
    Highlight {
        /// CSV file to process
        input: PathBuf,

        /// Column to classify (defaults to the configured column)
        #[arg(short, long)]
        column: Option<String>,

        /// Output path (defaults to <prefix><input stem>.xlsx next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fill colour for flagged rows, hex or CSS name
        #[arg(long)]
        color: Option<String>,
    },

    /// Show the first rows of the column with their flag, writing nothing
    Preview {
        /// CSV file to inspect
        input: PathBuf,

        /// Column to classify (defaults to the configured column)
        #[arg(short, long)]
        column: Option<String>,

        /// Number of rows to show
        #[arg(short = 'n', long)]
        rows: Option<usize>,
    },
}
