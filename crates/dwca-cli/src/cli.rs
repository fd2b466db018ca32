//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Convert a collection of CSV/TSV files into a Darwin Core Archive
#[derive(Parser)]
#[command(name = "dwca")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory that receives the resulting archive
    #[arg(short, long, value_name = "DIR", default_value = "./dwca")]
    pub output: PathBuf,

    /// The default file encoding
    #[arg(long, value_name = "NAME", default_value = "UTF-8")]
    pub encoding: String,

    /// The metadata title
    #[arg(long)]
    pub title: Option<String>,

    /// The metadata creator
    #[arg(long)]
    pub creator: Option<String>,

    /// Expect tab separation by default
    #[arg(short = 't', long)]
    pub tabs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// The list of source files (core file first)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}
