//! CLI module for the vector data preparation tool.

pub mod commands;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

use crate::models::OutputFormat;

/// Chunk text documents, embed them and upload the vectors to Pinecone or Qdrant.
#[derive(Debug, Parser)]
#[command(name = "vecprep")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  vecprep --create-samples
  vecprep --config ./my-config.json --docs ./my-docs/")]
pub struct Cli {
    #[arg(
        long,
        value_name = "PATH",
        env = "VECPREP_CONFIG",
        default_value = "./config.json",
        help = "Path to config file"
    )]
    pub config: PathBuf,

    #[arg(
        long,
        value_name = "PATH",
        env = "VECPREP_DOCS",
        default_value = "./documents",
        help = "Path to documents directory"
    )]
    pub docs: PathBuf,

    #[arg(long, help = "Create sample config and documents, then exit")]
    pub create_samples: bool,

    #[arg(
        long,
        short = 'f',
        default_value_t = OutputFormat::Text,
        help = "Output format: text or json"
    )]
    pub format: OutputFormat,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        short = 'q',
        conflicts_with = "verbose",
        help = "Hide the progress bar"
    )]
    pub quiet: bool,
}
