use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "triage-faq")]
#[command(about = "Rank the emergency-triage FAQ corpus against a query", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and print the top results as JSON
    Search {
        query: String,
        #[arg(short = 'n', long, default_value_t = crate::search::DEFAULT_LIMIT)]
        limit: usize,
        /// Corpus file to load instead of the default
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Include the per-signal score breakdown in the output
        #[arg(long)]
        debug: bool,
    },
    /// Print the domain intents detected in a query
    Intents { query: String },
}
