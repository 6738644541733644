use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "booksearch")]
#[command(about = "Search a static documentation site's pre-built index", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against a serialized search index and print the results.
    Search {
        query: String,
        #[arg(short, long, default_value = "search_index.json")]
        index: PathBuf,
        /// Maximum number of items to display; the header always reports
        /// the full hit count.
        #[arg(short = 'n', long, default_value_t = crate::results::MAX_ITEMS)]
        limit: usize,
        /// Match any term instead of requiring all of them.
        #[arg(long)]
        any: bool,
        /// Emit the results as HTML list items instead of plain text.
        #[arg(long)]
        html: bool,
    },
    /// Build a teaser for a document body read from a file.
    Teaser {
        #[arg(short, long)]
        body: PathBuf,
        terms: Vec<String>,
    },
}
