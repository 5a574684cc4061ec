//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trenlog")]
#[command(about = "Workout diary demo application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every diary entry, newest first
    Show,

    /// List authors with their entry counts
    Authors,

    /// Search entries by word or by creation date range
    Search {
        /// Word to look for in diary texts (case-insensitive)
        #[arg(short, long)]
        word: Option<String>,

        /// Start of the date range, exclusive (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,

        /// End of the date range, exclusive (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the entries of authors matching a name exactly
    Author {
        /// Author name (case-insensitive)
        name: String,
    },

    /// Dump all entries as JSON
    Export,
}
