use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trove")]
#[command(about = "A small local record keeper for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this directory as the record store
    #[arg(short, long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new record
    #[command(alias = "n")]
    Create {
        /// Title of the record (required, must not be blank)
        title: String,

        /// Description of the record
        #[arg(required = false)]
        description: Option<String>,
    },

    /// List records, newest first
    #[command(alias = "ls")]
    List,

    /// View a record in full
    #[command(alias = "v")]
    View {
        /// Id of the record
        id: u64,
    },

    /// Update a record's title and/or description
    #[command(alias = "e")]
    Update {
        /// Id of the record
        id: u64,

        /// New title (current title is kept if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New description (current description is kept if omitted)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Id of the record
        id: u64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., store-file, pretty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store directory
    Init,
}
