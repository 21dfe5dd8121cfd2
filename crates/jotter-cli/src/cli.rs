use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "jotter")]
#[command(about = "A directory-backed manager for plain-text notes")]
#[command(version)]
pub struct Cli {
    /// Notes directory (overrides JOTTER_DIR and the config file)
    #[arg(short, long, global = true, env = "JOTTER_DIR")]
    pub dir: Option<PathBuf>,

    /// Config file (defaults to jotter.toml in the working directory)
    #[arg(long, global = true, env = "JOTTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
///
/// Name and content arguments are optional everywhere: a missing value is
/// prompted for on a terminal, or read from stdin when input is piped.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a note, silently overwriting any note with the same name
    Create {
        /// Note name
        name: Option<String>,

        /// Note content
        content: Option<String>,
    },

    /// List stored notes
    List {
        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,

        /// Show the backing file path next to each name
        #[arg(long)]
        paths: bool,
    },

    /// Print a note's content
    View {
        /// Note name
        name: Option<String>,
    },

    /// Delete a note permanently (no confirmation, no undo)
    Delete {
        /// Note name
        name: Option<String>,
    },

    /// Open a note in your editor
    Edit {
        /// Note name
        name: Option<String>,
    },

    /// Find notes whose name or content contains a query
    Search {
        /// Query text (case-insensitive)
        query: Option<String>,
    },
}
