//! CLI definitions for Capsule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Capsule CLI.
#[derive(Parser)]
#[command(name = "capsule")]
#[command(about = "Hand off AI chat context between platforms")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.capsule/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scrape a conversation, summarize it, and hand it off
    Handoff {
        /// Destination platform (ChatGPT, Perplexity, Claude, Gemini).
        /// Defaults to the platform suggested by the classified intent.
        #[arg(long)]
        platform: Option<String>,

        /// URL fragment identifying the source tab (default: frontmost tab)
        #[arg(long)]
        url: Option<String>,
    },

    /// Manage the hand-off history log
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum HistoryAction {
    /// List saved hand-offs, most recent first
    List,

    /// Show one hand-off in full, including its prompt
    Show {
        /// Entry id (epoch milliseconds, shown by `list`)
        id: i64,
    },

    /// Delete one hand-off
    Delete {
        /// Entry id
        id: i64,
    },

    /// Delete all saved hand-offs
    Clear,
}
