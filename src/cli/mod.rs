//! CLI module for Tubescribe.

pub mod commands;
mod output;

pub use output::{mask_secret, Output};

use clap::{Parser, Subcommand};

/// Tubescribe - readable transcripts for YouTube videos
///
/// Fetches a video's captions and rewrites them into punctuated prose with an LLM.
#[derive(Parser, Debug)]
#[command(name = "tubescribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (defaults to server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch and improve one transcript, printing it to stdout
    Improve {
        /// YouTube URL or bare video ID
        input: String,

        /// Token budget per chunk (overrides config)
        #[arg(long)]
        max_tokens: Option<usize>,
    },

    /// Check configuration and connectivity prerequisites
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration (secrets omitted)
    Show,

    /// Write a default configuration file if none exists
    Init,

    /// Show configuration file path
    Path,
}
