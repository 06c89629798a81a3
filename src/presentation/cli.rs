//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (-C, --json, --color, --verbose) are inherited by all subcommands
//! - `run` is the long-running mode; everything else is one-shot

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_POLL_INTERVAL, DEFAULT_PORT};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Blogger - compile a static blog from markdown posts and templates
#[derive(Parser, Debug)]
#[command(name = "blogger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Blog project directory (defaults to the current directory)
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Output events as NDJSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Compile the site, serve it locally, and recompile on every change
    Run {
        /// Preview server port
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Include the drafts/ directory
        #[arg(short, long)]
        drafts: bool,

        /// Write the site here instead of the application data directory
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Milliseconds between change checks
        #[arg(long, value_name = "N", default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
        interval_ms: u64,

        /// Watch and recompile without starting the preview server
        #[arg(long)]
        no_serve: bool,
    },

    /// Compile the site once
    Compile {
        /// Include the drafts/ directory
        #[arg(short, long)]
        drafts: bool,

        /// Write the site here instead of the application data directory
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Create a new draft in drafts/
    Draft {
        /// Draft title (defaults to "draft")
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Publish a draft into posts/
    Post,
}
