//! Gridnav CLI - electrical network navigation from the command line.
//!
//! Loads an equipment table (or the bundled demo network) and answers
//! upstream, downstream and switching-impact questions about it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::types::{EdgePolicyArg, OutputFormatArg};

/// Gridnav: what feeds this equipment, and what goes dark if it trips.
#[derive(Parser)]
#[command(name = "gridnav")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Equipment table file (.json, .yaml or .yml); overrides the config file
    #[arg(short, long, global = true)]
    network: Option<PathBuf>,

    /// Configuration file (defaults to ./gridnav.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all equipment with its role in the hierarchy
    List,

    /// Show what feeds a node and what it feeds
    Show {
        /// Equipment key or display label
        node: String,
    },

    /// Show what loses power if a node is switched off
    Impact {
        /// Equipment key or display label
        node: String,
    },

    /// Print the layered subgraph for a node
    Layout {
        /// Equipment key or display label
        node: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormatArg,

        /// Which edges to include (defaults to the configured policy)
        #[arg(short, long, value_enum)]
        edges: Option<EdgePolicyArg>,
    },

    /// Rank equipment by how much it de-energizes when switched off
    Rank {
        /// Maximum number of entries
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Check the equipment table for integrity errors
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = cli::Navigator::open(cli.config.as_deref(), cli.network).and_then(|nav| {
        match cli.command {
            Commands::List => cli::list::run(&nav),
            Commands::Show { node } => cli::show::run(&nav, &node),
            Commands::Impact { node } => cli::impact::run(&nav, &node),
            Commands::Layout {
                node,
                format,
                edges,
            } => cli::layout::run(&nav, &node, format, edges.map(Into::into)),
            Commands::Rank { limit } => cli::rank::run(&nav, limit),
            Commands::Validate => cli::validate::run(&nav),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
