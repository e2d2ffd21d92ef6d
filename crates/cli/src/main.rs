//! ldscope - linked-data graphs from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Node/link graph of a JSON-LD document
//! ldscope graph person.jsonld --pretty
//!
//! # Structural metrics, reading the document from stdin
//! cat person.jsonld | ldscope analyze - --sequential
//!
//! # Composition plus the most central nodes
//! ldscope summary person.jsonld --top 5
//! ```
//!
//! Logs go to stderr; `-v` enables info, `-vv` debug, and `RUST_LOG`
//! overrides both.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod command;
mod config;

#[derive(Parser)]
#[command(name = "ldscope")]
#[command(version, about = "Linked-data graph builder and analyzer", long_about = None)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node/link graph built from a document
    Graph {
        /// Input document, or `-` for stdin
        input: PathBuf,
    },

    /// Print structural metrics of the document's graph
    Analyze {
        /// Input document, or `-` for stdin
        input: PathBuf,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Print graph composition, top central nodes and community count
    Summary {
        /// Input document, or `-` for stdin
        input: PathBuf,

        /// Number of hotspots and central nodes to list
        #[arg(long, default_value_t = 10)]
        top: usize,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },
}

/// Analysis settings shared by the commands that compute metrics
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// TOML file with analysis settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refuse graphs above this many nodes (0 = no limit)
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Run path sweeps on one thread
    #[arg(long)]
    sequential: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Commands::Graph { input } => command::graph(&input)?,
        Commands::Analyze { input, analysis } => {
            let config = config::resolve(&analysis)?;
            command::analyze(&input, config)?
        }
        Commands::Summary {
            input,
            top,
            analysis,
        } => {
            let config = config::resolve(&analysis)?;
            command::summary(&input, top, config)?
        }
    };

    println!("{}", command::render(&output, cli.pretty)?);
    Ok(())
}
