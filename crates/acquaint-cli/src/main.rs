//! Acquaint CLI - Command-line interface for Acquaint
//!
//! Loads a friendship roster and answers chain, group and connector
//! queries against it.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod query;

#[derive(Parser)]
#[command(name = "acquaint")]
#[command(author = "Acquaint Contributors")]
#[command(version)]
#[command(about = "Shortest chains, friend groups and connectors in a social graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Roster to load (overrides .acquaint/config.json)
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Acquaint in a directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Find the shortest chain of friends between two people
    Chain {
        /// Where the chain starts
        from: String,

        /// Where the chain ends
        to: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List friend groups within one affiliation
    Cliques {
        /// Affiliation to group by (e.g. a school name)
        affiliation: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List people whose removal disconnects the graph
    Connectors {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show graph statistics
    Stats {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Export the graph to a JSON snapshot
    Export {
        /// Output file
        #[arg(short, long, default_value = "acquaint-graph.json")]
        output: PathBuf,
    },

    /// Run a file of queries concurrently against one graph
    Batch {
        /// One query per line: `chain a|b`, `cliques <affiliation>` or `connectors`
        queries: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let graph = cli.graph.as_deref();
    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Chain { from, to, json } => commands::chain(graph, &from, &to, json),
        Commands::Cliques { affiliation, json } => commands::cliques(graph, &affiliation, json),
        Commands::Connectors { json } => commands::connectors(graph, json),
        Commands::Stats { json } => commands::stats(graph, json),
        Commands::Export { output } => commands::export(graph, &output),
        Commands::Batch { queries, json } => commands::batch(graph, &queries, json).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
