//! CLI entry point for the `graphlet` command-line tool.

use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use graphlet::cli::commands;

#[derive(Parser)]
#[command(
    name = "graphlet",
    about = "Graphlet CLI — adjacency-list graphs with DFS/BFS traversal"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted demonstration graphs
    Demo,
    /// Build a graph from edge specs and run a traversal
    Traverse {
        /// Starting vertex
        start: String,
        /// Edge as `u:v` (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Isolated vertex to include (repeatable)
        #[arg(long = "vertex")]
        vertices: Vec<String>,
        /// Graph kind: directed or undirected
        #[arg(long, default_value = "undirected")]
        kind: String,
        /// Traversal algorithm: dfs, dfs-iterative, bfs
        #[arg(long, default_value = "dfs")]
        algo: String,
    },
    /// Show a graph's counts and adjacency lists
    Stats {
        /// Edge as `u:v` (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Isolated vertex to include (repeatable)
        #[arg(long = "vertex")]
        vertices: Vec<String>,
        /// Graph kind: directed or undirected
        #[arg(long, default_value = "undirected")]
        kind: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(),
        Commands::Traverse {
            start,
            edges,
            vertices,
            kind,
            algo,
        } => commands::cmd_traverse(&kind, &algo, &vertices, &edges, &start, json),
        Commands::Stats {
            edges,
            vertices,
            kind,
        } => commands::cmd_stats(&kind, &vertices, &edges, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(3);
    }
}
