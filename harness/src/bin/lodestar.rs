//! `lodestar`: run the search engine on the bundled worlds.
//!
//! Reports are printed to stdout as pretty JSON; `--trace` adds the event
//! trace as text on stderr. Diagnostics follow `RUST_LOG`.

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use lodestar_harness::logging;
use lodestar_harness::worlds::regular_graph::{GraphSpec, RegularGraph, DEFAULT_MAX_WEIGHT};
use lodestar_harness::worlds::romania::{sld, City, Romania};
use lodestar_harness::{run_search, Algorithm, HeuristicKind, RunConfig, RunReport, TieBreak};
use lodestar_search::{HeuristicFn, ZeroHeuristic};

#[derive(Parser)]
#[command(name = "lodestar")]
#[command(about = "Informed search (graph search, tree search, RBFS) on sample worlds")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route finding on the Romania road map
    Romania {
        /// Start city (e.g. Arad, "Rimnicu Vilcea")
        #[arg(long)]
        from: City,

        /// Goal city
        #[arg(long, default_value = "Bucharest")]
        to: City,

        #[arg(long, default_value = "graph")]
        algorithm: Algorithm,

        #[arg(long, default_value = "none")]
        tie_break: TieBreak,

        /// `native` is straight-line distance (goal must be Bucharest)
        #[arg(long, default_value = "native")]
        heuristic: HeuristicKind,

        /// Print the event trace to stderr and report its digest
        #[arg(long)]
        trace: bool,
    },

    /// Shortest path on a seeded random regular graph
    Random {
        #[arg(short, long)]
        branching: u32,

        #[arg(short, long)]
        nodes: u32,

        #[arg(short, long, default_value = "0")]
        seed: u64,

        #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
        max_weight: u32,

        #[arg(long, default_value = "0")]
        start: u32,

        #[arg(short, long)]
        target: u32,

        #[arg(long, default_value = "graph")]
        algorithm: Algorithm,

        #[arg(long, default_value = "none")]
        tie_break: TieBreak,

        #[arg(long)]
        trace: bool,
    },

    /// Emit a random regular graph in DOT format
    Generate {
        #[arg(short, long)]
        branching: u32,

        #[arg(short, long)]
        nodes: u32,

        #[arg(short, long, default_value = "0")]
        seed: u64,

        #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
        max_weight: u32,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" });

    match cli.command {
        Commands::Romania {
            from,
            to,
            algorithm,
            tie_break,
            heuristic,
            trace,
        } => {
            let problem = Romania::new(from, to);
            let config = RunConfig::new(algorithm)
                .with_tie_break(tie_break)
                .with_trace(trace);
            info!(%from, %to, %algorithm, %heuristic, "romania");
            let report = match heuristic {
                HeuristicKind::Native => {
                    if !problem.has_sld_heuristic() {
                        bail!("straight-line distance is only defined towards Bucharest; use --heuristic zero");
                    }
                    run_search(&problem, HeuristicFn(sld), &config)
                }
                HeuristicKind::Zero => run_search(&problem, ZeroHeuristic, &config),
            }
            .with_context(|| format!("searching {from} -> {to}"))?;
            print_report(&report)?;
        }
        Commands::Random {
            branching,
            nodes,
            seed,
            max_weight,
            start,
            target,
            algorithm,
            tie_break,
            trace,
        } => {
            let spec = GraphSpec::new(branching, nodes, seed).with_max_weight(max_weight);
            let graph = RegularGraph::generate(&spec).context("invalid graph parameters")?;
            if start >= nodes || target >= nodes {
                bail!("start and target must be below the node count {nodes}");
            }
            let config = RunConfig::new(algorithm)
                .with_tie_break(tie_break)
                .with_trace(trace);
            info!(branching, nodes, seed, start, target, %algorithm, "random graph");
            let report = run_search(&graph.problem(start, target), ZeroHeuristic, &config)
                .with_context(|| format!("searching {start} -> {target}"))?;
            print_report(&report)?;
        }
        Commands::Generate {
            branching,
            nodes,
            seed,
            max_weight,
            out,
        } => {
            let spec = GraphSpec::new(branching, nodes, seed).with_max_weight(max_weight);
            let graph = RegularGraph::generate(&spec).context("invalid graph parameters")?;
            match out {
                Some(path) => graph
                    .write_dot(&path)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{}", graph.to_dot()),
            }
        }
    }

    Ok(())
}

fn print_report<S, C>(report: &RunReport<S, C>) -> Result<()>
where
    S: Display,
    C: Copy + Into<serde_json::Value>,
{
    if let Some(trace) = &report.trace {
        eprint!("{}", trace.render_text());
    }
    let json = serde_json::to_string_pretty(&report.to_json_value())?;
    println!("{json}");
    Ok(())
}
