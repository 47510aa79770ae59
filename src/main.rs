use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use spantree::runtime::config::{load_topology, TopologyConfig};
use spantree::tree_compute::{compute_mst, MstAlgorithm, MstResult, MstStrategyConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

const EPS: f64 = 1e-9;

#[derive(Debug, Parser)]
#[command(name = "spantree")]
#[command(about = "Compute minimum spanning trees over weighted topologies")]
struct Args {
    #[arg(long)]
    topology: PathBuf,
    #[arg(long)]
    start: u32,
    /// "lazy", "keyed", or "both" (cross-checks the two strategies).
    #[arg(long, default_value = "lazy")]
    algorithm: String,
    #[arg(long, default_value = "INFO")]
    log_level: String,
    #[arg(long)]
    output_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let topology = load_topology(&args.topology)?;
    info!(
        "topology loaded: nodes={} edges={} start={}",
        topology.node_count(),
        topology.edges.len(),
        args.start
    );

    let report = match args.algorithm.to_lowercase().as_str() {
        "both" => run_both(&args, &topology),
        name => {
            let Some(algorithm) = MstAlgorithm::parse(name) else {
                anyhow::bail!("unknown algorithm: {} (expected lazy, keyed, or both)", name);
            };
            run_single(&args, &topology, algorithm)
        }
    };

    let rendered = serde_json::to_string_pretty(&report)?;
    match &args.output_json {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn run_single(args: &Args, topology: &TopologyConfig, algorithm: MstAlgorithm) -> Value {
    let config = MstStrategyConfig { algorithm };
    let result = compute_mst(args.start, &topology.edges, &config);
    log_summary(algorithm, &result, topology);
    mst_report(algorithm, &result, topology.node_count())
}

fn run_both(args: &Args, topology: &TopologyConfig) -> Value {
    let lazy = compute_mst(
        args.start,
        &topology.edges,
        &MstStrategyConfig {
            algorithm: MstAlgorithm::Lazy,
        },
    );
    let keyed = compute_mst(
        args.start,
        &topology.edges,
        &MstStrategyConfig {
            algorithm: MstAlgorithm::Keyed,
        },
    );
    log_summary(MstAlgorithm::Lazy, &lazy, topology);
    log_summary(MstAlgorithm::Keyed, &keyed, topology);

    let agreement = (lazy.total_weight - keyed.total_weight).abs() <= EPS;
    if !agreement {
        warn!(
            "strategy disagreement: lazy={} keyed={}",
            lazy.total_weight, keyed.total_weight
        );
    }

    json!({
        "start": args.start,
        "weights_agree": agreement,
        "lazy": mst_report(MstAlgorithm::Lazy, &lazy, topology.node_count()),
        "keyed": mst_report(MstAlgorithm::Keyed, &keyed, topology.node_count()),
    })
}

fn log_summary(algorithm: MstAlgorithm, result: &MstResult, topology: &TopologyConfig) {
    info!(
        "{} tree: edges={} total_weight={} reached={}/{}",
        algorithm.as_str(),
        result.edges.len(),
        result.total_weight,
        result.reached.len(),
        topology.node_count()
    );
}

fn mst_report(algorithm: MstAlgorithm, result: &MstResult, node_count: usize) -> Value {
    let edges: Vec<Value> = result
        .edges
        .iter()
        .map(|edge| {
            json!({
                "from": edge.from,
                "to": edge.to,
                "weight": edge.weight,
            })
        })
        .collect();

    json!({
        "algorithm": algorithm.as_str(),
        "edge_count": result.edges.len(),
        "total_weight": result.total_weight,
        "reached_nodes": result.reached.len(),
        "spans_topology": result.spans(node_count),
        "edges": edges,
    })
}

fn init_logging(level: &str) -> Result<()> {
    let level = level.parse::<Level>()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .init();
    Ok(())
}
