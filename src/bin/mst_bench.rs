use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use spantree::runtime::config::load_topology;
use spantree::tree_compute::{compute_mst_keyed, compute_mst_lazy, Edge, MstResult};

const EPS: f64 = 1e-9;

#[derive(Debug, Parser)]
#[command(name = "mst_bench")]
#[command(about = "Benchmark the lazy and keyed spanning-tree strategies")]
struct Args {
    #[arg(long, default_value_t = 100)]
    nodes: usize,
    #[arg(long, default_value_t = 0.08)]
    density: f64,
    #[arg(long, default_value_t = 3)]
    seeds: usize,
    #[arg(long, default_value_t = 1)]
    start_seed: u64,
    #[arg(long, default_value_t = 8)]
    iterations: usize,
    #[arg(long)]
    topology: Option<PathBuf>,
    #[arg(long)]
    output_json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct LcgRng {
    state: u64,
}

impl LcgRng {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        let raw = self.next_u64() >> 11;
        (raw as f64) / ((1_u64 << 53) as f64)
    }

    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (q.clamp(0.0, 1.0) * (n - 1) as f64).round() as usize;
    sorted[rank]
}

// Ring backbone plus random chords, so every generated topology is connected.
fn generate_edges(seed: u64, nodes: usize, density: f64) -> Vec<Edge> {
    let mut rng = LcgRng::new(seed);
    let mut edges = Vec::new();

    if nodes >= 2 {
        for node in 1..=nodes as u32 {
            let next = if node == nodes as u32 { 1 } else { node + 1 };
            edges.push(Edge::new(rng.range_f64(1.0, 20.0), node, next));
        }
    }

    let p = density.clamp(0.0, 1.0);
    for u in 1..=nodes as u32 {
        for v in (u + 2)..=nodes as u32 {
            if u == 1 && v == nodes as u32 {
                continue;
            }
            if rng.next_f64() < p {
                edges.push(Edge::new(rng.range_f64(1.0, 20.0), u, v));
            }
        }
    }

    edges
}

fn bench_variant<F>(
    name: &str,
    start_node: u32,
    edges: &[Edge],
    iterations: usize,
    compute: F,
) -> (MstResult, Value)
where
    F: Fn(u32, &[Edge]) -> MstResult,
{
    let mut timings_ms: Vec<f64> = Vec::new();
    let mut result = compute(start_node, edges);

    for _ in 0..iterations.max(1) {
        let start = Instant::now();
        result = compute(start_node, edges);
        timings_ms.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    timings_ms.sort_by(|a, b| a.total_cmp(b));

    let mean_ms = timings_ms.iter().sum::<f64>() / timings_ms.len() as f64;
    let summary = json!({
        "algorithm": name,
        "edge_count": result.edges.len(),
        "total_weight": result.total_weight,
        "reached_nodes": result.reached.len(),
        "mean_ms": mean_ms,
        "p95_ms": percentile(&timings_ms, 0.95),
    });

    (result, summary)
}

fn bench_topology(label: &str, start_node: u32, edges: &[Edge], iterations: usize) -> Value {
    let (lazy, lazy_summary) =
        bench_variant("lazy", start_node, edges, iterations, compute_mst_lazy);
    let (keyed, keyed_summary) =
        bench_variant("keyed", start_node, edges, iterations, compute_mst_keyed);

    json!({
        "topology": label,
        "start": start_node,
        "input_edges": edges.len(),
        "weights_agree": (lazy.total_weight - keyed.total_weight).abs() <= EPS,
        "lazy": lazy_summary,
        "keyed": keyed_summary,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut runs = Vec::new();

    if let Some(path) = &args.topology {
        let topology = load_topology(path)?;
        let start_node = topology.nodes.iter().next().copied().unwrap_or(1);
        let label = path.display().to_string();
        runs.push(bench_topology(
            &label,
            start_node,
            &topology.edges,
            args.iterations,
        ));
    } else {
        for offset in 0..args.seeds.max(1) {
            let seed = args.start_seed + offset as u64;
            let edges = generate_edges(seed, args.nodes, args.density);
            let label = format!("seed-{}", seed);
            runs.push(bench_topology(&label, 1, &edges, args.iterations));
        }
    }

    let report = json!({
        "nodes": args.nodes,
        "density": args.density,
        "iterations": args.iterations,
        "runs": runs,
    });

    let rendered = serde_json::to_string_pretty(&report)?;
    match &args.output_json {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}
