use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "graphkit workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark both graph backends and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "graph_benchmark";
const BACKENDS: [&str; 2] = ["list", "matrix"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("{BENCH} failed with {status}");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

/// Splits a criterion id such as `traversal/bfs_matrix/256` into the
/// backend-neutral workload `traversal/bfs/256` and the backend name.
fn split_backend(id: &str) -> Option<(String, &'static str)> {
    for backend in BACKENDS {
        for marker in [format!("adjacency_{backend}"), format!("_{backend}")] {
            if id.contains(&marker) {
                let workload = id.replacen(&marker, if marker.starts_with('_') { "" } else { "build" }, 1);
                return Some((workload, backend));
            }
        }
    }
    None
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results: BTreeMap<String, BTreeMap<&'static str, f64>> = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Backend Comparison Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | list (Ops/s) | matrix (Ops/s) | matrix vs list |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, by_backend) in &results {
        let list = by_backend.get("list").copied();
        let matrix = by_backend.get("matrix").copied();
        let ratio = match (list, matrix) {
            (Some(l), Some(m)) if l > 0.0 => format!("**{:.2}x**", m / l),
            _ => "-".to_string(),
        };
        writeln!(
            file,
            "| {} | {} | {} | {} |",
            workload,
            list.map_or_else(|| "N/A".to_string(), format_ops),
            matrix.map_or_else(|| "N/A".to_string(), format_ops),
            ratio
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{:.0}", ops)
    }
}

fn collect_results(
    root: &Path,
    dir: &Path,
    results: &mut BTreeMap<String, BTreeMap<&'static str, f64>>,
) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        // Structure: <root>/<benchmark id...>/new/estimates.json
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(new_dir) = path.parent().filter(|p| p.ends_with("new")) else {
            continue;
        };
        let Some(bench_dir) = new_dir.parent() else {
            continue;
        };
        let id = bench_dir
            .strip_prefix(root)
            .context("benchmark outside criterion dir")?
            .to_string_lossy()
            .replace('\\', "/");
        let Some((workload, backend)) = split_backend(&id) else {
            continue;
        };

        // Get throughput from benchmark.json
        let mut elements = 1.0;
        let bench_json = new_dir.join("benchmark.json");
        if let Ok(content) = fs::read_to_string(&bench_json) {
            let json: serde_json::Value = serde_json::from_str(&content)
                .with_context(|| format!("malformed {}", bench_json.display()))?;
            if let Some(t) = json.get("throughput").and_then(|t| t.get("Elements")) {
                elements = t.as_f64().unwrap_or(1.0);
            }
        }

        let content = fs::read_to_string(&path)?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", path.display()))?;
        let time_ns = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0);
        if time_ns > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(backend, (elements * 1e9) / time_ns);
        }
    }

    Ok(())
}
