// PECOS/crates/widget-cli/src/main.rs
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use widget::prelude::*;

#[derive(Parser)]
#[command(
    name = "widget",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compiles a packed gate-instruction stream into a normalized stabilizer widget",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a packed instruction file and print the normalized tableau
    Compile(CompileArgs),
}

#[derive(Args)]
struct CompileArgs {
    /// Path to the packed instruction stream
    program: PathBuf,

    /// Number of input-level qubits referenced by the stream
    #[arg(short = 'n', long)]
    n_qubits: usize,

    /// Maximum number of stabilizer rows (live qubits plus RZ teleportation growth)
    #[arg(short, long, default_value_t = 256)]
    max_qubits: usize,

    /// Number of worker threads for the parallel rewrite seam. `1` (the
    /// default) keeps the sequential dispatch path; any larger value
    /// routes the final queue flush through rayon.
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Word-chunk width handed to the parallel rewrite seam
    #[arg(short, long, default_value_t = 8)]
    chunk_width: usize,
}

fn compile(args: &CompileArgs) -> Result<(), Box<dyn Error>> {
    let config = WidgetConfig::new(args.max_qubits)
        .with_workers(args.workers)
        .with_chunk_width(args.chunk_width);

    debug!("Reading instruction stream from {}", args.program.display());
    let bytes = fs::read(&args.program)?;

    let mut source = BufferedSource::from_bytes(args.n_qubits, &bytes)?;
    let n_qubits = source.count_qubits()?;
    source.decorate()?;

    let mut wid = Widget::new(n_qubits, config.max_qubits);
    for layer in 0..source.layer_count() {
        let instructions = source.get_layer(layer)?;
        info!("applying layer {layer} ({} instructions)", instructions.len());
        wid.apply_instructions(instructions)?;
    }

    if config.is_parallel() {
        info!("normalizing via the parallel rewrite seam (chunk_width={})", config.chunk_width);
        wid.normalize_parallel(config.chunk_width);
    } else {
        wid.normalize();
    }
    print_tableau(&wid);
    Ok(())
}

fn print_tableau(wid: &Widget) {
    let n = wid.n_qubits();
    let tab = wid.tableau();

    let mut rows = Vec::with_capacity(n);
    for row in 0..n {
        let x_bits: String = (0..n).map(|col| if tab.get_x(row, col) { '1' } else { '0' }).collect();
        let z_bits: String = (0..n).map(|col| if tab.get_z(row, col) { '1' } else { '0' }).collect();
        rows.push(serde_json::json!({
            "x": x_bits,
            "z": z_bits,
            "phase": tab.get_phase(row),
        }));
    }

    let non_clifford: Vec<_> = (0..n)
        .filter_map(|row| wid.queue().non_clifford_tag(row).map(|tag| (row, tag)))
        .map(|(row, tag)| serde_json::json!({ "row": row, "angle_tag": tag }))
        .collect();

    let report = serde_json::json!({
        "n_qubits": n,
        "q_map": wid.q_map(),
        "rows": rows,
        "non_clifford": non_clifford,
    });

    println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Compile(args) => compile(args)?,
    }
    Ok(())
}
