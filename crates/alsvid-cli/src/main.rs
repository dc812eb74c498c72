//! Alsvid Command-Line Interface
//!
//! Depth-constrained synthesis of Hamiltonian-evolution circuits from the
//! command line. Hamiltonians are read as JSON Pauli sums; circuits come out
//! as QASM3, JSON, or a text summary.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{bound, qdrift, synth, version};

/// Alsvid - depth-constrained Hamiltonian-exponential synthesis
#[derive(Parser)]
#[command(name = "alsvid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize exp(-i·time·H) under a circuit-depth budget
    Synth {
        /// Input Hamiltonian (JSON Pauli sum)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Evolution time t in exp(-i·t·H)
        #[arg(short, long)]
        time: f64,

        /// Maximum circuit depth
        #[arg(short = 'd', long)]
        max_depth: usize,

        /// Product-formula order (auto, 1, 2, 4, ...)
        #[arg(long, default_value = "auto")]
        order: String,

        /// Fixed repetition count (requires an explicit --order; skips the search)
        #[arg(long)]
        reps: Option<u32>,

        /// Output format (qasm3, json, text)
        #[arg(short, long, default_value = "qasm3")]
        format: String,

        /// Insert barriers between formula repetitions
        #[arg(long)]
        insert_barriers: bool,

        /// Regroup terms with disjoint support for parallel scheduling
        #[arg(long)]
        regroup: bool,

        /// CX propagation structure (chain, fountain)
        #[arg(long, default_value = "chain")]
        cx_structure: String,
    },

    /// Print the error-bound table the depth search consults
    Bound {
        /// Input Hamiltonian (JSON Pauli sum)
        #[arg(short, long)]
        input: String,

        /// Evolution time t in exp(-i·t·H)
        #[arg(short, long)]
        time: f64,

        /// Largest repetition count to tabulate
        #[arg(long, default_value = "16")]
        max_reps: u32,
    },

    /// Synthesize exp(-i·time·H) by QDrift randomized sampling
    Qdrift {
        /// Input Hamiltonian (JSON Pauli sum)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Evolution time t in exp(-i·t·H)
        #[arg(short, long)]
        time: f64,

        /// Outer repetition count
        #[arg(short, long, default_value = "1")]
        reps: u32,

        /// RNG seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (qasm3, json, text)
        #[arg(short, long, default_value = "qasm3")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Synth {
            input,
            output,
            time,
            max_depth,
            order,
            reps,
            format,
            insert_barriers,
            regroup,
            cx_structure,
        } => synth::execute(
            &input,
            output.as_deref(),
            time,
            max_depth,
            &order,
            reps,
            &format,
            insert_barriers,
            regroup,
            &cx_structure,
        ),

        Commands::Bound {
            input,
            time,
            max_reps,
        } => bound::execute(&input, time, max_reps),

        Commands::Qdrift {
            input,
            output,
            time,
            reps,
            seed,
            format,
        } => qdrift::execute(&input, output.as_deref(), time, reps, seed, &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
