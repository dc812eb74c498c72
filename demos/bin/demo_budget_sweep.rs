//! Depth-Budget Sweep Demo
//!
//! Shows how the selected product formula and its error bound change as the
//! circuit-depth budget varies.

use clap::Parser;

use alsvid_demos::molecules;
use alsvid_demos::{print_header, print_section, print_success};
use alsvid_synth::{ConstraintOptions, SynthError, synthesize_with_depth_constraint};

#[derive(Parser, Debug)]
#[command(name = "demo-budget-sweep")]
#[command(about = "Sweep depth budgets and report the selected formulas")]
struct Args {
    /// Hamiltonian to evolve (h2, h2-4q, lih, ising6)
    #[arg(short = 'm', long, default_value = "h2-4q")]
    hamiltonian: String,

    /// Evolution time t in exp(-i·t·H)
    #[arg(short, long, default_value = "1.0")]
    time: f64,
}

const BUDGETS: &[usize] = &[5, 10, 20, 40, 80, 160, 320, 640];

fn main() {
    let args = Args::parse();

    print_header("Depth-Budget Sweep");

    let hamiltonian = match args.hamiltonian.to_lowercase().as_str() {
        "h2" => molecules::h2(),
        "h2-4q" | "h2_4q" => molecules::h2_4q(),
        "lih" => molecules::lih(),
        "ising6" | "ising" => molecules::ising_chain(6, -1.0, -0.6),
        other => {
            eprintln!("Unknown Hamiltonian: {other}. Available: h2, h2-4q, lih, ising6");
            std::process::exit(1);
        }
    };
    let hamiltonian = match hamiltonian {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Failed to build Hamiltonian: {e}");
            std::process::exit(1);
        }
    };

    print_section(&format!(
        "{} ({} qubits, {} terms), t = {}",
        args.hamiltonian,
        hamiltonian.num_qubits(),
        hamiltonian.num_terms(),
        args.time
    ));

    println!(
        "  {:>7}  {:>5}  {:>5}  {:>6}  {:>12}",
        "budget", "order", "reps", "depth", "bound"
    );

    for &budget in BUDGETS {
        match synthesize_with_depth_constraint(
            &hamiltonian,
            args.time,
            budget,
            &ConstraintOptions::default(),
        ) {
            Ok(result) => {
                println!(
                    "  {budget:>7}  {:>5}  {:>5}  {:>6}  {:>12.4e}",
                    result.order,
                    result.reps,
                    result.depth(),
                    result.error_bound
                );
            }
            Err(SynthError::DepthBudgetExceeded { required, .. }) => {
                println!("  {budget:>7}  (infeasible: needs depth {required})");
            }
            Err(e) => {
                eprintln!("Synthesis failed: {e}");
                std::process::exit(1);
            }
        }
    }

    println!();
    print_success("Sweep complete: larger budgets buy tighter error bounds");
}
