//! QDrift command implementation.

use anyhow::Result;
use console::style;

use alsvid_synth::{SynthesisOptions, qdrift};

use super::common::{load_operator, render_circuit, write_output};

/// Execute the qdrift command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    time: f64,
    reps: u32,
    seed: Option<u64>,
    format: &str,
) -> Result<()> {
    let op = load_operator(input)?;
    println!(
        "{} QDrift sampling exp(-i·{}·H) for {} (λ = {:.6})",
        style("→").cyan().bold(),
        time,
        style(input).green(),
        op.one_norm()
    );

    let circuit = qdrift(&op, reps, time, seed, &SynthesisOptions::default())?;
    println!(
        "  Sampled {} gates, depth {}",
        circuit.num_ops(),
        circuit.depth()
    );

    let rendered = render_circuit(&circuit, format)?;
    write_output(&rendered, output)?;

    println!("{} Synthesis complete", style("✓").green().bold());
    Ok(())
}
