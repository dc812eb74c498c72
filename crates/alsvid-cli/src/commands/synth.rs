//! Synth command implementation.

use anyhow::{Context, Result};
use console::style;

use alsvid_synth::{ConstraintOptions, suzuki_trotter, synthesize_with_depth_constraint};

use super::common::{load_operator, render_circuit, synthesis_options, write_output};

/// Execute the synth command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    input: &str,
    output: Option<&str>,
    time: f64,
    max_depth: usize,
    order: &str,
    reps: Option<u32>,
    format: &str,
    insert_barriers: bool,
    regroup: bool,
    cx_structure: &str,
) -> Result<()> {
    let op = load_operator(input)?;
    println!(
        "{} Synthesizing exp(-i·{}·H) for {} ({} terms, {} qubits)",
        style("→").cyan().bold(),
        time,
        style(input).green(),
        op.num_terms(),
        op.num_qubits()
    );

    let synthesis = synthesis_options(insert_barriers, regroup, cx_structure)?;

    let circuit = match reps {
        // Fixed formula: run it directly, then check the budget.
        Some(reps) => {
            let fixed_order = parse_fixed_order(order)?;
            let circuit = suzuki_trotter(&op, fixed_order, reps, time, &synthesis)?;
            println!(
                "  Fixed formula: order {fixed_order}, {reps} reps, depth {}",
                circuit.depth()
            );
            if circuit.depth() > max_depth {
                anyhow::bail!(
                    "fixed formula depth {} exceeds the budget {max_depth}",
                    circuit.depth()
                );
            }
            circuit
        }

        None => {
            let options = ConstraintOptions {
                synthesis,
                candidate_orders: parse_candidate_orders(order)?,
            };
            let result = synthesize_with_depth_constraint(&op, time, max_depth, &options)?;
            println!(
                "  Selected: order {}, {} reps, depth {} (bound {:.3e})",
                style(result.order).yellow(),
                style(result.reps).yellow(),
                result.depth(),
                result.error_bound
            );
            result.circuit
        }
    };

    let rendered = render_circuit(&circuit, format)?;
    write_output(&rendered, output)?;

    println!("{} Synthesis complete", style("✓").green().bold());
    Ok(())
}

fn parse_fixed_order(order: &str) -> Result<u32> {
    if order.eq_ignore_ascii_case("auto") {
        anyhow::bail!("--reps requires an explicit --order");
    }
    order
        .parse::<u32>()
        .with_context(|| format!("invalid order: '{order}'"))
}

fn parse_candidate_orders(order: &str) -> Result<Vec<u32>> {
    if order.eq_ignore_ascii_case("auto") {
        return Ok(ConstraintOptions::default().candidate_orders);
    }
    Ok(vec![parse_fixed_order(order)?])
}
