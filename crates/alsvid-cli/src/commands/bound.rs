//! Bound command implementation.

use anyhow::Result;
use console::style;

use alsvid_synth::error_bound;

use super::common::load_operator;

/// Execute the bound command: tabulate the error bounds the depth search
/// consults.
pub fn execute(input: &str, time: f64, max_reps: u32) -> Result<()> {
    let op = load_operator(input)?;
    println!(
        "{} Error bounds for exp(-i·{}·H), λ = {:.6}",
        style("→").cyan().bold(),
        time,
        op.one_norm()
    );

    println!("  {:>6}  {:>12}  {:>12}  {:>12}", "reps", "order 1", "order 2", "order 4");
    for reps in 1..=max_reps.max(1) {
        let row: Vec<String> = [1u32, 2, 4]
            .iter()
            .map(|&order| {
                error_bound(&op, time, order, reps)
                    .map(|b| format!("{b:.4e}"))
                    .unwrap_or_else(|_| "-".to_string())
            })
            .collect();
        println!("  {reps:>6}  {:>12}  {:>12}  {:>12}", row[0], row[1], row[2]);
    }

    Ok(())
}
