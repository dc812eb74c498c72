//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use std::fs;
use tracing::debug;

use alsvid_ir::Circuit;
use alsvid_op::PauliOperator;
use alsvid_synth::{CxStructure, SynthesisOptions};

/// Load a Pauli-sum Hamiltonian from a JSON file.
pub fn load_operator(path: &str) -> Result<PauliOperator> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read Hamiltonian file '{path}'"))?;
    let op: PauliOperator = serde_json::from_str(&text)
        .with_context(|| format!("'{path}' is not a valid Pauli-sum Hamiltonian"))?;
    debug!(
        terms = op.num_terms(),
        qubits = op.num_qubits(),
        "loaded Hamiltonian"
    );
    Ok(op)
}

/// Parse a `--cx-structure` argument.
pub fn parse_cx_structure(value: &str) -> Result<CxStructure> {
    match value.to_lowercase().as_str() {
        "chain" => Ok(CxStructure::Chain),
        "fountain" => Ok(CxStructure::Fountain),
        other => anyhow::bail!("unknown CX structure: '{other}' (expected chain or fountain)"),
    }
}

/// Assemble synthesis options from CLI flags.
pub fn synthesis_options(
    insert_barriers: bool,
    regroup: bool,
    cx_structure: &str,
) -> Result<SynthesisOptions> {
    Ok(SynthesisOptions {
        insert_barriers,
        preserve_order: !regroup,
        cx_structure: parse_cx_structure(cx_structure)?,
    })
}

/// Render a circuit in the requested format.
pub fn render_circuit(circuit: &Circuit, format: &str) -> Result<String> {
    match format.to_lowercase().as_str() {
        "qasm3" | "qasm" => Ok(alsvid_qasm3::emit(circuit)),
        "json" => serde_json::to_string_pretty(circuit)
            .context("failed to serialize circuit as JSON"),
        "text" => Ok(text_summary(circuit)),
        other => anyhow::bail!("unknown output format: '{other}' (expected qasm3, json or text)"),
    }
}

/// Write rendered output to a file or stdout.
pub fn write_output(rendered: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write output file '{path}'")),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn text_summary(circuit: &Circuit) -> String {
    let mut counts: Vec<(String, usize)> = circuit.gate_counts().into_iter().collect();
    counts.sort();

    let mut out = String::new();
    out.push_str(&format!("circuit: {}\n", circuit.name()));
    out.push_str(&format!("qubits:  {}\n", circuit.num_qubits()));
    out.push_str(&format!("depth:   {}\n", circuit.depth()));
    out.push_str(&format!("ops:     {}\n", circuit.num_ops()));
    if circuit.global_phase() != 0.0 {
        out.push_str(&format!("phase:   {}\n", circuit.global_phase()));
    }
    for (name, count) in counts {
        out.push_str(&format!("  {name:<8} {count}\n"));
    }
    out
}
