//! CLI pipeline and utility tests.
//!
//! The CLI is a binary crate, so these tests exercise the equivalent
//! pipeline through the underlying crates: JSON Hamiltonian in, synthesized
//! circuit out.

use std::fs;

use alsvid_op::PauliOperator;
use alsvid_synth::{ConstraintOptions, CxStructure, synthesize_with_depth_constraint};

const ISING_JSON: &str = r#"{
    "num_qubits": 3,
    "terms": [
        {"pauli": "ZZI", "coeff": [-1.0, 0.0]},
        {"pauli": "IZZ", "coeff": [-1.0, 0.0]},
        {"pauli": "XII", "coeff": [-0.5, 0.0]},
        {"pauli": "IXI", "coeff": [-0.5, 0.0]},
        {"pauli": "IIX", "coeff": [-0.5, 0.0]}
    ]
}"#;

/// Equivalent to commands::common::parse_cx_structure.
fn parse_cx_structure(value: &str) -> anyhow::Result<CxStructure> {
    match value.to_lowercase().as_str() {
        "chain" => Ok(CxStructure::Chain),
        "fountain" => Ok(CxStructure::Fountain),
        other => anyhow::bail!("unknown CX structure: '{other}'"),
    }
}

#[test]
fn test_cx_structure_parsing() {
    assert_eq!(parse_cx_structure("chain").unwrap(), CxStructure::Chain);
    assert_eq!(parse_cx_structure("Fountain").unwrap(), CxStructure::Fountain);
    assert!(parse_cx_structure("tree").is_err());
}

#[test]
fn test_hamiltonian_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ising.json");
    fs::write(&path, ISING_JSON).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let op: PauliOperator = serde_json::from_str(&text).unwrap();
    assert_eq!(op.num_qubits(), 3);
    assert_eq!(op.num_terms(), 5);
    assert!((op.one_norm() - 3.5).abs() < 1e-12);
}

#[test]
fn test_pipeline_json_to_qasm() {
    let op: PauliOperator = serde_json::from_str(ISING_JSON).unwrap();
    let result =
        synthesize_with_depth_constraint(&op, 1.0, 40, &ConstraintOptions::default()).unwrap();

    let qasm = alsvid_qasm3::emit(&result.circuit);
    assert!(qasm.starts_with("OPENQASM 3.0;"));
    assert!(qasm.contains("qubit[3] q;"));
    assert!(qasm.contains("rzz("));
    assert!(qasm.contains("rx("));
}

#[test]
fn test_pipeline_circuit_json_output() {
    let op: PauliOperator = serde_json::from_str(ISING_JSON).unwrap();
    let result =
        synthesize_with_depth_constraint(&op, 1.0, 40, &ConstraintOptions::default()).unwrap();

    let json = serde_json::to_string_pretty(&result.circuit).unwrap();
    let back: alsvid_ir::Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(back.depth(), result.depth());
}

#[test]
fn test_malformed_hamiltonian_rejected() {
    let bad = r#"{"num_qubits": 2, "terms": [{"pauli": "XQ", "coeff": [1.0, 0.0]}]}"#;
    assert!(serde_json::from_str::<PauliOperator>(bad).is_err());
}
