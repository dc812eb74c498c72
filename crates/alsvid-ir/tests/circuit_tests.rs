//! Integration tests for the circuit IR.

use alsvid_ir::{Circuit, QubitId, StandardGate};
use proptest::prelude::*;

#[test]
fn serde_round_trip_rebuilds_depth() {
    let mut circuit = Circuit::with_size("rt", 3, 3);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.rz(0.75, QubitId(1)).unwrap();
    circuit.barrier_all().unwrap();
    circuit.measure_all().unwrap();
    circuit.add_global_phase(-0.5);

    let json = serde_json::to_string(&circuit).unwrap();
    let back: Circuit = serde_json::from_str(&json).unwrap();

    assert_eq!(back, circuit);
    assert_eq!(back.depth(), circuit.depth());
    assert_eq!(back.num_ops(), circuit.num_ops());
    assert!((back.global_phase() - circuit.global_phase()).abs() < 1e-12);
}

#[test]
fn deserialization_validates_operands() {
    // q5 does not exist in a 1-qubit circuit.
    let json = r#"{
        "name": "bad",
        "qubits": [{"id": 0, "register": null, "index": null}],
        "clbits": [],
        "global_phase": 0.0,
        "instructions": [{"kind": {"Gate": "H"}, "qubits": [5], "clbits": []}]
    }"#;
    assert!(serde_json::from_str::<Circuit>(json).is_err());
}

#[test]
fn register_preserved_through_serde() {
    let mut circuit = Circuit::new("reg");
    circuit.add_qreg("work", 2);
    circuit.h(QubitId(0)).unwrap();

    let json = serde_json::to_string(&circuit).unwrap();
    let back: Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(back.qubits()[1].register.as_deref(), Some("work"));
    assert_eq!(back.qubits()[1].index, Some(1));
}

proptest! {
    /// Depth never decreases as gates are applied, never exceeds the gate
    /// count, and is at least gate-count / num_qubits (pigeonhole).
    #[test]
    fn depth_bounds(ops in proptest::collection::vec((0u32..4, 0u32..4), 1..40)) {
        let mut circuit = Circuit::with_size("prop", 4, 0);
        let mut previous = 0;
        let mut applied = 0usize;

        for (a, b) in ops {
            if a == b {
                circuit.rz(0.1, QubitId(a)).unwrap();
            } else {
                circuit.cx(QubitId(a), QubitId(b)).unwrap();
            }
            applied += 1;

            prop_assert!(circuit.depth() >= previous);
            previous = circuit.depth();
        }

        prop_assert!(circuit.depth() <= applied);
        prop_assert!(circuit.depth() * 4 >= applied);
    }

    /// Gate inverses are involutive.
    #[test]
    fn inverse_is_involutive(theta in -6.0f64..6.0) {
        for gate in [
            StandardGate::H,
            StandardGate::S,
            StandardGate::SX,
            StandardGate::Rz(theta),
            StandardGate::Rzz(theta),
            StandardGate::CX,
        ] {
            prop_assert_eq!(gate.inverse().inverse(), gate);
        }
    }
}
