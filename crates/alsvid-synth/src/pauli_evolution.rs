//! Single-term Pauli evolution synthesis.
//!
//! Compiles `exp(-i θ/2 · P)` for one Pauli string `P` into standard gates:
//! a basis change into the Z basis on every support qubit, parity propagation
//! onto one rotation qubit, `Rz(θ)` there, and the uncompute in reverse.

use alsvid_ir::{Circuit, QubitId};
use alsvid_op::{Pauli, PauliTerm};

use crate::error::SynthResult;
use crate::options::CxStructure;

/// Append the evolution `exp(-i θ/2 · P)` of one Pauli string to `circuit`.
///
/// Identity strings append nothing; their phase contribution is the caller's
/// responsibility (it depends on the formula's coefficient bookkeeping).
pub fn append_term_evolution(
    circuit: &mut Circuit,
    term: &PauliTerm,
    theta: f64,
    cx_structure: CxStructure,
) -> SynthResult<()> {
    let support = term.support();

    match support.as_slice() {
        [] => Ok(()),

        // Single-axis support maps to a bare rotation.
        &[q] => {
            let qubit = QubitId(q as u32);
            match term.axes()[q] {
                Pauli::X => circuit.rx(theta, qubit)?,
                Pauli::Y => circuit.ry(theta, qubit)?,
                Pauli::Z => circuit.rz(theta, qubit)?,
                Pauli::I => unreachable!("support excludes identity positions"),
            };
            Ok(())
        }

        // A pure ZZ coupling has a native gate.
        &[q1, q2]
            if term.axes()[q1] == Pauli::Z && term.axes()[q2] == Pauli::Z =>
        {
            circuit.rzz(theta, QubitId(q1 as u32), QubitId(q2 as u32))?;
            Ok(())
        }

        _ => append_general_evolution(circuit, term, theta, cx_structure, &support),
    }
}

/// General path: basis change, parity propagation, rotation, uncompute.
fn append_general_evolution(
    circuit: &mut Circuit,
    term: &PauliTerm,
    theta: f64,
    cx_structure: CxStructure,
    support: &[usize],
) -> SynthResult<()> {
    // Into the Z basis: H for X; Sdg then H for Y (Y = S H Z H Sdg).
    for &q in support {
        let qubit = QubitId(q as u32);
        match term.axes()[q] {
            Pauli::X => {
                circuit.h(qubit)?;
            }
            Pauli::Y => {
                circuit.sdg(qubit)?;
                circuit.h(qubit)?;
            }
            Pauli::Z => {}
            Pauli::I => unreachable!("support excludes identity positions"),
        }
    }

    let Some(&last) = support.last() else {
        return Ok(());
    };
    let target = QubitId(last as u32);

    apply_parity(circuit, support, target, cx_structure, false)?;
    circuit.rz(theta, target)?;
    apply_parity(circuit, support, target, cx_structure, true)?;

    // Out of the Z basis, in reverse.
    for &q in support.iter().rev() {
        let qubit = QubitId(q as u32);
        match term.axes()[q] {
            Pauli::X => {
                circuit.h(qubit)?;
            }
            Pauli::Y => {
                circuit.h(qubit)?;
                circuit.s(qubit)?;
            }
            Pauli::Z | Pauli::I => {}
        }
    }

    Ok(())
}

/// Propagate (or unwind) the support parity onto the rotation qubit.
fn apply_parity(
    circuit: &mut Circuit,
    support: &[usize],
    target: QubitId,
    cx_structure: CxStructure,
    unwind: bool,
) -> SynthResult<()> {
    match cx_structure {
        CxStructure::Chain => {
            let pairs: Vec<(QubitId, QubitId)> = support
                .windows(2)
                .map(|w| (QubitId(w[0] as u32), QubitId(w[1] as u32)))
                .collect();
            if unwind {
                for &(c, t) in pairs.iter().rev() {
                    circuit.cx(c, t)?;
                }
            } else {
                for &(c, t) in &pairs {
                    circuit.cx(c, t)?;
                }
            }
        }
        CxStructure::Fountain => {
            let controls: Vec<QubitId> = support[..support.len() - 1]
                .iter()
                .map(|&q| QubitId(q as u32))
                .collect();
            if unwind {
                for &c in controls.iter().rev() {
                    circuit.cx(c, target)?;
                }
            } else {
                for &c in &controls {
                    circuit.cx(c, target)?;
                }
            }
        }
    }
    Ok(())
}
