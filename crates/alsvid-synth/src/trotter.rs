//! Trotter-Suzuki evolution synthesis.

use alsvid_ir::Circuit;
use alsvid_op::{PauliOperator, PauliTerm};
use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::options::SynthesisOptions;
use crate::ordering::reorder_terms;
use crate::pauli_evolution::append_term_evolution;
use crate::product_formula::expansion;

/// Imaginary coefficient parts at or below this magnitude are treated as
/// numerical noise.
pub(crate) const REAL_TOLERANCE: f64 = 1e-12;

/// Synthesize `exp(-i·time·H)` with the order-`order` Trotter-Suzuki formula
/// repeated `reps` times.
///
/// Gate convention: `R_P(θ) = exp(-i θ/2 · P)`, so a term `c·P` evolved for
/// one repetition's slice contributes the angle `θ = 2·c·time/reps` scaled by
/// the formula fraction. Pure-identity terms emit no gates and land in the
/// circuit's global phase.
pub fn suzuki_trotter(
    op: &PauliOperator,
    order: u32,
    reps: u32,
    time: f64,
    options: &SynthesisOptions,
) -> SynthResult<Circuit> {
    if op.is_empty() {
        return Err(SynthError::EmptyOperator);
    }
    if reps == 0 {
        return Err(SynthError::ZeroReps);
    }
    if !time.is_finite() {
        return Err(SynthError::NonFiniteTime(time));
    }
    ensure_real(op)?;

    let terms: Vec<PauliTerm> = if options.preserve_order {
        op.terms().to_vec()
    } else {
        reorder_terms(op.terms())
    };

    let seq = expansion(order, terms.len())?;
    let scale = 2.0 * time / f64::from(reps);

    let mut circuit = Circuit::new(format!("trotter_o{order}_r{reps}"));
    circuit.add_qreg("q", op.num_qubits() as u32);

    for rep in 0..reps {
        if options.insert_barriers && rep > 0 {
            circuit.barrier_all()?;
        }
        for &(index, fraction) in &seq {
            let term = &terms[index];
            let angle = scale * term.coeff().re * fraction;
            if term.is_identity() {
                circuit.add_global_phase(-0.5 * angle);
            } else {
                append_term_evolution(&mut circuit, term, angle, options.cx_structure)?;
            }
        }
    }

    debug!(
        order,
        reps,
        depth = circuit.depth(),
        ops = circuit.num_ops(),
        "synthesized product formula"
    );

    Ok(circuit)
}

/// Reject operators whose coefficients carry a non-negligible imaginary part.
pub(crate) fn ensure_real(op: &PauliOperator) -> SynthResult<()> {
    for (term_index, term) in op.iter().enumerate() {
        let imag = term.coeff().im;
        if imag.abs() > REAL_TOLERANCE {
            return Err(SynthError::NonRealCoefficient { term_index, imag });
        }
    }
    Ok(())
}
