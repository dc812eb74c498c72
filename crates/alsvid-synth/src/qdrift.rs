//! QDrift randomized compilation.
//!
//! Instead of evolving every term in sequence, QDrift samples terms with
//! probability proportional to their weight and evolves each sample for a
//! fixed rescaled slice. Based on E. Campbell, "A random compiler for fast
//! Hamiltonian simulation" (2018).

use alsvid_ir::Circuit;
use alsvid_op::PauliOperator;
use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::options::SynthesisOptions;
use crate::pauli_evolution::append_term_evolution;
use crate::trotter::ensure_real;

/// Synthesize `exp(-i·time·H)` by QDrift sampling.
///
/// The target gate count is `N = ⌈2·λ²·time²·reps⌉` with `λ` the operator
/// one-norm; each sampled term evolves for `θ = sign(c_j)·2·λ·time/N`.
/// Identity terms contribute only global phase. Passing a `seed` makes the
/// sampled sequence reproducible.
pub fn qdrift(
    op: &PauliOperator,
    reps: u32,
    time: f64,
    seed: Option<u64>,
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

    let kappa = op.identity_coefficient().re;
    let lambda = op.one_norm();

    let mut circuit = Circuit::new("qdrift");
    circuit.add_qreg("q", op.num_qubits() as u32);
    circuit.add_global_phase(-time * kappa);

    // Pure phase: nothing to sample.
    if lambda == 0.0 {
        return Ok(circuit);
    }

    let num_gates = (2.0 * lambda * lambda * time * time * f64::from(reps)).ceil() as usize;
    if num_gates == 0 {
        return Ok(circuit);
    }

    let weights: Vec<f64> = op
        .iter()
        .map(|term| {
            if term.is_identity() {
                0.0
            } else {
                term.coeff().norm()
            }
        })
        .collect();
    // lambda > 0 guarantees a positive weight.
    let Ok(dist) = WeightedIndex::new(&weights) else {
        return Ok(circuit);
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let rescaled_time = 2.0 * lambda / num_gates as f64 * time;
    for _ in 0..num_gates {
        let term = &op.terms()[dist.sample(&mut rng)];
        let theta = term.coeff().re.signum() * rescaled_time;
        append_term_evolution(&mut circuit, term, theta, options.cx_structure)?;
    }

    debug!(
        lambda,
        num_gates,
        depth = circuit.depth(),
        "sampled qdrift circuit"
    );

    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_count_formula() {
        // λ = 1, t = 1, reps = 2: N = ⌈2·1·1·2⌉ = 4.
        let h = PauliOperator::from_labels(1, &[("X", 1.0)]).unwrap();
        let circuit = qdrift(&h, 2, 1.0, Some(7), &SynthesisOptions::default()).unwrap();
        assert_eq!(circuit.num_ops(), 4);
    }

    #[test]
    fn test_seed_reproducibility() {
        let h = PauliOperator::from_labels(
            2,
            &[("XI", 0.8), ("ZZ", -0.4), ("IY", 0.2)],
        )
        .unwrap();
        let a = qdrift(&h, 3, 0.7, Some(42), &SynthesisOptions::default()).unwrap();
        let b = qdrift(&h, 3, 0.7, Some(42), &SynthesisOptions::default()).unwrap();
        assert_eq!(a.instructions(), b.instructions());
    }

    #[test]
    fn test_identity_only_gives_phase() {
        let h = PauliOperator::from_labels(2, &[("II", 1.0)]).unwrap();
        let circuit = qdrift(&h, 1, 0.6, Some(0), &SynthesisOptions::default()).unwrap();
        assert_eq!(circuit.num_ops(), 0);
        assert!((circuit.global_phase() + 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_zero_time_emits_nothing() {
        let h = PauliOperator::from_labels(1, &[("Z", 1.0)]).unwrap();
        let circuit = qdrift(&h, 1, 0.0, Some(0), &SynthesisOptions::default()).unwrap();
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_negative_coefficient_flips_angle() {
        let h = PauliOperator::from_labels(1, &[("Z", -1.0)]).unwrap();
        let circuit = qdrift(&h, 1, 0.5, Some(0), &SynthesisOptions::default()).unwrap();
        for inst in circuit.instructions() {
            let angle = inst.as_gate().unwrap().angle().unwrap();
            assert!(angle < 0.0);
        }
        assert!(circuit.num_ops() > 0);
    }
}
