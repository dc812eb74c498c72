//! Operator-norm error bounds for product formulas.
//!
//! These are the quantities the depth-constrained search minimizes. Both are
//! upper bounds on `‖exp(-iHt) - S_p(t/r)^r‖` obtained by the triangle
//! inequality; the true error is usually smaller.

use alsvid_op::{PauliOperator, PauliTerm};

use crate::error::{SynthError, SynthResult};
use crate::product_formula::validate_order;

/// Upper bound on the operator-norm error of the order-`order` formula with
/// `reps` repetitions over evolution time `time`.
///
/// - Order 1 uses the commutator bound
///   `(t²/2r) · Σ_{j<k} ‖[c_j P_j, c_k P_k]‖`, where a pair of Pauli strings
///   contributes `2|c_j||c_k|` when they anticommute and nothing otherwise.
/// - Even orders `2k` use the Berry-Ahokas-Cleve-Sanders bound
///   `(2·5^{k-1}·λ·|t|)^{2k+1} / (3·r^{2k})` with `λ` the operator one-norm.
///   The bound is tight only in the convergent regime `2·5^{k-1}·λ·|t| ≲ r`;
///   outside it the value is still a valid comparison key, just loose.
pub fn error_bound(
    op: &PauliOperator,
    time: f64,
    order: u32,
    reps: u32,
) -> SynthResult<f64> {
    validate_order(order)?;
    if reps == 0 {
        return Err(SynthError::ZeroReps);
    }

    if order == 1 {
        let comm = commutator_sum(op);
        return Ok(time * time * comm / (2.0 * f64::from(reps)));
    }

    let k = (order / 2) as i32;
    let lambda = op.one_norm();
    let tau = 2.0 * 5f64.powi(k - 1) * lambda * time.abs();
    Ok(tau.powi(2 * k + 1) / (3.0 * f64::from(reps).powi(2 * k)))
}

/// `Σ_{j<k} ‖[c_j P_j, c_k P_k]‖` over the non-identity terms.
fn commutator_sum(op: &PauliOperator) -> f64 {
    let terms: Vec<&PauliTerm> = op.iter().filter(|t| !t.is_identity()).collect();
    let mut sum = 0.0;
    for (j, a) in terms.iter().enumerate() {
        for b in &terms[j + 1..] {
            if !a.commutes_with(b) {
                sum += 2.0 * a.coeff().norm() * b.coeff().norm();
            }
        }
    }
    sum
}
