//! Depth-constrained formula selection.
//!
//! Picks the product formula (order and repetition count) with the smallest
//! operator-norm error bound whose synthesized circuit fits a depth budget.

use alsvid_ir::Circuit;
use alsvid_op::PauliOperator;
use tracing::{debug, info, instrument};

use crate::bound::error_bound;
use crate::error::{SynthError, SynthResult};
use crate::options::ConstraintOptions;
use crate::product_formula::validate_order;
use crate::trotter::{ensure_real, suzuki_trotter};

/// The outcome of a depth-constrained synthesis.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// The synthesized circuit; its depth respects the requested budget.
    pub circuit: Circuit,
    /// Product-formula order selected.
    pub order: u32,
    /// Repetition count selected.
    pub reps: u32,
    /// Operator-norm error bound of the selected formula.
    pub error_bound: f64,
}

impl Synthesis {
    /// Depth of the synthesized circuit.
    pub fn depth(&self) -> usize {
        self.circuit.depth()
    }
}

/// Synthesize `exp(-i·time·H)` subject to `circuit.depth() <= max_depth`.
///
/// Every candidate order is probed with a single repetition to establish
/// feasibility, then driven to the largest repetition count that still fits
/// the budget (more repetitions never increase the error bound). Among the
/// feasible candidates the smallest error bound wins; ties go to fewer
/// repetitions, then to the lower order.
///
/// Fails with [`SynthError::DepthBudgetExceeded`] when no candidate fits even
/// once.
#[instrument(skip(op, options), fields(num_terms = op.num_terms(), num_qubits = op.num_qubits()))]
pub fn synthesize_with_depth_constraint(
    op: &PauliOperator,
    time: f64,
    max_depth: usize,
    options: &ConstraintOptions,
) -> SynthResult<Synthesis> {
    if op.is_empty() {
        return Err(SynthError::EmptyOperator);
    }
    if !time.is_finite() {
        return Err(SynthError::NonFiniteTime(time));
    }
    ensure_real(op)?;
    if options.candidate_orders.is_empty() {
        return Err(SynthError::NoCandidateOrders);
    }
    for &order in &options.candidate_orders {
        validate_order(order)?;
    }

    // Pure phase: fits any budget exactly.
    if op.is_identity_only() {
        let circuit = suzuki_trotter(op, 1, 1, time, &options.synthesis)?;
        return Ok(Synthesis {
            circuit,
            order: 1,
            reps: 1,
            error_bound: 0.0,
        });
    }

    let mut best: Option<Synthesis> = None;
    let mut min_required = usize::MAX;

    for &order in &options.candidate_orders {
        let single = suzuki_trotter(op, order, 1, time, &options.synthesis)?;
        let single_depth = single.depth();
        min_required = min_required.min(single_depth);

        if single_depth > max_depth {
            debug!(order, single_depth, budget = max_depth, "order does not fit");
            continue;
        }

        // A zero bound cannot improve with repetitions; keep the cheapest
        // circuit. Otherwise drive the repetition count as high as the
        // budget allows.
        let single_bound = error_bound(op, time, order, 1)?;
        let (reps, circuit, bound) = if single_bound == 0.0 {
            (1, single, 0.0)
        } else {
            let (reps, circuit) =
                max_feasible_reps(op, order, time, max_depth, options, single)?;
            let bound = error_bound(op, time, order, reps)?;
            (reps, circuit, bound)
        };
        debug!(order, reps, depth = circuit.depth(), bound, "feasible candidate");

        let candidate = Synthesis {
            circuit,
            order,
            reps,
            error_bound: bound,
        };
        best = Some(match best.take() {
            None => candidate,
            Some(current) => pick_better(current, candidate),
        });
    }

    match best {
        Some(selected) => {
            info!(
                order = selected.order,
                reps = selected.reps,
                depth = selected.circuit.depth(),
                bound = selected.error_bound,
                "selected product formula"
            );
            Ok(selected)
        }
        None => Err(SynthError::DepthBudgetExceeded {
            required: min_required,
            budget: max_depth,
        }),
    }
}

/// Largest repetition count whose circuit fits the budget, found by binary
/// search. Depth is monotone in the repetition count (each repetition adds at
/// least one level on its busiest wire), and every repetition costs at least
/// one level, so the search space is `[1, max_depth]`.
fn max_feasible_reps(
    op: &PauliOperator,
    order: u32,
    time: f64,
    max_depth: usize,
    options: &ConstraintOptions,
    single: Circuit,
) -> SynthResult<(u32, Circuit)> {
    let ceiling = u32::try_from(max_depth).unwrap_or(u32::MAX);
    let (mut lo, mut hi) = (1u32, ceiling);
    let mut best = (1u32, single);

    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        let trial = suzuki_trotter(op, order, mid, time, &options.synthesis)?;
        if trial.depth() <= max_depth {
            best = (mid, trial);
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    Ok(best)
}

/// Selection rule: smaller bound, then fewer repetitions, then lower order.
fn pick_better(current: Synthesis, candidate: Synthesis) -> Synthesis {
    if candidate.error_bound < current.error_bound {
        return candidate;
    }
    if candidate.error_bound > current.error_bound {
        return current;
    }
    if candidate.reps != current.reps {
        return if candidate.reps < current.reps {
            candidate
        } else {
            current
        };
    }
    if candidate.order < current.order {
        candidate
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SynthesisOptions;

    fn ising_3q() -> PauliOperator {
        PauliOperator::from_labels(
            3,
            &[
                ("ZZI", -1.0),
                ("IZZ", -1.0),
                ("XII", -0.5),
                ("IXI", -0.5),
                ("IIX", -0.5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_budget_respected() {
        let h = ising_3q();
        for budget in [4, 10, 40, 200] {
            let result = synthesize_with_depth_constraint(
                &h,
                1.0,
                budget,
                &ConstraintOptions::default(),
            )
            .unwrap();
            assert!(
                result.depth() <= budget,
                "depth {} over budget {budget}",
                result.depth()
            );
        }
    }

    #[test]
    fn test_budget_too_small_fails() {
        let h = ising_3q();
        let err = synthesize_with_depth_constraint(&h, 1.0, 1, &ConstraintOptions::default())
            .unwrap_err();
        match err {
            SynthError::DepthBudgetExceeded { required, budget } => {
                assert_eq!(budget, 1);
                assert!(required > 1);
            }
            other => panic!("expected DepthBudgetExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_larger_budget_never_worse() {
        let h = ising_3q();
        let tight =
            synthesize_with_depth_constraint(&h, 1.0, 15, &ConstraintOptions::default())
                .unwrap();
        let loose =
            synthesize_with_depth_constraint(&h, 1.0, 150, &ConstraintOptions::default())
                .unwrap();
        assert!(loose.error_bound <= tight.error_bound);
    }

    #[test]
    fn test_identity_only_fits_zero_budget() {
        let h = PauliOperator::from_labels(2, &[("II", 3.0)]).unwrap();
        let result =
            synthesize_with_depth_constraint(&h, 0.5, 0, &ConstraintOptions::default())
                .unwrap();
        assert_eq!(result.depth(), 0);
        assert_eq!(result.error_bound, 0.0);
        assert!((result.circuit.global_phase() + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_commuting_operator_prefers_single_rep() {
        // All terms commute: every bound is 0, so ties resolve to the
        // cheapest formula (reps = 1, order = 1).
        let h = PauliOperator::from_labels(2, &[("ZI", 1.0), ("IZ", 1.0)]).unwrap();
        let result =
            synthesize_with_depth_constraint(&h, 1.0, 50, &ConstraintOptions::default())
                .unwrap();
        assert_eq!(result.order, 1);
        assert_eq!(result.reps, 1);
        assert_eq!(result.error_bound, 0.0);
    }

    #[test]
    fn test_invalid_candidate_order_rejected() {
        let h = ising_3q();
        let options = ConstraintOptions {
            synthesis: SynthesisOptions::default(),
            candidate_orders: vec![3],
        };
        assert!(matches!(
            synthesize_with_depth_constraint(&h, 1.0, 100, &options),
            Err(SynthError::UnsupportedOrder(3))
        ));
    }

    #[test]
    fn test_empty_candidate_orders_rejected() {
        let h = ising_3q();
        let options = ConstraintOptions {
            synthesis: SynthesisOptions::default(),
            candidate_orders: vec![],
        };
        assert!(matches!(
            synthesize_with_depth_constraint(&h, 1.0, 100, &options),
            Err(SynthError::NoCandidateOrders)
        ));
    }
}
