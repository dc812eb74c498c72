//! Alsvid Product-Formula Synthesis Engine
//!
//! This crate compiles Hamiltonian exponentials into quantum circuits. Given
//! a Hermitian operator `H` expressed as a weighted Pauli sum, it produces a
//! circuit approximating `exp(-i·t·H)` by Trotter-Suzuki product formulas,
//! and can select the formula automatically under a circuit-depth budget.
//!
//! # Architecture
//!
//! ```text
//! PauliOperator (alsvid-op)
//!       │
//!       ▼
//! ┌──────────────────────────────┐
//! │ synthesize_with_depth_       │ ◄── ConstraintOptions (orders, barriers,
//! │ constraint                   │      term ordering, CX structure)
//! └──────────────────────────────┘
//!       │
//!       ├── expansion          (Trotter-Suzuki coefficient sequences)
//!       ├── reorder_terms      (support-overlap grouping for parallelism)
//!       ├── append_term_evolution (per-term gate synthesis)
//!       └── error_bound        (operator-norm bound driving selection)
//!       │
//!       ▼
//! Circuit (alsvid-ir), depth ≤ budget
//! ```
//!
//! # Example: Depth-Constrained Exponentiation
//!
//! ```rust
//! use alsvid_op::PauliOperator;
//! use alsvid_synth::{ConstraintOptions, synthesize_with_depth_constraint};
//!
//! // H = -1.0·Z₀Z₁ - 0.5·X₀ - 0.5·X₁
//! let h = PauliOperator::from_labels(
//!     2,
//!     &[("ZZ", -1.0), ("XI", -0.5), ("IX", -0.5)],
//! )
//! .unwrap();
//!
//! let result = synthesize_with_depth_constraint(
//!     &h,
//!     0.5,
//!     30,
//!     &ConstraintOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(result.depth() <= 30);
//! println!(
//!     "order {} × {} reps, error bound {:.2e}",
//!     result.order, result.reps, result.error_bound
//! );
//! ```
//!
//! # Fixed-Formula Synthesis
//!
//! [`suzuki_trotter`] runs one formula directly; [`qdrift`] compiles by
//! randomized term sampling instead of a deterministic formula.
//!
//! # Conventions
//!
//! Rotations follow `R_P(θ) = exp(-i θ/2 · P)`. Pure-identity terms never
//! emit gates; they accumulate in the circuit's global phase. All operator
//! coefficients must be real up to numerical noise, since `exp(-iHt)` is
//! only unitary for Hermitian `H`.

pub mod bound;
pub mod error;
pub mod options;
pub mod ordering;
pub mod pauli_evolution;
pub mod product_formula;
pub mod qdrift;
pub mod search;
pub mod trotter;

pub use bound::error_bound;
pub use error::{SynthError, SynthResult};
pub use options::{ConstraintOptions, CxStructure, SynthesisOptions};
pub use ordering::reorder_terms;
pub use pauli_evolution::append_term_evolution;
pub use product_formula::expansion;
pub use qdrift::qdrift;
pub use search::{Synthesis, synthesize_with_depth_constraint};
pub use trotter::suzuki_trotter;
