//! Alsvid Pauli-Operator Data Model
//!
//! This crate provides the data structures for expressing Hermitian operators
//! as weighted sums of multi-qubit Pauli strings. It is the input language of
//! the Alsvid synthesis stack: a Hamiltonian is built here, then handed to
//! `alsvid-synth` to be compiled into a circuit approximating its exponential.
//!
//! # Core Components
//!
//! - **Axis labels**: [`Pauli`] for the single-qubit alphabet {I, X, Y, Z}
//! - **Terms**: [`PauliTerm`] pairing an axis sequence with a complex weight
//! - **Operators**: [`PauliOperator`] for the weighted sum of terms
//!
//! # Example: Transverse-Field Ising Chain
//!
//! ```rust
//! use alsvid_op::{PauliOperator, PauliTerm};
//!
//! let mut h = PauliOperator::new(3);
//! for q in 0..2 {
//!     h.push(PauliTerm::zz(3, -1.0, q, q + 1).unwrap()).unwrap();
//! }
//! for q in 0..3 {
//!     h.push(PauliTerm::x(3, -0.5, q).unwrap()).unwrap();
//! }
//!
//! assert_eq!(h.num_terms(), 5);
//! assert!((h.one_norm() - 3.5).abs() < 1e-12);
//! ```
//!
//! # Invariants
//!
//! Every term in an operator spans the full register width: a label of length
//! `n` describes one axis per qubit position. Width mismatches are rejected at
//! construction time, not deferred to synthesis.

pub mod error;
pub mod operator;
pub mod pauli;
pub mod term;

pub use error::{OpError, OpResult};
pub use operator::PauliOperator;
pub use pauli::Pauli;
pub use term::PauliTerm;
