//! Alsvid Circuit Intermediate Representation
//!
//! This crate provides the data structures for representing the quantum
//! circuits produced by the Alsvid synthesis stack.
//!
//! # Overview
//!
//! Circuits are linear instruction sequences with incremental depth
//! accounting: every applied instruction updates a per-wire level front, so
//! [`Circuit::depth`] is O(1) at all times. Depth is the resource the
//! synthesis engine constrains, which is why the IR tracks it natively
//! instead of recovering it after the fact.
//!
//! # Core Components
//!
//! - **Qubits and classical bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for the gate alphabet product-formula
//!   synthesis emits
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API with depth tracking and
//!   a global-phase accumulator
//!
//! # Example: Evolving a ZZ Coupling
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//!
//! // exp(-i θ/2 · ZZ) on two qubits, by hand.
//! let mut circuit = Circuit::with_size("zz_evolution", 2, 0);
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.rz(0.25, QubitId(1)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Depth Semantics
//!
//! Gates and measurements occupy one level on every wire they touch.
//! Barriers synchronize the level fronts of their wires without adding a
//! level: they are scheduling hints, not executed operations.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::{Circuit, WireId};
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
