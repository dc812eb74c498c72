//! Alsvid QASM3 Emission
//!
//! Serializes [`alsvid_ir::Circuit`] values as OPENQASM 3.0 source text.
//! Emission is total over the IR: every instruction the synthesis engine can
//! produce has a QASM3 spelling, so the emitter is infallible.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//! use alsvid_qasm3::emit;
//!
//! let mut circuit = Circuit::with_size("demo", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let qasm = emit(&circuit);
//! assert!(qasm.starts_with("OPENQASM 3.0;"));
//! assert!(qasm.contains("cx q[0], q[1];"));
//! ```

pub mod emitter;

pub use emitter::emit;
