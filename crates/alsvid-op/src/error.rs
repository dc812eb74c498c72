//! Error types for the operator crate.

use thiserror::Error;

/// Errors that can occur while building Pauli operators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OpError {
    /// Pauli label does not span the register width.
    #[error("Pauli label length {got} does not match register width {expected}")]
    LabelLengthMismatch {
        /// Expected width (qubits in the register).
        expected: usize,
        /// Length of the offending label.
        got: usize,
    },

    /// Character outside the {I, X, Y, Z} alphabet.
    #[error("invalid Pauli axis '{0}' (expected one of I, X, Y, Z)")]
    InvalidAxis(char),

    /// Coefficient is NaN or infinite.
    #[error("non-finite coefficient {0}")]
    NonFiniteCoefficient(String),

    /// Qubit index outside the register.
    #[error("qubit index {qubit} out of range for register width {width}")]
    QubitOutOfRange {
        /// The offending index.
        qubit: usize,
        /// Register width.
        width: usize,
    },

    /// Operator has no terms.
    #[error("operator has no terms")]
    EmptyOperator,

    /// Register width of zero qubits.
    #[error("register width must be at least 1 qubit")]
    ZeroWidth,
}

/// Result type for operator construction.
pub type OpResult<T> = Result<T, OpError>;
