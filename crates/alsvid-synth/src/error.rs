//! Error types for the synthesis crate.

use thiserror::Error;

/// Errors that can occur during circuit synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Product-formula order outside {1, 2, 4, ...}.
    #[error(
        "Suzuki product formulae are symmetric and therefore only defined \
         for order 1 or even orders, not {0}"
    )]
    UnsupportedOrder(u32),

    /// Zero repetitions requested.
    #[error("repetition count must be at least 1")]
    ZeroReps,

    /// Operator with no terms.
    #[error("cannot synthesize the evolution of an operator with no terms")]
    EmptyOperator,

    /// Coefficient with a non-negligible imaginary part.
    #[error(
        "term {term_index} has imaginary coefficient part {imag:e}; \
         exp(-iHt) requires a Hermitian operator with real weights"
    )]
    NonRealCoefficient {
        /// Index of the offending term.
        term_index: usize,
        /// Its imaginary part.
        imag: f64,
    },

    /// No product formula fits the requested depth budget.
    #[error(
        "depth budget {budget} cannot fit a single repetition of any \
         candidate formula (minimum achievable depth: {required})"
    )]
    DepthBudgetExceeded {
        /// Depth of the cheapest single repetition.
        required: usize,
        /// The requested budget.
        budget: usize,
    },

    /// Evolution time is NaN or infinite.
    #[error("evolution time must be finite, got {0}")]
    NonFiniteTime(f64),

    /// No candidate orders supplied to the search.
    #[error("depth-constrained search needs at least one candidate order")]
    NoCandidateOrders,

    /// Underlying IR error while building the circuit.
    #[error(transparent)]
    Ir(#[from] alsvid_ir::IrError),
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
