//! Synthesis configuration.

use serde::{Deserialize, Serialize};

/// How multi-qubit Pauli terms propagate parity onto the rotation qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CxStructure {
    /// Linear CX cascade along the support.
    #[default]
    Chain,
    /// Every support qubit controls directly onto the rotation qubit.
    Fountain,
}

/// Options shared by all synthesis entry points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Insert a full-width barrier between formula repetitions.
    pub insert_barriers: bool,
    /// Keep the operator's term order instead of regrouping for parallelism.
    pub preserve_order: bool,
    /// CX propagation structure for multi-qubit terms.
    pub cx_structure: CxStructure,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            insert_barriers: false,
            preserve_order: true,
            cx_structure: CxStructure::Chain,
        }
    }
}

/// Options for the depth-constrained search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintOptions {
    /// Options forwarded to each trial synthesis.
    pub synthesis: SynthesisOptions,
    /// Product-formula orders the search may choose from.
    pub candidate_orders: Vec<u32>,
}

impl Default for ConstraintOptions {
    fn default() -> Self {
        Self {
            synthesis: SynthesisOptions::default(),
            candidate_orders: vec![1, 2, 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SynthesisOptions::default();
        assert!(!opts.insert_barriers);
        assert!(opts.preserve_order);
        assert_eq!(opts.cx_structure, CxStructure::Chain);

        let search = ConstraintOptions::default();
        assert_eq!(search.candidate_orders, vec![1, 2, 4]);
    }
}
