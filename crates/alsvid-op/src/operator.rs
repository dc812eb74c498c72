//! Weighted sums of Pauli strings.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OpError, OpResult};
use crate::term::PauliTerm;

/// Coefficients at or below this magnitude are dropped by [`PauliOperator::simplify`].
const COEFF_TOLERANCE: f64 = 1e-12;

/// A Hermitian operator expressed as a weighted sum of Pauli strings.
///
/// Term order is irrelevant to the operator's semantics (the sum commutes)
/// but is preserved, because product-formula synthesis evaluates terms in
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OperatorRepr", into = "OperatorRepr")]
pub struct PauliOperator {
    num_qubits: usize,
    terms: Vec<PauliTerm>,
}

impl PauliOperator {
    /// Create an empty operator over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            terms: vec![],
        }
    }

    /// Build an operator from a list of terms.
    ///
    /// The register width is taken from the first term; all terms must span
    /// the same width.
    pub fn from_terms(terms: Vec<PauliTerm>) -> OpResult<Self> {
        let Some(first) = terms.first() else {
            return Err(OpError::EmptyOperator);
        };
        let mut op = Self::new(first.num_qubits());
        for term in terms {
            op.push(term)?;
        }
        Ok(op)
    }

    /// Build an operator from `(label, coefficient)` pairs.
    pub fn from_labels(
        num_qubits: usize,
        entries: &[(&str, f64)],
    ) -> OpResult<Self> {
        let mut op = Self::new(num_qubits);
        for &(label, coeff) in entries {
            op.push(PauliTerm::parse(label, coeff)?)?;
        }
        Ok(op)
    }

    /// Append a term, validating its width against the register.
    pub fn push(&mut self, term: PauliTerm) -> OpResult<()> {
        if term.num_qubits() != self.num_qubits {
            return Err(OpError::LabelLengthMismatch {
                expected: self.num_qubits,
                got: term.num_qubits(),
            });
        }
        self.terms.push(term);
        Ok(())
    }

    /// Register width.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of terms in the sum.
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Check if the operator has no terms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms of the sum, in insertion order.
    #[inline]
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Iterate over the terms.
    pub fn iter(&self) -> impl Iterator<Item = &PauliTerm> {
        self.terms.iter()
    }

    /// Merge duplicate Pauli strings and drop negligible coefficients.
    ///
    /// First-occurrence order of the surviving strings is preserved. The
    /// result may be empty (e.g. after exact cancellation).
    #[must_use]
    pub fn simplify(&self) -> Self {
        let mut merged: FxHashMap<String, Complex64> = FxHashMap::default();
        let mut order: Vec<(String, PauliTerm)> = vec![];

        for term in &self.terms {
            let label = term.label();
            match merged.get_mut(&label) {
                Some(coeff) => *coeff += term.coeff(),
                None => {
                    merged.insert(label.clone(), term.coeff());
                    order.push((label, term.clone()));
                }
            }
        }

        let terms = order
            .into_iter()
            .filter_map(|(label, template)| {
                let coeff = merged[&label];
                (coeff.norm() > COEFF_TOLERANCE).then(|| template.with_coeff(coeff))
            })
            .collect();

        Self {
            num_qubits: self.num_qubits,
            terms,
        }
    }

    /// The operator one-norm λ = Σ|c_j| over non-identity terms.
    ///
    /// This upper-bounds the spectral norm of the traceless part and drives
    /// the Trotter error bounds.
    pub fn one_norm(&self) -> f64 {
        self.terms
            .iter()
            .filter(|term| !term.is_identity())
            .map(|term| term.coeff().norm())
            .sum()
    }

    /// Summed coefficient of the pure-identity terms.
    pub fn identity_coefficient(&self) -> Complex64 {
        self.terms
            .iter()
            .filter(|term| term.is_identity())
            .map(PauliTerm::coeff)
            .sum()
    }

    /// Check if the operator contains only identity strings.
    pub fn is_identity_only(&self) -> bool {
        self.terms.iter().all(PauliTerm::is_identity)
    }

    /// Largest coefficient imaginary part, in absolute value.
    pub fn max_imag(&self) -> f64 {
        self.terms
            .iter()
            .map(|term| term.coeff().im.abs())
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for PauliOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0 (on {} qubits)", self.num_qubits);
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PauliOperator {
    type Item = &'a PauliTerm;
    type IntoIter = std::slice::Iter<'a, PauliTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Wire representation: `{"num_qubits": n, "terms": [...]}`.
#[derive(Serialize, Deserialize)]
struct OperatorRepr {
    num_qubits: usize,
    terms: Vec<PauliTerm>,
}

impl From<PauliOperator> for OperatorRepr {
    fn from(op: PauliOperator) -> Self {
        Self {
            num_qubits: op.num_qubits,
            terms: op.terms,
        }
    }
}

impl TryFrom<OperatorRepr> for PauliOperator {
    type Error = OpError;

    fn try_from(repr: OperatorRepr) -> Result<Self, Self::Error> {
        if repr.num_qubits == 0 {
            return Err(OpError::ZeroWidth);
        }
        let mut op = PauliOperator::new(repr.num_qubits);
        for term in repr.terms {
            op.push(term)?;
        }
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ising_3q() -> PauliOperator {
        PauliOperator::from_labels(
            3,
            &[("ZZI", -1.0), ("IZZ", -1.0), ("XII", -0.5), ("IXI", -0.5), ("IIX", -0.5)],
        )
        .unwrap()
    }

    #[test]
    fn test_from_labels() {
        let h = ising_3q();
        assert_eq!(h.num_qubits(), 3);
        assert_eq!(h.num_terms(), 5);
        assert!((h.one_norm() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let mut h = PauliOperator::new(2);
        let err = h.push(PauliTerm::parse("XXX", 1.0).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            OpError::LabelLengthMismatch { expected: 2, got: 3 }
        ));
    }

    #[test]
    fn test_simplify_merges_duplicates() {
        let h = PauliOperator::from_labels(2, &[("ZZ", 0.5), ("XI", 1.0), ("ZZ", 0.25)]).unwrap();
        let s = h.simplify();
        assert_eq!(s.num_terms(), 2);
        assert_eq!(s.terms()[0].label(), "ZZ");
        assert!((s.terms()[0].coeff().re - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_simplify_cancellation() {
        let h = PauliOperator::from_labels(1, &[("Z", 1.0), ("Z", -1.0)]).unwrap();
        let s = h.simplify();
        assert!(s.is_empty());
        assert_eq!(s.num_qubits(), 1);
    }

    #[test]
    fn test_identity_bookkeeping() {
        let h = PauliOperator::from_labels(2, &[("II", -1.05), ("ZI", 0.4)]).unwrap();
        assert!((h.identity_coefficient().re + 1.05).abs() < 1e-12);
        assert!((h.one_norm() - 0.4).abs() < 1e-12);
        assert!(!h.is_identity_only());
    }

    #[test]
    fn test_empty_from_terms_rejected() {
        assert!(matches!(
            PauliOperator::from_terms(vec![]),
            Err(OpError::EmptyOperator)
        ));
    }
}
