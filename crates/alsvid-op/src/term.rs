//! Weighted multi-qubit Pauli strings.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{OpError, OpResult};
use crate::pauli::Pauli;

/// A weighted Pauli string: one axis per qubit position and a complex
/// coefficient.
///
/// The axis sequence always spans the full register width; qubit `q` is
/// position `q` in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TermRepr", into = "TermRepr")]
pub struct PauliTerm {
    axes: Vec<Pauli>,
    coeff: Complex64,
}

impl PauliTerm {
    /// Create a term from an explicit axis sequence.
    pub fn new(axes: Vec<Pauli>, coeff: impl Into<Complex64>) -> OpResult<Self> {
        if axes.is_empty() {
            return Err(OpError::ZeroWidth);
        }
        let coeff = coeff.into();
        if !coeff.re.is_finite() || !coeff.im.is_finite() {
            return Err(OpError::NonFiniteCoefficient(coeff.to_string()));
        }
        Ok(Self { axes, coeff })
    }

    /// Parse a term from a label string such as `"IXZ"`.
    ///
    /// Position 0 of the label is qubit 0.
    pub fn parse(label: &str, coeff: impl Into<Complex64>) -> OpResult<Self> {
        let axes = label
            .chars()
            .map(Pauli::from_char)
            .collect::<OpResult<Vec<_>>>()?;
        Self::new(axes, coeff)
    }

    /// Create a term from a sparse list of `(qubit, axis)` pairs; unlisted
    /// positions are identity.
    pub fn from_sparse(
        num_qubits: usize,
        coeff: impl Into<Complex64>,
        entries: &[(usize, Pauli)],
    ) -> OpResult<Self> {
        if num_qubits == 0 {
            return Err(OpError::ZeroWidth);
        }
        let mut axes = vec![Pauli::I; num_qubits];
        for &(qubit, axis) in entries {
            if qubit >= num_qubits {
                return Err(OpError::QubitOutOfRange {
                    qubit,
                    width: num_qubits,
                });
            }
            axes[qubit] = axis;
        }
        Self::new(axes, coeff)
    }

    /// Create a pure-identity term.
    pub fn identity(num_qubits: usize, coeff: impl Into<Complex64>) -> OpResult<Self> {
        Self::from_sparse(num_qubits, coeff, &[])
    }

    /// Create a single-qubit X term.
    pub fn x(num_qubits: usize, coeff: impl Into<Complex64>, qubit: usize) -> OpResult<Self> {
        Self::from_sparse(num_qubits, coeff, &[(qubit, Pauli::X)])
    }

    /// Create a single-qubit Y term.
    pub fn y(num_qubits: usize, coeff: impl Into<Complex64>, qubit: usize) -> OpResult<Self> {
        Self::from_sparse(num_qubits, coeff, &[(qubit, Pauli::Y)])
    }

    /// Create a single-qubit Z term.
    pub fn z(num_qubits: usize, coeff: impl Into<Complex64>, qubit: usize) -> OpResult<Self> {
        Self::from_sparse(num_qubits, coeff, &[(qubit, Pauli::Z)])
    }

    /// Create a two-qubit ZZ coupling term.
    pub fn zz(
        num_qubits: usize,
        coeff: impl Into<Complex64>,
        q1: usize,
        q2: usize,
    ) -> OpResult<Self> {
        Self::from_sparse(num_qubits, coeff, &[(q1, Pauli::Z), (q2, Pauli::Z)])
    }

    /// Create a two-qubit XX coupling term.
    pub fn xx(
        num_qubits: usize,
        coeff: impl Into<Complex64>,
        q1: usize,
        q2: usize,
    ) -> OpResult<Self> {
        Self::from_sparse(num_qubits, coeff, &[(q1, Pauli::X), (q2, Pauli::X)])
    }

    /// Create a two-qubit YY coupling term.
    pub fn yy(
        num_qubits: usize,
        coeff: impl Into<Complex64>,
        q1: usize,
        q2: usize,
    ) -> OpResult<Self> {
        Self::from_sparse(num_qubits, coeff, &[(q1, Pauli::Y), (q2, Pauli::Y)])
    }

    /// Register width this term spans.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.axes.len()
    }

    /// The coefficient.
    #[inline]
    pub fn coeff(&self) -> Complex64 {
        self.coeff
    }

    /// The axis sequence, one entry per qubit position.
    #[inline]
    pub fn axes(&self) -> &[Pauli] {
        &self.axes
    }

    /// Return a copy of this term with a different coefficient.
    #[must_use]
    pub fn with_coeff(&self, coeff: impl Into<Complex64>) -> Self {
        Self {
            axes: self.axes.clone(),
            coeff: coeff.into(),
        }
    }

    /// Qubit positions carrying a non-identity axis, in ascending order.
    pub fn support(&self) -> Vec<usize> {
        self.axes
            .iter()
            .enumerate()
            .filter(|(_, axis)| !axis.is_identity())
            .map(|(q, _)| q)
            .collect()
    }

    /// Number of non-identity positions.
    pub fn weight(&self) -> usize {
        self.axes.iter().filter(|axis| !axis.is_identity()).count()
    }

    /// Check if every position is identity.
    pub fn is_identity(&self) -> bool {
        self.axes.iter().all(|axis| axis.is_identity())
    }

    /// Check whether the supports of two terms share a qubit.
    ///
    /// Both terms must span the same register width.
    pub fn overlaps(&self, other: &PauliTerm) -> bool {
        self.axes
            .iter()
            .zip(other.axes.iter())
            .any(|(a, b)| !a.is_identity() && !b.is_identity())
    }

    /// Check whether two Pauli strings commute as operators.
    ///
    /// Strings commute exactly when the number of positions with
    /// anticommuting axes is even. Both terms must span the same register
    /// width.
    pub fn commutes_with(&self, other: &PauliTerm) -> bool {
        let anticommuting = self
            .axes
            .iter()
            .zip(other.axes.iter())
            .filter(|(a, b)| !a.commutes_with(**b))
            .count();
        anticommuting % 2 == 0
    }

    /// The label string of the axis sequence, e.g. `"IXZ"`.
    pub fn label(&self) -> String {
        self.axes.iter().map(|axis| axis.as_char()).collect()
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff.im == 0.0 {
            write!(f, "{} * {}", self.coeff.re, self.label())
        } else {
            write!(f, "({}) * {}", self.coeff, self.label())
        }
    }
}

/// Wire representation: `{"pauli": "IXZ", "coeff": [re, im]}`.
#[derive(Serialize, Deserialize)]
struct TermRepr {
    pauli: String,
    coeff: Complex64,
}

impl From<PauliTerm> for TermRepr {
    fn from(term: PauliTerm) -> Self {
        Self {
            pauli: term.label(),
            coeff: term.coeff,
        }
    }
}

impl TryFrom<TermRepr> for PauliTerm {
    type Error = OpError;

    fn try_from(repr: TermRepr) -> Result<Self, Self::Error> {
        PauliTerm::parse(&repr.pauli, repr.coeff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_label() {
        let term = PauliTerm::parse("IXZ", 0.5).unwrap();
        assert_eq!(term.num_qubits(), 3);
        assert_eq!(term.label(), "IXZ");
        assert_eq!(term.support(), vec![1, 2]);
        assert_eq!(term.weight(), 2);
    }

    #[test]
    fn test_sparse_constructors() {
        let zz = PauliTerm::zz(4, -1.0, 1, 2).unwrap();
        assert_eq!(zz.label(), "IZZI");

        let x = PauliTerm::x(2, 0.25, 0).unwrap();
        assert_eq!(x.label(), "XI");

        let id = PauliTerm::identity(3, 2.0).unwrap();
        assert!(id.is_identity());
        assert_eq!(id.weight(), 0);
    }

    #[test]
    fn test_out_of_range_qubit() {
        let err = PauliTerm::z(2, 1.0, 5).unwrap_err();
        assert!(matches!(err, OpError::QubitOutOfRange { qubit: 5, width: 2 }));
    }

    #[test]
    fn test_non_finite_coefficient() {
        assert!(PauliTerm::parse("XX", f64::NAN).is_err());
        assert!(PauliTerm::parse("XX", f64::INFINITY).is_err());
    }

    #[test]
    fn test_commutation_parity() {
        let xx = PauliTerm::parse("XX", 1.0).unwrap();
        let zz = PauliTerm::parse("ZZ", 1.0).unwrap();
        let zi = PauliTerm::parse("ZI", 1.0).unwrap();

        // Two anticommuting positions: even parity, the strings commute.
        assert!(xx.commutes_with(&zz));
        // One anticommuting position: the strings anticommute.
        assert!(!xx.commutes_with(&zi));
    }

    #[test]
    fn test_overlap() {
        let a = PauliTerm::parse("XIZ", 1.0).unwrap();
        let b = PauliTerm::parse("IYI", 1.0).unwrap();
        let c = PauliTerm::parse("IIX", 1.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }
}
