//! Molecular Hamiltonians for the evolution demos.
//!
//! Pre-computed via the Jordan-Wigner transformation from second-quantized
//! fermionic operators to qubit operators.

use alsvid_op::{OpResult, PauliOperator, PauliTerm};

/// H2 molecule Hamiltonian at equilibrium bond distance (0.735 Angstrom).
///
/// 2-qubit Hamiltonian from the Jordan-Wigner transformation of H2 in the
/// minimal STO-3G basis:
///
/// H = g0 I + g1 Z0 + g2 Z1 + g3 Z0Z1 + g4 X0X1 + g5 Y0Y1
pub fn h2() -> OpResult<PauliOperator> {
    PauliOperator::from_terms(vec![
        PauliTerm::identity(2, -1.0523)?,
        PauliTerm::z(2, 0.3979, 0)?,
        PauliTerm::z(2, -0.3979, 1)?,
        PauliTerm::zz(2, -0.0112, 0, 1)?,
        PauliTerm::xx(2, 0.1809, 0, 1)?,
        PauliTerm::yy(2, 0.1809, 0, 1)?,
    ])
}

/// H2 molecule Hamiltonian in the full 4-qubit spin-orbital encoding.
pub fn h2_4q() -> OpResult<PauliOperator> {
    PauliOperator::from_terms(vec![
        PauliTerm::identity(4, -0.8105)?,
        PauliTerm::z(4, 0.1721, 0)?,
        PauliTerm::z(4, 0.1721, 1)?,
        PauliTerm::z(4, -0.2234, 2)?,
        PauliTerm::z(4, -0.2234, 3)?,
        PauliTerm::zz(4, 0.1209, 0, 1)?,
        PauliTerm::zz(4, 0.1686, 0, 2)?,
        PauliTerm::zz(4, 0.1205, 0, 3)?,
        PauliTerm::zz(4, 0.1205, 1, 2)?,
        PauliTerm::zz(4, 0.1686, 1, 3)?,
        PauliTerm::zz(4, 0.1744, 2, 3)?,
        PauliTerm::parse("XXYY", 0.0453)?,
        PauliTerm::parse("YYXX", 0.0453)?,
        PauliTerm::parse("XYYX", -0.0453)?,
        PauliTerm::parse("YXXY", -0.0453)?,
    ])
}

/// LiH molecule Hamiltonian (simplified 4-qubit version).
pub fn lih() -> OpResult<PauliOperator> {
    PauliOperator::from_terms(vec![
        PauliTerm::identity(4, -7.4983)?,
        PauliTerm::z(4, 0.1122, 0)?,
        PauliTerm::z(4, 0.1122, 1)?,
        PauliTerm::z(4, -0.1347, 2)?,
        PauliTerm::z(4, -0.1347, 3)?,
        PauliTerm::zz(4, 0.0892, 0, 1)?,
        PauliTerm::zz(4, 0.1104, 0, 2)?,
        PauliTerm::zz(4, 0.0983, 0, 3)?,
        PauliTerm::zz(4, 0.0983, 1, 2)?,
        PauliTerm::zz(4, 0.1104, 1, 3)?,
        PauliTerm::zz(4, 0.1205, 2, 3)?,
        PauliTerm::xx(4, 0.0312, 0, 1)?,
        PauliTerm::yy(4, 0.0312, 0, 1)?,
        PauliTerm::xx(4, 0.0245, 2, 3)?,
        PauliTerm::yy(4, 0.0245, 2, 3)?,
    ])
}

/// Transverse-field Ising chain on `n` qubits.
pub fn ising_chain(n: usize, coupling: f64, field: f64) -> OpResult<PauliOperator> {
    let mut h = PauliOperator::new(n);
    for q in 0..n.saturating_sub(1) {
        h.push(PauliTerm::zz(n, coupling, q, q + 1)?)?;
    }
    for q in 0..n {
        h.push(PauliTerm::x(n, field, q)?)?;
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h2() {
        let h = h2().unwrap();
        assert_eq!(h.num_qubits(), 2);
        assert_eq!(h.num_terms(), 6);
        assert!((h.identity_coefficient().re - (-1.0523)).abs() < 1e-4);
    }

    #[test]
    fn test_h2_4q() {
        let h = h2_4q().unwrap();
        assert_eq!(h.num_qubits(), 4);
        assert!(h.num_terms() > 10);
    }

    #[test]
    fn test_lih() {
        let h = lih().unwrap();
        assert_eq!(h.num_qubits(), 4);
    }

    #[test]
    fn test_ising_chain() {
        let h = ising_chain(5, -1.0, -0.5).unwrap();
        assert_eq!(h.num_terms(), 9);
        assert!((h.one_norm() - 6.5).abs() < 1e-12);
    }
}
