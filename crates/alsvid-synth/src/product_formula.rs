//! Trotter-Suzuki expansion coefficients.
//!
//! A product formula of a given order is represented as a sequence of
//! `(term_index, fraction)` pairs: one repetition of the formula evolves the
//! terms in that sequence, each for `fraction` of the repetition's time slice.

use crate::error::{SynthError, SynthResult};

/// One repetition of the Trotter-Suzuki formula of the given order over
/// `num_terms` terms.
///
/// Adjacent entries with the same term index are merged, so e.g. the
/// second-order formula over terms `[A, B]` comes out as
/// `A/2 · B · A/2` rather than `A/2 · B/2 · B/2 · A/2`.
pub fn expansion(order: u32, num_terms: usize) -> SynthResult<Vec<(usize, f64)>> {
    validate_order(order)?;
    let mut seq = build(order, num_terms);
    merge_adjacent(&mut seq);
    Ok(seq)
}

/// Reject orders for which no Suzuki formula exists.
pub fn validate_order(order: u32) -> SynthResult<()> {
    if order == 0 || (order > 1 && order % 2 != 0) {
        return Err(SynthError::UnsupportedOrder(order));
    }
    Ok(())
}

fn build(order: u32, num_terms: usize) -> Vec<(usize, f64)> {
    match order {
        1 => (0..num_terms).map(|i| (i, 1.0)).collect(),
        2 => {
            let forward = (0..num_terms).map(|i| (i, 0.5));
            let backward = (0..num_terms).rev().map(|i| (i, 0.5));
            forward.chain(backward).collect()
        }
        _ => {
            // Suzuki recursion:
            // S_{2k}(t) = S_{2k-2}(u_k t)^2 · S_{2k-2}((1-4u_k) t) · S_{2k-2}(u_k t)^2
            // with u_k = 1 / (4 - 4^{1/(2k-1)}).
            let k = order / 2;
            let exponent = 1.0 / (2 * k - 1) as f64;
            let u_k = 1.0 / (4.0 - 4f64.powf(exponent));

            let inner = build(order - 2, num_terms);
            let outer: Vec<(usize, f64)> =
                inner.iter().map(|&(i, f)| (i, f * u_k)).collect();
            let middle: Vec<(usize, f64)> = inner
                .iter()
                .map(|&(i, f)| (i, f * (1.0 - 4.0 * u_k)))
                .collect();

            let mut seq = Vec::with_capacity(inner.len() * 5);
            for part in [&outer, &outer, &middle, &outer, &outer] {
                seq.extend_from_slice(part);
            }
            seq
        }
    }
}

fn merge_adjacent(seq: &mut Vec<(usize, f64)>) {
    let mut merged: Vec<(usize, f64)> = Vec::with_capacity(seq.len());
    for &(index, fraction) in seq.iter() {
        match merged.last_mut() {
            Some((last_index, last_fraction)) if *last_index == index => {
                *last_fraction += fraction;
            }
            _ => merged.push((index, fraction)),
        }
    }
    *seq = merged;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn fraction_sums(seq: &[(usize, f64)]) -> FxHashMap<usize, f64> {
        let mut sums = FxHashMap::default();
        for &(i, f) in seq {
            *sums.entry(i).or_insert(0.0) += f;
        }
        sums
    }

    #[test]
    fn test_first_order() {
        let seq = expansion(1, 3).unwrap();
        assert_eq!(seq, vec![(0, 1.0), (1, 1.0), (2, 1.0)]);
    }

    #[test]
    fn test_second_order_is_symmetric() {
        let seq = expansion(2, 3).unwrap();
        assert_eq!(
            seq,
            vec![(0, 0.5), (1, 0.5), (2, 1.0), (1, 0.5), (0, 0.5)]
        );

        let reversed: Vec<_> = seq.iter().rev().copied().collect();
        assert_eq!(seq, reversed);
    }

    #[test]
    fn test_second_order_single_term_collapses() {
        let seq = expansion(2, 1).unwrap();
        assert_eq!(seq, vec![(0, 1.0)]);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        for order in [1, 2, 4, 6] {
            for num_terms in [1, 2, 5] {
                let seq = expansion(order, num_terms).unwrap();
                let sums = fraction_sums(&seq);
                for i in 0..num_terms {
                    let total = sums.get(&i).copied().unwrap_or(0.0);
                    assert!(
                        (total - 1.0).abs() < 1e-12,
                        "order {order}, term {i}: fractions sum to {total}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_fourth_order_uses_suzuki_coefficient() {
        let u2 = 1.0 / (4.0 - 4f64.powf(1.0 / 3.0));
        let seq = expansion(4, 2).unwrap();

        // First entry is the first term of the first outer S_2(u_2 t) block.
        assert_eq!(seq[0].0, 0);
        assert!((seq[0].1 - u2 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_orders_rejected() {
        assert!(matches!(expansion(0, 2), Err(SynthError::UnsupportedOrder(0))));
        assert!(matches!(expansion(3, 2), Err(SynthError::UnsupportedOrder(3))));
        assert!(matches!(expansion(5, 2), Err(SynthError::UnsupportedOrder(5))));
    }
}
