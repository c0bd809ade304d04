//! Explicit plane-rotation matrices.

use stridecheck_kernels::gemm::{gemm, General};
use stridecheck_kernels::lapack::dlasr::rotation_plane;
use stridecheck_kernels::lapack::{Direct, Pivot};
use stridecheck_kernels::{Side, Transpose};

/// The `size x size` elementary rotation `P(k)`.
///
/// Identity except in the plane `(p, q)` chosen by `pivot`, where
/// `[p][p] = c`, `[p][q] = s`, `[q][p] = -s`, `[q][q] = c`.
///
/// # Panics
/// Panics if the plane falls outside the matrix.
pub fn rotation_matrix(pivot: Pivot, k: usize, c: f64, s: f64, size: usize) -> General {
    let (p, q) = rotation_plane(pivot, k, size);
    assert!(p < size && q < size, "rotation {k} outside order {size}");
    let mut m = General::identity(size);
    m.set(p, p, c);
    m.set(p, q, s);
    m.set(q, p, -s);
    m.set(q, q, c);
    m
}

/// Composes the rotations in `c` and `s` into one matrix.
///
/// `Forward` accumulates `P <- P(k) * P`, giving `P(z-2) * ... * P(0)`.
/// `Backward` accumulates `P <- P * P(k)`, giving `P(0) * ... * P(z-2)`.
/// No rotations leaves the identity.
///
/// # Panics
/// Panics if `c` and `s` differ in length.
pub fn cumulative_rotation(pivot: Pivot, direct: Direct, c: &[f64], s: &[f64], size: usize) -> General {
    assert_eq!(c.len(), s.len(), "c and s differ in length");
    let mut p = General::identity(size);
    for (k, (&ck, &sk)) in c.iter().zip(s).enumerate() {
        let pk = rotation_matrix(pivot, k, ck, sk, size);
        let mut next = General::zeros(size, size);
        match direct {
            Direct::Forward => gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &pk, &p, 0.0, &mut next),
            Direct::Backward => gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &p, &pk, 0.0, &mut next),
        }
        p = next;
    }
    p
}

/// `P * A` for `Side::Left`, `A * P^T` for `Side::Right`.
///
/// The result has a tight stride.
pub fn apply_reference(side: Side, p: &General, a: &General) -> General {
    let mut out = General::zeros(a.rows, a.cols);
    match side {
        Side::Left => gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, p, a, 0.0, &mut out),
        Side::Right => gemm(Transpose::NoTrans, Transpose::Trans, 1.0, a, p, 0.0, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::equal_approx;
    use crate::rng::TrialRng;
    use proptest::prelude::*;

    const PIVOTS: [Pivot; 3] = [Pivot::Variable, Pivot::Top, Pivot::Bottom];

    #[test]
    fn variable_rotation_entries() {
        let m = rotation_matrix(Pivot::Variable, 1, 0.6, 0.8, 4);
        assert_eq!(m.at(1, 1), 0.6);
        assert_eq!(m.at(1, 2), 0.8);
        assert_eq!(m.at(2, 1), -0.8);
        assert_eq!(m.at(2, 2), 0.6);
        assert_eq!(m.at(0, 0), 1.0);
        assert_eq!(m.at(3, 3), 1.0);
        assert_eq!(m.at(0, 1), 0.0);
    }

    #[test]
    fn top_and_bottom_planes() {
        let top = rotation_matrix(Pivot::Top, 2, 0.0, 1.0, 4);
        assert_eq!(top.at(0, 3), 1.0);
        assert_eq!(top.at(3, 0), -1.0);
        let bottom = rotation_matrix(Pivot::Bottom, 0, 0.0, 1.0, 4);
        assert_eq!(bottom.at(0, 3), 1.0);
        assert_eq!(bottom.at(3, 0), -1.0);
        assert_eq!(bottom.at(1, 1), 1.0);
    }

    #[test]
    fn no_rotations_is_identity() {
        for pivot in PIVOTS {
            for direct in [Direct::Forward, Direct::Backward] {
                assert_eq!(cumulative_rotation(pivot, direct, &[], &[], 5), General::identity(5));
            }
        }
    }

    #[test]
    fn identity_rotations_compose_to_identity() {
        let p = cumulative_rotation(Pivot::Top, Direct::Forward, &[1.0; 3], &[0.0; 3], 4);
        assert_eq!(p, General::identity(4));
    }

    #[test]
    fn right_side_uses_transpose() {
        // c = 0, s = 1 in plane (0, 1): A * P^T swaps columns with a sign.
        let p = rotation_matrix(Pivot::Variable, 0, 0.0, 1.0, 2);
        let a = General::from_parts(2, 2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(apply_reference(Side::Right, &p, &a).data, vec![2.0, -1.0, 4.0, -3.0]);
        assert_eq!(apply_reference(Side::Left, &p, &a).data, vec![3.0, 4.0, -1.0, -2.0]);
    }

    #[test]
    fn padded_input_yields_tight_output() {
        let p = General::identity(2);
        let a = General::from_parts(2, 2, 3, vec![1.0, 2.0, f64::NAN, 3.0, 4.0, f64::NAN]);
        let out = apply_reference(Side::Left, &p, &a);
        assert_eq!(out.stride, 2);
        assert_eq!(out.data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    proptest! {
        #[test]
        fn prop_forward_then_backward_negated_is_identity(size in 2usize..8, seed in 0u64..500) {
            let mut rng = TrialRng::new(seed);
            let (c, s) = rng.rotations(size - 1);
            let neg: Vec<f64> = s.iter().map(|v| -v).collect();
            for pivot in PIVOTS {
                let fwd = cumulative_rotation(pivot, Direct::Forward, &c, &s, size);
                let inv = cumulative_rotation(pivot, Direct::Backward, &c, &neg, size);
                let mut prod = General::zeros(size, size);
                gemm(Transpose::NoTrans, Transpose::NoTrans, 1.0, &inv, &fwd, 0.0, &mut prod);
                prop_assert!(equal_approx(&prod.data, &General::identity(size).data, 1e-12));
            }
        }

        #[test]
        fn prop_cumulative_rotation_is_orthogonal(size in 2usize..8, seed in 0u64..500) {
            let mut rng = TrialRng::new(seed);
            let (c, s) = rng.rotations(size - 1);
            for pivot in PIVOTS {
                let p = cumulative_rotation(pivot, Direct::Backward, &c, &s, size);
                let mut ppt = General::zeros(size, size);
                gemm(Transpose::NoTrans, Transpose::Trans, 1.0, &p, &p, 0.0, &mut ppt);
                prop_assert!(equal_approx(&ppt.data, &General::identity(size).data, 1e-12));
            }
        }
    }
}
