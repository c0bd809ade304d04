//! DLASR: apply a sequence of plane rotations to a row-major matrix.
//!
//! For `Side::Left`, `A <- P * A` with `P` of order `m`.
//! For `Side::Right`, `A <- A * P^T` with `P` of order `n`.
//!
//! Each elementary rotation `P(k)` is the identity except in the plane
//! `(p, q)` chosen by the [`Pivot`]:
//!
//! ```text
//! P(k)[p][p] =  c[k]    P(k)[p][q] = s[k]
//! P(k)[q][p] = -s[k]    P(k)[q][q] = c[k]
//! ```
//!
//! Plane choice follows the LAPACK reference: a `Bottom` rotation `k` acts in
//! `(k, z-1)`, not `(z-1-k, z-1)`.

use super::{Direct, Pivot};
use crate::Side;

/// Plane `(p, q)` touched by rotation `k` in a matrix of order `z`.
#[inline]
pub fn rotation_plane(pivot: Pivot, k: usize, z: usize) -> (usize, usize) {
    match pivot {
        Pivot::Variable => (k, k + 1),
        Pivot::Top => (0, k + 1),
        Pivot::Bottom => (k, z - 1),
    }
}

/// Applies the `z-1` rotations described by `c` and `s` to the `m x n`
/// matrix stored in `a` with row stride `lda`.
///
/// Rotations with `c == 1` and `s == 0` are skipped. Columns `n..lda` of
/// each row are never touched.
///
/// # Panics
/// Panics if `lda < max(1, n)`, `a` is too short, or `c`/`s` hold fewer
/// than `z-1` entries.
pub fn dlasr(
    side: Side,
    pivot: Pivot,
    direct: Direct,
    m: usize,
    n: usize,
    c: &[f64],
    s: &[f64],
    a: &mut [f64],
    lda: usize,
) {
    assert!(lda >= n.max(1), "lda {lda} smaller than n {n}");
    if m == 0 || n == 0 {
        return;
    }
    assert!(a.len() >= (m - 1) * lda + n, "a too short: {} for {m}x{n} lda {lda}", a.len());

    let z = match side {
        Side::Left => m,
        Side::Right => n,
    };
    let rotations = z - 1;
    assert!(c.len() >= rotations, "c holds {} of {rotations} cosines", c.len());
    assert!(s.len() >= rotations, "s holds {} of {rotations} sines", s.len());

    let mut apply = |k: usize| {
        let (ck, sk) = (c[k], s[k]);
        if ck == 1.0 && sk == 0.0 {
            return;
        }
        let (p, q) = rotation_plane(pivot, k, z);
        match side {
            Side::Left => {
                for j in 0..n {
                    let ap = a[p * lda + j];
                    let aq = a[q * lda + j];
                    a[p * lda + j] = ck * ap + sk * aq;
                    a[q * lda + j] = ck * aq - sk * ap;
                }
            }
            Side::Right => {
                for i in 0..m {
                    let ap = a[i * lda + p];
                    let aq = a[i * lda + q];
                    a[i * lda + p] = ck * ap + sk * aq;
                    a[i * lda + q] = ck * aq - sk * ap;
                }
            }
        }
    };

    match direct {
        Direct::Forward => (0..rotations).for_each(&mut apply),
        Direct::Backward => (0..rotations).rev().for_each(&mut apply),
    }
}
