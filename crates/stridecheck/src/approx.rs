//! NaN-aware approximate equality for `f64`.
//!
//! Vectorized and scalar kernels may reorder floating-point sums, so exact
//! equality is too strict as a pass/fail predicate. [`same_approx`] is the
//! predicate used by every suite.

/// True if `a == b` or both are NaN.
#[inline]
pub fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// True if `a == b` or `|a - b| <= tol`.
#[inline]
pub fn equal_within_abs(a: f64, b: f64, tol: f64) -> bool {
    a == b || (a - b).abs() <= tol
}

/// True if `a` and `b` agree to relative tolerance `tol`.
///
/// Deltas below the smallest normal `f64` are compared against
/// `tol * f64::MIN_POSITIVE` instead of being divided out.
pub fn equal_within_rel(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    let delta = (a - b).abs();
    if delta <= f64::MIN_POSITIVE {
        return delta <= tol * f64::MIN_POSITIVE;
    }
    delta / a.abs().max(b.abs()) <= tol
}

/// True if either the absolute or the relative check passes.
#[inline]
pub fn equal_within_abs_or_rel(a: f64, b: f64, abs_tol: f64, rel_tol: f64) -> bool {
    equal_within_abs(a, b, abs_tol) || equal_within_rel(a, b, rel_tol)
}

/// NaN-aware equality within tolerance.
#[inline]
pub fn same_approx(a: f64, b: f64, tol: f64) -> bool {
    same(a, b) || equal_within_abs_or_rel(a, b, tol, tol)
}

/// True if the slices have equal length and agree elementwise under
/// [`same_approx`].
pub fn equal_approx(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| same_approx(x, y, tol))
}

/// First index where `got` and `want` disagree, with both values.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn first_mismatch(got: &[f64], want: &[f64], tol: f64) -> Option<(usize, f64, f64)> {
    assert_eq!(got.len(), want.len(), "slice length mismatch: {} vs {}", got.len(), want.len());
    got.iter()
        .zip(want)
        .position(|(&g, &w)| !same_approx(g, w, tol))
        .map(|i| (i, got[i], want[i]))
}

/// Number of representable `f64` values between `a` and `b`.
///
/// NaN on either side, or a sign mismatch between non-zero values, yields
/// `u64::MAX`.
#[must_use]
pub fn ulp_distance(a: f64, b: f64) -> u64 {
    if a.is_nan() || b.is_nan() {
        return u64::MAX;
    }
    if a == b {
        return 0;
    }
    let a_bits = a.to_bits() as i64;
    let b_bits = b.to_bits() as i64;
    if (a_bits < 0) != (b_bits < 0) {
        return u64::MAX;
    }
    a_bits.abs_diff(b_bits)
}

/// Elementwise [`ulp_distance`] bound, for comparing two backends of the
/// same kernel.
///
/// # Panics
/// Panics on a length difference or at the first pair more than `max_ulp`
/// apart.
pub fn assert_ulp_eq(got: &[f64], want: &[f64], max_ulp: u64) {
    assert_eq!(got.len(), want.len(), "got {} values, want {}", got.len(), want.len());
    if let Some((i, (&g, &w))) = got
        .iter()
        .zip(want)
        .enumerate()
        .find(|&(_, (&g, &w))| ulp_distance(g, w) > max_ulp)
    {
        panic!("index {i}: {g} is {} ulps from {w}, limit {max_ulp}", ulp_distance(g, w));
    }
}
