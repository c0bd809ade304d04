//! SCAL: `x <- alpha*x`.

// ────────────────────────────────────────────────────────────────────────────
// Scalar implementation
// ────────────────────────────────────────────────────────────────────────────

/// `x[i] *= alpha` for every element.
pub fn scal_unitary(alpha: f64, x: &mut [f64]) {
    for v in x.iter_mut() {
        *v *= alpha;
    }
}

/// `dst[i] = alpha * x[i]` for `i < x.len()`.
///
/// # Panics
/// Panics if `dst.len() < x.len()`.
pub fn scal_unitary_to(dst: &mut [f64], alpha: f64, x: &[f64]) {
    assert!(dst.len() >= x.len(), "dst shorter than x: {} < {}", dst.len(), x.len());
    for (d, &v) in dst.iter_mut().zip(x) {
        *d = alpha * v;
    }
}

/// Scales `n` elements of `x` spaced `incx` apart, starting at index 0.
///
/// The traversal direction does not affect the result, so the increment is
/// unsigned.
///
/// # Panics
/// Panics if `(n-1)*incx` falls outside `x`.
pub fn scal_inc(alpha: f64, x: &mut [f64], n: usize, incx: usize) {
    for k in 0..n {
        x[k * incx] *= alpha;
    }
}

/// Writes `alpha * x` into `dst`, both strided from index 0.
///
/// # Panics
/// Panics if a visited index falls outside `dst` or `x`.
pub fn scal_inc_to(dst: &mut [f64], incdst: usize, alpha: f64, x: &[f64], n: usize, incx: usize) {
    for k in 0..n {
        dst[k * incdst] = alpha * x[k * incx];
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AVX2 implementation
// ────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// AVX2 unitary SCAL, 4 lanes per step with a scalar tail.
///
/// # Safety
/// Requires AVX2 support. Caller must verify with `is_x86_feature_detected!("avx2")`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub unsafe fn scal_unitary_avx2(alpha: f64, x: &mut [f64]) {
    let n = x.len();
    let n_simd = n - (n % 4);

    // SAFETY: every load/store covers [i, i+4) with i + 4 <= n_simd <= n.
    unsafe {
        let a = _mm256_set1_pd(alpha);
        let mut i = 0;
        while i < n_simd {
            let p = x.as_mut_ptr().add(i);
            _mm256_storeu_pd(p, _mm256_mul_pd(a, _mm256_loadu_pd(p)));
            i += 4;
        }
    }
    for v in &mut x[n_simd..] {
        *v *= alpha;
    }
}
