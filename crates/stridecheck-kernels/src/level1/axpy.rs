//! AXPY: `y <- alpha*x + y`.
//!
//! - `axpy_unitary` / `axpy_unitary_to`: contiguous vectors
//! - `axpy_inc` / `axpy_inc_to`: strided vectors, signed increments
//! - `axpy_unitary_avx2` / `axpy_unitary_to_avx2`: 4-wide FMA with scalar tail

use super::strided_index;

// ────────────────────────────────────────────────────────────────────────────
// Scalar implementation
// ────────────────────────────────────────────────────────────────────────────

/// `y[i] += alpha * x[i]` for `i < x.len()`.
///
/// # Panics
/// Panics if `y.len() < x.len()`.
pub fn axpy_unitary(alpha: f64, x: &[f64], y: &mut [f64]) {
    assert!(y.len() >= x.len(), "y shorter than x: {} < {}", y.len(), x.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
}

/// `dst[i] = alpha * x[i] + y[i]` for `i < x.len()`.
///
/// # Panics
/// Panics if `dst` or `y` is shorter than `x`.
pub fn axpy_unitary_to(dst: &mut [f64], alpha: f64, x: &[f64], y: &[f64]) {
    assert!(dst.len() >= x.len(), "dst shorter than x: {} < {}", dst.len(), x.len());
    assert!(y.len() >= x.len(), "y shorter than x: {} < {}", y.len(), x.len());
    for i in 0..x.len() {
        dst[i] = alpha * x[i] + y[i];
    }
}

/// Strided AXPY over `n` elements starting at `ix`/`iy`.
///
/// # Panics
/// Panics if any visited index falls outside `x` or `y`.
pub fn axpy_inc(
    alpha: f64,
    x: &[f64],
    y: &mut [f64],
    n: usize,
    incx: isize,
    incy: isize,
    ix: usize,
    iy: usize,
) {
    for k in 0..n {
        y[strided_index(iy, k, incy)] += alpha * x[strided_index(ix, k, incx)];
    }
}

/// Strided AXPY writing `alpha*x + y` into `dst`.
///
/// # Panics
/// Panics if any visited index falls outside `dst`, `x` or `y`.
pub fn axpy_inc_to(
    dst: &mut [f64],
    incdst: isize,
    idst: usize,
    alpha: f64,
    x: &[f64],
    y: &[f64],
    n: usize,
    incx: isize,
    incy: isize,
    ix: usize,
    iy: usize,
) {
    for k in 0..n {
        dst[strided_index(idst, k, incdst)] =
            alpha * x[strided_index(ix, k, incx)] + y[strided_index(iy, k, incy)];
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AVX2 implementation
// ────────────────────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// AVX2 unitary AXPY: broadcast alpha, fused multiply-add 4 lanes at a time.
///
/// # Safety
/// Requires AVX2 and FMA support. Caller must verify with
/// `is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")`.
///
/// # Panics
/// Panics if `y.len() < x.len()`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
pub unsafe fn axpy_unitary_avx2(alpha: f64, x: &[f64], y: &mut [f64]) {
    assert!(y.len() >= x.len(), "y shorter than x: {} < {}", y.len(), x.len());
    let n = x.len();
    let n_simd = n - (n % 4);

    // SAFETY: every load/store covers [i, i+4) with i + 4 <= n_simd <= n.
    unsafe {
        let a = _mm256_set1_pd(alpha);
        let mut i = 0;
        while i < n_simd {
            let xv = _mm256_loadu_pd(x.as_ptr().add(i));
            let yv = _mm256_loadu_pd(y.as_ptr().add(i));
            _mm256_storeu_pd(y.as_mut_ptr().add(i), _mm256_fmadd_pd(a, xv, yv));
            i += 4;
        }
    }
    for i in n_simd..n {
        y[i] += alpha * x[i];
    }
}

/// AVX2 unitary AXPY into a separate destination.
///
/// # Safety
/// Requires AVX2 and FMA support. Caller must verify with
/// `is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")`.
///
/// # Panics
/// Panics if `dst` or `y` is shorter than `x`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
pub unsafe fn axpy_unitary_to_avx2(dst: &mut [f64], alpha: f64, x: &[f64], y: &[f64]) {
    assert!(dst.len() >= x.len(), "dst shorter than x: {} < {}", dst.len(), x.len());
    assert!(y.len() >= x.len(), "y shorter than x: {} < {}", y.len(), x.len());
    let n = x.len();
    let n_simd = n - (n % 4);

    // SAFETY: every load/store covers [i, i+4) with i + 4 <= n_simd <= n.
    unsafe {
        let a = _mm256_set1_pd(alpha);
        let mut i = 0;
        while i < n_simd {
            let xv = _mm256_loadu_pd(x.as_ptr().add(i));
            let yv = _mm256_loadu_pd(y.as_ptr().add(i));
            _mm256_storeu_pd(dst.as_mut_ptr().add(i), _mm256_fmadd_pd(a, xv, yv));
            i += 4;
        }
    }
    for i in n_simd..n {
        dst[i] = alpha * x[i] + y[i];
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
