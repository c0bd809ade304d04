//! DOT: `sum_i x[i] * y[i]`.

use super::strided_index;

/// Sequential dot product over `x.len()` elements.
///
/// # Panics
/// Panics if `y.len() < x.len()`.
pub fn dot_unitary(x: &[f64], y: &[f64]) -> f64 {
    assert!(y.len() >= x.len(), "y shorter than x: {} < {}", y.len(), x.len());
    let mut sum = 0.0;
    for (a, b) in x.iter().zip(y) {
        sum += a * b;
    }
    sum
}

/// Strided dot product over `n` elements starting at `ix`/`iy`.
///
/// # Panics
/// Panics if any visited index falls outside `x` or `y`.
pub fn dot_inc(
    x: &[f64],
    y: &[f64],
    n: usize,
    incx: isize,
    incy: isize,
    ix: usize,
    iy: usize,
) -> f64 {
    let mut sum = 0.0;
    for k in 0..n {
        sum += x[strided_index(ix, k, incx)] * y[strided_index(iy, k, incy)];
    }
    sum
}

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// AVX2 dot product: four independent FMA accumulators folded at the end.
///
/// Summation order differs from [`dot_unitary`], so results agree within
/// rounding, not bit-for-bit.
///
/// # Safety
/// Requires AVX2 and FMA support. Caller must verify with
/// `is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")`.
///
/// # Panics
/// Panics if `y.len() < x.len()`.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
pub unsafe fn dot_unitary_avx2(x: &[f64], y: &[f64]) -> f64 {
    assert!(y.len() >= x.len(), "y shorter than x: {} < {}", y.len(), x.len());
    let n = x.len();
    let n_simd = n - (n % 4);

    let mut lanes = [0.0_f64; 4];
    // SAFETY: every load covers [i, i+4) with i + 4 <= n_simd <= n.
    unsafe {
        let mut acc = _mm256_setzero_pd();
        let mut i = 0;
        while i < n_simd {
            let xv = _mm256_loadu_pd(x.as_ptr().add(i));
            let yv = _mm256_loadu_pd(y.as_ptr().add(i));
            acc = _mm256_fmadd_pd(xv, yv, acc);
            i += 4;
        }
        _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    }
    let mut sum = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);
    for i in n_simd..n {
        sum += x[i] * y[i];
    }
    sum
}
