//! Level-1 `f64` routines over unitary and strided vectors.
//!
//! Strided signatures take the logical length `n`, signed increments and the
//! start index of the first visited element. Element `k` of a strided
//! argument lives at `start + k*inc`.

pub mod axpy;
pub mod dot;
pub mod scal;

pub use axpy::{axpy_inc, axpy_inc_to, axpy_unitary, axpy_unitary_to};
pub use dot::{dot_inc, dot_unitary};
pub use scal::{scal_inc, scal_inc_to, scal_unitary, scal_unitary_to};

use crate::Backend;

/// Physical index of logical element `k` for a vector starting at `start`
/// with increment `inc`.
#[inline]
pub(crate) fn strided_index(start: usize, k: usize, inc: isize) -> usize {
    let idx = start as isize + k as isize * inc;
    debug_assert!(idx >= 0, "strided index underflow: start={start} k={k} inc={inc}");
    idx as usize
}

/// Start index for a vector of `n` elements visited with increment `inc`.
///
/// Zero for positive increments, `(n-1)*|inc|` for negative ones.
#[inline]
pub fn start_index(n: usize, inc: isize) -> usize {
    if inc < 0 && n > 0 {
        (n - 1) * inc.unsigned_abs()
    } else {
        0
    }
}

#[inline]
fn require(backend: Backend) {
    assert!(backend.is_supported(), "avx2 backend requested but the CPU lacks avx2/fma");
}

/// `y[i] += alpha * x[i]` on the requested backend.
///
/// # Panics
/// Panics if the backend is unavailable or `y` is shorter than `x`.
pub fn axpy_unitary_with(backend: Backend, alpha: f64, x: &[f64], y: &mut [f64]) {
    require(backend);
    match backend {
        Backend::Scalar => axpy_unitary(alpha, x, y),
        #[cfg(target_arch = "x86_64")]
        // SAFETY: `require` verified avx2 and fma.
        Backend::Avx2 => unsafe { axpy::axpy_unitary_avx2(alpha, x, y) },
        #[cfg(not(target_arch = "x86_64"))]
        Backend::Avx2 => unreachable!("avx2 is never available off x86_64"),
    }
}

/// `dst[i] = alpha * x[i] + y[i]` on the requested backend.
///
/// # Panics
/// Panics if the backend is unavailable or `dst`/`y` are shorter than `x`.
pub fn axpy_unitary_to_with(backend: Backend, dst: &mut [f64], alpha: f64, x: &[f64], y: &[f64]) {
    require(backend);
    match backend {
        Backend::Scalar => axpy_unitary_to(dst, alpha, x, y),
        #[cfg(target_arch = "x86_64")]
        // SAFETY: `require` verified avx2 and fma.
        Backend::Avx2 => unsafe { axpy::axpy_unitary_to_avx2(dst, alpha, x, y) },
        #[cfg(not(target_arch = "x86_64"))]
        Backend::Avx2 => unreachable!("avx2 is never available off x86_64"),
    }
}

/// `x[i] *= alpha` on the requested backend.
///
/// # Panics
/// Panics if the backend is unavailable.
pub fn scal_unitary_with(backend: Backend, alpha: f64, x: &mut [f64]) {
    require(backend);
    match backend {
        Backend::Scalar => scal_unitary(alpha, x),
        #[cfg(target_arch = "x86_64")]
        // SAFETY: `require` verified avx2 and fma.
        Backend::Avx2 => unsafe { scal::scal_unitary_avx2(alpha, x) },
        #[cfg(not(target_arch = "x86_64"))]
        Backend::Avx2 => unreachable!("avx2 is never available off x86_64"),
    }
}

/// `sum(x[i] * y[i])` on the requested backend.
///
/// # Panics
/// Panics if the backend is unavailable or `y` is shorter than `x`.
pub fn dot_unitary_with(backend: Backend, x: &[f64], y: &[f64]) -> f64 {
    require(backend);
    match backend {
        Backend::Scalar => dot_unitary(x, y),
        #[cfg(target_arch = "x86_64")]
        // SAFETY: `require` verified avx2 and fma.
        Backend::Avx2 => unsafe { dot::dot_unitary_avx2(x, y) },
        #[cfg(not(target_arch = "x86_64"))]
        Backend::Avx2 => unreachable!("avx2 is never available off x86_64"),
    }
}
