//! Shared helpers and deliberately faulty kernels for the integration tests.

#![allow(dead_code, clippy::too_many_arguments)]

use std::path::PathBuf;

use stridecheck::config::Axes;
use stridecheck::SuiteConfig;
use stridecheck_kernels::lapack::{self, Direct, Pivot};
use stridecheck_kernels::level1;
use stridecheck_kernels::Side;

/// Installs a test-writer subscriber once; `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter.as_str())
        .with_test_writer()
        .try_init();
}

pub fn suites_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../suites")
}

/// A grid small enough to run many suites per test.
pub fn small_config() -> SuiteConfig {
    SuiteConfig {
        axes: Axes {
            lengths: vec![0, 1, 2, 5, 8],
            incs: vec![1, 2, -1, -3],
            alphas: vec![1.0, -0.5],
        },
        ..SuiteConfig::default()
    }
}

/// [`small_config`] with a finite sentinel, so NaN written over a guard
/// still shows up.
pub fn finite_sentinel_config() -> SuiteConfig {
    let mut cfg = small_config();
    cfg.guard.sentinel = -1.0e300;
    cfg
}

// ────────────────────────────────────────────────────────────────────────────
// Faulty level-1 kernels
// ────────────────────────────────────────────────────────────────────────────

/// Correct scal, then zeroes the slot just past the last element.
pub fn scal_write_past_end(alpha: f64, x: &mut [f64], n: usize, incx: usize) {
    level1::scal_inc(alpha, x, n, incx);
    if n > 0 {
        x[(n - 1) * incx + 1] = 0.0;
    }
}

/// Correct scal, then zeroes the first gap slot.
pub fn scal_write_gap(alpha: f64, x: &mut [f64], n: usize, incx: usize) {
    level1::scal_inc(alpha, x, n, incx);
    if n > 1 && incx > 1 {
        x[1] = 0.0;
    }
}

/// Runs three elements long, far enough to index past the buffer.
pub fn scal_three_past_end(alpha: f64, x: &mut [f64], n: usize, incx: usize) {
    level1::scal_inc(alpha, x, n + 3, incx);
}

/// Contiguous scal whose loop bound includes `x.len()`.
pub fn scal_unitary_one_past_end(alpha: f64, x: &mut [f64]) {
    for i in 0..=x.len() {
        x[i] *= alpha;
    }
}

/// Off-by-one loop bound: visits `n + 1` elements.
pub fn axpy_one_too_many(
    alpha: f64,
    x: &[f64],
    y: &mut [f64],
    n: usize,
    incx: isize,
    incy: isize,
    ix: usize,
    iy: usize,
) {
    level1::axpy_inc(alpha, x, y, n + 1, incx, incy, ix, iy);
}

/// Adds a small bias to every result.
pub fn axpy_biased(
    alpha: f64,
    x: &[f64],
    y: &mut [f64],
    n: usize,
    incx: isize,
    incy: isize,
    ix: usize,
    iy: usize,
) {
    level1::axpy_inc(alpha, x, y, n, incx, incy, ix, iy);
    for k in 0..n {
        let idx = (iy as isize + k as isize * incy) as usize;
        y[idx] += 1e-6;
    }
}

/// Steps through `x` one slot at a time in the direction of `incx`,
/// reading the gaps between strided elements.
pub fn dot_unit_stride(
    x: &[f64],
    y: &[f64],
    n: usize,
    incx: isize,
    incy: isize,
    ix: usize,
    iy: usize,
) -> f64 {
    level1::dot_inc(x, y, n, incx.signum(), incy, ix, iy)
}

/// Scales only the largest multiple-of-four prefix.
pub fn scal_unitary_drops_remainder(alpha: f64, x: &mut [f64]) {
    let body = x.len() / 4 * 4;
    level1::scal_unitary(alpha, &mut x[..body]);
}

// ────────────────────────────────────────────────────────────────────────────
// Faulty Dlasr implementations
// ────────────────────────────────────────────────────────────────────────────

/// Applies the rotations in the opposite order.
pub fn dlasr_reversed(
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
    lapack::dlasr(side, pivot, direct.reversed(), m, n, c, s, a, lda);
}

/// Correct update, then scribbles into every row's padding.
pub fn dlasr_writes_padding(
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
    lapack::dlasr(side, pivot, direct, m, n, c, s, a, lda);
    for i in 0..m {
        for j in n..lda {
            a[i * lda + j] = 0.0;
        }
    }
}

/// Computes `A * P` instead of `A * P^T` for right-side updates.
pub fn dlasr_right_untransposed(
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
    match side {
        Side::Left => lapack::dlasr(side, pivot, direct, m, n, c, s, a, lda),
        Side::Right => {
            let neg: Vec<f64> = s.iter().map(|v| -v).collect();
            lapack::dlasr(side, pivot, direct.reversed(), m, n, c, &neg, a, lda);
        }
    }
}
