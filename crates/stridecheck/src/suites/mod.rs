//! Suite drivers, one per kernel family.
//!
//! Every driver seeds its own [`TrialRng`](crate::rng::TrialRng) from the
//! configuration, enumerates its axes, records one
//! [`TrialReport`](crate::report::TrialReport) per case and returns the
//! finished [`SuiteReport`].

pub mod lapack;
pub mod level1;

pub use lapack::dlasr_suite;
pub use level1::{
    reduce_suite, scale_suite, scale_to_suite, unitary_reduce_suite, unitary_scale_suite,
    unitary_scale_to_suite, unitary_update_suite, unitary_update_to_suite, update_suite,
    update_to_suite,
};

use stridecheck_kernels::{lapack as kernels_lapack, level1 as kernels_level1, Backend};

use crate::config::SuiteConfig;
use crate::report::SuiteReport;

/// Runs every shipped kernel through its suite.
///
/// Unitary kernels with a SIMD variant run once per backend in
/// [`Backend::available`].
pub fn run_shipped(cfg: &SuiteConfig) -> Vec<SuiteReport> {
    let mut reports = vec![
        scale_suite("scal_inc", &kernels_level1::scal_inc, cfg),
        scale_to_suite("scal_inc_to", &kernels_level1::scal_inc_to, cfg),
        update_suite("axpy_inc", &kernels_level1::axpy_inc, cfg),
        update_to_suite("axpy_inc_to", &kernels_level1::axpy_inc_to, cfg),
        reduce_suite("dot_inc", &kernels_level1::dot_inc, cfg),
        unitary_scale_to_suite("scal_unitary_to", &kernels_level1::scal_unitary_to, cfg),
    ];
    for backend in Backend::available() {
        reports.push(unitary_scale_suite(
            &format!("scal_unitary[{backend}]"),
            &|alpha: f64, x: &mut [f64]| kernels_level1::scal_unitary_with(backend, alpha, x),
            cfg,
        ));
        reports.push(unitary_update_suite(
            &format!("axpy_unitary[{backend}]"),
            &|alpha: f64, x: &[f64], y: &mut [f64]| kernels_level1::axpy_unitary_with(backend, alpha, x, y),
            cfg,
        ));
        reports.push(unitary_update_to_suite(
            &format!("axpy_unitary_to[{backend}]"),
            &|dst: &mut [f64], alpha: f64, x: &[f64], y: &[f64]| {
                kernels_level1::axpy_unitary_to_with(backend, dst, alpha, x, y);
            },
            cfg,
        ));
        reports.push(unitary_reduce_suite(
            &format!("dot_unitary[{backend}]"),
            &|x: &[f64], y: &[f64]| kernels_level1::dot_unitary_with(backend, x, y),
            cfg,
        ));
    }
    reports.push(dlasr_suite("dlasr", &kernels_lapack::dlasr, cfg));
    reports
}
