//! Dlasr cross-check: fast in-place rotations against `P * A` / `A * P^T`.

use stridecheck_kernels::gemm::General;
use stridecheck_kernels::Side;

use super::rotation::{apply_reference, cumulative_rotation};
use crate::approx::same;
use crate::capability::Dlasrer;
use crate::enumerate::DlasrCase;
use crate::readonly::Snapshot;
use crate::report::{Failure, TrialReport};
use crate::rng::TrialRng;
use crate::validate::scan_matrix_padding;

/// Parameters shared by every Dlasr trial of a suite.
#[derive(Debug, Clone, Copy)]
pub struct DlasrTrial {
    /// Fill value for the `lda - n` padding columns.
    pub sentinel: f64,
    /// Elementwise tolerance against the reference.
    pub tol: f64,
}

impl PartialEq for DlasrTrial {
    fn eq(&self, other: &Self) -> bool {
        same(self.sentinel, other.sentinel) && self.tol == other.tol
    }
}

impl Default for DlasrTrial {
    fn default() -> Self {
        Self {
            sentinel: f64::NAN,
            tol: 1e-12,
        }
    }
}

/// Runs one Dlasr case against the explicit reference.
///
/// `A` is `m x lda` with random data in the first `n` columns of each row and
/// `sentinel` in the rest. The input is snapshotted before the kernel runs.
/// After the call the trial checks, in order: `c` and `s` unchanged, padding
/// untouched, and the updated `A` within tolerance of the reference. Value
/// mismatches are folded into a single aggregate failure. A panicking kernel
/// skips the reference comparison. A shape with `m == 0`, `n == 0` or
/// `lda < n` is reported as [`Failure::InvalidCase`] without drawing from
/// `rng`.
pub fn dlasr_trial<D: Dlasrer + ?Sized>(
    imp: &D,
    case: &DlasrCase,
    params: DlasrTrial,
    rng: &mut TrialRng,
    index: usize,
) -> TrialReport {
    let mut report = TrialReport::new(index, case.to_string());
    if let Some(reason) = case.dims.problem() {
        report.push(Failure::InvalidCase { reason });
        return report;
    }
    let (m, n) = (case.dims.m, case.dims.n);
    let lda = case.dims.effective_lda();

    let mut a = vec![params.sentinel; m * lda];
    for i in 0..m {
        rng.fill(&mut a[i * lda..i * lda + n]);
    }
    let size = match case.side {
        Side::Left => m,
        Side::Right => n,
    };
    let (c, s) = rng.rotations(size.saturating_sub(1));

    let a_orig = Snapshot::take(&a);
    let c_orig = Snapshot::take(&c);
    let s_orig = Snapshot::take(&s);

    let ran = report
        .run(|| imp.dlasr(case.side, case.pivot, case.direct, m, n, &c, &s, &mut a, lda))
        .is_some();

    report.check_read_only("c", &c_orig, &c);
    report.check_read_only("s", &s_orig, &s);
    for violation in scan_matrix_padding(&a, m, n, lda, params.sentinel) {
        report.push(Failure::guard("a", violation));
    }
    if !ran {
        return report;
    }

    let p = cumulative_rotation(
        case.pivot,
        case.direct,
        c_orig.as_slice(),
        s_orig.as_slice(),
        size,
    );
    let original = General::from_parts(m, n, lda, a_orig.as_slice().to_vec());
    let want = apply_reference(case.side, &p, &original);

    let got: Vec<f64> = (0..m)
        .flat_map(|i| a[i * lda..i * lda + n].iter().copied())
        .collect();
    report.check_aggregate("A", &got, &want.data, params.tol);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::{dlasr_cases, DlasrDims};
    use crate::report::FailureKind;
    use stridecheck_kernels::lapack::{self, Direct, Pivot};

    fn case(side: Side, pivot: Pivot, direct: Direct, m: usize, n: usize, lda: usize) -> DlasrCase {
        DlasrCase {
            side,
            pivot,
            direct,
            dims: DlasrDims::new(m, n, lda),
        }
    }

    #[test]
    fn default_params_equal_config_params() {
        assert_eq!(DlasrTrial::default(), crate::SuiteConfig::default().dlasr_trial());
        let finite = DlasrTrial {
            sentinel: -1.0,
            ..DlasrTrial::default()
        };
        assert_ne!(finite, DlasrTrial::default());
    }

    #[test]
    fn left_variable_forward_5x5_agrees() {
        let mut rng = TrialRng::new(1);
        let c = case(Side::Left, Pivot::Variable, Direct::Forward, 5, 5, 5);
        let report = dlasr_trial(&lapack::dlasr, &c, DlasrTrial::default(), &mut rng, 0);
        assert!(report.is_clean(), "{:?}", report.failures);
    }

    #[test]
    fn every_case_agrees_including_padded_lda() {
        let dims = [DlasrDims::new(5, 10, 0), DlasrDims::new(10, 5, 20)];
        let mut rng = TrialRng::new(42);
        for (i, c) in dlasr_cases(&dims).iter().enumerate() {
            let report = dlasr_trial(&lapack::dlasr, c, DlasrTrial::default(), &mut rng, i);
            assert!(report.is_clean(), "{c}: {:?}", report.failures);
        }
    }

    #[test]
    fn no_op_kernel_is_caught_as_value_mismatch() {
        let noop = |_: Side, _: Pivot, _: Direct, _: usize, _: usize, _: &[f64], _: &[f64], _: &mut [f64], _: usize| {};
        let mut rng = TrialRng::new(5);
        let c = case(Side::Right, Pivot::Top, Direct::Backward, 4, 6, 0);
        let report = dlasr_trial(&noop, &c, DlasrTrial::default(), &mut rng, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind(), FailureKind::Value);
    }

    #[test]
    fn invalid_dims_are_reported_not_run() {
        let kernel_never_runs = |_: Side, _: Pivot, _: Direct, _: usize, _: usize, _: &[f64], _: &[f64], _: &mut [f64], _: usize| {
            panic!("kernel called for an invalid shape");
        };
        let mut rng = TrialRng::new(1);
        for (m, n, lda) in [(0, 3, 0), (3, 0, 0), (3, 5, 4)] {
            let c = case(Side::Left, Pivot::Top, Direct::Forward, m, n, lda);
            let report = dlasr_trial(&kernel_never_runs, &c, DlasrTrial::default(), &mut rng, 0);
            assert_eq!(report.failures.len(), 1, "{c}");
            assert_eq!(report.failures[0].kind(), FailureKind::InvalidCase);
        }
        assert_eq!(rng.uniform(), TrialRng::new(1).uniform());
    }

    #[test]
    fn panicking_kernel_is_recorded() {
        let mut rng = TrialRng::new(4);
        let c = case(Side::Right, Pivot::Variable, Direct::Forward, 3, 4, 0);
        let short = |side: Side, pivot: Pivot, direct: Direct, m: usize, n: usize, cos: &[f64], sin: &[f64], _: &mut [f64], lda: usize| {
            let mut tiny = [0.0; 1];
            lapack::dlasr(side, pivot, direct, m, n, cos, sin, &mut tiny, lda);
        };
        let report = dlasr_trial(&short, &c, DlasrTrial::default(), &mut rng, 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind(), FailureKind::Panic);
    }

    #[test]
    fn padding_write_is_a_guard_failure() {
        struct WritesPadding;
        impl Dlasrer for WritesPadding {
            fn dlasr(
                &self,
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
                a[n] = 0.0;
            }
        }
        let mut rng = TrialRng::new(9);
        let c = case(Side::Left, Pivot::Variable, Direct::Forward, 3, 3, 4);
        let report = dlasr_trial(&WritesPadding, &c, DlasrTrial::default(), &mut rng, 0);
        assert_eq!(report.failures.len(), 1);
        match &report.failures[0] {
            Failure::Guard { vector, offset, .. } => {
                assert_eq!(vector, "a");
                assert_eq!(*offset, 3);
            }
            other => panic!("expected guard failure, got {other:?}"),
        }
    }
}
