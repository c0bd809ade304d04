//! Dlasr suite over Side × Pivot × Direct × configured dimensions.

use crate::capability::Dlasrer;
use crate::config::SuiteConfig;
use crate::enumerate::dlasr_cases;
use crate::reference::dlasr_trial;
use crate::report::SuiteReport;
use crate::rng::TrialRng;

/// Cross-checks `imp` against the explicit rotation reference for every
/// enumerated case. One generator stream is shared by all cases in order.
///
/// Unrunnable shapes fail their trials as invalid cases; use
/// [`load_suite_config`](crate::config::load_suite_config) to reject them
/// up front.
pub fn dlasr_suite<D: Dlasrer + ?Sized>(name: &str, imp: &D, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let params = cfg.dlasr_trial();
    for (i, case) in dlasr_cases(&cfg.dlasr_dims()).iter().enumerate() {
        suite.record(dlasr_trial(imp, case, params, &mut rng, i));
    }
    suite.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::FailureKind;
    use stridecheck_kernels::lapack;

    #[test]
    fn shipped_dlasr_passes_default_grid() {
        let report = dlasr_suite("dlasr", &lapack::dlasr, &SuiteConfig::default());
        assert_eq!(report.trial_count(), 2 * 3 * 2 * 6);
        report.assert_clean();
    }

    #[test]
    fn unvalidated_dims_fail_their_trials_only() {
        let mut cfg = SuiteConfig::default();
        cfg.dlasr.dims = vec![[0, 4, 0], [3, 3, 0], [4, 6, 5]];
        let report = dlasr_suite("dlasr", &lapack::dlasr, &cfg);
        assert_eq!(report.trial_count(), 12 * 3);
        assert_eq!(report.count_kind(FailureKind::InvalidCase), 12 * 2);
        assert_eq!(report.failure_count(), 12 * 2);
        for trial in &report.trials {
            assert_eq!(trial.is_clean(), trial.label.contains("m=3 n=3"), "{}", trial.label);
        }
    }

    #[test]
    fn suite_is_reproducible() {
        let cfg = SuiteConfig::default();
        let a = dlasr_suite("dlasr", &lapack::dlasr, &cfg);
        let b = dlasr_suite("dlasr", &lapack::dlasr, &cfg);
        assert_eq!(a, b);
    }
}
