/// MUT-L1-001: scal writes one slot past its last element
/// Prediction: every trial with n > 0 reports a back-guard violation
/// If fails: overruns past the data region go unnoticed
#[test]
fn mut_l1_001_scal_overrun_hits_back_guard() {
    init_tracing();
    let cfg = small_config();
    let report = scale_suite("scal_overrun", &scal_write_past_end, &cfg);

    let nonempty = cfg.axes.lengths.iter().filter(|&&n| n > 0).count();
    let expected = nonempty * cfg.inc_magnitudes().len() * cfg.axes.alphas.len();
    assert_eq!(report.failed_trials().count(), expected, "{report}");
    assert!(guard_regions(&report).iter().all(|r| *r == GuardRegion::Back));
    assert!(!report.has_kind(FailureKind::Value), "{report}");
}

/// MUT-L1-002: scal writes into the gap after its first element
/// Prediction: internal guard violations only, values still correct
/// If fails: writes between strided elements are invisible
#[test]
fn mut_l1_002_scal_gap_write_is_internal() {
    init_tracing();
    let report = scale_suite("scal_gap", &scal_write_gap, &small_config());
    let regions = guard_regions(&report);
    assert!(!regions.is_empty(), "{report}");
    assert!(regions.iter().all(|r| *r == GuardRegion::Internal));
    assert!(!report.has_kind(FailureKind::Value));
    for (_, failure) in report.failures() {
        if let Failure::Guard { offset, .. } = failure {
            assert_eq!(*offset, 1);
        }
    }
}

/// MUT-L1-003: axpy loops one element too far
/// Prediction: with a finite sentinel, positive incy overruns into the back
/// guard and negative incy into the front guard
/// If fails: off-by-one loop bounds escape detection
#[test]
fn mut_l1_003_axpy_off_by_one_hits_both_ends() {
    init_tracing();
    let report = update_suite("axpy_overrun", &axpy_one_too_many, &finite_sentinel_config());
    let regions = guard_regions(&report);
    assert!(regions.contains(&GuardRegion::Front), "{report}");
    assert!(regions.contains(&GuardRegion::Back), "{report}");
    assert!(!regions.contains(&GuardRegion::Internal));
    assert!(!report.has_kind(FailureKind::Value));
    assert!(!report.has_kind(FailureKind::ReadOnly));
}

/// MUT-L1-004: axpy adds a bias to every output
/// Prediction: value failures, guards intact
/// If fails: the tolerance oracle is too loose
#[test]
fn mut_l1_004_axpy_bias_is_a_value_failure() {
    init_tracing();
    let report = update_suite("axpy_biased", &axpy_biased, &small_config());
    assert!(report.has_kind(FailureKind::Value));
    assert!(!report.has_kind(FailureKind::Guard));
    for trial in report.failed_trials() {
        assert!(!trial.label.starts_with("n=0 "), "empty trial failed: {}", trial.label);
    }
}

/// MUT-L1-005: dot ignores the magnitude of incx
/// Prediction: reading the sentinel gaps poisons the sum, caught as a value
/// failure whenever |incx| > 1 and n > 1
/// If fails: reads outside the strided footprint go unnoticed
#[test]
fn mut_l1_005_dot_gap_read_is_a_value_failure() {
    init_tracing();
    let report = reduce_suite("dot_unit_stride", &dot_unit_stride, &small_config());
    assert!(report.has_kind(FailureKind::Value), "{report}");
    assert!(!report.has_kind(FailureKind::Guard));
    assert!(!report.has_kind(FailureKind::ReadOnly));
    for trial in report.failed_trials() {
        assert!(
            !trial.label.contains("x=1 ") && !trial.label.contains("x=-1 "),
            "unit incx should pass: {}",
            trial.label
        );
    }
}

/// MUT-L1-006: unitary scal skips the remainder loop
/// Prediction: lengths not divisible by four fail on value
/// If fails: SIMD tail handling is not exercised
#[test]
fn mut_l1_006_unitary_scal_remainder_is_checked() {
    init_tracing();
    let report = unitary_scale_suite("scal_unitary", &scal_unitary_drops_remainder, &small_config());
    assert!(report.has_kind(FailureKind::Value));
    assert!(!report.has_kind(FailureKind::Guard));
    for trial in report.failed_trials() {
        assert!(
            trial.label.starts_with("n=1 ") || trial.label.starts_with("n=2 ") || trial.label.starts_with("n=5 "),
            "unexpected failing length: {}",
            trial.label
        );
    }
}

/// MUT-L1-007: failure lines follow the report format
/// Prediction: every rendered line names the suite and trial index
#[test]
fn mut_l1_007_failure_lines_are_prefixed() {
    let report = scale_suite("scal_overrun", &scal_write_past_end, &small_config());
    let lines = report.lines();
    assert_eq!(lines.len(), report.failure_count());
    for line in &lines {
        assert!(line.starts_with("scal_overrun #"), "{line}");
        assert!(line.contains("Guard violated in x vector back at 0"), "{line}");
    }
}

/// MUT-L1-008: kernels that index out of bounds and panic
/// Prediction: every trial records the panic and the suite still returns a
/// report covering the whole grid
/// If fails: one out-of-bounds kernel hides every other trial's result
#[test]
fn mut_l1_008_panicking_kernel_still_yields_full_report() {
    init_tracing();
    let cfg = small_config();

    let unitary = unitary_scale_suite("scal_unitary_overrun", &scal_unitary_one_past_end, &cfg);
    let expected = cfg.axes.lengths.len() * 2 * cfg.axes.alphas.len();
    assert_eq!(unitary.trial_count(), expected);
    assert_eq!(unitary.count_kind(FailureKind::Panic), expected, "{unitary}");
    assert!(!unitary.has_kind(FailureKind::Value));
    assert!(unitary.lines()[0].contains("kernel panicked: index out of bounds"));

    let strided = scale_suite("scal_far_overrun", &scal_three_past_end, &cfg);
    let expected = cfg.axes.lengths.len() * cfg.inc_magnitudes().len() * cfg.axes.alphas.len();
    assert_eq!(strided.trial_count(), expected);
    assert_eq!(strided.count_kind(FailureKind::Panic), expected, "{strided}");
    assert!(!strided.has_kind(FailureKind::Value));
}

#[test]
fn correct_kernels_are_not_flagged_by_finite_sentinel() {
    let cfg: SuiteConfig = finite_sentinel_config();
    update_suite("axpy_inc", &stridecheck_kernels::level1::axpy_inc, &cfg).assert_clean();
}
