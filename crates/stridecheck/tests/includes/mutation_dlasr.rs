/// MUT-LASR-001: rotations applied in the opposite order
/// Prediction: value failures wherever two or more rotations share a row or
/// column, so every default case fails
/// If fails: the reference composes rotations in the wrong order too
#[test]
fn mut_lasr_001_reversed_direction_is_a_value_failure() {
    init_tracing();
    let report = dlasr_suite("dlasr_reversed", &dlasr_reversed, &SuiteConfig::default());
    assert_eq!(report.failed_trials().count(), report.trial_count(), "{report}");
    assert_eq!(report.count_kind(FailureKind::Value), report.trial_count());
    assert!(!report.has_kind(FailureKind::Guard));
}

/// MUT-LASR-002: padding columns overwritten
/// Prediction: guard failures exactly on cases with `lda > n`
/// If fails: writes outside the `n` live columns go unnoticed
#[test]
fn mut_lasr_002_padding_write_is_a_guard_failure() {
    init_tracing();
    let report = dlasr_suite("dlasr_padding", &dlasr_writes_padding, &SuiteConfig::default());
    assert!(report.has_kind(FailureKind::Guard));
    assert!(!report.has_kind(FailureKind::Value), "{report}");
    for trial in &report.trials {
        let padded = trial.label.ends_with("lda=20");
        assert_eq!(!trial.is_clean(), padded, "{}", trial.label);
    }
    assert!(guard_regions(&report).iter().all(|r| *r == GuardRegion::Internal));
}

/// MUT-LASR-003: right-side update computes `A * P` instead of `A * P^T`
/// Prediction: every right-side case fails on value, left-side cases pass
/// If fails: the reference does not distinguish a rotation from its inverse
#[test]
fn mut_lasr_003_missing_transpose_fails_right_side_only() {
    init_tracing();
    let report = dlasr_suite("dlasr_untransposed", &dlasr_right_untransposed, &SuiteConfig::default());
    for trial in &report.trials {
        let right = trial.label.starts_with("side=Right");
        assert_eq!(!trial.is_clean(), right, "{}", trial.label);
        assert!(trial.failures.iter().all(|f| f.kind() == FailureKind::Value));
    }
}

/// MUT-LASR-004: aggregate failure lines carry the mismatch count
#[test]
fn mut_lasr_004_aggregate_line_format() {
    let report = dlasr_suite("dlasr_reversed", &dlasr_reversed, &SuiteConfig::default());
    let first = report.lines().into_iter().next().expect("reversed kernel must fail");
    assert!(first.starts_with("dlasr_reversed #0 (side=Left pivot=Variable direct=Forward"), "{first}");
    assert!(first.contains("A update mismatch in"), "{first}");
}
