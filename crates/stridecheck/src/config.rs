//! Suite configuration: YAML parsing and validation.
//!
//! ```yaml
//! seed: 1
//! tolerances:
//!   value: 1.0e-12
//!   reference: 1.0e-12
//! guard:
//!   sentinel: .nan
//!   length: ~
//! axes:
//!   lengths: [0, 1, 2, 3, 7, 8, 9]
//!   incs: [1, 2, 3, -1, -4]
//!   alphas: [0.0, 1.0, -2.5]
//! dlasr:
//!   dims: [[5, 5, 0], [5, 10, 20]]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::approx::same;
use crate::enumerate::DlasrDims;
use crate::error::{HarnessError, Severity, Violation};
use crate::guard::GuardSpec;
use crate::reference::DlasrTrial;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Seed for the trial generator; each suite restarts from it.
    pub seed: u64,
    pub tolerances: Tolerances,
    pub guard: GuardConfig,
    pub axes: Axes,
    pub dlasr: DlasrConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Level-1 value checks.
    pub value: f64,
    /// Reference-model cross-checks.
    pub reference: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub sentinel: f64,
    /// End-guard length; `None` means `2*|inc|` for strided vectors and 4
    /// for contiguous ones.
    pub length: Option<usize>,
}

// NaN sentinels compare equal.
impl PartialEq for GuardConfig {
    fn eq(&self, other: &Self) -> bool {
        same(self.sentinel, other.sentinel) && self.length == other.length
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axes {
    pub lengths: Vec<usize>,
    pub incs: Vec<isize>,
    pub alphas: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DlasrConfig {
    /// `[m, n, lda]` triples; `lda == 0` means `lda = n`.
    pub dims: Vec<[usize; 3]>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tolerances: Tolerances::default(),
            guard: GuardConfig::default(),
            axes: Axes::default(),
            dlasr: DlasrConfig::default(),
        }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            value: 1e-12,
            reference: 1e-12,
        }
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            sentinel: f64::NAN,
            length: None,
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            lengths: vec![0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31],
            incs: vec![1, 2, 3, 4, -1, -2, -3, -4],
            alphas: vec![0.0, 1.0, -1.0, 2.5, -0.25],
        }
    }
}

impl Default for DlasrConfig {
    fn default() -> Self {
        Self {
            dims: vec![
                [5, 5, 0],
                [5, 10, 0],
                [10, 5, 0],
                [5, 5, 20],
                [5, 10, 20],
                [10, 5, 20],
            ],
        }
    }
}

/// Guard length for contiguous vectors when none is configured.
pub const DEFAULT_UNITARY_GUARD: usize = 4;

impl SuiteConfig {
    /// Guard settings for strided vectors.
    pub fn guard_spec(&self) -> GuardSpec {
        GuardSpec {
            sentinel: self.guard.sentinel,
            guard_len: self.guard.length,
        }
    }

    /// Guard settings for a contiguous vector shifted by `align` slots.
    pub fn unitary_guard_spec(&self, align: usize) -> GuardSpec {
        let base = self.guard.length.unwrap_or(DEFAULT_UNITARY_GUARD);
        GuardSpec::with_sentinel(self.guard.sentinel).guard_len(base + align)
    }

    pub fn dlasr_dims(&self) -> Vec<DlasrDims> {
        self.dlasr
            .dims
            .iter()
            .map(|&[m, n, lda]| DlasrDims::new(m, n, lda))
            .collect()
    }

    pub fn dlasr_trial(&self) -> DlasrTrial {
        DlasrTrial {
            sentinel: self.guard.sentinel,
            tol: self.tolerances.reference,
        }
    }

    /// Distinct stride magnitudes in first-seen order.
    pub fn inc_magnitudes(&self) -> Vec<usize> {
        let mut seen = HashSet::new();
        self.axes
            .incs
            .iter()
            .map(|i| i.unsigned_abs())
            .filter(|&i| i != 0 && seen.insert(i))
            .collect()
    }
}

/// Parse a YAML suite file into a [`SuiteConfig`].
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be read,
/// or [`HarnessError::Yaml`] if the YAML is malformed.
pub fn parse_suite_config(path: &Path) -> Result<SuiteConfig, HarnessError> {
    let content = std::fs::read_to_string(path)?;
    parse_suite_config_str(&content)
}

/// Parse a YAML suite configuration from a string.
///
/// Missing sections take their defaults.
pub fn parse_suite_config_str(yaml: &str) -> Result<SuiteConfig, HarnessError> {
    let config: SuiteConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Parse and validate, rejecting configurations with error-level findings.
///
/// # Errors
///
/// Parse errors as in [`parse_suite_config`]. An error finding under
/// `axes` becomes [`HarnessError::InvalidAxis`]; any other becomes
/// [`HarnessError::Config`].
pub fn load_suite_config(path: &Path) -> Result<SuiteConfig, HarnessError> {
    let config = parse_suite_config(path)?;
    let errors: Vec<Violation> = validate_suite_config(&config)
        .into_iter()
        .filter(|v| v.severity == Severity::Error)
        .collect();
    let Some(first) = errors.first() else {
        return Ok(config);
    };
    if let Some(axis) = first
        .location
        .as_deref()
        .and_then(|loc| loc.strip_prefix("axes."))
    {
        return Err(HarnessError::InvalidAxis {
            axis: axis.to_string(),
            reason: first.message.clone(),
        });
    }
    let listing: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(HarnessError::Config(listing.join("; ")))
}

/// Validate a suite configuration.
///
/// Returns a list of violations. If any violation has
/// [`Severity::Error`], the configuration must not be run.
pub fn validate_suite_config(config: &SuiteConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    validate_axes(&config.axes, &mut violations);
    validate_tolerances(&config.tolerances, &mut violations);
    validate_guard(config, &mut violations);
    validate_dlasr(&config.dlasr, &mut violations);

    violations
}

fn error(rule: &str, message: String, location: String) -> Violation {
    Violation {
        severity: Severity::Error,
        rule: rule.to_string(),
        message,
        location: Some(location),
    }
}

fn warning(rule: &str, message: String, location: String) -> Violation {
    Violation {
        severity: Severity::Warning,
        rule: rule.to_string(),
        message,
        location: Some(location),
    }
}

fn validate_axes(axes: &Axes, violations: &mut Vec<Violation>) {
    if axes.incs.is_empty() {
        violations.push(error(
            "CFG-001",
            "incs must contain at least one increment".to_string(),
            "axes.incs".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for (i, &inc) in axes.incs.iter().enumerate() {
        if inc == 0 {
            violations.push(error(
                "CFG-002",
                "increment must be nonzero".to_string(),
                format!("axes.incs[{i}]"),
            ));
        } else if !seen.insert(inc) {
            violations.push(warning(
                "CFG-003",
                format!("duplicate increment {inc}"),
                format!("axes.incs[{i}]"),
            ));
        }
    }

    if axes.lengths.is_empty() {
        violations.push(error(
            "CFG-004",
            "lengths must contain at least one vector length".to_string(),
            "axes.lengths".to_string(),
        ));
    }

    if axes.alphas.is_empty() {
        violations.push(warning(
            "CFG-005",
            "no alpha values; scaling and update suites will run no trials".to_string(),
            "axes.alphas".to_string(),
        ));
    }
    for (i, alpha) in axes.alphas.iter().enumerate() {
        if !alpha.is_finite() {
            violations.push(error(
                "CFG-006",
                format!("alpha {alpha} is not finite"),
                format!("axes.alphas[{i}]"),
            ));
        }
    }
}

fn validate_tolerances(tol: &Tolerances, violations: &mut Vec<Violation>) {
    for (name, value) in [("value", tol.value), ("reference", tol.reference)] {
        if !value.is_finite() || value < 0.0 {
            violations.push(error(
                "CFG-007",
                format!("tolerance {value} must be finite and non-negative"),
                format!("tolerances.{name}"),
            ));
        }
    }
}

fn validate_guard(config: &SuiteConfig, violations: &mut Vec<Violation>) {
    let sentinel = config.guard.sentinel;
    if sentinel.is_finite() {
        violations.push(warning(
            "CFG-008",
            format!("finite sentinel {sentinel} can collide with computed values"),
            "guard.sentinel".to_string(),
        ));
    }
    if config.guard.length == Some(0) {
        violations.push(warning(
            "CFG-009",
            "zero-length guards cannot detect overruns".to_string(),
            "guard.length".to_string(),
        ));
    }
}

fn validate_dlasr(dlasr: &DlasrConfig, violations: &mut Vec<Violation>) {
    for (i, &[m, n, lda]) in dlasr.dims.iter().enumerate() {
        if m == 0 || n == 0 {
            violations.push(error(
                "CFG-010",
                format!("matrix dimensions {m}x{n} must be positive"),
                format!("dlasr.dims[{i}]"),
            ));
        }
        if lda != 0 && lda < n {
            violations.push(error(
                "CFG-011",
                format!("lda {lda} smaller than n {n}"),
                format!("dlasr.dims[{i}]"),
            ));
        }
    }
}
