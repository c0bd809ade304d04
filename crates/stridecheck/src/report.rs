//! Failure collection for trials and suites.
//!
//! Failures are values. A suite records every trial, failing or not, and
//! only [`SuiteReport::assert_clean`] turns them into a panic.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::approx::{same, same_approx};
use crate::guard::GuardedVector;
use crate::readonly::Snapshot;
use crate::validate::{GuardRegion, GuardViolation};

/// The failure categories a trial can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Guard,
    ReadOnly,
    Value,
    /// The kernel panicked before returning.
    Panic,
    /// The case could not be set up; the kernel never ran.
    InvalidCase,
}

/// Equality compares every `f64` with [`same`], so NaN payloads match.
#[derive(Debug, Clone)]
pub enum Failure {
    /// A sentinel outside the declared footprint was overwritten.
    Guard {
        vector: String,
        region: GuardRegion,
        offset: usize,
        context: Vec<f64>,
    },
    /// An input declared immutable changed.
    ReadOnly { argument: String },
    /// One output element disagrees with the expected value.
    Value { index: usize, got: f64, want: f64 },
    /// Several elements of `name` disagree; the first mismatch is kept.
    AggregateValue {
        name: String,
        mismatches: usize,
        index: usize,
        got: f64,
        want: f64,
    },
    /// The kernel unwound instead of returning.
    Panic { message: String },
    /// The enumerated parameters cannot describe a valid call.
    InvalidCase { reason: String },
}

impl Failure {
    pub fn guard(vector: &str, violation: GuardViolation) -> Self {
        Self::Guard {
            vector: vector.to_string(),
            region: violation.region,
            offset: violation.offset,
            context: violation.context,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Guard { .. } => FailureKind::Guard,
            Self::ReadOnly { .. } => FailureKind::ReadOnly,
            Self::Value { .. } | Self::AggregateValue { .. } => FailureKind::Value,
            Self::Panic { .. } => FailureKind::Panic,
            Self::InvalidCase { .. } => FailureKind::InvalidCase,
        }
    }

    /// Renders the failure as a single diagnostic line led by `prefix`.
    pub fn render(&self, prefix: &str) -> String {
        match self {
            Self::Guard {
                vector,
                region,
                offset,
                context,
            } => format!("{prefix}: Guard violated in {vector} vector {region} at {offset} {context:?}"),
            Self::ReadOnly { argument } => {
                format!("{prefix}: modified read-only {argument} argument")
            }
            Self::Value { index, got, want } => {
                format!("{prefix}: unexpected value at {index} Got: {got} Expected: {want}")
            }
            Self::AggregateValue {
                name,
                mismatches,
                index,
                got,
                want,
            } => format!(
                "{prefix}: {name} update mismatch in {mismatches} elements, \
                 unexpected value at {index} Got: {got} Expected: {want}"
            ),
            Self::Panic { message } => format!("{prefix}: kernel panicked: {message}"),
            Self::InvalidCase { reason } => format!("{prefix}: invalid case: {reason}"),
        }
    }
}

fn same_all(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| same(x, y))
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Guard {
                    vector: v1,
                    region: r1,
                    offset: o1,
                    context: c1,
                },
                Self::Guard {
                    vector: v2,
                    region: r2,
                    offset: o2,
                    context: c2,
                },
            ) => v1 == v2 && r1 == r2 && o1 == o2 && same_all(c1, c2),
            (Self::ReadOnly { argument: a }, Self::ReadOnly { argument: b }) => a == b,
            (
                Self::Value {
                    index: i1,
                    got: g1,
                    want: w1,
                },
                Self::Value {
                    index: i2,
                    got: g2,
                    want: w2,
                },
            ) => i1 == i2 && same(*g1, *g2) && same(*w1, *w2),
            (
                Self::AggregateValue {
                    name: n1,
                    mismatches: m1,
                    index: i1,
                    got: g1,
                    want: w1,
                },
                Self::AggregateValue {
                    name: n2,
                    mismatches: m2,
                    index: i2,
                    got: g2,
                    want: w2,
                },
            ) => n1 == n2 && m1 == m2 && i1 == i2 && same(*g1, *g2) && same(*w1, *w2),
            (Self::Panic { message: a }, Self::Panic { message: b })
            | (Self::InvalidCase { reason: a }, Self::InvalidCase { reason: b }) => a == b,
            _ => false,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Failures from one enumerated case.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    /// Position of the case in its enumeration.
    pub index: usize,
    pub label: String,
    pub failures: Vec<Failure>,
}

impl TrialReport {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
            failures: Vec::new(),
        }
    }

    pub fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Calls the kernel under test. A panic is recorded as a
    /// [`Failure::Panic`] and yields `None`, so the suite moves on to the
    /// next trial.
    pub fn run<R>(&mut self, kernel: impl FnOnce() -> R) -> Option<R> {
        match panic::catch_unwind(AssertUnwindSafe(kernel)) {
            Ok(out) => Some(out),
            Err(payload) => {
                self.push(Failure::Panic {
                    message: panic_message(payload.as_ref()),
                });
                None
            }
        }
    }

    /// Records every guard violation in `vector`.
    pub fn check_guards(&mut self, name: &str, vector: &GuardedVector) {
        for violation in vector.violations() {
            self.push(Failure::guard(name, violation));
        }
    }

    pub fn check_read_only(&mut self, argument: &str, snapshot: &Snapshot, current: &[f64]) {
        if let Some(failure) = snapshot.check(argument, current) {
            self.push(failure);
        }
    }

    /// Records a value failure if `got` and `want` differ beyond `tol`.
    pub fn check_value(&mut self, index: usize, got: f64, want: f64, tol: f64) {
        if !same_approx(got, want, tol) {
            self.push(Failure::Value { index, got, want });
        }
    }

    /// Elementwise [`check_value`](Self::check_value) over two slices of
    /// equal length.
    pub fn check_values(&mut self, got: &[f64], want: &[f64], tol: f64) {
        assert_eq!(got.len(), want.len(), "compared slices differ in length");
        for (i, (&g, &w)) in got.iter().zip(want).enumerate() {
            self.check_value(i, g, w, tol);
        }
    }

    /// Records at most one aggregate failure for the whole of `got`.
    pub fn check_aggregate(&mut self, name: &str, got: &[f64], want: &[f64], tol: f64) {
        assert_eq!(got.len(), want.len(), "compared slices differ in length");
        let mut mismatches = got
            .iter()
            .zip(want)
            .enumerate()
            .filter(|(_, (g, w))| !same_approx(**g, **w, tol));
        if let Some((index, (&got_v, &want_v))) = mismatches.next() {
            self.push(Failure::AggregateValue {
                name: name.to_string(),
                mismatches: 1 + mismatches.count(),
                index,
                got: got_v,
                want: want_v,
            });
        }
    }

    fn prefix(&self, suite: &str) -> String {
        format!("{suite} #{} ({})", self.index, self.label)
    }

    /// One rendered line per failure.
    pub fn lines(&self, suite: &str) -> Vec<String> {
        let prefix = self.prefix(suite);
        self.failures.iter().map(|f| f.render(&prefix)).collect()
    }
}

/// Every trial a suite ran, in enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteReport {
    pub name: String,
    pub trials: Vec<TrialReport>,
}

impl SuiteReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trials: Vec::new(),
        }
    }

    /// Logs and stores a finished trial.
    pub fn record(&mut self, trial: TrialReport) {
        if trial.is_clean() {
            debug!(suite = %self.name, trial = trial.index, label = %trial.label, "trial passed");
        } else {
            for line in trial.lines(&self.name) {
                warn!(suite = %self.name, trial = trial.index, "{line}");
            }
        }
        self.trials.push(trial);
    }

    /// Logs the suite summary and hands the report back.
    #[must_use]
    pub fn finish(self) -> Self {
        info!(
            suite = %self.name,
            trials = self.trials.len(),
            failed = self.failed_trials().count(),
            failures = self.failure_count(),
            "suite complete"
        );
        self
    }

    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    pub fn passed(&self) -> bool {
        self.trials.iter().all(TrialReport::is_clean)
    }

    pub fn failed_trials(&self) -> impl Iterator<Item = &TrialReport> {
        self.trials.iter().filter(|t| !t.is_clean())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&TrialReport, &Failure)> {
        self.trials
            .iter()
            .flat_map(|t| t.failures.iter().map(move |f| (t, f)))
    }

    pub fn failure_count(&self) -> usize {
        self.trials.iter().map(|t| t.failures.len()).sum()
    }

    pub fn count_kind(&self, kind: FailureKind) -> usize {
        self.failures().filter(|(_, f)| f.kind() == kind).count()
    }

    pub fn has_kind(&self, kind: FailureKind) -> bool {
        self.count_kind(kind) > 0
    }

    pub fn lines(&self) -> Vec<String> {
        self.trials.iter().flat_map(|t| t.lines(&self.name)).collect()
    }

    /// Panics with every failure listed if any trial failed.
    ///
    /// # Panics
    /// Panics if the suite recorded at least one failure.
    pub fn assert_clean(&self) {
        assert!(self.passed(), "{self}");
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} trials, {} failed, {} failures",
            self.name,
            self.trials.len(),
            self.failed_trials().count(),
            self.failure_count()
        )?;
        for line in self.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
