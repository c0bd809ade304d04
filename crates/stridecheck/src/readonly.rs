//! Snapshots of arguments a kernel must not modify.

use crate::approx::same;
use crate::report::Failure;

/// Copy of an input taken before the kernel runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    data: Vec<f64>,
}

impl Snapshot {
    pub fn take(x: &[f64]) -> Self {
        Self { data: x.to_vec() }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// True if `x` is bit-identical to the snapshot (NaN equal to NaN).
    pub fn matches(&self, x: &[f64]) -> bool {
        self.data.len() == x.len() && self.data.iter().zip(x).all(|(&a, &b)| same(a, b))
    }

    /// A read-only failure naming `argument` if `x` changed since the snapshot.
    pub fn check(&self, argument: &str, x: &[f64]) -> Option<Failure> {
        if self.matches(x) {
            None
        } else {
            Some(Failure::ReadOnly {
                argument: argument.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_input_passes() {
        let x = vec![1.0, f64::NAN, 3.0];
        let snap = Snapshot::take(&x);
        assert!(snap.matches(&x));
        assert!(snap.check("x", &x).is_none());
    }

    #[test]
    fn mutation_is_reported_with_argument_name() {
        let mut x = vec![1.0, 2.0];
        let snap = Snapshot::take(&x);
        x[1] = 2.5;
        match snap.check("x", &x) {
            Some(Failure::ReadOnly { argument }) => assert_eq!(argument, "x"),
            other => panic!("expected read-only failure, got {other:?}"),
        }
    }

    #[test]
    fn nan_replaced_by_number_is_a_change() {
        let mut x = vec![f64::NAN];
        let snap = Snapshot::take(&x);
        x[0] = 0.0;
        assert!(!snap.matches(&x));
    }

    #[test]
    fn length_change_is_a_change() {
        let snap = Snapshot::take(&[1.0, 2.0]);
        assert!(!snap.matches(&[1.0]));
        assert_eq!(snap.as_slice(), &[1.0, 2.0]);
    }
}
