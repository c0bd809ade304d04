//! Guard validation: classify every slot of a guarded buffer after a kernel
//! has run.

use std::fmt;

use crate::approx::same;
use crate::guard::GuardLayout;

/// Which sentinel region a stray write landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardRegion {
    Front,
    Back,
    /// A non-stride slot inside the data region, or matrix padding.
    Internal,
}

impl fmt::Display for GuardRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Internal => "internal",
        };
        write!(f, "{s}")
    }
}

/// One overwritten sentinel slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardViolation {
    pub region: GuardRegion,
    /// Offset relative to the start of `region`.
    pub offset: usize,
    /// Value found in the slot.
    pub value: f64,
    /// Contents of the whole region at scan time.
    pub context: Vec<f64>,
}

impl fmt::Display for GuardViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} guard violated at {} (found {}) {:?}",
            self.region, self.offset, self.value, self.context
        )
    }
}

/// Scans every slot of `buf` and reports each sentinel that was overwritten.
///
/// Data slots are skipped. The scan never stops early.
///
/// # Panics
/// Panics if `buf.len()` does not match `layout.total_len()`.
pub fn scan_guards(buf: &[f64], layout: &GuardLayout) -> Vec<GuardViolation> {
    assert_eq!(
        buf.len(),
        layout.total_len(),
        "buffer length {} does not match guarded layout {}",
        buf.len(),
        layout.total_len()
    );
    let g = layout.guard_len;
    let region_end = g + layout.region_len;
    let mut violations = Vec::new();

    for (i, &v) in buf.iter().enumerate() {
        if same(v, layout.sentinel) {
            continue;
        }
        let (region, offset, context) = if i < g {
            (GuardRegion::Front, i, &buf[..g])
        } else if i >= region_end {
            (GuardRegion::Back, i - region_end, &buf[region_end..])
        } else if layout.is_data_slot(i - g) {
            continue;
        } else {
            (GuardRegion::Internal, i - g, &buf[g..region_end])
        };
        violations.push(GuardViolation {
            region,
            offset,
            value: v,
            context: context.to_vec(),
        });
    }
    violations
}

/// Reports writes into the padding columns `cols..lda` of a row-major
/// matrix whose padding was filled with `sentinel`.
///
/// Offsets are absolute indices into `a`.
pub fn scan_matrix_padding(
    a: &[f64],
    rows: usize,
    cols: usize,
    lda: usize,
    sentinel: f64,
) -> Vec<GuardViolation> {
    let mut violations = Vec::new();
    for i in 0..rows {
        let row_start = i * lda;
        let pad_end = (row_start + lda).min(a.len());
        if row_start + cols >= pad_end {
            continue;
        }
        let padding = &a[row_start + cols..pad_end];
        for (j, &v) in padding.iter().enumerate() {
            if !same(v, sentinel) {
                violations.push(GuardViolation {
                    region: GuardRegion::Internal,
                    offset: row_start + cols + j,
                    value: v,
                    context: padding.to_vec(),
                });
            }
        }
    }
    violations
}

/// True if every element of `x` equals `sentinel` (NaN-aware).
pub fn all_sentinel(x: &[f64], sentinel: f64) -> bool {
    x.iter().all(|&v| same(v, sentinel))
}

/// True if `x` holds `reference[i]` at every `i*|inc|`.
pub fn equal_strided(reference: &[f64], x: &[f64], inc: isize) -> bool {
    let inc = inc.unsigned_abs();
    reference
        .iter()
        .enumerate()
        .all(|(i, &r)| x.get(i * inc).is_some_and(|&v| same(v, r)))
}

/// True if any non-stride slot of `x` no longer holds `sentinel`.
pub fn non_strided_write(x: &[f64], inc: isize, sentinel: f64) -> bool {
    let inc = inc.unsigned_abs();
    x.iter()
        .enumerate()
        .any(|(i, &v)| i % inc != 0 && !same(v, sentinel))
}
