//! Guarded strided vectors.
//!
//! A [`GuardedVector`] owns one allocation laid out as
//!
//! ```text
//! [front guard][d0 . . d1 . . d2][back guard]
//!  guard_len    data region        guard_len
//! ```
//!
//! where `.` slots and both guards hold the sentinel. A kernel that touches
//! only its declared strided footprint leaves every sentinel bit-identical
//! (NaN counts as equal to NaN), which [`crate::validate::scan_guards`]
//! checks after the call.

use crate::approx::same;
use crate::validate::{scan_guards, GuardViolation};

/// Sentinel value and guard length for building guarded buffers.
///
/// Equality compares sentinels with [`same`], so two NaN specs are equal.
#[derive(Debug, Clone, Copy)]
pub struct GuardSpec {
    pub sentinel: f64,
    /// Length of each end guard. `None` means `2*|inc|`.
    pub guard_len: Option<usize>,
}

impl GuardSpec {
    /// NaN sentinel with the default guard length.
    pub fn nan() -> Self {
        Self {
            sentinel: f64::NAN,
            guard_len: None,
        }
    }

    pub fn with_sentinel(sentinel: f64) -> Self {
        Self {
            sentinel,
            guard_len: None,
        }
    }

    #[must_use]
    pub fn guard_len(mut self, len: usize) -> Self {
        self.guard_len = Some(len);
        self
    }

    /// Guard length used for a vector with stride magnitude `inc`.
    pub fn resolved_guard_len(&self, inc: usize) -> usize {
        self.guard_len.unwrap_or(2 * inc)
    }
}

impl PartialEq for GuardSpec {
    fn eq(&self, other: &Self) -> bool {
        same(self.sentinel, other.sentinel) && self.guard_len == other.guard_len
    }
}

impl Default for GuardSpec {
    fn default() -> Self {
        Self::nan()
    }
}

/// How many physical slots the data region spans for `n` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `(n-1)*|inc| + 1` slots; the last element ends the region.
    Tight,
    /// `n*|inc|` slots; trailing sentinel gap after the last element.
    Padded,
}

impl Layout {
    pub fn region_len(self, n: usize, inc: usize) -> usize {
        match self {
            Self::Tight if n == 0 => 0,
            Self::Tight => (n - 1) * inc + 1,
            Self::Padded => n * inc,
        }
    }
}

/// Geometry of a guarded buffer, enough to validate it without the builder.
#[derive(Debug, Clone, Copy)]
pub struct GuardLayout {
    pub sentinel: f64,
    pub guard_len: usize,
    /// Stride magnitude, always >= 1.
    pub inc: usize,
    /// Logical element count.
    pub len: usize,
    /// Physical slots between the guards.
    pub region_len: usize,
}

impl PartialEq for GuardLayout {
    fn eq(&self, other: &Self) -> bool {
        same(self.sentinel, other.sentinel)
            && self.guard_len == other.guard_len
            && self.inc == other.inc
            && self.len == other.len
            && self.region_len == other.region_len
    }
}

impl GuardLayout {
    pub fn total_len(&self) -> usize {
        self.region_len + 2 * self.guard_len
    }

    /// True if `offset` (relative to the data region) holds a logical element.
    pub fn is_data_slot(&self, offset: usize) -> bool {
        offset < self.region_len && offset % self.inc == 0 && offset / self.inc < self.len
    }
}

/// A strided vector embedded between sentinel guards.
#[derive(Debug, Clone)]
pub struct GuardedVector {
    buf: Vec<f64>,
    layout: GuardLayout,
}

impl GuardedVector {
    /// Tight layout: data element `i` at `i*|inc|`, region ends on the last
    /// element.
    ///
    /// # Panics
    /// Panics if `inc == 0`.
    pub fn strided(data: &[f64], inc: isize, spec: GuardSpec) -> Self {
        Self::with_layout(data, inc, spec, Layout::Tight)
    }

    /// Padded layout: region is `n*|inc|` slots long.
    ///
    /// # Panics
    /// Panics if `inc == 0`.
    pub fn padded(data: &[f64], inc: isize, spec: GuardSpec) -> Self {
        Self::with_layout(data, inc, spec, Layout::Padded)
    }

    /// Contiguous data between guards; no internal sentinel slots.
    pub fn contiguous(data: &[f64], spec: GuardSpec) -> Self {
        Self::with_layout(data, 1, spec, Layout::Padded)
    }

    /// # Panics
    /// Panics if `inc == 0`.
    pub fn with_layout(data: &[f64], inc: isize, spec: GuardSpec, layout: Layout) -> Self {
        assert!(inc != 0, "stride must be nonzero, got {inc}");
        let inc = inc.unsigned_abs();
        let guard_len = spec.resolved_guard_len(inc);
        let region_len = layout.region_len(data.len(), inc);
        let geometry = GuardLayout {
            sentinel: spec.sentinel,
            guard_len,
            inc,
            len: data.len(),
            region_len,
        };
        let mut buf = vec![spec.sentinel; geometry.total_len()];
        for (i, &d) in data.iter().enumerate() {
            buf[guard_len + i * inc] = d;
        }
        Self {
            buf,
            layout: geometry,
        }
    }

    pub fn layout(&self) -> &GuardLayout {
        &self.layout
    }

    /// The data region handed to the kernel under test.
    pub fn vector(&self) -> &[f64] {
        let g = self.layout.guard_len;
        &self.buf[g..g + self.layout.region_len]
    }

    pub fn vector_mut(&mut self) -> &mut [f64] {
        let g = self.layout.guard_len;
        &mut self.buf[g..g + self.layout.region_len]
    }

    pub fn front_guard(&self) -> &[f64] {
        &self.buf[..self.layout.guard_len]
    }

    pub fn back_guard(&self) -> &[f64] {
        &self.buf[self.layout.guard_len + self.layout.region_len..]
    }

    /// The full allocation, guards included.
    pub fn whole(&self) -> &[f64] {
        &self.buf
    }

    pub fn whole_mut(&mut self) -> &mut [f64] {
        &mut self.buf
    }

    /// From the start of the data region through the end of the back guard.
    ///
    /// Kernels without a start index receive this slice, so an overrun lands
    /// in the back guard instead of panicking.
    pub fn tail(&self) -> &[f64] {
        &self.buf[self.layout.guard_len..]
    }

    pub fn tail_mut(&mut self) -> &mut [f64] {
        let g = self.layout.guard_len;
        &mut self.buf[g..]
    }

    /// Index into [`whole`](Self::whole) of the first element visited with
    /// increment `inc`: the first element for `inc > 0`, the last for
    /// `inc < 0`.
    pub fn first_index(&self, inc: isize) -> usize {
        let g = self.layout.guard_len;
        if inc < 0 && self.layout.len > 0 {
            g + (self.layout.len - 1) * self.layout.inc
        } else {
            g
        }
    }

    /// The logical elements, gathered from their stride slots.
    pub fn strided_values(&self) -> Vec<f64> {
        let v = self.vector();
        (0..self.layout.len).map(|i| v[i * self.layout.inc]).collect()
    }

    /// True if both end guards still hold the sentinel.
    pub fn guards_intact(&self) -> bool {
        let s = self.layout.sentinel;
        self.front_guard()
            .iter()
            .chain(self.back_guard())
            .all(|&v| same(v, s))
    }

    /// Every front, back and internal guard violation in the buffer.
    pub fn violations(&self) -> Vec<GuardViolation> {
        scan_guards(&self.buf, &self.layout)
    }
}
