//! Deterministic Cartesian products over test axes.
//!
//! Every product is lexicographic in axis order, so a failing case is
//! reproducible from its index alone.

use std::fmt;

use stridecheck_kernels::lapack::{Direct, Pivot};
use stridecheck_kernels::Side;

/// Alignment offsets for single-vector unitary routines.
pub const ALIGN1: [usize; 2] = [0, 1];

/// Alignment offsets for two-vector unitary routines.
pub fn align2() -> Vec<IncSet<usize>> {
    inc_set(&ALIGN1)
}

/// Alignment offsets for three-vector unitary routines.
pub fn align3() -> Vec<IncToSet<usize>> {
    inc_to_set(&ALIGN1)
}

/// Two-axis configuration, e.g. `(incx, incy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncSet<T = isize> {
    pub x: T,
    pub y: T,
}

/// Three-axis configuration, e.g. `(incdst, incx, incy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncToSet<T = isize> {
    pub dst: T,
    pub x: T,
    pub y: T,
}

impl<T: fmt::Display> fmt::Display for IncSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={}", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for IncToSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dst={} x={} y={}", self.dst, self.x, self.y)
    }
}

/// All ordered pairs from `a × b`, `b` varying fastest.
pub fn product2<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter()
        .flat_map(|x| b.iter().map(move |y| (x.clone(), y.clone())))
        .collect()
}

/// All ordered triples from `a × b × c`, `c` varying fastest.
pub fn product3<A: Clone, B: Clone, C: Clone>(a: &[A], b: &[B], c: &[C]) -> Vec<(A, B, C)> {
    product2(a, b)
        .into_iter()
        .flat_map(|(x, y)| c.iter().map(move |z| (x.clone(), y.clone(), z.clone())))
        .collect()
}

/// Every `(x, y)` pair drawn from `values`.
pub fn inc_set<T: Copy>(values: &[T]) -> Vec<IncSet<T>> {
    product2(values, values)
        .into_iter()
        .map(|(x, y)| IncSet { x, y })
        .collect()
}

/// Every `(dst, x, y)` triple drawn from `values`.
pub fn inc_to_set<T: Copy>(values: &[T]) -> Vec<IncToSet<T>> {
    product3(values, values, values)
        .into_iter()
        .map(|(dst, x, y)| IncToSet { dst, x, y })
        .collect()
}

/// Matrix shape for a Dlasr trial. `lda == 0` means `lda = n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DlasrDims {
    pub m: usize,
    pub n: usize,
    pub lda: usize,
}

impl DlasrDims {
    pub fn new(m: usize, n: usize, lda: usize) -> Self {
        Self { m, n, lda }
    }

    /// Why the shape cannot be run, or `None` if it can.
    pub fn problem(&self) -> Option<String> {
        if self.m == 0 || self.n == 0 {
            Some(format!("m and n must be nonzero, got {}x{}", self.m, self.n))
        } else if self.effective_lda() < self.n {
            Some(format!("lda {} smaller than n {}", self.lda, self.n))
        } else {
            None
        }
    }

    pub fn effective_lda(&self) -> usize {
        if self.lda == 0 {
            self.n
        } else {
            self.lda
        }
    }
}

/// One Dlasr configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DlasrCase {
    pub side: Side,
    pub pivot: Pivot,
    pub direct: Direct,
    pub dims: DlasrDims,
}

impl fmt::Display for DlasrCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "side={:?} pivot={:?} direct={:?} m={} n={} lda={}",
            self.side,
            self.pivot,
            self.direct,
            self.dims.m,
            self.dims.n,
            self.dims.effective_lda()
        )
    }
}

pub const SIDES: [Side; 2] = [Side::Left, Side::Right];
pub const PIVOTS: [Pivot; 3] = [Pivot::Variable, Pivot::Top, Pivot::Bottom];
pub const DIRECTS: [Direct; 2] = [Direct::Forward, Direct::Backward];

/// Side × Pivot × Direct × `dims`, in that order.
pub fn dlasr_cases(dims: &[DlasrDims]) -> Vec<DlasrCase> {
    product3(&SIDES, &PIVOTS, &DIRECTS)
        .into_iter()
        .flat_map(|(side, pivot, direct)| {
            dims.iter().map(move |&d| DlasrCase {
                side,
                pivot,
                direct,
                dims: d,
            })
        })
        .collect()
}
