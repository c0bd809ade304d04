//! LAPACK auxiliary routines.

pub mod dlasr;

pub use dlasr::dlasr;

/// Plane used by the `k`-th rotation of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pivot {
    /// Rotation `k` acts in plane `(k, k+1)`.
    Variable,
    /// Rotation `k` acts in plane `(0, k+1)`.
    Top,
    /// Rotation `k` acts in plane `(k, z-1)` where `z` is the matrix order.
    Bottom,
}

/// Order in which a rotation sequence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direct {
    /// `P = P(z-2) * ... * P(1) * P(0)`
    Forward,
    /// `P = P(0) * P(1) * ... * P(z-2)`
    Backward,
}

impl Direct {
    /// The opposite application order.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}
