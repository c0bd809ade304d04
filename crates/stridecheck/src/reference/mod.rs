//! Reference-model cross-checking.
//!
//! The fast implicit routine is compared against a slow explicit one: every
//! elementary transformation is materialized as a dense matrix, the matrices
//! are composed, and the product is applied with `gemm`.

pub mod dlasr;
pub mod rotation;

pub use dlasr::{dlasr_trial, DlasrTrial};
pub use rotation::{apply_reference, cumulative_rotation, rotation_matrix};
