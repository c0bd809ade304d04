//! # stridecheck
//!
//! Verification harness for strided `f64` kernels. Kernels run against
//! guarded buffers whose sentinels expose any write outside the declared
//! footprint. Their results are judged by a NaN-aware tolerance oracle or,
//! for matrix routines, by an explicit reference model built from `gemm`.
//!
//! ## Modules
//!
//! - [`guard`]: guarded strided vectors
//! - [`validate`]: sentinel scanning and front/back/internal classification
//! - [`approx`]: NaN-aware approximate equality and ULP distance
//! - [`readonly`]: snapshots of arguments a kernel must not modify
//! - [`reference`]: explicit rotation matrices and the Dlasr cross-check
//! - [`enumerate`]: deterministic Cartesian products over test axes
//! - [`capability`]: one trait per kernel family under test
//! - [`rng`]: seeded trial generator
//! - [`report`]: per-trial and per-suite failure collection
//! - [`suites`]: drivers tying the above together per kernel family
//! - [`config`]: YAML suite configuration and validation
//! - [`error`]: error types

#![allow(clippy::too_many_arguments, clippy::cast_possible_wrap, clippy::float_cmp)]

pub mod approx;
pub mod capability;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod guard;
pub mod readonly;
pub mod reference;
pub mod report;
pub mod rng;
pub mod suites;
pub mod validate;

pub use config::{load_suite_config, parse_suite_config, parse_suite_config_str, validate_suite_config, SuiteConfig};
pub use error::{HarnessError, Severity, Violation};
pub use guard::{GuardSpec, GuardedVector, Layout};
pub use report::{Failure, FailureKind, SuiteReport, TrialReport};
pub use rng::TrialRng;
