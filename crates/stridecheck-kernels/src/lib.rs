//! # stridecheck-kernels
//!
//! The `f64` kernels exercised by the `stridecheck` harness.
//!
//! ## Modules
//!
//! - [`level1`]: Strided and unitary Level-1 routines (`scal`, `axpy`, `dot`)
//! - [`gemm`]: Dense row-major general matrix multiply
//! - [`lapack`]: `dlasr`, a sequence of plane rotations applied to a matrix
//!
//! Unitary routines come in two variants:
//! - `fn {name}_unitary(...)`: Pure Rust scalar reference
//! - `unsafe fn {name}_unitary_avx2(...)`: AVX2 SIMD implementation
//!
//! Strided routines follow the BLAS convention for negative increments: the
//! caller passes the start index (`ix`, `iy`) of the first visited element,
//! which for `inc < 0` is `(n-1)*|inc|`.

// Kernel code naturally uses single-character math variable names and
// unsafe intrinsics inside unsafe fns.
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::needless_range_loop,
    clippy::float_cmp,
    clippy::doc_markdown,
    unsafe_op_in_unsafe_fn
)]

pub mod gemm;
pub mod lapack;
pub mod level1;

/// Backend selector for unitary kernel dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Pure Rust scalar reference implementation.
    Scalar,
    /// x86-64 AVX2 SIMD implementation.
    Avx2,
}

impl Backend {
    /// Whether the running CPU can execute this backend.
    #[inline]
    pub fn is_supported(self) -> bool {
        match self {
            Self::Scalar => true,
            #[cfg(target_arch = "x86_64")]
            Self::Avx2 => is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma"),
            #[cfg(not(target_arch = "x86_64"))]
            Self::Avx2 => false,
        }
    }

    /// Backends usable on the running CPU, scalar first.
    pub fn available() -> Vec<Backend> {
        [Backend::Scalar, Backend::Avx2]
            .into_iter()
            .filter(|b| b.is_supported())
            .collect()
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Scalar => "scalar",
            Self::Avx2 => "avx2",
        };
        write!(f, "{s}")
    }
}

/// Which side of the matrix a transformation multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Transpose flag for [`gemm::dgemm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transpose {
    NoTrans,
    Trans,
}
