//! General matrix multiply, row-major.
//!
//! C\[i,j\] = alpha * sum_k op(A)\[i,k\] * op(B)\[k,j\] + beta * C\[i,j\]

use crate::Transpose;

/// Dense row-major matrix with an explicit row stride.
///
/// Element `(i, j)` lives at `data[i * stride + j]`; `stride >= cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct General {
    pub rows: usize,
    pub cols: usize,
    pub stride: usize,
    pub data: Vec<f64>,
}

impl General {
    /// A `rows x cols` zero matrix with `stride == cols`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            stride: cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// The `n x n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wraps existing row-major storage.
    ///
    /// # Panics
    /// Panics if `stride < cols` or `data` is too short for the shape.
    pub fn from_parts(rows: usize, cols: usize, stride: usize, data: Vec<f64>) -> Self {
        assert!(stride >= cols.max(1), "stride {stride} smaller than cols {cols}");
        assert!(
            rows == 0 || data.len() >= (rows - 1) * stride + cols,
            "data length {} too short for {rows}x{cols} with stride {stride}",
            data.len()
        );
        Self {
            rows,
            cols,
            stride,
            data,
        }
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.stride + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        self.data[i * self.stride + j] = v;
    }
}

/// Raw-slice GEMM: `C = alpha*op(A)*op(B) + beta*C`.
///
/// `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`. Leading dimensions
/// are row strides of the stored (untransposed) matrices. When `beta == 0`,
/// `C` is overwritten without being read, so NaN in `C` does not propagate.
///
/// # Panics
/// Panics if a leading dimension is smaller than the stored row length or a
/// slice is too short.
pub fn dgemm(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f64,
    a: &[f64],
    lda: usize,
    b: &[f64],
    ldb: usize,
    beta: f64,
    c: &mut [f64],
    ldc: usize,
) {
    let (a_rows, a_cols) = match trans_a {
        Transpose::NoTrans => (m, k),
        Transpose::Trans => (k, m),
    };
    let (b_rows, b_cols) = match trans_b {
        Transpose::NoTrans => (k, n),
        Transpose::Trans => (n, k),
    };
    assert!(lda >= a_cols.max(1), "lda {lda} < {a_cols}");
    assert!(ldb >= b_cols.max(1), "ldb {ldb} < {b_cols}");
    assert!(ldc >= n.max(1), "ldc {ldc} < {n}");
    assert!(a_rows == 0 || a.len() >= (a_rows - 1) * lda + a_cols, "A too short");
    assert!(b_rows == 0 || b.len() >= (b_rows - 1) * ldb + b_cols, "B too short");
    assert!(m == 0 || c.len() >= (m - 1) * ldc + n, "C too short");

    let a_at = |i: usize, p: usize| match trans_a {
        Transpose::NoTrans => a[i * lda + p],
        Transpose::Trans => a[p * lda + i],
    };
    let b_at = |p: usize, j: usize| match trans_b {
        Transpose::NoTrans => b[p * ldb + j],
        Transpose::Trans => b[j * ldb + p],
    };

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a_at(i, p) * b_at(p, j);
            }
            let dst = &mut c[i * ldc + j];
            *dst = if beta == 0.0 {
                alpha * sum
            } else {
                alpha * sum + beta * *dst
            };
        }
    }
}

/// [`dgemm`] over [`General`] matrices.
///
/// # Panics
/// Panics if the shapes of `op(a)`, `op(b)` and `c` are incompatible.
pub fn gemm(
    trans_a: Transpose,
    trans_b: Transpose,
    alpha: f64,
    a: &General,
    b: &General,
    beta: f64,
    c: &mut General,
) {
    let (m, ka) = match trans_a {
        Transpose::NoTrans => (a.rows, a.cols),
        Transpose::Trans => (a.cols, a.rows),
    };
    let (kb, n) = match trans_b {
        Transpose::NoTrans => (b.rows, b.cols),
        Transpose::Trans => (b.cols, b.rows),
    };
    assert_eq!(ka, kb, "inner dimension mismatch: {ka} vs {kb}");
    assert_eq!((c.rows, c.cols), (m, n), "C shape mismatch");
    dgemm(
        trans_a, trans_b, m, n, ka, alpha, &a.data, a.stride, &b.data, b.stride, beta,
        &mut c.data, c.stride,
    );
}
