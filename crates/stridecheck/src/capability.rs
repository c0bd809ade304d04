//! One trait per kernel family under test.
//!
//! Each trait has a blanket impl for functions and closures of the matching
//! shape, so `stridecheck_kernels::level1::scal_inc` can be passed directly.
//! Closures need annotated reference parameters to be general over their
//! lifetimes.

use stridecheck_kernels::lapack::{Direct, Pivot};
use stridecheck_kernels::Side;

/// In-place strided transform, `x <- f(alpha, x)`.
pub trait StridedScale {
    fn scale(&self, alpha: f64, x: &mut [f64], n: usize, incx: usize);
}

/// Out-of-place strided transform, `dst <- f(alpha, x)`.
pub trait StridedScaleTo {
    fn scale_to(&self, dst: &mut [f64], incdst: usize, alpha: f64, x: &[f64], n: usize, incx: usize);
}

/// Two-vector strided transform, `y <- f(alpha, x, y)`.
pub trait StridedUpdate {
    fn update(
        &self,
        alpha: f64,
        x: &[f64],
        y: &mut [f64],
        n: usize,
        incx: isize,
        incy: isize,
        ix: usize,
        iy: usize,
    );
}

/// Three-vector strided transform, `dst <- f(alpha, x, y)`.
pub trait StridedUpdateTo {
    fn update_to(
        &self,
        dst: &mut [f64],
        incdst: isize,
        idst: usize,
        alpha: f64,
        x: &[f64],
        y: &[f64],
        n: usize,
        incx: isize,
        incy: isize,
        ix: usize,
        iy: usize,
    );
}

/// Two-vector strided reduction to a scalar.
pub trait StridedReduce {
    fn reduce(
        &self,
        x: &[f64],
        y: &[f64],
        n: usize,
        incx: isize,
        incy: isize,
        ix: usize,
        iy: usize,
    ) -> f64;
}

/// Contiguous in-place transform.
pub trait UnitaryScale {
    fn scale(&self, alpha: f64, x: &mut [f64]);
}

/// Contiguous out-of-place transform.
pub trait UnitaryScaleTo {
    fn scale_to(&self, dst: &mut [f64], alpha: f64, x: &[f64]);
}

/// Contiguous `y <- f(alpha, x, y)`.
pub trait UnitaryUpdate {
    fn update(&self, alpha: f64, x: &[f64], y: &mut [f64]);
}

/// Contiguous `dst <- f(alpha, x, y)`.
pub trait UnitaryUpdateTo {
    fn update_to(&self, dst: &mut [f64], alpha: f64, x: &[f64], y: &[f64]);
}

/// Contiguous reduction to a scalar.
pub trait UnitaryReduce {
    fn reduce(&self, x: &[f64], y: &[f64]) -> f64;
}

/// Applies a sequence of plane rotations to a row-major matrix.
pub trait Dlasrer {
    fn dlasr(
        &self,
        side: Side,
        pivot: Pivot,
        direct: Direct,
        m: usize,
        n: usize,
        c: &[f64],
        s: &[f64],
        a: &mut [f64],
        lda: usize,
    );
}

impl<F> StridedScale for F
where
    F: Fn(f64, &mut [f64], usize, usize),
{
    fn scale(&self, alpha: f64, x: &mut [f64], n: usize, incx: usize) {
        self(alpha, x, n, incx);
    }
}

impl<F> StridedScaleTo for F
where
    F: Fn(&mut [f64], usize, f64, &[f64], usize, usize),
{
    fn scale_to(&self, dst: &mut [f64], incdst: usize, alpha: f64, x: &[f64], n: usize, incx: usize) {
        self(dst, incdst, alpha, x, n, incx);
    }
}

impl<F> StridedUpdate for F
where
    F: Fn(f64, &[f64], &mut [f64], usize, isize, isize, usize, usize),
{
    fn update(
        &self,
        alpha: f64,
        x: &[f64],
        y: &mut [f64],
        n: usize,
        incx: isize,
        incy: isize,
        ix: usize,
        iy: usize,
    ) {
        self(alpha, x, y, n, incx, incy, ix, iy);
    }
}

impl<F> StridedUpdateTo for F
where
    F: Fn(&mut [f64], isize, usize, f64, &[f64], &[f64], usize, isize, isize, usize, usize),
{
    fn update_to(
        &self,
        dst: &mut [f64],
        incdst: isize,
        idst: usize,
        alpha: f64,
        x: &[f64],
        y: &[f64],
        n: usize,
        incx: isize,
        incy: isize,
        ix: usize,
        iy: usize,
    ) {
        self(dst, incdst, idst, alpha, x, y, n, incx, incy, ix, iy);
    }
}

impl<F> StridedReduce for F
where
    F: Fn(&[f64], &[f64], usize, isize, isize, usize, usize) -> f64,
{
    fn reduce(
        &self,
        x: &[f64],
        y: &[f64],
        n: usize,
        incx: isize,
        incy: isize,
        ix: usize,
        iy: usize,
    ) -> f64 {
        self(x, y, n, incx, incy, ix, iy)
    }
}

impl<F> UnitaryScale for F
where
    F: Fn(f64, &mut [f64]),
{
    fn scale(&self, alpha: f64, x: &mut [f64]) {
        self(alpha, x);
    }
}

impl<F> UnitaryScaleTo for F
where
    F: Fn(&mut [f64], f64, &[f64]),
{
    fn scale_to(&self, dst: &mut [f64], alpha: f64, x: &[f64]) {
        self(dst, alpha, x);
    }
}

impl<F> UnitaryUpdate for F
where
    F: Fn(f64, &[f64], &mut [f64]),
{
    fn update(&self, alpha: f64, x: &[f64], y: &mut [f64]) {
        self(alpha, x, y);
    }
}

impl<F> UnitaryUpdateTo for F
where
    F: Fn(&mut [f64], f64, &[f64], &[f64]),
{
    fn update_to(&self, dst: &mut [f64], alpha: f64, x: &[f64], y: &[f64]) {
        self(dst, alpha, x, y);
    }
}

impl<F> UnitaryReduce for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    fn reduce(&self, x: &[f64], y: &[f64]) -> f64 {
        self(x, y)
    }
}

impl<F> Dlasrer for F
where
    F: Fn(Side, Pivot, Direct, usize, usize, &[f64], &[f64], &mut [f64], usize),
{
    fn dlasr(
        &self,
        side: Side,
        pivot: Pivot,
        direct: Direct,
        m: usize,
        n: usize,
        c: &[f64],
        s: &[f64],
        a: &mut [f64],
        lda: usize,
    ) {
        self(side, pivot, direct, m, n, c, s, a, lda);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stridecheck_kernels::level1;

    fn run_scale<K: StridedScale>(k: &K, x: &mut [f64]) {
        k.scale(2.0, x, 2, 2);
    }

    #[test]
    fn kernel_fns_satisfy_traits() {
        let mut x = vec![1.0, 9.0, 3.0];
        run_scale(&level1::scal_inc, &mut x);
        assert_eq!(x, vec![2.0, 9.0, 6.0]);

        let y = [1.0, 1.0];
        assert_eq!(StridedReduce::reduce(&level1::dot_inc, &[2.0, 3.0], &y, 2, 1, 1, 0, 0), 5.0);
        assert_eq!(UnitaryReduce::reduce(&level1::dot_unitary, &[2.0, 3.0], &y), 5.0);
    }

    #[test]
    fn closures_satisfy_traits() {
        let doubled = |alpha: f64, x: &mut [f64]| level1::scal_unitary(2.0 * alpha, x);
        let mut x = vec![1.0, 2.0];
        UnitaryScale::scale(&doubled, 1.5, &mut x);
        assert_eq!(x, vec![3.0, 6.0]);
    }

    #[test]
    fn dlasr_fn_is_a_dlasrer() {
        let mut a = vec![1.0, 2.0, 3.0, 4.0];
        Dlasrer::dlasr(
            &stridecheck_kernels::lapack::dlasr,
            Side::Left,
            Pivot::Variable,
            Direct::Forward,
            2,
            2,
            &[0.0],
            &[1.0],
            &mut a,
            2,
        );
        assert_eq!(a, vec![3.0, 4.0, -1.0, -2.0]);
    }
}
