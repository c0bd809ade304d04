//! Level-1 suites: strided kernels over `lengths × incs × alphas`, unitary
//! kernels over `lengths × alignment offsets × alphas`.
//!
//! Strided kernels that take a start index receive the whole guarded
//! allocation, so a write one step too far in either direction lands in a
//! guard. Kernels without a start index receive the data region through the
//! back guard.
//!
//! A kernel that panics fails its trial; guards and read-only arguments are
//! still checked, values are not.

use crate::capability::{
    StridedReduce, StridedScale, StridedScaleTo, StridedUpdate, StridedUpdateTo, UnitaryReduce,
    UnitaryScale, UnitaryScaleTo, UnitaryUpdate, UnitaryUpdateTo,
};
use crate::config::SuiteConfig;
use crate::enumerate::{align2, align3, inc_set, inc_to_set, product2, product3, ALIGN1};
use crate::guard::GuardedVector;
use crate::readonly::Snapshot;
use crate::report::{SuiteReport, TrialReport};
use crate::rng::TrialRng;

/// Dense index of the `k`-th element visited with increment `inc`.
fn visit(n: usize, inc: isize, k: usize) -> usize {
    if inc < 0 {
        n - 1 - k
    } else {
        k
    }
}

/// `x <- alpha*x` over every `(n, |inc|, alpha)`.
pub fn scale_suite<K: StridedScale + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;
    let incs = cfg.inc_magnitudes();

    for (i, (n, inc, alpha)) in product3(&cfg.axes.lengths, &incs, &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} inc={inc} alpha={alpha}"));
        let data = rng.vec(n);
        let mut x = GuardedVector::strided(&data, inc as isize, cfg.guard_spec());

        let ran = trial.run(|| kernel.scale(alpha, x.tail_mut(), n, inc)).is_some();

        trial.check_guards("x", &x);
        let want: Vec<f64> = data.iter().map(|v| alpha * v).collect();
        if ran {
            trial.check_values(&x.strided_values(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// `dst <- alpha*x` over every `(n, (|incdst|, |incx|), alpha)`.
pub fn scale_to_suite<K: StridedScaleTo + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;
    let spec = cfg.guard_spec();
    let incs = cfg.inc_magnitudes();

    for (i, (n, (incdst, incx), alpha)) in product3(&cfg.axes.lengths, &product2(&incs, &incs), &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} incdst={incdst} incx={incx} alpha={alpha}"));
        let xd = rng.vec(n);
        let x = GuardedVector::strided(&xd, incx as isize, spec);
        let mut dst = GuardedVector::strided(&rng.vec(n), incdst as isize, spec);
        let x_orig = Snapshot::take(x.whole());

        let ran = trial
            .run(|| kernel.scale_to(dst.tail_mut(), incdst, alpha, x.tail(), n, incx))
            .is_some();

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_guards("x", &x);
        trial.check_guards("dst", &dst);
        let want: Vec<f64> = xd.iter().map(|v| alpha * v).collect();
        if ran {
            trial.check_values(&dst.strided_values(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// `y <- alpha*x + y` over every `(n, (incx, incy), alpha)`.
pub fn update_suite<K: StridedUpdate + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;
    let spec = cfg.guard_spec();

    for (i, (n, inc, alpha)) in product3(&cfg.axes.lengths, &inc_set(&cfg.axes.incs), &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} inc {inc} alpha={alpha}"));
        let xd = rng.vec(n);
        let yd = rng.vec(n);
        let x = GuardedVector::strided(&xd, inc.x, spec);
        let mut y = GuardedVector::strided(&yd, inc.y, spec);
        let x_orig = Snapshot::take(x.whole());
        let (ix, iy) = (x.first_index(inc.x), y.first_index(inc.y));

        let ran = trial
            .run(|| kernel.update(alpha, x.whole(), y.whole_mut(), n, inc.x, inc.y, ix, iy))
            .is_some();

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_guards("x", &x);
        trial.check_guards("y", &y);
        let mut want = yd.clone();
        for k in 0..n {
            want[visit(n, inc.y, k)] += alpha * xd[visit(n, inc.x, k)];
        }
        if ran {
            trial.check_values(&y.strided_values(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// `dst <- alpha*x + y` over every `(n, (incdst, incx, incy), alpha)`.
pub fn update_to_suite<K: StridedUpdateTo + ?Sized>(
    name: &str,
    kernel: &K,
    cfg: &SuiteConfig,
) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;
    let spec = cfg.guard_spec();

    for (i, (n, inc, alpha)) in product3(&cfg.axes.lengths, &inc_to_set(&cfg.axes.incs), &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} inc {inc} alpha={alpha}"));
        let xd = rng.vec(n);
        let yd = rng.vec(n);
        let dd = rng.vec(n);
        let x = GuardedVector::strided(&xd, inc.x, spec);
        let y = GuardedVector::strided(&yd, inc.y, spec);
        let mut dst = GuardedVector::strided(&dd, inc.dst, spec);
        let x_orig = Snapshot::take(x.whole());
        let y_orig = Snapshot::take(y.whole());
        let (ix, iy, idst) = (x.first_index(inc.x), y.first_index(inc.y), dst.first_index(inc.dst));

        let ran = trial
            .run(|| {
                kernel.update_to(dst.whole_mut(), inc.dst, idst, alpha, x.whole(), y.whole(), n, inc.x, inc.y, ix, iy);
            })
            .is_some();

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_read_only("y", &y_orig, y.whole());
        for (label, v) in [("x", &x), ("y", &y), ("dst", &dst)] {
            trial.check_guards(label, v);
        }
        let mut want = vec![0.0; n];
        for k in 0..n {
            want[visit(n, inc.dst, k)] = alpha * xd[visit(n, inc.x, k)] + yd[visit(n, inc.y, k)];
        }
        if ran {
            trial.check_values(&dst.strided_values(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// `sum x*y` over every `(n, (incx, incy))`.
pub fn reduce_suite<K: StridedReduce + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;
    let spec = cfg.guard_spec();

    for (i, (n, inc)) in product2(&cfg.axes.lengths, &inc_set(&cfg.axes.incs))
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} inc {inc}"));
        let xd = rng.vec(n);
        let yd = rng.vec(n);
        let x = GuardedVector::strided(&xd, inc.x, spec);
        let y = GuardedVector::strided(&yd, inc.y, spec);
        let x_orig = Snapshot::take(x.whole());
        let y_orig = Snapshot::take(y.whole());

        let (ix, iy) = (x.first_index(inc.x), y.first_index(inc.y));
        let got = trial.run(|| kernel.reduce(x.whole(), y.whole(), n, inc.x, inc.y, ix, iy));

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_read_only("y", &y_orig, y.whole());
        trial.check_guards("x", &x);
        trial.check_guards("y", &y);
        let want: f64 = (0..n).map(|k| xd[visit(n, inc.x, k)] * yd[visit(n, inc.y, k)]).sum();
        if let Some(got) = got {
            trial.check_value(0, got, want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// Contiguous `x <- alpha*x` at every alignment offset.
pub fn unitary_scale_suite<K: UnitaryScale + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;

    for (i, (n, align, alpha)) in product3(&cfg.axes.lengths, &ALIGN1, &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} align={align} alpha={alpha}"));
        let data = rng.vec(n);
        let mut x = GuardedVector::contiguous(&data, cfg.unitary_guard_spec(align));

        let ran = trial.run(|| kernel.scale(alpha, x.vector_mut())).is_some();

        trial.check_guards("x", &x);
        let want: Vec<f64> = data.iter().map(|v| alpha * v).collect();
        if ran {
            trial.check_values(x.vector(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// Contiguous `dst <- alpha*x` at every pair of alignment offsets.
pub fn unitary_scale_to_suite<K: UnitaryScaleTo + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;

    for (i, (n, align, alpha)) in product3(&cfg.axes.lengths, &align2(), &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} align dst={} x={} alpha={alpha}", align.y, align.x));
        let xd = rng.vec(n);
        let x = GuardedVector::contiguous(&xd, cfg.unitary_guard_spec(align.x));
        let mut dst = GuardedVector::contiguous(&rng.vec(n), cfg.unitary_guard_spec(align.y));
        let x_orig = Snapshot::take(x.whole());

        let ran = trial.run(|| kernel.scale_to(dst.vector_mut(), alpha, x.vector())).is_some();

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_guards("x", &x);
        trial.check_guards("dst", &dst);
        let want: Vec<f64> = xd.iter().map(|v| alpha * v).collect();
        if ran {
            trial.check_values(dst.vector(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// Contiguous `y <- alpha*x + y` at every pair of alignment offsets.
pub fn unitary_update_suite<K: UnitaryUpdate + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;

    for (i, (n, align, alpha)) in product3(&cfg.axes.lengths, &align2(), &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} align {align} alpha={alpha}"));
        let xd = rng.vec(n);
        let yd = rng.vec(n);
        let x = GuardedVector::contiguous(&xd, cfg.unitary_guard_spec(align.x));
        let mut y = GuardedVector::contiguous(&yd, cfg.unitary_guard_spec(align.y));
        let x_orig = Snapshot::take(x.whole());

        let ran = trial.run(|| kernel.update(alpha, x.vector(), y.vector_mut())).is_some();

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_guards("x", &x);
        trial.check_guards("y", &y);
        let want: Vec<f64> = xd.iter().zip(&yd).map(|(a, b)| alpha * a + b).collect();
        if ran {
            trial.check_values(y.vector(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// Contiguous `dst <- alpha*x + y` at every triple of alignment offsets.
pub fn unitary_update_to_suite<K: UnitaryUpdateTo + ?Sized>(
    name: &str,
    kernel: &K,
    cfg: &SuiteConfig,
) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;

    for (i, (n, align, alpha)) in product3(&cfg.axes.lengths, &align3(), &cfg.axes.alphas)
        .into_iter()
        .enumerate()
    {
        let mut trial = TrialReport::new(i, format!("n={n} align {align} alpha={alpha}"));
        let xd = rng.vec(n);
        let yd = rng.vec(n);
        let x = GuardedVector::contiguous(&xd, cfg.unitary_guard_spec(align.x));
        let y = GuardedVector::contiguous(&yd, cfg.unitary_guard_spec(align.y));
        let mut dst = GuardedVector::contiguous(&rng.vec(n), cfg.unitary_guard_spec(align.dst));
        let x_orig = Snapshot::take(x.whole());
        let y_orig = Snapshot::take(y.whole());

        let ran = trial
            .run(|| kernel.update_to(dst.vector_mut(), alpha, x.vector(), y.vector()))
            .is_some();

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_read_only("y", &y_orig, y.whole());
        for (label, v) in [("x", &x), ("y", &y), ("dst", &dst)] {
            trial.check_guards(label, v);
        }
        let want: Vec<f64> = xd.iter().zip(&yd).map(|(a, b)| alpha * a + b).collect();
        if ran {
            trial.check_values(dst.vector(), &want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}

/// Contiguous `sum x*y` at every pair of alignment offsets.
pub fn unitary_reduce_suite<K: UnitaryReduce + ?Sized>(name: &str, kernel: &K, cfg: &SuiteConfig) -> SuiteReport {
    let mut rng = TrialRng::new(cfg.seed);
    let mut suite = SuiteReport::new(name);
    let tol = cfg.tolerances.value;

    for (i, (n, align)) in product2(&cfg.axes.lengths, &align2()).into_iter().enumerate() {
        let mut trial = TrialReport::new(i, format!("n={n} align {align}"));
        let xd = rng.vec(n);
        let yd = rng.vec(n);
        let x = GuardedVector::contiguous(&xd, cfg.unitary_guard_spec(align.x));
        let y = GuardedVector::contiguous(&yd, cfg.unitary_guard_spec(align.y));
        let x_orig = Snapshot::take(x.whole());
        let y_orig = Snapshot::take(y.whole());

        let got = trial.run(|| kernel.reduce(x.vector(), y.vector()));

        trial.check_read_only("x", &x_orig, x.whole());
        trial.check_read_only("y", &y_orig, y.whole());
        trial.check_guards("x", &x);
        trial.check_guards("y", &y);
        let want: f64 = xd.iter().zip(&yd).map(|(a, b)| a * b).sum();
        if let Some(got) = got {
            trial.check_value(0, got, want, tol);
        }
        suite.record(trial);
    }
    suite.finish()
}
