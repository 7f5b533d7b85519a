// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations and tolerances.

/// The tolerance used when no explicit epsilon is given.
///
/// Coefficients whose magnitude is at most this value are treated as zero
/// when classifying the degree of a polynomial.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// The default iteration cap for [`DurandKerner`](crate::DurandKerner).
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("bezpoly requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cbrt(self) -> Self => cbrt;
    fn ceil(self) -> Self => ceil;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn ln(self) -> Self => log;
    fn log2(self) -> Self => log2;
    fn mul_add(self, a: Self, b: Self) -> Self => fma;
    fn powi(self, n: i32) -> Self => pow;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// Do `x` and `y` lie on different sides of zero?
///
/// Zero counts as positive.
#[inline]
pub(crate) fn different_signs(x: f64, y: f64) -> bool {
    (x < 0.0) != (y < 0.0)
}

/// Solve an arbitrary function for a zero-crossing.
///
/// This uses the [ITP method], as described in the paper
/// [An Enhancement of the Bisection Method Average Performance Preserving Minmax Optimality].
///
/// The values of `ya` and `yb` are given as arguments rather than
/// computed from `f`, as the values may already be known, or they may
/// be less expensive to compute as special cases.
///
/// It is assumed that `ya < 0.0` and `yb > 0.0`, otherwise unexpected
/// results may occur.
///
/// The value of `epsilon` must be larger than 2^-63 times `b - a`,
/// otherwise integer overflow may occur. The `a` and `b` parameters
/// represent the lower and upper bounds of the bracket searched for a
/// solution.
///
/// The ITP method has tuning parameters. This implementation hardwires
/// k2 to 2, both because it avoids an expensive floating point
/// exponentiation, and because this value has been tested to work well
/// with polynomial root refinement.
///
/// The `n0` parameter controls the relative impact of the bisection and
/// secant components. When it is 0, the number of iterations is
/// guaranteed to be no more than the number required by bisection. A
/// value of 1 gives the secant method more of a chance to engage on
/// smooth functions.
///
/// To match the paper, a value of `0.2 / (b - a)` is suggested for `k1`.
///
/// [ITP method]: https://en.wikipedia.org/wiki/ITP_Method
/// [An Enhancement of the Bisection Method Average Performance Preserving Minmax Optimality]: https://dl.acm.org/doi/10.1145/3423597
#[allow(clippy::too_many_arguments)]
pub fn solve_itp(
    mut f: impl FnMut(f64) -> f64,
    mut a: f64,
    mut b: f64,
    epsilon: f64,
    n0: usize,
    k1: f64,
    mut ya: f64,
    mut yb: f64,
) -> f64 {
    let n1_2 = (((b - a) / epsilon).log2().ceil() - 1.0).max(0.0) as usize;
    let nmax = n0 + n1_2;
    let mut scaled_epsilon = epsilon * (1u64 << nmax) as f64;
    while b - a > 2.0 * epsilon {
        let x1_2 = 0.5 * (a + b);
        let r = scaled_epsilon - 0.5 * (b - a);
        let xf = (yb * a - ya * b) / (yb - ya);
        let sigma = x1_2 - xf;
        // This has k2 = 2 hardwired for efficiency.
        let delta = k1 * (b - a).powi(2);
        let xt = if delta <= (x1_2 - xf).abs() {
            xf + delta.copysign(sigma)
        } else {
            x1_2
        };
        let xitp = if (xt - x1_2).abs() <= r {
            xt
        } else {
            x1_2 - r.copysign(sigma)
        };
        let yitp = f(xitp);
        if yitp > 0.0 {
            b = xitp;
            yb = yitp;
        } else if yitp < 0.0 {
            a = xitp;
            ya = yitp;
        } else {
            return xitp;
        }
        scaled_epsilon *= 0.5;
    }
    0.5 * (a + b)
}

/// Finds the zero-crossing of `f` inside a sign-changing bracket.
///
/// Unlike [`solve_itp`], the bracket values may have either orientation.
pub(crate) fn refine_bracket(
    f: impl Fn(f64) -> f64,
    lower: f64,
    upper: f64,
    f_lower: f64,
    f_upper: f64,
) -> f64 {
    let width = upper - lower;
    let epsilon = (width.abs().max(lower.abs()).max(upper.abs()) * f64::EPSILON)
        .max(width * 2f64.powi(-60))
        .max(f64::MIN_POSITIVE);
    let k1 = 0.2 / width;
    if f_lower < 0.0 {
        solve_itp(f, lower, upper, epsilon, 1, k1, f_lower, f_upper)
    } else {
        solve_itp(|x| -f(x), lower, upper, epsilon, 1, k1, -f_lower, -f_upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_itp() {
        let f = |x: f64| x.powi(3) - x - 2.0;
        let x = solve_itp(f, 1., 2., 1e-12, 0, 0.2, f(1.), f(2.));
        assert!(f(x).abs() < 6e-12);
    }

    #[test]
    fn refine_decreasing_bracket() {
        let f = |x: f64| 2.0 - x * x;
        let x = refine_bracket(f, 0.0, 3.0, f(0.0), f(3.0));
        assert!((x - 2f64.sqrt()).abs() < 1e-14);
    }

    #[test]
    fn zero_counts_as_positive() {
        assert!(different_signs(-1.0, 0.0));
        assert!(!different_signs(0.0, 3.0));
        assert!(!different_signs(-1.0, -0.5));
    }
}
