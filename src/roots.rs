// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Real root finding: dispatch to the closed-form solvers, and root
//! isolation on an interval.

use alloc::vec::Vec;
use core::f64::consts::{LN_10, LN_2};

use num_complex::Complex64;

use crate::common::{different_signs, DEFAULT_EPSILON};
use crate::solve::{solve_cubic, solve_linear, solve_quadratic, solve_quartic, solve_quintic};
use crate::{Degree, Polynomial, Result};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Number of decimal digits [`Polynomial::bisection`] narrows an interval by.
const BISECTION_DIGITS: f64 = 6.0;

/// Roots found by bisection closer together than this are the same root.
const BISECTION_TOLERANCE: f64 = 1e-6;

impl Polynomial {
    /// Can [`roots`](Self::roots) find every real root of this polynomial?
    ///
    /// Closed-form solvers exist up to [`Degree::Quintic`].
    pub fn can_solve_real_roots(&self) -> bool {
        self.degree() <= Degree::Quintic
    }

    /// The real roots of this polynomial, in increasing order.
    ///
    /// See [`roots_with`](Self::roots_with).
    pub fn roots(&self) -> Vec<f64> {
        self.roots_with(DEFAULT_EPSILON)
    }

    /// The real roots of this polynomial, with an explicit tolerance.
    ///
    /// `epsilon` decides which leading coefficients are negligible and when
    /// a discriminant counts as zero. Repeated roots are reported once.
    ///
    /// Degrees above [`Degree::Quintic`] are not supported and give no
    /// roots; use [`complex_roots`](Self::complex_roots) or
    /// [`roots_in_interval`](Self::roots_in_interval) for those.
    ///
    /// A constant polynomial reports its own value as its only "root". This
    /// matches the behavior callers of this library have come to rely on,
    /// even though a nonzero constant has no roots. An empty polynomial has
    /// no roots.
    pub fn roots_with(&self, epsilon: f64) -> Vec<f64> {
        let c = |power| self.degree_coefficient(power);
        match self.degree_with(epsilon) {
            Degree::Constant => self.coeffs().first().copied().into_iter().collect(),
            Degree::Linear => solve_linear(c(1), c(0), epsilon).into_iter().collect(),
            Degree::Quadratic => solve_quadratic(c(2), c(1), c(0), epsilon)
                .into_iter()
                .collect(),
            Degree::Cubic => solve_cubic(c(3), c(2), c(1), c(0), epsilon)
                .into_iter()
                .collect(),
            Degree::Quartic => solve_quartic(c(4), c(3), c(2), c(1), c(0), epsilon)
                .into_iter()
                .collect(),
            Degree::Quintic => solve_quintic(c(5), c(4), c(3), c(2), c(1), c(0), epsilon)
                .into_iter()
                .collect(),
            unsupported => {
                tracing::debug!(degree = %unsupported, "no closed-form real root solver");
                Vec::new()
            }
        }
    }

    /// All roots as complex numbers.
    ///
    /// Polynomials up to [`Degree::Quintic`] use the closed-form solvers, and
    /// report their real roots only. Higher degrees use the
    /// [Durand–Kerner](DurandKerner) method with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`](crate::Error::NonConvergence) if
    /// Durand–Kerner doesn't converge.
    pub fn real_or_complex_roots(&self) -> Result<Vec<Complex64>> {
        if self.can_solve_real_roots() {
            Ok(self
                .roots()
                .into_iter()
                .map(|re| Complex64::new(re, 0.0))
                .collect())
        } else {
            self.complex_roots().into_result()
        }
    }

    /// Finds a root between `min` and `max` by bisection.
    ///
    /// If the polynomial is within `epsilon` of zero at either end, that end
    /// is returned. Otherwise the polynomial must change sign over the
    /// interval, which is then halved until it's about a millionth of its
    /// original width. Returns `None` when there is no sign change; that is
    /// an expected outcome, not an error.
    pub fn bisection(&self, min: f64, max: f64, epsilon: f64) -> Option<f64> {
        let (mut min, mut max) = if min <= max { (min, max) } else { (max, min) };
        let mut f_min = self.eval(min);
        let f_max = self.eval(max);
        if f_min.abs() <= epsilon {
            return Some(min);
        }
        if f_max.abs() <= epsilon {
            return Some(max);
        }
        if f_min * f_max > 0.0 || (f_min * f_max).is_nan() {
            return None;
        }
        let iterations = (((max - min).ln() + LN_10 * BISECTION_DIGITS) / LN_2)
            .ceil()
            .max(0.0) as usize;
        for _ in 0..iterations {
            let mid = 0.5 * (min + max);
            let f_mid = self.eval(mid);
            if f_mid == 0.0 {
                return Some(mid);
            }
            if different_signs(f_mid, f_min) {
                max = mid;
            } else {
                min = mid;
                f_min = f_mid;
            }
        }
        Some(0.5 * (min + max))
    }

    /// Finds the real roots between `min` and `max`, in increasing order.
    ///
    /// The roots of the derivative (in closed form when possible, otherwise
    /// recursively) split the interval into pieces on which the polynomial
    /// is monotonic, so each piece holds at most one root, which
    /// [`bisection`](Self::bisection) then finds.
    /// Works for any degree.
    ///
    /// Double roots are found when the polynomial is within `epsilon` of zero
    /// at the corresponding critical point; otherwise a root without a sign
    /// change can be missed.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn roots_in_interval(&self, min: f64, max: f64, epsilon: f64) -> Vec<f64> {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut roots = Vec::new();
        let mut push = |root: Option<f64>| {
            if let Some(root) = root {
                if roots
                    .last()
                    .map_or(true, |last: &f64| (root - last).abs() > BISECTION_TOLERANCE)
                {
                    roots.push(root);
                }
            }
        };
        match self.real_order(epsilon) {
            0 => {}
            1 => push(self.bisection(min, max, epsilon)),
            _ => {
                // Trimmed at `epsilon` so small significant terms keep
                // their critical points.
                let derivative = self.derivative_with(epsilon);
                let critical = if derivative.real_order(epsilon) == 0 {
                    Vec::new()
                } else if derivative.degree_with(epsilon) <= Degree::Quintic {
                    let mut critical = derivative.roots_with(epsilon);
                    critical.retain(|x| min < *x && *x < max);
                    critical
                } else {
                    derivative.roots_in_interval(min, max, epsilon)
                };
                let mut last = min;
                for &x in &critical {
                    push(self.bisection(last, x, epsilon));
                    last = x;
                }
                push(self.bisection(last, max, epsilon));
            }
        }
        roots
    }

    /// The smallest and largest values this polynomial takes between `min`
    /// and `max`, as `(smallest, largest)`.
    pub fn min_max(&self, min: f64, max: f64, epsilon: f64) -> (f64, f64) {
        let candidates = [min, max]
            .into_iter()
            .chain(self.derivative().roots_in_interval(min, max, epsilon));
        candidates
            .map(|x| self.eval(x))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrary::{float_in_unit_interval, poly_from_roots};

    fn assert_roots(mut roots: Vec<f64>, expected: &[f64], epsilon: f64) {
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots.len(), expected.len(), "{roots:?} vs {expected:?}");
        for (r, e) in roots.iter().zip(expected) {
            assert!((r - e).abs() < epsilon, "{roots:?} vs {expected:?}");
        }
    }

    #[test]
    fn quadratic_roots() {
        let p = Polynomial::new(&[1.0, -3.0, 2.0]);
        assert_eq!(p.degree(), Degree::Quadratic);
        let roots = p.roots();
        assert_roots(roots.clone(), &[1.0, 2.0], 1e-12);
        assert!((roots.iter().sum::<f64>() - 3.0).abs() < 1e-12);
        assert!((roots.iter().product::<f64>() - 2.0).abs() < 1e-12);
        for r in roots {
            assert!(p.evaluate(r).unwrap().abs() < 1e-12);
        }
    }

    #[test]
    fn closely_spaced_roots() {
        let p = poly_from_roots(&[0.0, 0.01, 0.02], 1.0);
        assert_roots(p.roots(), &[0.0, 0.01, 0.02], 1e-9);
        let p = poly_from_roots(&[-0.3, -0.15, -0.1, 0.1], 0.5);
        assert_roots(p.roots(), &[-0.3, -0.15, -0.1, 0.1], 1e-9);
    }

    #[test]
    fn constant_root_is_its_value() {
        // Inherited convention: a constant reports its value, not an empty set.
        assert_eq!(Polynomial::constant(3.0).roots(), [3.0]);
        assert_eq!(Polynomial::zero().roots(), [0.0]);
        assert!(Polynomial::default().roots().is_empty());
        // Negligible leading terms don't change that.
        assert_eq!(Polynomial::new(&[1e-14, 4.0]).roots(), [4.0]);
    }

    #[test]
    fn dispatch_by_degree() {
        assert_roots(Polynomial::new(&[2.0, -1.0]).roots(), &[0.5], 1e-15);
        let cubic = poly_from_roots(&[-1.0, 0.5, 2.0], 2.0);
        assert_roots(cubic.roots(), &[-1.0, 0.5, 2.0], 1e-12);
        let quartic = poly_from_roots(&[-1.5, -0.5, 0.25, 3.0], 1.0);
        assert_roots(quartic.roots(), &[-1.5, -0.5, 0.25, 3.0], 1e-9);
        let quintic = poly_from_roots(&[-2.0, -0.75, 0.1, 0.6, 1.3], -3.0);
        assert_roots(quintic.roots(), &[-2.0, -0.75, 0.1, 0.6, 1.3], 1e-9);
    }

    #[test]
    fn sextic_is_unsupported() {
        let p = poly_from_roots(&[-3.0, -2.0, -1.0, 1.0, 2.0, 3.0], 1.0);
        assert_eq!(p.degree(), Degree::Sextic);
        assert!(!p.can_solve_real_roots());
        assert!(p.roots().is_empty());
        assert!(Polynomial::new(&[1.0, 0.0, 0.0]).can_solve_real_roots());
    }

    #[test]
    fn real_or_complex_roots_falls_back() {
        let p = Polynomial::new(&[1.0, -3.0, 2.0]);
        let roots = p.real_or_complex_roots().unwrap();
        assert_eq!(roots.len(), 2);
        assert!(roots.iter().all(|z| z.im == 0.0));

        // x⁶ - 1
        let p = Polynomial::new(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0]);
        let roots = p.real_or_complex_roots().unwrap();
        assert_eq!(roots.len(), 6);
        for z in roots {
            assert!(p.eval_complex(z).norm_sqr() < 1e-18);
        }
    }

    #[test]
    fn bisection_linear() {
        let p = Polynomial::new(&[1.0, -0.5]);
        let root = p.bisection(0.0, 1.0, 1e-12).unwrap();
        assert!((root - 0.5).abs() < 1e-6);
        // Reversed bounds are accepted.
        let root = p.bisection(1.0, 0.0, 1e-12).unwrap();
        assert!((root - 0.5).abs() < 1e-6);
    }

    #[test]
    fn bisection_converges_to_a_millionth() {
        let p = Polynomial::new(&[1.0, 0.0, -2.0]);
        let root = p.bisection(0.0, 3.0, 1e-12).unwrap();
        assert!((root - 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn bisection_returns_bound_at_root() {
        let p = Polynomial::new(&[1.0, -1.0]);
        assert_eq!(p.bisection(1.0, 4.0, 1e-12), Some(1.0));
        assert_eq!(p.bisection(-4.0, 1.0, 1e-12), Some(1.0));
    }

    #[test]
    fn bisection_without_sign_change() {
        let p = Polynomial::new(&[1.0, 0.0, 1.0]);
        assert_eq!(p.bisection(-1.0, 1.0, 1e-12), None);
    }

    #[test]
    fn cubic_with_one_root_in_unit_interval() {
        // (x - 0.5)(x - 2)(x + 1)
        let p = poly_from_roots(&[0.5, 2.0, -1.0], 1.0);
        let in_interval = p.roots_in_interval(0.0, 1.0, 1e-12);
        let expected: Vec<f64> = p
            .roots()
            .into_iter()
            .filter(|r| (0.0..=1.0).contains(r))
            .collect();
        assert_eq!(in_interval.len(), 1);
        assert_eq!(expected.len(), 1);
        assert!((in_interval[0] - expected[0]).abs() < 1e-6);
    }

    #[test]
    fn roots_in_interval_high_degree() {
        let planted = [-0.9, -0.6, -0.2, 0.1, 0.35, 0.7, 0.95];
        let p = poly_from_roots(&planted, 0.5);
        assert_eq!(p.degree(), Degree::Septic);
        assert_roots(p.roots_in_interval(-1.0, 1.0, 1e-12), &planted, 1e-5);
        assert_roots(p.roots_in_interval(0.0, 1.0, 1e-12), &planted[3..], 1e-5);
    }

    #[test]
    fn roots_in_interval_double_root() {
        // (x - 0.5)² (x + 0.5)
        let p = poly_from_roots(&[0.5, 0.5, -0.5], 1.0);
        assert_roots(p.roots_in_interval(-1.0, 1.0, 1e-12), &[-0.5, 0.5], 1e-6);
    }

    #[test]
    fn roots_in_interval_edge_cases() {
        assert!(Polynomial::constant(1.0).roots_in_interval(0.0, 1.0, 1e-12).is_empty());
        assert!(Polynomial::new(&[1.0, 0.0, 1.0])
            .roots_in_interval(-5.0, 5.0, 1e-12)
            .is_empty());
    }

    #[test]
    fn roots_in_interval_small_coefficients() {
        // 1e-13 (x - 0.25)(x - 0.75): every coefficient is below the default
        // tolerance, but the critical point at 0.5 still separates the roots.
        let p = Polynomial::from_coeffs([1.875e-14, -1e-13, 1e-13]);
        assert_roots(p.roots_in_interval(0.0, 1.0, 1e-16), &[0.25, 0.75], 1e-5);

        // 1e-13 x (x + 1)
        let p = Polynomial::from_coeffs([0.0, 1e-13, 1e-13]);
        assert_roots(p.roots_in_interval(-2.0, 1.0, 1e-14), &[-1.0, 0.0], 1e-5);

        let p = Polynomial::from_coeffs([-0.5, 1.0, 1e-13]);
        assert_roots(p.roots_in_interval(0.0, 1.0, 1e-14), &[0.5], 1e-5);
    }

    #[test]
    fn planted_root_in_interval() {
        arbtest::arbtest(|u| {
            let root = float_in_unit_interval(u)?;
            let other = 2.0 + float_in_unit_interval(u)?.abs();
            let p = poly_from_roots(&[root, other, -other], 1.0);
            let found = p.roots_in_interval(-1.0, 1.0, 1e-12);
            assert_eq!(found.len(), 1, "{p:?}: {found:?}");
            assert!((found[0] - root).abs() < 1e-5, "{p:?}: {found:?}");
            Ok(())
        })
        .budget_ms(1_000);
    }

    #[test]
    fn min_max_over_interval() {
        // x² - 1 on [-2, 0.5] dips to -1 at 0 and rises to 3 at -2.
        let p = Polynomial::new(&[1.0, 0.0, -1.0]);
        let (lo, hi) = p.min_max(-2.0, 0.5, 1e-12);
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 3.0).abs() < 1e-12);

        let line = Polynomial::new(&[2.0, 1.0]);
        assert_eq!(line.min_max(0.0, 1.0, 1e-12), (1.0, 3.0));
    }
}
