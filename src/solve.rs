// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Real roots of polynomials of degree one through five.
//!
//! Each solver takes its coefficients highest power first, followed by an
//! `epsilon` used to decide when a leading coefficient vanishes (in which
//! case the next lower solver is used) and when a discriminant is zero (in
//! which case a repeated root is reported once). Roots are returned in
//! increasing order.

use arrayvec::ArrayVec;

use crate::common::{different_signs, refine_bracket};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

fn sort<const N: usize>(roots: &mut ArrayVec<f64, N>) {
    roots.sort_unstable_by(f64::total_cmp);
}

/// Sorts and drops roots that lie within `tolerance` of the previous one.
fn sort_dedup<const N: usize>(roots: &mut ArrayVec<f64, N>, tolerance: f64) {
    sort(roots);
    let mut kept = ArrayVec::<f64, N>::new();
    for &r in roots.iter() {
        if kept.last().map_or(true, |last| (r - last).abs() > tolerance) {
            kept.push(r);
        }
    }
    *roots = kept;
}

/// Find the real root of `a x + b = 0`.
///
/// Nothing is returned when `a` is no larger than `epsilon`.
pub fn solve_linear(a: f64, b: f64, epsilon: f64) -> ArrayVec<f64, 1> {
    let mut result = ArrayVec::new();
    if a.abs() > epsilon {
        let root = -b / a;
        if root.is_finite() {
            result.push(root);
        }
    }
    result
}

/// Find real roots of quadratic equation `a x² + b x + c = 0`.
///
/// If `a` is no larger than `epsilon` the equation is solved as linear. A
/// discriminant within `epsilon` of zero is treated as a double root and
/// reported once.
pub fn solve_quadratic(a: f64, b: f64, c: f64, epsilon: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    if a.abs() <= epsilon {
        result.extend(solve_linear(b, c, epsilon));
        return result;
    }
    let p = b / a;
    let q = c / a;
    let disc = p * p - 4.0 * q;
    let root1 = if !disc.is_finite() {
        // Likely, calculation of p * p overflowed. Find one root
        // using p x + x² = 0, other root as q / root1.
        -p
    } else if disc < -epsilon {
        return result;
    } else if disc <= epsilon {
        result.push(-0.5 * p);
        return result;
    } else {
        // See https://math.stackexchange.com/questions/866331
        -0.5 * (p + disc.sqrt().copysign(p))
    };
    let root2 = q / root1;
    if root1.is_finite() {
        result.push(root1);
    }
    if root2.is_finite() {
        result.push(root2);
    }
    sort(&mut result);
    result
}

/// Find real roots of cubic equation `a x³ + b x² + c x + d = 0`.
///
/// See: <https://momentsingraphics.de/CubicRoots.html>
///
/// That implementation is in turn based on Jim Blinn's "How to Solve a Cubic
/// Equation", which is masterful.
///
/// If `a` is no larger than `epsilon` the equation is solved as quadratic.
/// When the discriminant is within `epsilon` of zero, relative to the spread
/// of the roots, the double root is reported once (and a triple root once).
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64, epsilon: f64) -> ArrayVec<f64, 3> {
    let mut result = ArrayVec::new();
    if a.abs() <= epsilon {
        result.extend(solve_quadratic(b, c, d, epsilon));
        return result;
    }
    const ONETHIRD: f64 = 1. / 3.;
    let a_recip = a.recip();
    let c2 = b * (ONETHIRD * a_recip);
    let c1 = c * (ONETHIRD * a_recip);
    let c0 = d * a_recip;
    if !(c0.is_finite() && c1.is_finite() && c2.is_finite()) {
        // cubic coefficient is nearly zero relative to the others.
        result.extend(solve_quadratic(b, c, d, epsilon));
        return result;
    }
    // (d0, d1, d2) is called "Delta" in article
    let d0 = (-c2).mul_add(c2, c1);
    let d1 = (-c1).mul_add(c2, c0);
    let d2 = c2 * c0 - c1 * c1;
    // disc is called "Discriminant"
    let disc = 4.0 * d0 * d2 - d1 * d1;
    // de is called "Depressed.x", Depressed.y = d0
    let de = (-2.0 * c2).mul_add(d0, d1);
    // Delta scales with the sixth power of the root spread, so the repeated
    // root test is relative to d0³.
    if disc.abs() <= epsilon * d0.abs().powi(3) {
        let t1 = (-d0).max(0.0).sqrt().copysign(de);
        let double = t1 - c2;
        let single = -2.0 * t1 - c2;
        result.push(double);
        if (single - double).abs() > epsilon {
            result.push(single);
        }
    } else if disc < 0.0 {
        let sq = (-0.25 * disc).sqrt();
        let r = -0.5 * de;
        let t1 = (r + sq).cbrt() + (r - sq).cbrt();
        result.push(t1 - c2);
    } else {
        let th = disc.sqrt().atan2(-de) * ONETHIRD;
        // (th_cos, th_sin) is called "CubicRoot"
        let (th_sin, th_cos) = th.sin_cos();
        // (r0, r1, r2) is called "Root"
        let r0 = th_cos;
        let ss3 = th_sin * 3.0f64.sqrt();
        let r1 = 0.5 * (-th_cos + ss3);
        let r2 = 0.5 * (-th_cos - ss3);
        let t = 2.0 * (-d0).sqrt();
        result.push(t.mul_add(r0, -c2));
        result.push(t.mul_add(r1, -c2));
        result.push(t.mul_add(r2, -c2));
    }
    sort(&mut result);
    result
}

/// A few Newton steps on `x`, keeping a step only if it improves the residual.
fn polish(coeffs: &[f64], mut x: f64) -> f64 {
    let eval = |x: f64| {
        let mut val = 0.0;
        let mut deriv = 0.0;
        for &c in coeffs.iter().rev() {
            deriv = deriv * x + val;
            val = val * x + c;
        }
        (val, deriv)
    };
    let (mut val, mut deriv) = eval(x);
    for _ in 0..4 {
        if val == 0.0 || deriv == 0.0 {
            break;
        }
        let next = x - val / deriv;
        let (next_val, next_deriv) = eval(next);
        if !(next_val.abs() < val.abs()) {
            break;
        }
        x = next;
        val = next_val;
        deriv = next_deriv;
    }
    x
}

/// Find real roots of quartic equation `a x⁴ + b x³ + c x² + d x + e = 0`.
///
/// This is Ferrari's method: the depressed quartic is split into two
/// quadratics using the largest root of its resolvent cubic, and each root
/// is then polished with Newton's method on the original equation.
///
/// If `a` is no larger than `epsilon` the equation is solved as cubic.
/// Repeated roots are reported once; roots closer together than
/// `sqrt(epsilon)` are merged.
pub fn solve_quartic(a: f64, b: f64, c: f64, d: f64, e: f64, epsilon: f64) -> ArrayVec<f64, 4> {
    let mut result = ArrayVec::new();
    if a.abs() <= epsilon {
        result.extend(solve_cubic(b, c, d, e, epsilon));
        return result;
    }
    let (b, c, d, e) = (b / a, c / a, d / a, e / a);
    if !(b.is_finite() && c.is_finite() && d.is_finite() && e.is_finite()) {
        return result;
    }
    // Substituting x = y - b/4 gives y⁴ + p y² + q y + r.
    let bb = b * b;
    let p = c - 0.375 * bb;
    let q = d - 0.5 * b * c + 0.125 * bb * b;
    let r = e - 0.25 * b * d + 0.0625 * bb * c - 3.0 / 256.0 * bb * bb;
    let shift = -0.25 * b;

    if q.abs() <= epsilon {
        // Biquadratic: a quadratic in y².
        for z in solve_quadratic(1.0, p, r, epsilon) {
            if z.abs() <= epsilon {
                result.push(shift);
            } else if z > 0.0 {
                let y = z.sqrt();
                result.push(shift - y);
                result.push(shift + y);
            }
        }
    } else {
        // Resolvent cubic 8m³ + 8p m² + (2p² - 8r) m - q² = 0 always has a
        // positive root when q is nonzero.
        let resolvent = solve_cubic(8.0, 8.0 * p, 2.0 * p * p - 8.0 * r, -q * q, epsilon);
        let Some(m) = resolvent.iter().copied().filter(|&m| m > 0.0).last() else {
            return result;
        };
        let s = (2.0 * m).sqrt();
        let h = 0.5 * p + m;
        let k = q / (2.0 * s);
        for y in solve_quadratic(1.0, -s, h + k, epsilon) {
            result.push(y + shift);
        }
        for y in solve_quadratic(1.0, s, h - k, epsilon) {
            result.push(y + shift);
        }
    }
    let monic = [e, d, c, b, 1.0];
    for root in result.iter_mut() {
        *root = polish(&monic, *root);
    }
    sort_dedup(&mut result, epsilon.sqrt());
    result
}

/// Find real roots of quintic equation `a x⁵ + b x⁴ + c x³ + d x² + e x + f = 0`.
///
/// There is no general formula in radicals for quintics, so this is a hybrid
/// method. The derivative is a quartic, which [`solve_quartic`] handles in
/// closed form; its roots, together with the Cauchy bound on the roots,
/// split the real line into intervals on which the quintic is monotonic.
/// Each interval with a sign change holds exactly one root, found with the
/// [ITP method](crate::common::solve_itp). A critical point where the
/// quintic is within `epsilon` of zero is reported as a repeated root.
///
/// If `a` is no larger than `epsilon` the equation is solved as quartic.
#[allow(clippy::too_many_arguments)]
pub fn solve_quintic(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    epsilon: f64,
) -> ArrayVec<f64, 5> {
    let mut result = ArrayVec::new();
    if a.abs() <= epsilon {
        result.extend(solve_quartic(b, c, d, e, f, epsilon));
        return result;
    }
    // Lowest power first, monic.
    let monic = [f / a, e / a, d / a, c / a, b / a, 1.0];
    if !monic.iter().all(|c| c.is_finite()) {
        return result;
    }
    let eval = |x: f64| monic.iter().rev().fold(0.0, |acc, c| acc * x + c);
    let bound = 1.0 + monic[..5].iter().fold(0.0f64, |max, c| max.max(c.abs()));
    let critical = solve_quartic(
        5.0,
        4.0 * monic[4],
        3.0 * monic[3],
        2.0 * monic[2],
        monic[1],
        epsilon,
    );

    let mut last = -bound;
    let mut last_val = eval(last);
    let interior = critical.iter().copied().filter(|&x| x > -bound && x < bound);
    for x in interior.chain(core::iter::once(bound)) {
        let val = eval(x);
        if val.abs() <= epsilon {
            if !result.is_full() {
                result.push(x);
            }
        } else if last_val.abs() > epsilon
            && different_signs(last_val, val)
            && !result.is_full()
        {
            result.push(refine_bracket(eval, last, x, last_val, val));
        }
        last = x;
        last_val = val;
    }
    sort_dedup(&mut result, epsilon.sqrt());
    result
}
