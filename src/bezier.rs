// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Power-basis coefficients of Bezier curves.
//!
//! A Bezier curve of degree `n` with control values `p0..=pn` is the
//! polynomial `Σ C(n, i) (1 - t)^(n - i) t^i p_i`. Curve code wants it in the
//! power basis so that it can be differentiated and solved like any other
//! polynomial.

use alloc::vec::Vec;

use crate::poly::Coeffs;
use crate::Polynomial;

/// How [`Polynomial::bezier_with`] expands the Bernstein basis.
///
/// All strategies give the same polynomial up to rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BezierStrategy {
    /// Hand-expanded formulas, for degrees 1 to 5.
    ///
    /// Other degrees use [`Stacked`](Self::Stacked).
    Expanded,
    /// Coefficients from binomial sums, for any degree.
    Stacked,
    /// Repeated linear blending with `1 - t` and `t`, for any degree.
    Recursive,
}

impl BezierStrategy {
    /// The strategy [`Polynomial::bezier`] picks for `degree`.
    pub fn for_degree(degree: usize) -> Self {
        match degree {
            1..=5 => BezierStrategy::Expanded,
            6..=10 => BezierStrategy::Stacked,
            _ => BezierStrategy::Recursive,
        }
    }
}

impl Polynomial {
    /// The Bezier curve with the given control values, in the power basis.
    ///
    /// The degree is one less than the number of values; no values give the
    /// empty polynomial.
    ///
    /// ```
    /// use bezpoly::Polynomial;
    ///
    /// let quad = Polynomial::bezier(&[0.0, 2.0, 1.0]);
    /// assert_eq!(quad.coeffs(), &[0.0, 4.0, -3.0]);
    /// assert_eq!(quad.evaluate(1.0).unwrap(), 1.0);
    /// ```
    pub fn bezier(values: &[f64]) -> Polynomial {
        let degree = values.len().saturating_sub(1);
        Polynomial::bezier_with(values, BezierStrategy::for_degree(degree))
    }

    /// The Bezier curve with the given control values, expanded with a
    /// specific strategy.
    pub fn bezier_with(values: &[f64], strategy: BezierStrategy) -> Polynomial {
        match values.len() {
            0 => return Polynomial::default(),
            1 => return Polynomial::constant(values[0]),
            _ => {}
        }
        match strategy {
            BezierStrategy::Expanded => match expanded(values) {
                Some(coeffs) => Polynomial::from_store(coeffs),
                None => stacked(values),
            },
            BezierStrategy::Stacked => stacked(values),
            BezierStrategy::Recursive => recursive(values),
        }
    }
}

fn expanded(values: &[f64]) -> Option<Coeffs> {
    let coeffs: Coeffs = match *values {
        [p0, p1] => [p0, p1 - p0].into_iter().collect(),
        [p0, p1, p2] => [p0, 2.0 * (p1 - p0), p0 - 2.0 * p1 + p2]
            .into_iter()
            .collect(),
        [p0, p1, p2, p3] => [
            p0,
            3.0 * (p1 - p0),
            3.0 * (p0 - 2.0 * p1 + p2),
            p3 - 3.0 * p2 + 3.0 * p1 - p0,
        ]
        .into_iter()
        .collect(),
        [p0, p1, p2, p3, p4] => [
            p0,
            4.0 * (p1 - p0),
            6.0 * (p0 - 2.0 * p1 + p2),
            4.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3),
            p0 - 4.0 * p1 + 6.0 * p2 - 4.0 * p3 + p4,
        ]
        .into_iter()
        .collect(),
        [p0, p1, p2, p3, p4, p5] => [
            p0,
            5.0 * (p1 - p0),
            10.0 * (p0 - 2.0 * p1 + p2),
            10.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3),
            5.0 * (p0 - 4.0 * p1 + 6.0 * p2 - 4.0 * p3 + p4),
            -p0 + 5.0 * p1 - 10.0 * p2 + 10.0 * p3 - 5.0 * p4 + p5,
        ]
        .into_iter()
        .collect(),
        _ => return None,
    };
    Some(coeffs)
}

/// Rows `0..=n` of Pascal's triangle.
fn binomials(n: usize) -> Vec<Vec<f64>> {
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    for k in 0..=n {
        let mut row = Vec::with_capacity(k + 1);
        row.push(1.0);
        if let Some(prev) = rows.last() {
            row.extend(prev.windows(2).map(|w| w[0] + w[1]));
            row.push(1.0);
        }
        rows.push(row);
    }
    rows
}

/// `c_k = C(n, k) Σ_{i ≤ k} (-1)^(k - i) C(k, i) p_i`
fn stacked(values: &[f64]) -> Polynomial {
    let n = values.len() - 1;
    let binom = binomials(n);
    (0..=n)
        .map(|k| {
            let sum: f64 = (0..=k)
                .map(|i| {
                    let term = binom[k][i] * values[i];
                    if (k - i) % 2 == 0 {
                        term
                    } else {
                        -term
                    }
                })
                .sum();
            binom[n][k] * sum
        })
        .collect()
}

/// `B(i, j) = (1 - t) B(i, j - 1) + t B(i + 1, j)`, with `B(i, i) = p_i`.
///
/// Each pass replaces the row of curves of one degree with the row one
/// degree higher, de Casteljau style.
fn recursive(values: &[f64]) -> Polynomial {
    let t = Polynomial::t();
    let one_minus_t = Polynomial::one_minus_t();
    let mut row: Vec<Polynomial> = values.iter().map(|&v| Polynomial::constant(v)).collect();
    while row.len() > 1 {
        row = row
            .windows(2)
            .map(|pair| &one_minus_t * &pair[0] + &t * &pair[1])
            .collect();
    }
    row.pop().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_same(a: &Polynomial, b: &Polynomial, epsilon: f64) {
        assert_eq!(a.len(), b.len(), "{a:?} vs {b:?}");
        let scale = a.magnitude().max(1.0);
        for (x, y) in a.coeffs().iter().zip(b.coeffs()) {
            assert!((x - y).abs() <= epsilon * scale, "{a:?} vs {b:?}");
        }
    }

    /// Direct evaluation of the Bernstein form.
    fn bernstein(values: &[f64], t: f64) -> f64 {
        let n = values.len() - 1;
        let binom = binomials(n);
        values
            .iter()
            .enumerate()
            .map(|(i, p)| {
                binom[n][i] * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32) * p
            })
            .sum()
    }

    #[test]
    fn linear_midpoint() {
        let line = Polynomial::bezier(&[0.0, 1.0]);
        assert_eq!(line.evaluate(0.5).unwrap(), 0.5);
    }

    #[test]
    fn cubic_coefficients() {
        let cubic = Polynomial::bezier(&[1.0, 2.0, 0.0, 4.0]);
        assert_eq!(cubic.coeffs(), &[1.0, 3.0, -9.0, 9.0]);
        assert_eq!(cubic.evaluate(0.0).unwrap(), 1.0);
        assert_eq!(cubic.evaluate(1.0).unwrap(), 4.0);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(Polynomial::bezier(&[]).is_empty());
        assert_eq!(Polynomial::bezier(&[3.0]).coeffs(), &[3.0]);
        for strategy in [
            BezierStrategy::Expanded,
            BezierStrategy::Stacked,
            BezierStrategy::Recursive,
        ] {
            assert_eq!(Polynomial::bezier_with(&[3.0], strategy).coeffs(), &[3.0]);
        }
    }

    #[test]
    fn strategy_by_degree() {
        assert_eq!(BezierStrategy::for_degree(3), BezierStrategy::Expanded);
        assert_eq!(BezierStrategy::for_degree(7), BezierStrategy::Stacked);
        assert_eq!(BezierStrategy::for_degree(11), BezierStrategy::Recursive);
    }

    #[test]
    fn binomial_rows() {
        let rows = binomials(5);
        assert_eq!(rows[0], [1.0]);
        assert_eq!(rows[5], [1.0, 5.0, 10.0, 10.0, 5.0, 1.0]);
    }

    #[test]
    fn strategies_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        for degree in 1..=12 {
            for _ in 0..10 {
                let values: Vec<f64> = (0..=degree)
                    .map(|_| rng.random_range(-10.0..10.0))
                    .collect();
                let expanded = Polynomial::bezier_with(&values, BezierStrategy::Expanded);
                let stacked = Polynomial::bezier_with(&values, BezierStrategy::Stacked);
                let recursive = Polynomial::bezier_with(&values, BezierStrategy::Recursive);
                assert_same(&expanded, &stacked, 1e-9);
                assert_same(&stacked, &recursive, 1e-9);
            }
        }
    }

    #[test]
    fn matches_bernstein_form() {
        let mut rng = StdRng::seed_from_u64(7);
        for degree in 1..=12 {
            let values: Vec<f64> = (0..=degree).map(|_| rng.random_range(-1.0..1.0)).collect();
            let p = Polynomial::bezier(&values);
            assert_eq!(p.len(), degree + 1);
            for i in 0..=8 {
                let t = f64::from(i) / 8.0;
                let expected = bernstein(&values, t);
                assert!((p.evaluate(t).unwrap() - expected).abs() < 1e-6);
            }
            assert!((p.evaluate(0.0).unwrap() - values[0]).abs() < 1e-12);
        }
    }
}
