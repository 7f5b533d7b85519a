// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomials of dynamic (run-time) degree.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use num_complex::Complex64;
use smallvec::SmallVec;

use crate::common::DEFAULT_EPSILON;
use crate::{Degree, Error, Result};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Backing storage for coefficients, lowest power first.
///
/// Curve geometry rarely goes past degree 7, so that much stays inline.
pub(crate) type Coeffs = SmallVec<[f64; 8]>;

/// Returned for indices past the stored coefficients.
static VIRTUAL_ZERO: f64 = 0.0;

/// A univariate polynomial with real coefficients.
///
/// A `Polynomial` is an immutable value: arithmetic, calculus and trimming
/// all produce new polynomials. Use a [`PolynomialBuilder`](crate::PolynomialBuilder)
/// to edit coefficients in place.
///
/// The degree is classified once, at construction, using
/// [`DEFAULT_EPSILON`]: leading coefficients no larger than that in magnitude
/// are ignored by [`degree`](Self::degree), evaluation and root finding.
///
/// A polynomial constructed without any coefficients is *empty*. It
/// evaluates to zero like the zero polynomial, but has no roots at all.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Polynomial {
    /// Coefficients in increasing order of degree.
    ///
    /// For example, `coeffs[0]` is the constant term.
    coeffs: Coeffs,
    /// Real order at [`DEFAULT_EPSILON`].
    order: usize,
}

/// The highest power whose coefficient is larger than `epsilon` in magnitude.
///
/// The constant slot is never discounted, so this is 0 for the zero
/// polynomial (and for an empty slice).
pub(crate) fn real_order_of(coeffs: &[f64], epsilon: f64) -> usize {
    let mut order = coeffs.len().saturating_sub(1);
    while order > 0 && coeffs[order].abs() <= epsilon {
        order -= 1;
    }
    order
}

impl Polynomial {
    /// Creates a polynomial from coefficients given highest power first.
    ///
    /// So `Polynomial::new(&[1.0, -3.0, 2.0])` is `x² - 3x + 2`.
    pub fn new(coeffs: &[f64]) -> Self {
        Self::from_coeffs(coeffs.iter().rev().copied())
    }

    /// Creates a polynomial from coefficients given lowest power first.
    ///
    /// The first coefficient provided will be the constant term, the second will
    /// be the linear term, and so on.
    pub fn from_coeffs(coeffs: impl IntoIterator<Item = f64>) -> Self {
        Self::from_store(coeffs.into_iter().collect())
    }

    pub(crate) fn from_store(coeffs: Coeffs) -> Self {
        let order = real_order_of(&coeffs, DEFAULT_EPSILON);
        Polynomial { coeffs, order }
    }

    /// Builds a value whose default-epsilon order is already known.
    pub(crate) fn from_parts(coeffs: Coeffs, order: usize) -> Self {
        debug_assert_eq!(order, real_order_of(&coeffs, DEFAULT_EPSILON));
        Polynomial { coeffs, order }
    }

    /// The zero polynomial, holding a single zero coefficient.
    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    /// The constant polynomial `c`.
    pub fn constant(c: f64) -> Self {
        Self::from_coeffs([c])
    }

    /// The single term `coefficient · x^degree`.
    pub fn term(degree: usize, coefficient: f64) -> Self {
        let mut coeffs = Coeffs::from_elem(0.0, degree + 1);
        coeffs[degree] = coefficient;
        Self::from_store(coeffs)
    }

    /// The monomial `x^degree`.
    pub fn monomial(degree: usize) -> Self {
        Self::term(degree, 1.0)
    }

    /// The polynomial `t`, the blending weight of the end of a Bézier segment.
    pub fn t() -> Self {
        Self::from_coeffs([0.0, 1.0])
    }

    /// The polynomial `1 - t`, the blending weight of the start of a Bézier segment.
    pub fn one_minus_t() -> Self {
        Self::from_coeffs([1.0, -1.0])
    }

    /// The coefficients of this polynomial, including negligible leading ones.
    ///
    /// In the returned slice, the coefficient of `x^i` is at index `i`.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// The coefficients up to and including the real order.
    pub(crate) fn significant(&self) -> &[f64] {
        let len = (self.order + 1).min(self.coeffs.len());
        &self.coeffs[..len]
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Was this polynomial built without any coefficients?
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The highest stored power, whether or not its coefficient is negligible.
    pub fn order(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// The highest power with a coefficient larger than `epsilon` in magnitude.
    ///
    /// The constant term is never discounted.
    pub fn real_order(&self, epsilon: f64) -> usize {
        real_order_of(&self.coeffs, epsilon)
    }

    /// The degree of this polynomial, ignoring leading coefficients no
    /// larger than [`DEFAULT_EPSILON`].
    pub fn degree(&self) -> Degree {
        Degree::from_order(self.order)
    }

    /// The degree at a caller-chosen tolerance.
    pub fn degree_with(&self, epsilon: f64) -> Degree {
        Degree::from_order(self.real_order(epsilon))
    }

    /// Drops leading coefficients no larger than `epsilon` in magnitude.
    ///
    /// This is idempotent and never removes the constant term.
    #[must_use]
    pub fn trim(&self, epsilon: f64) -> Self {
        let len = (self.real_order(epsilon) + 1).min(self.coeffs.len());
        Self::from_store(self.coeffs[..len].into())
    }

    /// The coefficient at `index`, counting from the highest stored power.
    ///
    /// Index 0 is the highest stored term, mirroring the argument order of
    /// [`Polynomial::new`]. Indices past the stored coefficients read as zero.
    pub fn get(&self, index: usize) -> f64 {
        self[index]
    }

    /// Same as [`Polynomial::get`].
    pub fn term_coefficient(&self, index: usize) -> f64 {
        self[index]
    }

    /// The coefficient of `x^power`, or zero past the stored coefficients.
    pub fn degree_coefficient(&self, power: usize) -> f64 {
        self.coeffs.get(power).copied().unwrap_or(0.0)
    }

    /// The coefficient of the highest non-negligible power.
    pub fn leading_coefficient(&self) -> f64 {
        self.degree_coefficient(self.order)
    }

    /// Returns the largest absolute value of any coefficient.
    ///
    /// Always returns a non-negative number, or NaN if some coefficient is NaN.
    pub fn magnitude(&self) -> f64 {
        self.coeffs.iter().fold(0.0f64, |max, c| max.max(c.abs()))
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    /// Horner evaluation without input validation.
    pub(crate) fn eval(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for c in self.significant().iter().rev() {
            acc = acc * x + c;
        }
        acc
    }

    pub(crate) fn eval_complex(&self, z: Complex64) -> Complex64 {
        let mut acc = Complex64::new(0.0, 0.0);
        for &c in self.significant().iter().rev() {
            acc = acc * z + c;
        }
        acc
    }

    /// Evaluates this polynomial at `x` using Horner's method.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Evaluation`] if `x` is NaN.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Err(Error::Evaluation("cannot evaluate a polynomial at NaN"));
        }
        Ok(self.eval(x))
    }

    /// Evaluates this polynomial at a complex point using Horner's method.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Evaluation`] if either part of `z` is NaN.
    pub fn evaluate_complex(&self, z: Complex64) -> Result<Complex64> {
        if z.re.is_nan() || z.im.is_nan() {
            return Err(Error::Evaluation("cannot evaluate a polynomial at NaN"));
        }
        Ok(self.eval_complex(z))
    }
}

impl Index<usize> for Polynomial {
    type Output = f64;

    /// Indexes from the highest stored power down.
    fn index(&self, index: usize) -> &f64 {
        let len = self.coeffs.len();
        if index < len {
            &self.coeffs[len - 1 - index]
        } else {
            &VIRTUAL_ZERO
        }
    }
}

impl From<Vec<f64>> for Polynomial {
    /// Lowest power first, like [`Polynomial::from_coeffs`].
    fn from(coeffs: Vec<f64>) -> Self {
        Self::from_store(coeffs.into())
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(poly: Polynomial) -> Self {
        poly.coeffs.into_vec()
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_coeffs(iter)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, &c) in self.significant().iter().enumerate().rev() {
            if c == 0.0 && !(power == 0 && first) {
                continue;
            }
            let magnitude = c.abs();
            if first {
                if c.is_sign_negative() && c != 0.0 {
                    f.write_str("-")?;
                }
            } else if c < 0.0 {
                f.write_str(" - ")?;
            } else {
                f.write_str(" + ")?;
            }
            first = false;
            if magnitude != 1.0 || power == 0 {
                write!(f, "{magnitude}")?;
            }
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
