// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derivatives, integrals, normalization and powers.

use crate::poly::Coeffs;
use crate::{Error, Polynomial, Result};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

impl Polynomial {
    /// Returns the polynomial that's the derivative of this polynomial.
    ///
    /// Negligible leading terms are dropped first. The derivative of a
    /// constant is the zero polynomial, which still has one coefficient.
    #[must_use]
    pub fn derivative(&self) -> Polynomial {
        derivative_of(self.significant())
    }

    /// The derivative, dropping only leading terms no larger than `epsilon`.
    pub(crate) fn derivative_with(&self, epsilon: f64) -> Polynomial {
        let len = (self.real_order(epsilon) + 1).min(self.len());
        derivative_of(&self.coeffs()[..len])
    }

    /// The slope of this polynomial at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Evaluation`] if `x` is NaN.
    pub fn differentiate(&self, x: f64) -> Result<f64> {
        self.derivative().evaluate(x)
    }

    /// Returns the antiderivative whose constant term is `constant`.
    ///
    /// Every stored coefficient is integrated, including negligible leading
    /// ones, so [`derivative`](Self::derivative) undoes this up to trimming.
    #[must_use]
    pub fn integrate(&self, constant: f64) -> Polynomial {
        let mut coeffs = Coeffs::with_capacity(self.len() + 1);
        coeffs.push(constant);
        for (i, c) in self.coeffs().iter().enumerate() {
            coeffs.push(c / (i + 1) as f64);
        }
        Polynomial::from_store(coeffs)
    }

    /// Scales this polynomial so its leading coefficient is 1.
    ///
    /// Leading coefficients no larger than `epsilon` are dropped, and any
    /// resulting coefficient no larger than `epsilon` is flushed to exactly
    /// zero so that rounding noise doesn't leak into iterative root finders.
    ///
    /// The zero polynomial is returned unchanged.
    #[must_use]
    pub fn normalize(&self, epsilon: f64) -> Polynomial {
        let trimmed = self.trim(epsilon);
        let lead = trimmed.coeffs().last().copied().unwrap_or(0.0);
        if lead == 0.0 {
            return trimmed;
        }
        trimmed
            .coeffs()
            .iter()
            .map(|c| {
                let c = c / lead;
                if c.abs() <= epsilon {
                    0.0
                } else {
                    c
                }
            })
            .collect()
    }

    /// Raises this polynomial to the `n`th power by repeated multiplication.
    ///
    /// The zeroth power is the constant 1.
    #[must_use]
    pub fn pow(&self, n: u32) -> Polynomial {
        let mut result = Polynomial::constant(1.0);
        for _ in 0..n {
            result = &result * self;
        }
        result
    }

    /// Raises this polynomial to a power given as a float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a NaN, negative, non-integral
    /// or out-of-range exponent.
    pub fn try_pow(&self, exponent: f64) -> Result<Polynomial> {
        if exponent.is_nan() {
            return Err(Error::InvalidArgument("NaN exponent"));
        }
        if exponent < 0.0 {
            return Err(Error::InvalidArgument("negative exponent"));
        }
        if exponent > u32::MAX as f64 || exponent as u32 as f64 != exponent {
            return Err(Error::InvalidArgument("exponent is not a whole number"));
        }
        Ok(self.pow(exponent as u32))
    }
}

fn derivative_of(coeffs: &[f64]) -> Polynomial {
    if coeffs.len() <= 1 {
        return Polynomial::zero();
    }
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, c)| c * (i as f64))
        .collect()
}
