// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::common::DEFAULT_EPSILON;
use crate::poly::{real_order_of, Coeffs};
use crate::{Degree, Error, Polynomial, Result};

/// A polynomial under construction.
///
/// This is the mutable counterpart of [`Polynomial`]. Coefficients can be
/// written through either indexing view, and [`build`](Self::build)
/// freezes the result into an immutable value.
///
/// The degree is memoized, and every coefficient write drops the memo.
#[derive(Clone, Debug, Default)]
pub struct PolynomialBuilder {
    /// Coefficients in increasing order of degree.
    coeffs: Coeffs,
    /// Real order at [`DEFAULT_EPSILON`], if known.
    order: Option<usize>,
}

impl PolynomialBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder holding `len` zero coefficients.
    pub fn zeroed(len: usize) -> Self {
        PolynomialBuilder {
            coeffs: Coeffs::from_elem(0.0, len),
            order: None,
        }
    }

    /// A builder holding coefficients given lowest power first.
    pub fn from_coeffs(coeffs: impl IntoIterator<Item = f64>) -> Self {
        PolynomialBuilder {
            coeffs: coeffs.into_iter().collect(),
            order: None,
        }
    }

    /// The coefficients, lowest power first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Has no coefficient been supplied yet?
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The coefficient at `index`, counting from the highest stored power.
    ///
    /// Indices past the stored coefficients read as zero.
    pub fn term_coefficient(&self, index: usize) -> f64 {
        let len = self.coeffs.len();
        if index < len {
            self.coeffs[len - 1 - index]
        } else {
            0.0
        }
    }

    /// The coefficient of `x^power`, or zero past the stored coefficients.
    pub fn degree_coefficient(&self, power: usize) -> f64 {
        self.coeffs.get(power).copied().unwrap_or(0.0)
    }

    /// Sets the coefficient at `index`, counting from the highest stored power.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `index` is not a stored term.
    pub fn set_term_coefficient(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.coeffs.len();
        if index >= len {
            return Err(Error::InvalidArgument("term index past the stored coefficients"));
        }
        self.write(len - 1 - index, value);
        Ok(())
    }

    /// Sets the coefficient of `x^power`, growing the store with zeros if needed.
    pub fn set_degree_coefficient(&mut self, power: usize, value: f64) {
        if power >= self.coeffs.len() {
            self.coeffs.resize(power + 1, 0.0);
        }
        self.write(power, value);
    }

    /// Appends a new highest-power coefficient.
    pub fn push(&mut self, value: f64) {
        let power = self.coeffs.len();
        self.set_degree_coefficient(power, value);
    }

    // All writes go through here, so the memo can't outlive a mutation.
    fn write(&mut self, power: usize, value: f64) {
        self.coeffs[power] = value;
        self.order = None;
    }

    /// The highest power with a coefficient larger than `epsilon` in magnitude.
    pub fn real_order(&self, epsilon: f64) -> usize {
        real_order_of(&self.coeffs, epsilon)
    }

    /// The degree at [`DEFAULT_EPSILON`], computed at most once between writes.
    pub fn degree(&mut self) -> Degree {
        let order = match self.order {
            Some(order) => order,
            None => {
                let order = real_order_of(&self.coeffs, DEFAULT_EPSILON);
                self.order = Some(order);
                order
            }
        };
        Degree::from_order(order)
    }

    /// Freezes the coefficients into an immutable [`Polynomial`].
    pub fn build(self) -> Polynomial {
        match self.order {
            Some(order) => Polynomial::from_parts(self.coeffs, order),
            None => Polynomial::from_store(self.coeffs),
        }
    }
}

impl From<Polynomial> for PolynomialBuilder {
    fn from(poly: Polynomial) -> Self {
        PolynomialBuilder::from_coeffs(poly.coeffs().iter().copied())
    }
}

impl Polynomial {
    /// A builder initialized with a copy of these coefficients.
    pub fn to_builder(&self) -> PolynomialBuilder {
        PolynomialBuilder::from_coeffs(self.coeffs().iter().copied())
    }
}
