// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomial interpolation through sample points.

use alloc::vec::Vec;

use crate::{Error, Polynomial, Result};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

fn check_samples(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(Error::InvalidArgument("sample lengths differ"));
    }
    if xs.len() < 2 {
        return Err(Error::InvalidArgument("need at least two samples"));
    }
    if xs.iter().chain(ys).any(|v| v.is_nan()) {
        return Err(Error::Evaluation("NaN sample"));
    }
    for (i, x) in xs.iter().enumerate() {
        if xs[i + 1..].contains(x) {
            return Err(Error::InvalidArgument("duplicate sample abscissa"));
        }
    }
    Ok(())
}

impl Polynomial {
    /// The polynomial of least degree through the points `(xs[i], ys[i])`.
    ///
    /// Uses Newton's divided differences, expanded into the power basis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for fewer than two samples, for
    /// `xs` and `ys` of different lengths, or for a repeated `x`, and
    /// [`Error::Evaluation`] if any sample is NaN.
    pub fn interpolate(xs: &[f64], ys: &[f64]) -> Result<Polynomial> {
        check_samples(xs, ys)?;
        let n = xs.len();
        let mut diffs: Vec<f64> = ys.to_vec();
        for level in 1..n {
            for i in (level..n).rev() {
                diffs[i] = (diffs[i] - diffs[i - 1]) / (xs[i] - xs[i - level]);
            }
        }
        // Horner's scheme on the Newton form.
        let mut result = Polynomial::constant(diffs[n - 1]);
        for i in (0..n - 1).rev() {
            result = &result * &Polynomial::from_coeffs([-xs[i], 1.0]);
            result = &result + &Polynomial::constant(diffs[i]);
        }
        Ok(result)
    }

    /// The value at `x` of the polynomial through the points
    /// `(xs[i], ys[i])`, by Neville's algorithm.
    ///
    /// Returns `(value, error)`, where `error` is the last correction applied
    /// and serves as an estimate of the interpolation error.
    ///
    /// # Errors
    ///
    /// As for [`interpolate`](Self::interpolate), and [`Error::Evaluation`]
    /// if `x` is NaN.
    pub fn interpolate_at(xs: &[f64], ys: &[f64], x: f64) -> Result<(f64, f64)> {
        check_samples(xs, ys)?;
        if x.is_nan() {
            return Err(Error::Evaluation("cannot interpolate at NaN"));
        }
        let n = xs.len();
        // Start from the sample closest to `x`.
        let mut k = 0;
        for (i, xi) in xs.iter().enumerate() {
            if (x - xi).abs() < (x - xs[k]).abs() {
                k = i;
            }
        }
        // Corrections up (`c`) and down (`d`) the tableau.
        let mut c = ys.to_vec();
        let mut d = ys.to_vec();
        let mut value = ys[k];
        let mut error = 0.0;
        for m in 1..n {
            for i in 0..n - m {
                let ho = xs[i] - x;
                let hp = xs[i + m] - x;
                let w = (c[i + 1] - d[i]) / (ho - hp);
                d[i] = hp * w;
                c[i] = ho * w;
            }
            error = if 2 * k < n - m {
                c[k]
            } else {
                k -= 1;
                d[k]
            };
            value += error;
        }
        Ok((value, error))
    }
}
