// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utilities for property testing using `arbitrary`.

use alloc::vec::Vec;

use arbitrary::Unstructured;

use crate::Polynomial;

/// An arbitrary float in (-1.0, 1.0).
pub(crate) fn float_in_unit_interval(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    let mantissa: u64 = u.arbitrary()?;
    let mantissa = mantissa & ((1u64 << 52) - 1);
    let negative: bool = u.arbitrary()?;
    let sign: u64 = if negative { 1u64 << 63 } else { 0 };

    // An exponent of 1023 would give 1.something, so 1022 is the largest.
    // Without the `large` coin we'd almost only produce tiny numbers.
    let large: bool = u.arbitrary()?;
    let exponent: u64 = if large {
        1022 << 52
    } else {
        (u.arbitrary::<u64>()? % 1023u64) << 52
    };

    Ok(f64::from_bits(sign | exponent | mantissa))
}

/// `degree` distinct roots in [-1.0, 1.0], in increasing order.
///
/// Roots sit on a grid with spacing 0.05, so they're never too close for the
/// closed-form solvers to tell apart.
pub(crate) fn planted_roots(
    u: &mut Unstructured<'_>,
    degree: usize,
) -> Result<Vec<f64>, arbitrary::Error> {
    let mut steps: Vec<i8> = Vec::with_capacity(degree);
    while steps.len() < degree {
        let step = u.int_in_range(-20i8..=20)?;
        // An exhausted `Unstructured` keeps returning the same value.
        if steps.contains(&step) {
            return Err(arbitrary::Error::IncorrectFormat);
        }
        steps.push(step);
    }
    steps.sort_unstable();
    Ok(steps.into_iter().map(|s| f64::from(s) * 0.05).collect())
}

/// The polynomial `scale * (x - r0) * (x - r1) * ...`.
///
/// Repeated roots are fine.
pub(crate) fn poly_from_roots(roots: &[f64], scale: f64) -> Polynomial {
    roots
        .iter()
        .fold(Polynomial::constant(scale), |acc, &r| {
            acc * Polynomial::from_coeffs([-r, 1.0])
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval_floats_stay_inside() {
        arbtest::arbtest(|u| {
            let x = float_in_unit_interval(u)?;
            assert!(x.abs() < 1.0);
            Ok(())
        });
    }

    #[test]
    fn poly_from_roots_vanishes_at_roots() {
        let p = poly_from_roots(&[1.0, 1.0, -2.0], 3.0);
        assert_eq!(p.coeffs(), &[6.0, -9.0, 0.0, 3.0]);
        for r in [1.0, -2.0] {
            assert_eq!(p.evaluate(r).unwrap(), 0.0);
        }
    }
}
