// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arithmetic on polynomials.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::common::DEFAULT_EPSILON;
use crate::poly::Coeffs;
use crate::{Error, Polynomial, Result};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

fn zip_with(lhs: &Polynomial, rhs: &Polynomial, f: impl Fn(f64, f64) -> f64) -> Polynomial {
    let len = lhs.len().max(rhs.len());
    (0..len)
        .map(|i| f(lhs.degree_coefficient(i), rhs.degree_coefficient(i)))
        .collect()
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        zip_with(self, rhs, |a, b| a + b)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        zip_with(self, rhs, |a, b| a - b)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Convolves the stored coefficients.
    ///
    /// Multiplying by an empty polynomial gives the zero polynomial.
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_empty() || rhs.is_empty() {
            return Polynomial::zero();
        }
        let mut coeffs = Coeffs::from_elem(0.0, self.len() + rhs.len() - 1);
        for (i, c) in self.coeffs().iter().enumerate() {
            for (j, d) in rhs.coeffs().iter().enumerate() {
                coeffs[i + j] += c * d;
            }
        }
        Polynomial::from_store(coeffs)
    }
}

macro_rules! forward_binop {
    ($Trait:ident, $method:ident) => {
        impl $Trait<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                (&self).$method(&rhs)
            }
        }

        impl $Trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                (&self).$method(rhs)
            }
        }

        impl $Trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.coeffs().iter().map(|c| -c).collect()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, scale: f64) -> Polynomial {
        self.coeffs().iter().map(|c| c * scale).collect()
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, scale: f64) -> Polynomial {
        &self * scale
    }
}

impl Div<f64> for &Polynomial {
    type Output = Polynomial;

    fn div(self, scale: f64) -> Polynomial {
        self.coeffs().iter().map(|c| c / scale).collect()
    }
}

impl Div<f64> for Polynomial {
    type Output = Polynomial;

    fn div(self, scale: f64) -> Polynomial {
        &self / scale
    }
}

impl Polynomial {
    /// Polynomial long division, returning `(quotient, remainder)`.
    ///
    /// Negligible leading coefficients of both operands are ignored, so the
    /// remainder always has a lower real order than the divisor (or is a
    /// single zero when the divisor is constant).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `divisor` is (nearly) the zero
    /// polynomial.
    pub fn div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        let d = divisor.significant();
        let dn = d.len().saturating_sub(1);
        let lead = d.last().copied().unwrap_or(0.0);
        if lead.abs() <= DEFAULT_EPSILON {
            return Err(Error::InvalidArgument("division by the zero polynomial"));
        }
        let mut rem: Coeffs = self.significant().into();
        if rem.len() <= dn {
            if rem.is_empty() {
                rem.push(0.0);
            }
            return Ok((Polynomial::zero(), Polynomial::from_store(rem)));
        }
        let n = rem.len() - 1;
        let mut quot = Coeffs::from_elem(0.0, n - dn + 1);
        for k in (0..=n - dn).rev() {
            let q = rem[k + dn] / lead;
            quot[k] = q;
            for (j, c) in d.iter().enumerate() {
                rem[k + j] -= q * c;
            }
        }
        rem.truncate(dn.max(1));
        if dn == 0 {
            rem[0] = 0.0;
        }
        Ok((Polynomial::from_store(quot), Polynomial::from_store(rem)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Degree, Polynomial};

    fn assert_coeffs_near(p: &Polynomial, expected: &[f64]) {
        assert_eq!(p.len(), expected.len(), "{p:?} vs {expected:?}");
        for (a, b) in p.coeffs().iter().zip(expected) {
            assert!((a - b).abs() < 1e-12, "{p:?} vs {expected:?}");
        }
    }

    #[test]
    fn add_and_sub_pad_the_shorter_operand() {
        let p = Polynomial::new(&[1.0, 2.0, 3.0]);
        let q = Polynomial::new(&[5.0, -1.0]);
        assert_coeffs_near(&(&p + &q), &[2.0, 7.0, 1.0]);
        assert_coeffs_near(&(p.clone() - q.clone()), &[4.0, -3.0, 1.0]);
        assert_coeffs_near(&(&q - p), &[-4.0, 3.0, -1.0]);
    }

    #[test]
    fn multiply_convolves() {
        let x_minus_1 = Polynomial::new(&[1.0, -1.0]);
        let x_minus_2 = Polynomial::new(&[1.0, -2.0]);
        let p = &x_minus_1 * &x_minus_2;
        assert_coeffs_near(&p, &[2.0, -3.0, 1.0]);
        assert_eq!(p.degree(), Degree::Quadratic);
        assert_coeffs_near(&(Polynomial::default() * p), &[0.0]);
    }

    #[test]
    fn scalar_ops_and_negation() {
        let p = Polynomial::new(&[2.0, -4.0]);
        assert_coeffs_near(&(&p * 0.5), &[-2.0, 1.0]);
        assert_coeffs_near(&(p.clone() / 2.0), &[-2.0, 1.0]);
        assert_coeffs_near(&(-p), &[4.0, -2.0]);
    }

    #[test]
    fn div_rem_reconstructs_dividend() {
        // (x^3 - 2x^2 - 4) / (x - 3) = x^2 + x + 3, remainder 5
        let p = Polynomial::new(&[1.0, -2.0, 0.0, -4.0]);
        let d = Polynomial::new(&[1.0, -3.0]);
        let (q, r) = p.div_rem(&d).unwrap();
        assert_coeffs_near(&q, &[3.0, 1.0, 1.0]);
        assert_coeffs_near(&r, &[5.0]);
        assert_coeffs_near(&(&(&q * &d) + &r), p.coeffs());

        let (q, r) = p.div_rem(&Polynomial::constant(2.0)).unwrap();
        assert_coeffs_near(&q, &[-2.0, 0.0, -1.0, 0.5]);
        assert_coeffs_near(&r, &[0.0]);
    }

    #[test]
    fn div_rem_by_larger_divisor() {
        let p = Polynomial::new(&[1.0, 1.0]);
        let d = Polynomial::new(&[1.0, 0.0, 0.0]);
        let (q, r) = p.div_rem(&d).unwrap();
        assert_coeffs_near(&q, &[0.0]);
        assert_coeffs_near(&r, &[1.0, 1.0]);
    }

    #[test]
    fn div_rem_by_zero_fails() {
        let p = Polynomial::new(&[1.0, 1.0]);
        assert!(p.div_rem(&Polynomial::zero()).is_err());
        assert!(p.div_rem(&Polynomial::default()).is_err());
    }
}
