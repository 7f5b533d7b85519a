// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The degree of a polynomial, after discounting negligible leading terms.
///
/// The zero polynomial has degree [`Degree::Constant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Degree {
    /// `c`
    Constant,
    /// `bx + c`
    Linear,
    /// Degree 2.
    Quadratic,
    /// Degree 3.
    Cubic,
    /// Degree 4.
    Quartic,
    /// Degree 5.
    Quintic,
    /// Degree 6.
    Sextic,
    /// Degree 7.
    Septic,
    /// Degree 8.
    Octic,
    /// Degree 9.
    Nonic,
    /// Degree 10.
    Decic,
    /// Any degree above 10. The payload is the degree itself.
    Higher(usize),
}

impl Degree {
    /// The degree with the given order (highest power).
    pub const fn from_order(order: usize) -> Self {
        match order {
            0 => Degree::Constant,
            1 => Degree::Linear,
            2 => Degree::Quadratic,
            3 => Degree::Cubic,
            4 => Degree::Quartic,
            5 => Degree::Quintic,
            6 => Degree::Sextic,
            7 => Degree::Septic,
            8 => Degree::Octic,
            9 => Degree::Nonic,
            10 => Degree::Decic,
            n => Degree::Higher(n),
        }
    }

    /// The highest power of a polynomial with this degree.
    pub const fn order(self) -> usize {
        match self {
            Degree::Constant => 0,
            Degree::Linear => 1,
            Degree::Quadratic => 2,
            Degree::Cubic => 3,
            Degree::Quartic => 4,
            Degree::Quintic => 5,
            Degree::Sextic => 6,
            Degree::Septic => 7,
            Degree::Octic => 8,
            Degree::Nonic => 9,
            Degree::Decic => 10,
            Degree::Higher(n) => n,
        }
    }
}

impl From<usize> for Degree {
    fn from(order: usize) -> Self {
        Degree::from_order(order)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Higher(n) => write!(f, "degree {n}"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}
