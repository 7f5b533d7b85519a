// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simultaneous complex root finding.

use alloc::vec::Vec;

use num_complex::Complex64;

use crate::common::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};
use crate::{Error, Polynomial, Result};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Starting point for the root estimates; seed `k` is this to the power `k`.
///
/// It's neither real nor a root of unity, so the seeds are all distinct.
const SEED: Complex64 = Complex64::new(0.4, 0.9);

/// Options for the [Durand–Kerner] method, which refines estimates of every
/// complex root at once.
///
/// [Durand–Kerner]: https://en.wikipedia.org/wiki/Durand%E2%80%93Kerner_method
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurandKerner {
    /// Iteration stops once no component of any estimate moves by more than
    /// this. It also decides which leading coefficients are negligible.
    pub epsilon: f64,
    /// Iteration gives up after this many steps.
    pub max_iterations: usize,
}

impl Default for DurandKerner {
    fn default() -> Self {
        DurandKerner {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// The outcome of [`DurandKerner::solve`].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ComplexRoots {
    /// Every estimate settled within the tolerance.
    Converged {
        /// One root per degree, repeated roots included.
        roots: Vec<Complex64>,
        /// Steps taken.
        iterations: usize,
    },
    /// The iteration cap was hit first.
    MaxIterationsReached {
        /// The estimates after the final step.
        estimate: Vec<Complex64>,
        /// Steps taken.
        iterations: usize,
    },
}

impl ComplexRoots {
    /// Did the estimates settle?
    pub fn is_converged(&self) -> bool {
        matches!(self, ComplexRoots::Converged { .. })
    }

    /// The roots, or the best estimate if iteration didn't converge.
    pub fn roots(&self) -> &[Complex64] {
        match self {
            ComplexRoots::Converged { roots, .. } => roots,
            ComplexRoots::MaxIterationsReached { estimate, .. } => estimate,
        }
    }

    /// Number of steps taken.
    pub fn iterations(&self) -> usize {
        match self {
            ComplexRoots::Converged { iterations, .. }
            | ComplexRoots::MaxIterationsReached { iterations, .. } => *iterations,
        }
    }

    /// The roots, if iteration converged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonConvergence`] if the iteration cap was reached.
    pub fn into_result(self) -> Result<Vec<Complex64>> {
        match self {
            ComplexRoots::Converged { roots, .. } => Ok(roots),
            ComplexRoots::MaxIterationsReached { iterations, .. } => {
                Err(Error::NonConvergence { iterations })
            }
        }
    }
}

impl DurandKerner {
    /// Options with the given tolerance and iteration cap.
    pub fn new(epsilon: f64, max_iterations: usize) -> Self {
        DurandKerner {
            epsilon,
            max_iterations,
        }
    }

    /// Finds all complex roots of `poly`.
    ///
    /// The polynomial is [normalized](Polynomial::normalize) first. A
    /// polynomial of real order zero converges immediately with no roots.
    #[tracing::instrument(level = "debug", skip_all, fields(order = poly.order()))]
    pub fn solve(&self, poly: &Polynomial) -> ComplexRoots {
        let monic = poly.normalize(self.epsilon);
        let n = monic.real_order(self.epsilon);
        if n == 0 {
            return ComplexRoots::Converged {
                roots: Vec::new(),
                iterations: 0,
            };
        }

        let mut cur: Vec<Complex64> = Vec::with_capacity(n);
        let mut z = Complex64::new(1.0, 0.0);
        for _ in 0..n {
            cur.push(z);
            z *= SEED;
        }
        let mut next = cur.clone();

        for iteration in 1..=self.max_iterations {
            let mut converged = true;
            for (i, slot) in next.iter_mut().enumerate() {
                let zi = cur[i];
                let mut denom = Complex64::new(1.0, 0.0);
                for (j, &zj) in cur.iter().enumerate() {
                    if j != i {
                        denom *= zi - zj;
                    }
                }
                let zn = zi - monic.eval_complex(zi) / denom;
                let diff = zn - zi;
                // A NaN step never counts as settled.
                if !(diff.re.abs() <= self.epsilon && diff.im.abs() <= self.epsilon) {
                    converged = false;
                }
                *slot = zn;
            }
            core::mem::swap(&mut cur, &mut next);
            if converged {
                return ComplexRoots::Converged {
                    roots: cur,
                    iterations: iteration,
                };
            }
        }

        tracing::debug!(
            max_iterations = self.max_iterations,
            "Durand-Kerner did not converge"
        );
        ComplexRoots::MaxIterationsReached {
            estimate: cur,
            iterations: self.max_iterations,
        }
    }
}

impl Polynomial {
    /// All complex roots, by the Durand–Kerner method with default options.
    ///
    /// See [`DurandKerner::solve`].
    pub fn complex_roots(&self) -> ComplexRoots {
        DurandKerner::default().solve(self)
    }
}
