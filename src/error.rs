// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for polynomial operations.

use thiserror::Error;

/// Result type alias using this crate's [`enum@Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur in polynomial operations.
///
/// Failing to find a root is not an error: root finders report that with
/// `None` or an empty collection.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An argument was outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A value could not be evaluated, for example because the input was NaN.
    #[error("cannot evaluate: {0}")]
    Evaluation(&'static str),

    /// An iterative root finder hit its iteration cap before converging.
    #[error("root finding did not converge after {iterations} iterations")]
    NonConvergence {
        /// Number of iterations performed.
        iterations: usize,
    },
}
