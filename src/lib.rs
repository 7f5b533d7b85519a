// Copyright 2025 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomials for curve geometry.
//!
//! The bezpoly library contains a dynamic-degree [`Polynomial`] type and the
//! algorithms a 2D vector graphics editor needs from it: arithmetic,
//! calculus, evaluation, and real and complex root finding. Bezier control
//! values convert to the power basis with [`Polynomial::bezier`], so curve
//! extrema, intersections and nearest-point queries reduce to polynomial
//! root finding.
//!
//! # Examples
//!
//! Solving a quadratic:
//! ```
//! use bezpoly::{Degree, Polynomial};
//!
//! // x² - 3x + 2
//! let p = Polynomial::new(&[1.0, -3.0, 2.0]);
//! assert_eq!(p.degree(), Degree::Quadratic);
//! assert_eq!(p.roots(), [1.0, 2.0]);
//! ```
//!
//! Finding where a cubic Bezier's x coordinate turns around:
//! ```
//! use bezpoly::{Polynomial, DEFAULT_EPSILON};
//!
//! let x = Polynomial::bezier(&[0.0, 3.0, -2.0, 1.0]);
//! let turns = x.derivative().roots_in_interval(0.0, 1.0, DEFAULT_EPSILON);
//! assert_eq!(turns.len(), 2);
//! for t in turns {
//!     assert!(x.differentiate(t).unwrap().abs() < 1e-4);
//! }
//! ```
//!
//! Coefficients are edited through a [`PolynomialBuilder`], which freezes
//! into an immutable `Polynomial`:
//! ```
//! use bezpoly::{Degree, PolynomialBuilder};
//!
//! let mut builder = PolynomialBuilder::zeroed(3);
//! builder.set_degree_coefficient(2, 1.0);
//! builder.set_degree_coefficient(0, 1.0);
//! let p = builder.build();
//! assert_eq!(p.degree(), Degree::Quadratic);
//! assert!(p.roots().is_empty());
//! assert_eq!(p.complex_roots().roots().len(), 2);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate uses the `alloc` crate regardless.
//!
//! With the `serde` feature, a [`Polynomial`] serializes as its list of
//! coefficients, lowest power first.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezpoly requires either the `std` or `libm` feature");

extern crate alloc;

#[cfg(test)]
mod arbitrary;
mod bezier;
mod builder;
mod calculus;
pub mod common;
mod degree;
mod durand_kerner;
mod error;
mod interpolate;
mod ops;
mod poly;
mod roots;
pub mod solve;

pub use crate::bezier::BezierStrategy;
pub use crate::builder::PolynomialBuilder;
pub use crate::common::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};
pub use crate::degree::Degree;
pub use crate::durand_kerner::{ComplexRoots, DurandKerner};
pub use crate::error::{Error, Result};
pub use crate::poly::Polynomial;
pub use crate::solve::{solve_cubic, solve_linear, solve_quadratic, solve_quartic, solve_quintic};

pub use num_complex::Complex64;
