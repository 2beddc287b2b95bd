//! Pure Rust arbitrary-precision arithmetic over naturals, integers and
//! exact rationals.
//!
//! # About
//! This library provides three value kinds built on a shared digit-array
//! kernel:
//!
//! - [`Natural`]: an unbounded non-negative integer.
//! - [`Integer`]: an unbounded signed integer (sign + [`Natural`] magnitude).
//! - [`Rational`]: an exact fraction of an [`Integer`] numerator over a
//!   positive [`Natural`] denominator, always kept in lowest terms.
//!
//! Values of typical size live entirely in an inline buffer and never touch
//! the heap. Arithmetic is plain schoolbook: the multiplier is a column
//! (Comba) multiplier and division is long division with divisor
//! normalization, both O(n·m).
//!
//! Fallible operations ([`Natural`] subtraction, division by zero, narrowing
//! conversions, binary64 conversion) report a five-kind [`Error`] instead of
//! partially mutating their destination.
//!
//! ```
//! use bigrat::Rational;
//!
//! let a: Rational = "1024/384".parse().unwrap();
//! assert_eq!(a.to_string(), "8/3");
//!
//! let b = Rational::try_from(0.5).unwrap();
//! assert_eq!((&a * &b).to_string(), "4/3");
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod digits;
mod error;
mod integer;
mod limb;
mod natural;
mod primitives;
mod rational;
mod word;

pub use crate::{
    error::{Error, Result},
    integer::Integer,
    limb::Limb,
    natural::Natural,
    rational::Rational,
    word::{WideWord, Word},
};
