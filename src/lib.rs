//! Arbitrary precision elementary functions of decimal numbers.
//!
//! The library evaluates trigonometric and hyperbolic functions with their inverses, logarithms,
//! exponent, roots, and real powers of [`Decimal`] numbers with any number of significant digits.
//! Functions are computed with continued fractions, series, and Newton's method. The number of
//! continued fraction or series terms, the number of significant digits, the stopping threshold of
//! iterations, and the rounding mode are the [`Precision`] parameters.
//!
//! Functions are evaluated in a [`Context`] which binds precision parameters to the cache
//! of the mathematical constants. A context is immutable and can be shared between threads.
//!
//! ## Examples
//!
//! ```
//! use decimal_elementary::{dec, Context, Error, Precision, RoundingMode};
//!
//! // 100 continued fraction terms, 40 significant digits.
//! let prec = Precision::new(100, 40).unwrap().with_rounding_mode(RoundingMode::ToEven);
//! let ctx = Context::new(prec);
//!
//! // pi = 6*arctan(1/sqrt(3))
//! let x = ctx.sqrt(&dec!(3)).unwrap();
//! let x = dec!(1).div(&x, 50, RoundingMode::ToEven).unwrap();
//! let x = ctx.atan(&x).unwrap();
//! let pi = x.mul(&dec!(6), 40, RoundingMode::ToEven).unwrap();
//!
//! assert_eq!(pi, ctx.pi().unwrap());
//! assert_eq!(pi, dec!(3.141592653589793238462643383279502884197));
//!
//! // errors name the violated condition
//! assert_eq!(ctx.asin(&dec!(1.5)), Err(Error::Domain("arcsine argument is outside of [-1, 1]")));
//! ```
//!
//! Functions can also be used as values through [`eval::UnaryFunction`] and [`eval::BinaryFunction`].

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::module_inception)]

mod common;
pub mod ctx;
mod defs;
pub mod eval;
mod num;
mod ops;
pub mod prec;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::defs::Scale;
pub use crate::defs::Sign;
pub use crate::num::Decimal;
pub use crate::prec::Precision;

pub use crate::defs::DEFAULT_DIGITS;
pub use crate::defs::DEFAULT_TERM_COUNT;
pub use crate::defs::GUARD_DIGITS;
pub use crate::defs::MAX_NEWTON_ITERATIONS;
pub use crate::defs::MAX_SCALE;
