//! Core value types for the tally runtime.
//!
//! This crate provides the foundational types shared by the lexer, the
//! bytecode format and the virtual machine: a floating-point-free number
//! representation, the tagged value model and source positions.
//!
//! # Overview
//!
//! - [`Number`] - Q16.16 fixed-point number with arithmetic, bitwise, shift
//!   and transcendental operations
//! - [`Value`] - Tagged runtime value, keyed by [`Namespace`]
//! - [`SourcePosition`] - Source line for diagnostics
//! - [`ParseNumberError`] - Decimal literal parse failure
//!
//! Every operation in this crate is a pure function of its operands and is
//! safe to use from any number of threads.
//!
//! # Examples
//!
//! ```
//! use core_types::{Number, Value};
//!
//! let x: Number = "2.5".parse().unwrap();
//! let y = Number::from_int(4);
//!
//! assert_eq!(x * y, Number::from_int(10));
//! assert_eq!(Value::from(x + y).to_string(), "6.5");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod number;
mod source;
mod transcendental;
mod value;

pub use error::ParseNumberError;
pub use number::{Number, FRAC_BITS, FRAC_MASK};
pub use source::SourcePosition;
pub use value::{Namespace, Value};
