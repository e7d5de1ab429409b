//! Fixed-width unsigned big integers and fixed-point numbers, without allocations.
//!
//! [`BigUInt<D, N>`][BigUInt] is exactly `N` digits of the native word `D` (see [`Digit`]),
//! with wrapping operators, `overflowing_*` / `checked_*` methods for exactness, long
//! division, shifts, exponentiation and decimal text conversion.
//!
//! [`FixedPoint<D, N, BASE, DIGITS>`][FixedPoint] counts atoms of size $\text{BASE}^{-\text{DIGITS}}$,
//! and rescales products and quotients in double width ([`Square`]).
//!
//! ```
//! use fixed_uint::{BigUInt, FixedPoint};
//!
//! let x: BigUInt<u32, 4> = "340282366920938463463374607431768211455".parse().unwrap();
//! assert_eq!(x, BigUInt::MAX);
//!
//! let price: FixedPoint<u64, 2, 10, 2> = "19.99".parse().unwrap();
//! let quantity: FixedPoint<u64, 2, 10, 2> = "3".parse().unwrap();
//! assert_eq!((price * quantity).to_string(), "59.97");
//! ```
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod digit;
pub use digit::{Digit, Exception, Product, Sum};
mod numbers;
pub use numbers::{BigUInt, Number, Square};
mod arithmetic;
pub use arithmetic::{Checked, Division};
mod decimal;
pub use decimal::Decimal;
mod fixed;
pub use fixed::FixedPoint;
mod aliases;
pub use aliases::*;
mod error;
pub use error::{Error, Result};
