//! Word primitives.
//!
//! A [`Digit`] is one native unsigned machine word, [`BigUInt`][crate::BigUInt]
//! is composed of many of them. Everything multi-digit in this crate is built
//! from the carry-aware operations in here.
//!
//! The free functions [`add`], [`sub`] and [`mul`] never fail, they report
//! carries and borrows in their result instead. The `checked_*` variants turn
//! the same conditions into an [`Error`].

use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, Not, Shl, Shr};

use zeroize::Zeroize;

use crate::{Error, Result};

#[cfg(feature = "ct-maybe")]
pub trait ConstantTime: subtle::ConditionallySelectable + subtle::ConstantTimeEq {}
#[cfg(feature = "ct-maybe")]
impl<T: subtle::ConditionallySelectable + subtle::ConstantTimeEq> ConstantTime for T {}

#[cfg(not(feature = "ct-maybe"))]
pub trait ConstantTime {}
#[cfg(not(feature = "ct-maybe"))]
impl<T> ConstantTime for T {}

/// A native unsigned word: one of `u8`, `u16`, `u32`, `u64`.
///
/// All double-width intermediates are computed in the next wider native type,
/// so every operation here is exact.
pub trait Digit:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::UpperHex
    + Zeroize
    + ConstantTime
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Largest power of ten that fits in a digit.
    const DECIMAL_CHUNK: Self;
    /// Number of decimal places in [`Self::DECIMAL_CHUNK`].
    const DECIMAL_CHUNK_DIGITS: usize;

    /// Big-endian bytes of a digit.
    type Bytes: AsRef<[u8]>;

    /// Add with carry: `(self + rhs + carry) mod 2^BITS` and the outgoing carry.
    fn adc(self, rhs: Self, carry: bool) -> (Self, bool);

    /// Subtract with borrow: `(self - rhs - borrow) mod 2^BITS` and the outgoing borrow.
    fn sbb(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Exact product as `(low, high)`.
    fn mul_wide(self, rhs: Self) -> (Self, Self);

    /// Multiply-accumulate: `self * rhs + addend + carry` as `(low, high)`.
    ///
    /// Cannot overflow, as $(2^w - 1)^2 + 2(2^w - 1) = 2^{2w} - 1$.
    fn mac(self, rhs: Self, addend: Self, carry: Self) -> (Self, Self);

    /// Divide a two digit numerator by a one digit divisor, returns quotient and remainder.
    ///
    /// The caller must ensure `high < divisor`, so that the quotient fits in a single digit.
    fn div_wide(high: Self, low: Self, divisor: Self) -> (Self, Self);

    fn leading_zero_bits(self) -> usize;

    /// Keeps the low `BITS` bits.
    fn from_u128(value: u128) -> Self;

    fn to_u128(self) -> u128;

    fn be_bytes(self) -> Self::Bytes;
}

macro_rules! impl_digit {
    ($digit:ty, $double:ty, $chunk:expr, $chunk_digits:expr) => {
        impl Digit for $digit {
            const BITS: usize = <$digit>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$digit>::MAX;

            const DECIMAL_CHUNK: Self = $chunk;
            const DECIMAL_CHUNK_DIGITS: usize = $chunk_digits;

            type Bytes = [u8; core::mem::size_of::<$digit>()];

            #[inline]
            fn adc(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (sum, c1) = self.overflowing_add(rhs);
                let (sum, c2) = sum.overflowing_add(carry as Self);
                (sum, c1 | c2)
            }

            #[inline]
            fn sbb(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (difference, b1) = self.overflowing_sub(rhs);
                let (difference, b2) = difference.overflowing_sub(borrow as Self);
                (difference, b1 | b2)
            }

            #[inline]
            fn mul_wide(self, rhs: Self) -> (Self, Self) {
                let product = (self as $double) * (rhs as $double);
                (product as Self, (product >> <$digit>::BITS) as Self)
            }

            #[inline]
            fn mac(self, rhs: Self, addend: Self, carry: Self) -> (Self, Self) {
                let accumulator = (self as $double) * (rhs as $double)
                    + (addend as $double)
                    + (carry as $double);
                (accumulator as Self, (accumulator >> <$digit>::BITS) as Self)
            }

            #[inline]
            fn div_wide(high: Self, low: Self, divisor: Self) -> (Self, Self) {
                debug_assert!(high < divisor);

                let x = ((high as $double) << <$digit>::BITS) | (low as $double);
                let divisor = divisor as $double;

                ((x / divisor) as Self, (x % divisor) as Self)
            }

            #[inline]
            fn leading_zero_bits(self) -> usize {
                self.leading_zeros() as usize
            }

            #[inline]
            fn from_u128(value: u128) -> Self {
                value as Self
            }

            #[inline]
            fn to_u128(self) -> u128 {
                self as u128
            }

            #[inline]
            fn be_bytes(self) -> Self::Bytes {
                self.to_be_bytes()
            }
        }
    };
}

impl_digit!(u8, u16, 100, 2);
impl_digit!(u16, u32, 10_000, 4);
impl_digit!(u32, u64, 1_000_000_000, 9);
impl_digit!(u64, u128, 10_000_000_000_000_000_000, 19);

/// The exception status of an arithmetic operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Exception {
    #[default]
    None,
    /// Carry out of the top digit.
    Overflow,
    /// Borrow out of the top digit.
    Underflow,
}

/// Result of a non-failing addition or subtraction.
///
/// `value` is always the wrapped result, `exception` tells whether wrapping happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sum<T> {
    pub value: T,
    pub exception: Exception,
}

impl<T> Sum<T> {
    pub(crate) fn carried(value: T, carry: bool) -> Self {
        let exception = if carry { Exception::Overflow } else { Exception::None };
        Self { value, exception }
    }

    pub(crate) fn borrowed(value: T, borrow: bool) -> Self {
        let exception = if borrow { Exception::Underflow } else { Exception::None };
        Self { value, exception }
    }

    pub fn is_exact(&self) -> bool {
        self.exception == Exception::None
    }

    /// The value, if no carry or borrow occurred.
    pub fn into_result(self) -> Result<T> {
        match self.exception {
            Exception::None => Ok(self.value),
            Exception::Overflow => Err(Error::Overflow),
            Exception::Underflow => Err(Error::Underflow),
        }
    }
}

/// Exact double-word product of two digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Product<D> {
    pub low: D,
    pub high: D,
}

/// Addition with carry detection.
#[inline]
pub fn add<D: Digit>(a: D, b: D, carry: bool) -> Sum<D> {
    let (value, carry) = a.adc(b, carry);
    Sum::carried(value, carry)
}

/// Subtraction with borrow detection.
#[inline]
pub fn sub<D: Digit>(a: D, b: D, borrow: bool) -> Sum<D> {
    let (value, borrow) = a.sbb(b, borrow);
    Sum::borrowed(value, borrow)
}

/// Exact multiplication.
#[inline]
pub fn mul<D: Digit>(a: D, b: D) -> Product<D> {
    let (low, high) = a.mul_wide(b);
    Product { low, high }
}

/// Fails with [`Error::Overflow`] on carry.
pub fn checked_add<D: Digit>(a: D, b: D) -> Result<D> {
    add(a, b, false).into_result()
}

/// Fails with [`Error::Underflow`] on borrow.
pub fn checked_sub<D: Digit>(a: D, b: D) -> Result<D> {
    sub(a, b, false).into_result()
}

/// Fails with [`Error::Overflow`] if the high word of the product is non-zero.
pub fn checked_mul<D: Digit>(a: D, b: D) -> Result<D> {
    let Product { low, high } = mul(a, b);
    if high == D::ZERO {
        Ok(low)
    } else {
        Err(Error::Overflow)
    }
}
