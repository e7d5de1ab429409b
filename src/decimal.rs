//! Decimal text conversion, without allocations.
//!
//! Rendering divides by [`Digit::DECIMAL_CHUNK`] (the largest power of ten that
//! fits in a digit) instead of by ten, so that a whole chunk of decimal places is
//! produced per long division. The chunks are collected least significant first
//! in a scratch buffer twice the size of the value, then written out most
//! significant first.

use core::fmt::{self, Write};
use core::str::FromStr;

use crate::arithmetic::{div_rem_assign_digit, mac_assign_digit};
use crate::{BigUInt, Digit, Error, Number, Result, Square};

/// Parses ASCII decimal digits, as `accumulator = accumulator * 10 + digit`.
///
/// Wraps modulo the width of `T` on overlong input.
/// Fails: on empty input, or any byte that is not a decimal digit.
pub(crate) fn parse_decimal<T: Number>(text: &[u8]) -> Result<T> {
    parse_decimal_carry(text).map(|(value, _)| value)
}

/// Like [`parse_decimal`], but fails with `Overflow` instead of wrapping.
pub(crate) fn parse_decimal_checked<T: Number>(text: &[u8]) -> Result<T> {
    match parse_decimal_carry(text)? {
        (value, false) => Ok(value),
        (_, true) => Err(Error::Overflow),
    }
}

/// The wrapped value, and whether any carry was dropped on the way.
fn parse_decimal_carry<T: Number>(text: &[u8]) -> Result<(T, bool)> {
    if text.is_empty() {
        return Err(Error::Parse);
    }

    let ten = T::Digit::from_u128(10);
    let mut accumulator = T::zero();
    let mut overflow = false;

    for &byte in text {
        if !byte.is_ascii_digit() {
            return Err(Error::Parse);
        }
        let digit = T::Digit::from_u128((byte - b'0') as u128);
        overflow |= mac_assign_digit(accumulator.le_digits_mut(), ten, digit) != T::Digit::ZERO;
    }

    Ok((accumulator, overflow))
}

/// Number of decimal places of a single chunk, at least one.
fn decimal_width(mut chunk: u128) -> usize {
    let mut width = 1;
    while chunk >= 10 {
        chunk /= 10;
        width += 1;
    }
    width
}

/// Writes the low `width` decimal places of `chunk`, zero-padded, skipping the first `*skip` of them.
fn write_chunk(f: &mut fmt::Formatter<'_>, chunk: u128, width: usize, skip: &mut usize) -> fmt::Result {
    for place in (0..width).rev() {
        if *skip > 0 {
            *skip -= 1;
            continue;
        }
        let digit = (chunk / 10u128.pow(place as u32)) % 10;
        f.write_char(char::from(b'0' + digit as u8))?;
    }
    Ok(())
}

/// Writes at most the `max_digits` least significant decimal places of `value`.
///
/// Leading zeros are not written, except for a single `0` if the value is zero.
pub(crate) fn write_decimal<T: Number>(
    value: &T,
    max_digits: usize,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if max_digits == 0 {
        return Ok(());
    }

    let k = T::Digit::DECIMAL_CHUNK_DIGITS;

    // a chunk carries more than half the bits of a digit, so 2 * DIGITS chunks always suffice
    let mut chunks = [T::zero(); 2];
    let mut count = 0;
    let mut rest = *value;

    loop {
        let chunk = div_rem_assign_digit(rest.le_digits_mut(), T::Digit::DECIMAL_CHUNK);
        chunks[count / T::DIGITS].le_digits_mut()[count % T::DIGITS] = chunk;
        count += 1;

        if rest.is_zero() || count.saturating_mul(k) >= max_digits {
            break;
        }
    }

    let chunk = |i: usize| chunks[i / T::DIGITS].le_digits()[i % T::DIGITS].to_u128();

    let top_width = if rest.is_zero() { decimal_width(chunk(count - 1)) } else { k };
    let total = (count - 1) * k + top_width;
    let mut skip = total.saturating_sub(max_digits);

    write_chunk(f, chunk(count - 1), top_width, &mut skip)?;
    for i in (0..count - 1).rev() {
        write_chunk(f, chunk(i), k, &mut skip)?;
    }

    Ok(())
}

/// Displays the value in decimal, limited to its `max_digits` least significant places.
///
/// Constructed via [`BigUInt::decimal`] or [`FixedPoint::decimal`][crate::FixedPoint::decimal].
#[derive(Clone, Copy, Debug)]
pub struct Decimal<'a, T> {
    pub(crate) value: &'a T,
    pub(crate) max_digits: usize,
}

impl<'a, T> Decimal<'a, T> {
    pub(crate) fn new(value: &'a T, max_digits: usize) -> Self {
        Self { value, max_digits }
    }
}

impl<T: Number> fmt::Display for Decimal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(self.value, self.max_digits, f)
    }
}

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// Decimal rendering of the low `max_digits` places, e.g. `x.decimal(3)` of 12345 shows "345".
    ///
    /// Nothing is rounded, and `max_digits == 0` renders nothing.
    pub fn decimal(&self, max_digits: usize) -> Decimal<'_, Self> {
        Decimal::new(self, max_digits)
    }
}

impl<D: Digit, const N: usize> fmt::Display for BigUInt<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(self, usize::MAX, f)
    }
}

impl<D: Digit, const N: usize> fmt::Display for Square<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(self, usize::MAX, f)
    }
}

impl<D: Digit, const N: usize> FromStr for BigUInt<D, N> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_decimal(text.as_bytes())
    }
}

impl<D: Digit, const N: usize> FromStr for Square<D, N> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_decimal(text.as_bytes())
    }
}
