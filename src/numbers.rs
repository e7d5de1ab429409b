use core::ops::{Deref, DerefMut};

use crate::{Digit, Error, Result};

mod trait_implementations;
pub(crate) use trait_implementations::generic_cmp;

/// Something similar to a `[Digit]` of fixed length, without allocations.
///
/// Implementations are little-endian: `le_digits()[0]` is the least significant digit.
///
/// Current implementations are:
/// - `BigUInt<D, N>`
/// - `Square<D, N>`
///
/// The generic algorithms (long division, exponentiation, decimal conversion)
/// are written against this trait, so that they also work on double width.
pub trait Number: Copy + Default + Eq {
    type Digit: Digit;

    /// Number of digits, fixed for the lifetime of the type.
    const DIGITS: usize;

    fn le_digits(&self) -> &[Self::Digit];

    fn le_digits_mut(&mut self) -> &mut [Self::Digit];

    fn zero() -> Self {
        Self::default()
    }

    fn one() -> Self {
        Self::from_digit(Self::Digit::ONE)
    }

    fn from_digit(digit: Self::Digit) -> Self {
        let mut number = Self::default();
        number.le_digits_mut()[0] = digit;
        number
    }

    /// Zero-extends or truncates, whichever applies.
    fn from_u128(value: u128) -> Self {
        let mut number = Self::default();
        for (i, digit) in number.le_digits_mut().iter_mut().enumerate() {
            let shift = i * Self::Digit::BITS;
            if shift >= 128 {
                break;
            }
            *digit = Self::Digit::from_u128(value >> shift);
        }
        number
    }

    /// Truncating, like `as u128`.
    fn to_u128(&self) -> u128 {
        let mut value = 0;
        for (i, digit) in self.le_digits().iter().enumerate() {
            let shift = i * Self::Digit::BITS;
            if shift >= 128 {
                break;
            }
            value |= digit.to_u128() << shift;
        }
        value
    }

    /// Precision is bounded by the mantissa of `f64`.
    fn to_f64(&self) -> f64 {
        let radix = Self::Digit::MAX.to_u128() as f64 + 1.0;
        self.le_digits()
            .iter()
            .rev()
            .fold(0.0, |accumulator, digit| accumulator * radix + digit.to_u128() as f64)
    }

    fn is_zero(&self) -> bool {
        self.le_digits().iter().all(|&digit| digit == Self::Digit::ZERO)
    }

    /// 0 if zero, else index + 1 of the last non-zero digit.
    fn highest_digit(&self) -> usize {
        self.le_digits()
            .iter()
            .rposition(|&digit| digit != Self::Digit::ZERO)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    fn significant_digits(&self) -> &[Self::Digit] {
        &self.le_digits()[..self.highest_digit()]
    }

    /// Number of significant bits, 0 for zero.
    fn bit_length(&self) -> usize {
        match self.highest_digit() {
            0 => 0,
            l => l * Self::Digit::BITS - self.le_digits()[l - 1].leading_zero_bits(),
        }
    }

    fn bit(&self, i: usize) -> bool {
        let digit = self.le_digits()[i / Self::Digit::BITS];
        (digit >> (i % Self::Digit::BITS)) & Self::Digit::ONE == Self::Digit::ONE
    }
}

/// Unsigned integer with exactly `N` digits of type `D`.
///
/// Internal representation as little-endian, so the value is
/// $\sum_i d_i \cdot 2^{w i}$ for the digit width $w$.
///
/// Arithmetic happens modulo $2^{wN}$, unless the signature says otherwise
/// (e.g. [`Self::widening_mul`] or [`Self::overflowing_add`]).
///
/// `N` must be at least one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigUInt<D: Digit, const N: usize>(pub(crate) [D; N]);

impl<D: Digit, const N: usize> Number for BigUInt<D, N> {
    type Digit = D;
    const DIGITS: usize = N;

    fn le_digits(&self) -> &[D] {
        &self.0
    }

    fn le_digits_mut(&mut self) -> &mut [D] {
        &mut self.0
    }
}

// c'tors and such
impl<D: Digit, const N: usize> BigUInt<D, N> {
    pub const ZERO: Self = Self([D::ZERO; N]);
    pub const ONE: Self = {
        let mut digits = [D::ZERO; N];
        digits[0] = D::ONE;
        Self(digits)
    };
    pub const MAX: Self = Self([D::MAX; N]);

    pub const DIGITS: usize = N;
    pub const BITS: usize = N * D::BITS;

    pub const fn from_digits(digits: [D; N]) -> Self {
        Self(digits)
    }

    /// Zero-extends short slices, drops the excess digits of long ones.
    pub fn from_slice(slice: &[D]) -> Self {
        let mut x = Self::ZERO;
        let l = slice.len().min(N);
        x.0[..l].copy_from_slice(&slice[..l]);
        x
    }

    /// The digits, going from the least significant digit to the most significant digit.
    pub fn digits(&self) -> &[D; N] {
        &self.0
    }

    pub fn digits_mut(&mut self) -> &mut [D; N] {
        &mut self.0
    }

    /// Zero-extends or truncates into `M` digits.
    pub fn resize<const M: usize>(&self) -> BigUInt<D, M> {
        BigUInt::from_slice(&self.0)
    }

    /// Embed in `M` digits, if possible.
    ///
    /// Fails: iff a non-zero digit would be dropped.
    pub fn try_resize<const M: usize>(&self) -> Result<BigUInt<D, M>> {
        if self.highest_digit() <= M {
            Ok(self.resize())
        } else {
            Err(Error::Overflow)
        }
    }
}

/// Trait methods as inherent methods, for convenience.
impl<D: Digit, const N: usize> BigUInt<D, N> {
    pub fn zero() -> Self {
        Self::ZERO
    }
    pub fn one() -> Self {
        Self::ONE
    }
    /// The highest possible value.
    pub fn max() -> Self {
        Self::MAX
    }
    pub fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }
    pub fn highest_digit(&self) -> usize {
        Number::highest_digit(self)
    }
    pub fn bit_length(&self) -> usize {
        Number::bit_length(self)
    }
    pub fn from_u128(value: u128) -> Self {
        Number::from_u128(value)
    }
    pub fn to_u128(&self) -> u128 {
        Number::to_u128(self)
    }
    pub fn to_f64(&self) -> f64 {
        Number::to_f64(self)
    }
}

/// Product of two `N`-digit unsigned integers, i.e. `2N` digits.
///
/// `Square<D, N>` is what `BigUInt<D, {2 * N}>` would be, if const-generics on stable
/// would allow expressing this. This is a workaround type.
///
/// The low half is stored first, so the digits are contiguous and little-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square<D: Digit, const N: usize>(pub(crate) [[D; N]; 2]);

impl<D: Digit, const N: usize> Number for Square<D, N> {
    type Digit = D;
    const DIGITS: usize = 2 * N;

    fn le_digits(&self) -> &[D] {
        self.0.as_flattened()
    }

    fn le_digits_mut(&mut self) -> &mut [D] {
        self.0.as_flattened_mut()
    }
}

impl<D: Digit, const N: usize> Square<D, N> {
    pub fn from_halves(lo: BigUInt<D, N>, hi: BigUInt<D, N>) -> Self {
        Self([lo.0, hi.0])
    }

    pub fn lo(&self) -> BigUInt<D, N> {
        BigUInt(self.0[0])
    }

    pub fn hi(&self) -> BigUInt<D, N> {
        BigUInt(self.0[1])
    }

    /// Drops the high half.
    pub fn narrow(&self) -> BigUInt<D, N> {
        self.lo()
    }

    /// Fails: iff the high half is non-zero.
    pub fn try_narrow(&self) -> Result<BigUInt<D, N>> {
        if self.hi().is_zero() {
            Ok(self.lo())
        } else {
            Err(Error::Overflow)
        }
    }
}

impl<D: Digit, const N: usize> From<BigUInt<D, N>> for Square<D, N> {
    fn from(unsigned: BigUInt<D, N>) -> Self {
        Self::from_halves(unsigned, BigUInt::ZERO)
    }
}

impl<D: Digit, const N: usize> Deref for BigUInt<D, N> {
    type Target = [D];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<D: Digit, const N: usize> DerefMut for BigUInt<D, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<D: Digit, const N: usize> Deref for Square<D, N> {
    type Target = [D];
    fn deref(&self) -> &Self::Target {
        self.le_digits()
    }
}

impl<D: Digit, const N: usize> DerefMut for Square<D, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.le_digits_mut()
    }
}
