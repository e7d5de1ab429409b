//! Unsigned fixed-point numbers, as a scaled count of atoms.
//!
//! A `FixedPoint<D, N, BASE, DIGITS>` with `atoms` atoms has the value
//! $\text{atoms} \cdot \text{BASE}^{-\text{DIGITS}}$, e.g. `FixedPoint<u8, 1, 10, 2>`
//! counts cents in the range `0.00..=2.55`.
//!
//! Multiplication and division go through [`Square`], so the intermediate product
//! (resp. the rescaled dividend) is exact before the final truncation.

use core::fmt::{self, Write};
use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
use core::str::FromStr;

use ref_cast::RefCast;

use crate::arithmetic::Division;
use crate::decimal::{parse_decimal_checked, write_decimal, Decimal};
use crate::{BigUInt, Digit, Error, Number, Result, Square};

/// Fixed-point number with `DIGITS` places in base `BASE`.
///
/// The scale $\text{BASE}^\text{DIGITS}$ is expected to fit in `N` digits,
/// otherwise [`Self::one`] is not representable and products wrap.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, RefCast)]
pub struct FixedPoint<D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> {
    atoms: BigUInt<D, N>,
}

impl<D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> FixedPoint<D, N, BASE, DIGITS> {
    /// Fractional places shown by `Display` without an explicit precision.
    ///
    /// For decimal bases this is `DIGITS * (BASE / 10)`, otherwise 10.
    pub const DEFAULT_DIGITS: usize = if BASE % 10 != 0 { 10 } else { DIGITS * (BASE / 10) };

    pub fn zero() -> Self {
        Self::default()
    }

    pub const fn from_atoms(atoms: BigUInt<D, N>) -> Self {
        Self { atoms }
    }

    /// View a count of atoms as fixed-point number, without copying.
    pub fn from_atoms_ref(atoms: &BigUInt<D, N>) -> &Self {
        Self::ref_cast(atoms)
    }

    pub fn atoms(&self) -> BigUInt<D, N> {
        self.atoms
    }

    /// $\text{BASE}^\text{DIGITS}$, the number of atoms in one.
    ///
    /// Computed in double width, so it must stay below $2^{2wN}$. A scale that wraps
    /// to zero makes `*` panic and `Display` fail, debug builds catch it here.
    pub fn scale() -> Square<D, N> {
        let scale = Square::from_u128(BASE as u128).pow(DIGITS);
        debug_assert!(!scale.is_zero(), "BASE^DIGITS does not fit in 2N digits");
        scale
    }

    pub fn one() -> Self {
        Self::from_atoms(Self::scale().narrow())
    }

    /// The smallest positive value.
    pub fn atom() -> Self {
        Self::from_atoms(BigUInt::one())
    }

    pub fn max() -> Self {
        Self::from_atoms(BigUInt::MAX)
    }

    pub fn is_zero(&self) -> bool {
        self.atoms.is_zero()
    }

    pub fn checked_add(&self, summand: &Self) -> Result<Self> {
        self.atoms.checked_add(&summand.atoms).map(Self::from_atoms)
    }

    pub fn checked_sub(&self, subtrahend: &Self) -> Result<Self> {
        self.atoms.checked_sub(&subtrahend.atoms).map(Self::from_atoms)
    }

    /// Exact product of the atoms, rescaled by truncating division.
    ///
    /// Fails: iff the rescaled product does not fit in `N` digits.
    pub fn checked_mul(&self, factor: &Self) -> Result<Self> {
        let product = self.atoms.widening_mul(&factor.atoms);
        let Division { quotient, .. } = product.div_rem(&Self::scale())?;
        quotient.try_narrow().map(Self::from_atoms)
    }

    /// Dividend rescaled in double width, then divided by truncating division.
    ///
    /// Fails: with `DivisionByZero` iff `divisor` is zero, with `Overflow` iff the quotient
    /// does not fit in `N` digits.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        let dividend = Square::from(self.atoms).wrapping_mul(&Self::scale());
        let Division { quotient, .. } = dividend.div_rem(&Square::from(divisor.atoms))?;
        quotient.try_narrow().map(Self::from_atoms)
    }

    /// Lossy, bounded by the precision of `f64`.
    pub fn to_f64(&self) -> f64 {
        self.atoms.to_f64() / Self::scale().to_f64()
    }

    /// Decimal rendering with exactly `max_digits` fractional places, truncated.
    ///
    /// `max_digits == 0` renders the integer part only, without a point.
    pub fn decimal(&self, max_digits: usize) -> Decimal<'_, Self> {
        Decimal::new(self, max_digits)
    }
}

/// The operators follow the native integers and panic on division by zero.
fn expect<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", error),
    }
}

impl<'a, D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> AddAssign<&'a Self>
    for FixedPoint<D, N, BASE, DIGITS>
{
    fn add_assign(&mut self, summand: &'a Self) {
        self.atoms += &summand.atoms;
    }
}

impl<'a, D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> SubAssign<&'a Self>
    for FixedPoint<D, N, BASE, DIGITS>
{
    fn sub_assign(&mut self, subtrahend: &'a Self) {
        self.atoms -= &subtrahend.atoms;
    }
}

impl<'a, D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> MulAssign<&'a Self>
    for FixedPoint<D, N, BASE, DIGITS>
{
    /// Truncates the rescaled product to `N` digits.
    fn mul_assign(&mut self, factor: &'a Self) {
        let product = self.atoms.widening_mul(&factor.atoms);
        self.atoms = expect(product.div_rem(&Self::scale())).quotient.narrow();
    }
}

impl<'a, D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> DivAssign<&'a Self>
    for FixedPoint<D, N, BASE, DIGITS>
{
    /// Panics if `divisor` is zero.
    fn div_assign(&mut self, divisor: &'a Self) {
        let dividend = Square::from(self.atoms).wrapping_mul(&Self::scale());
        self.atoms = expect(dividend.div_rem(&Square::from(divisor.atoms))).quotient.narrow();
    }
}

forward_binop!([D: Digit, const N: usize, const BASE: usize, const DIGITS: usize]
    FixedPoint<D, N, BASE, DIGITS>, Add, add, AddAssign, add_assign);
forward_binop!([D: Digit, const N: usize, const BASE: usize, const DIGITS: usize]
    FixedPoint<D, N, BASE, DIGITS>, Sub, sub, SubAssign, sub_assign);
forward_binop!([D: Digit, const N: usize, const BASE: usize, const DIGITS: usize]
    FixedPoint<D, N, BASE, DIGITS>, Mul, mul, MulAssign, mul_assign);
forward_binop!([D: Digit, const N: usize, const BASE: usize, const DIGITS: usize]
    FixedPoint<D, N, BASE, DIGITS>, Div, div, DivAssign, div_assign);

impl<D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> fmt::Display
    for Decimal<'_, FixedPoint<D, N, BASE, DIGITS>>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = FixedPoint::<D, N, BASE, DIGITS>::scale();
        let Division { quotient, remainder } = Square::from(self.value.atoms)
            .div_rem(&scale)
            .map_err(|_| fmt::Error)?;

        write_decimal(&quotient, usize::MAX, f)?;
        if self.max_digits == 0 {
            return Ok(());
        }

        f.write_char('.')?;
        let ten = Square::from_u128(10);
        let mut remainder = remainder;
        for _ in 0..self.max_digits {
            let place = remainder.wrapping_mul(&ten).div_rem(&scale).map_err(|_| fmt::Error)?;
            f.write_char(char::from(b'0' + place.quotient.to_u128() as u8))?;
            remainder = place.remainder;
        }

        Ok(())
    }
}

impl<D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> fmt::Display
    for FixedPoint<D, N, BASE, DIGITS>
{
    /// A precision (`{:.4}`) overrides [`Self::DEFAULT_DIGITS`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_digits = f.precision().unwrap_or(Self::DEFAULT_DIGITS);
        fmt::Display::fmt(&self.decimal(max_digits), f)
    }
}

impl<D: Digit, const N: usize, const BASE: usize, const DIGITS: usize> FromStr
    for FixedPoint<D, N, BASE, DIGITS>
{
    type Err = Error;

    /// Decimal text, `<integer>[.<fraction>]` with up to `DIGITS` fractional places.
    ///
    /// The fraction is converted to `BASE` by truncating division, which loses
    /// precision unless `BASE` is a power of ten.
    ///
    /// Fails: with `Parse` on malformed text, with `Overflow` iff the atom count
    /// (or the scale itself) does not fit in `N` digits.
    fn from_str(text: &str) -> Result<Self> {
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        let scale = Self::scale().try_narrow()?;
        let integer: BigUInt<D, N> = parse_decimal_checked(integer.as_bytes())?;
        let mut atoms = integer.widening_mul(&scale);

        if let Some(fraction) = fraction {
            if fraction.is_empty() || fraction.len() > DIGITS {
                return Err(Error::Parse);
            }
            let part = fraction_atoms(fraction.as_bytes(), &Square::from(scale))?;
            // integer * scale + part < (integer + 1) * scale, which fits in 2N digits
            atoms = atoms.wrapping_add(&part);
        }

        atoms.try_narrow().map(Self::from_atoms)
    }
}

/// `floor(0.<places> * scale)`, by Horner's scheme from the last place.
///
/// Each step computes `(part + place * scale) / 10` and stays below `10 * scale`,
/// so no power of ten is ever formed.
fn fraction_atoms<D: Digit, const N: usize>(
    places: &[u8],
    scale: &Square<D, N>,
) -> Result<Square<D, N>> {
    let ten = Square::from_u128(10);
    let mut part = Square::zero();

    for &byte in places.iter().rev() {
        if !byte.is_ascii_digit() {
            return Err(Error::Parse);
        }
        let place = Square::from_u128((byte - b'0') as u128);
        part = part.wrapping_add(&place.wrapping_mul(scale)).div_rem(&ten)?.quotient;
    }

    Ok(part)
}
