use core::{cmp::Ordering, ops::{DivAssign, RemAssign}};

#[cfg(feature = "ct-maybe")]
use subtle::{Choice, ConditionallySelectable};

use super::shift::shl_one_assign;
use super::subtract::sub_assign_borrow;
use crate::numbers::generic_cmp;
use crate::{BigUInt, Digit, Error, Number, Result, Square};

/// Quotient and remainder.
///
/// Invariant: `dividend = quotient * divisor + remainder`, and `remainder < divisor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Division<T> {
    pub quotient: T,
    pub remainder: T,
}

/// Divides the digits in-place by a single digit, returning the remainder.
///
/// Runs down the digits, dividing each by the divisor, while carrying along the remainder.
pub(crate) fn div_rem_assign_digit<D: Digit>(digits: &mut [D], divisor: D) -> D {
    let mut remainder = D::ZERO;

    for digit in digits.iter_mut().rev() {
        let (quotient, r) = D::div_wide(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

#[inline]
fn set_bit<D: Digit>(digits: &mut [D], i: usize) {
    let digit = &mut digits[i / D::BITS];
    *digit = *digit | (D::ONE << (i % D::BITS));
}

/// "Multi-precision division of x by n".
///
/// Meaning: Return unique values `(q, r)` with `x = q*n + r`, and `0 <= r < n`.
///
/// Single-digit divisors take the digit-wise path, everything else is restoring
/// binary long division: shift the running remainder left by one bit, bring in the next
/// bit of `x`, and subtract `n` whenever the remainder reached it.
///
/// With feature `ct-maybe`, all bits of `x` are processed and the subtraction is selected.
pub(crate) fn generic_div_rem<T: Number>(x: &T, n: &T) -> Result<Division<T>> {
    if n.is_zero() {
        return Err(Error::DivisionByZero);
    }

    #[cfg(not(feature = "ct-maybe"))] {
        if generic_cmp(x.le_digits(), n.le_digits()) == Ordering::Less {
            return Ok(Division { quotient: T::zero(), remainder: *x });
        }

        if n.highest_digit() == 1 {
            let mut quotient = *x;
            let remainder = div_rem_assign_digit(quotient.le_digits_mut(), n.le_digits()[0]);
            return Ok(Division { quotient, remainder: T::from_digit(remainder) });
        }
    }

    #[cfg(not(feature = "ct-maybe"))]
    let bits = x.bit_length();

    #[cfg(feature = "ct-maybe")]
    let bits = T::DIGITS * T::Digit::BITS;

    let mut quotient = T::zero();
    let mut remainder = T::zero();

    for i in (0..bits).rev() {
        // remainder < n before the shift, so it stays below 2n; should a bit fall off
        // the top, the remainder exceeds n and the wrapping subtraction is exact
        let overflow = shl_one_assign(remainder.le_digits_mut(), x.bit(i));

        let mut difference = remainder;
        let borrow = sub_assign_borrow(difference.le_digits_mut(), n.le_digits());
        let subtract = overflow | !borrow;

        #[cfg(not(feature = "ct-maybe"))] {
            if subtract {
                remainder = difference;
                set_bit(quotient.le_digits_mut(), i);
            }
        }

        #[cfg(feature = "ct-maybe")] {
            let choice = Choice::from(subtract as u8);
            for (r, d) in remainder.le_digits_mut().iter_mut().zip(difference.le_digits()) {
                r.conditional_assign(d, choice);
            }
            let bit = T::Digit::ONE << (i % T::Digit::BITS);
            let q = &mut quotient.le_digits_mut()[i / T::Digit::BITS];
            *q = *q | T::Digit::conditional_select(&T::Digit::ZERO, &bit, choice);
        }
    }

    debug_assert!(generic_cmp(remainder.le_digits(), n.le_digits()) == Ordering::Less);
    Ok(Division { quotient, remainder })
}

/// The operators follow the native integers and panic on a zero divisor.
fn expect_division<T>(division: Result<Division<T>>) -> Division<T> {
    match division {
        Ok(division) => division,
        Err(error) => panic!("{}", error),
    }
}

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// Fails: iff `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<Division<Self>> {
        generic_div_rem(self, divisor)
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|division| division.quotient)
    }

    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|division| division.remainder)
    }
}

impl<D: Digit, const N: usize> Square<D, N> {
    pub fn div_rem(&self, divisor: &Self) -> Result<Division<Self>> {
        generic_div_rem(self, divisor)
    }
}

//
// Implement Div
//

impl<'a, D: Digit, const N: usize> DivAssign<&'a Self> for BigUInt<D, N> {
    /// Panics if `divisor` is zero.
    fn div_assign(&mut self, divisor: &'a Self) {
        *self = expect_division(self.div_rem(divisor)).quotient;
    }
}

forward_binop!([D: Digit, const N: usize] BigUInt<D, N>, Div, div, DivAssign, div_assign);

//
// Implement Rem
//

impl<'a, D: Digit, const N: usize> RemAssign<&'a Self> for BigUInt<D, N> {
    /// Panics if `divisor` is zero.
    fn rem_assign(&mut self, divisor: &'a Self) {
        *self = expect_division(self.div_rem(divisor)).remainder;
    }
}

forward_binop!([D: Digit, const N: usize] BigUInt<D, N>, Rem, rem, RemAssign, rem_assign);

#[cfg(test)]
mod test {
    use super::*;
    use super::super::multiply::test::MUL_TRIPLES;

    const N1: u32 = -1i64 as u32;
    const N2: u32 = -2i64 as u32;
    const M: u32 = u32::MAX;

    /// Assert that an op works for all val/ref combinations
    macro_rules! assert_op {
        ($left:ident $op:tt $right:ident == $expected:expr) => {
            assert_eq!((&$left) $op (&$right), $expected);
            assert_eq!((&$left) $op $right.clone(), $expected);
            assert_eq!($left.clone() $op (&$right), $expected);
            assert_eq!($left.clone() $op $right.clone(), $expected);
        };
    }

    /// Assert that an assign-op works for all val/ref combinations
    macro_rules! assert_assign_op {
        ($left:ident $op:tt $right:ident == $expected:expr) => {{
            let mut left = $left.clone();
            assert_eq!({ left $op &$right; left }, $expected);

            let mut left = $left.clone();
            assert_eq!({ left $op $right.clone(); left }, $expected);
        }};
    }

    pub const DIV_REM_QUADRUPLES: &'static [(
        &'static [u32],
        &'static [u32],
        &'static [u32],
        &'static [u32],
    )] = &[
        (&[1], &[2], &[], &[1]),
        (&[3], &[2], &[1], &[1]),
        (&[1, 1], &[2], &[M / 2 + 1], &[1]),
        (&[1, 1, 1], &[2], &[M / 2 + 1, M / 2 + 1], &[1]),
        (&[0, 1], &[N1], &[1], &[1]),
        (&[N1, N1], &[N2], &[2, 1], &[3]),
        (&[N1, N1, N1], &[N1, 1], &[0x4000_0000, 0x8000_0000], &[0x3FFF_FFFF]),
    ];

    #[test]
    fn seven_by_two() {
        let seven = BigUInt::<u8, 1>::from(7u8);
        let two = BigUInt::<u8, 1>::from(2u8);
        let division = seven.div_rem(&two).unwrap();
        assert_eq!(division.quotient, BigUInt::from(3u8));
        assert_eq!(division.remainder, BigUInt::from(1u8));
    }

    #[test]
    fn by_zero() {
        let x = BigUInt::<u32, 3>::from(12345u32);
        assert_eq!(x.div_rem(&BigUInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(x.checked_div(&BigUInt::zero()), Err(Error::DivisionByZero));
        assert_eq!(x.checked_rem(&BigUInt::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn operator_by_zero_panics() {
        let x = BigUInt::<u32, 3>::from(12345u32);
        let _ = x / BigUInt::zero();
    }

    #[test]
    fn test_div_rem() {
        type U = BigUInt<u32, 7>;

        for &(a, b, c) in MUL_TRIPLES.iter() {
            let a = U::from_slice(a);
            let b = U::from_slice(b);
            let c = U::from_slice(c);

            if !a.is_zero() {
                assert_op!(c / a == b);
                assert_op!(c % a == U::zero());
                assert_assign_op!(c /= a == b);
                assert_assign_op!(c %= a == U::zero());
                assert_eq!(c.div_rem(&a), Ok(Division { quotient: b, remainder: U::zero() }));
            }
            if !b.is_zero() {
                assert_op!(c / b == a);
                assert_op!(c % b == U::zero());
                assert_assign_op!(c /= b == a);
                assert_assign_op!(c %= b == U::zero());
                assert_eq!(c.div_rem(&b), Ok(Division { quotient: a, remainder: U::zero() }));
            }
        }

        for &(a, b, c, d) in DIV_REM_QUADRUPLES.iter() {
            let a = U::from_slice(a);
            let b = U::from_slice(b);
            let c = U::from_slice(c);
            let d = U::from_slice(d);

            assert_op!(a / b == c);
            assert_op!(a % b == d);
            assert_assign_op!(a /= b == c);
            assert_assign_op!(a %= b == d);
            assert_eq!(a.div_rem(&b), Ok(Division { quotient: c, remainder: d }));
        }
    }

    #[test]
    fn multi_digit_divisor() {
        type U = BigUInt<u8, 4>;
        let x = U::from(0xFFFF_FFFFu32);
        let n = U::from(0x1_0001u32);
        assert_eq!(x.div_rem(&n), Ok(Division { quotient: U::from(0xFFFFu16), remainder: U::zero() }));

        // divisor with the top bit set
        let n = U::from(0x8000_0001u32);
        assert_eq!(x.div_rem(&n), Ok(Division { quotient: U::one(), remainder: U::from(0x7FFF_FFFEu32) }));
    }

    #[test]
    fn invariant_against_native() {
        let values = [
            0u64, 1, 2, 3, 9, 10, 255, 256, 65_535, 65_536, 1 << 31, (1 << 32) + 7,
            0xDEAD_BEEF_CAFE, u64::MAX / 3, u64::MAX - 1, u64::MAX,
        ];
        for &a in values.iter() {
            for &b in values.iter().filter(|&&b| b != 0) {
                let x = BigUInt::<u16, 4>::from(a);
                let n = BigUInt::<u16, 4>::from(b);
                let Division { quotient, remainder } = x.div_rem(&n).unwrap();
                assert_eq!(quotient.to_u128(), (a / b) as u128);
                assert_eq!(remainder.to_u128(), (a % b) as u128);
                assert_eq!(quotient * n + remainder, x);
                assert!(remainder < n);
            }
        }
    }

    #[test]
    fn square_division() {
        let a = BigUInt::<u8, 2>::from(0xFFFFu16);
        let product = a.widening_mul(&a);
        let Division { quotient, remainder } = product.div_rem(&Square::from(a)).unwrap();
        assert_eq!(quotient.try_narrow(), Ok(a));
        assert!(remainder.is_zero());
    }
}
