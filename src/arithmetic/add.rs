use core::ops::AddAssign;

use crate::{BigUInt, Digit, Number, Result, Square, Sum};

/// Two argument addition of raw slices: `a += b`, returns the carry out of `a`.
///
/// The caller must ensure `a.len() >= b.len()`, the missing digits of `b` count as zero.
#[inline]
pub(crate) fn add_assign_carry<D: Digit>(a: &mut [D], b: &[D]) -> bool {
    debug_assert!(a.len() >= b.len());

    let mut carry = false;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        (*a, carry) = a.adc(*b, carry);
    }

    if carry {
        for a in a_hi {
            (*a, carry) = a.adc(D::ZERO, carry);
            if !carry {
                break;
            }
        }
    }

    carry
}

// Addition in BigUInt / 2^{wN}

impl<'a, D: Digit, const N: usize> AddAssign<&'a Self> for BigUInt<D, N> {
    #[inline]
    fn add_assign(&mut self, summand: &'a Self) {
        add_assign_carry(&mut self.0, &summand.0);
    }
}

forward_binop!([D: Digit, const N: usize] BigUInt<D, N>, Add, add, AddAssign, add_assign);

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// The wrapped sum, with [`Exception::Overflow`][crate::Exception::Overflow] if a carry was dropped.
    pub fn overflowing_add(&self, summand: &Self) -> Sum<Self> {
        let mut value = *self;
        let carry = add_assign_carry(&mut value.0, &summand.0);
        Sum::carried(value, carry)
    }

    pub fn checked_add(&self, summand: &Self) -> Result<Self> {
        self.overflowing_add(summand).into_result()
    }

    pub fn wrapping_add(&self, summand: &Self) -> Self {
        self + summand
    }
}

impl<D: Digit, const N: usize> Square<D, N> {
    pub fn wrapping_add(&self, summand: &Self) -> Self {
        let mut sum = *self;
        add_assign_carry(sum.le_digits_mut(), summand.le_digits());
        sum
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, Exception};

    #[test]
    fn carry_ripples() {
        let a = BigUInt::<u8, 3>::from_digits([0xFF, 0xFF, 0x00]);
        let b = BigUInt::<u8, 3>::one();
        assert_eq!((a + b).digits(), &[0, 0, 1]);
    }

    #[test]
    fn overflowing_add() {
        let x = BigUInt::<u8, 1>::from(255u8);
        let sum = x.overflowing_add(&BigUInt::one());
        assert_eq!(sum.value, BigUInt::zero());
        assert_eq!(sum.exception, Exception::Overflow);

        let sum = x.overflowing_add(&BigUInt::zero());
        assert_eq!(sum, Sum { value: x, exception: Exception::None });
    }

    #[test]
    fn checked_add() {
        let x = BigUInt::<u32, 2>::MAX;
        assert_eq!(x.checked_add(&BigUInt::one()), Err(Error::Overflow));
        assert_eq!(x.checked_add(&BigUInt::zero()), Ok(x));
    }

    #[test]
    fn all_operand_forms() {
        let a = BigUInt::<u16, 2>::from(70_000u32);
        let b = BigUInt::<u16, 2>::from(5u8);
        let expected = BigUInt::<u16, 2>::from(70_005u32);

        assert_eq!(&a + &b, expected);
        assert_eq!(&a + b, expected);
        assert_eq!(a + &b, expected);
        assert_eq!(a + b, expected);

        let mut c = a;
        c += b;
        assert_eq!(c, expected);
        let mut c = a;
        c += &b;
        assert_eq!(c, expected);
    }

    #[test]
    fn slice_addition_with_shorter_summand() {
        let mut a = [u32::MAX, u32::MAX, 7];
        assert!(!add_assign_carry(&mut a, &[1]));
        assert_eq!(a, [0, 0, 8]);

        let mut a = [u32::MAX, u32::MAX];
        assert!(add_assign_carry(&mut a, &[1]));
        assert_eq!(a, [0, 0]);
    }
}
