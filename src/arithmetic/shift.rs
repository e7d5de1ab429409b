use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::{BigUInt, Digit, Number, Square};

/// Truncating left shift of raw digits, i.e. multiplication by $2^{\text{bits}}$
/// modulo $2^{w \cdot \text{len}}$.
///
/// Note that "left" means "higher number".
pub(crate) fn shl_assign_digits<D: Digit>(data: &mut [D], bits: usize) {
    let l = data.len();
    let n_digits = bits / D::BITS;

    if n_digits >= l {
        data.fill(D::ZERO);
        return;
    }

    // shift up by n_digits
    data.copy_within(..(l - n_digits), n_digits);
    data[..n_digits].fill(D::ZERO);

    // shift up sub-digit amount of bits
    let n_bits = bits % D::BITS;
    if n_bits > 0 {
        let mut carry = D::ZERO;
        for elem in data[n_digits..].iter_mut() {
            let new_carry = *elem >> (D::BITS - n_bits);
            *elem = (*elem << n_bits) | carry;
            carry = new_carry;
        }
    }
}

/// Right shift of raw digits, i.e. floor division by $2^{\text{bits}}$.
///
/// Note that "right" means "lower number".
pub(crate) fn shr_assign_digits<D: Digit>(data: &mut [D], bits: usize) {
    let l = data.len();
    let n_digits = bits / D::BITS;

    if n_digits >= l {
        data.fill(D::ZERO);
        return;
    }

    // shift down by n_digits
    data.copy_within(n_digits.., 0);
    data[(l - n_digits)..].fill(D::ZERO);

    let n_bits = bits % D::BITS;
    if n_bits > 0 {
        let mut borrow = D::ZERO;
        for elem in data[..(l - n_digits)].iter_mut().rev() {
            let new_borrow = *elem << (D::BITS - n_bits);
            *elem = (*elem >> n_bits) | borrow;
            borrow = new_borrow;
        }
    }
}

/// Shifts left by one bit, shifting `bit` in at the bottom. Returns the bit shifted out at the top.
#[inline]
pub(crate) fn shl_one_assign<D: Digit>(data: &mut [D], bit: bool) -> bool {
    let mut carry = if bit { D::ONE } else { D::ZERO };
    for elem in data.iter_mut() {
        let new_carry = *elem >> (D::BITS - 1);
        *elem = (*elem << 1) | carry;
        carry = new_carry;
    }
    carry == D::ONE
}

impl<D: Digit, const N: usize> ShlAssign<usize> for BigUInt<D, N> {
    /// Compared to the native integers, this is a truncating shift: shifting by
    /// the full width or more results in zero, instead of panicking.
    #[inline]
    fn shl_assign(&mut self, bits: usize) {
        shl_assign_digits(&mut self.0, bits);
    }
}

impl<D: Digit, const N: usize> ShrAssign<usize> for BigUInt<D, N> {
    #[inline]
    fn shr_assign(&mut self, bits: usize) {
        shr_assign_digits(&mut self.0, bits);
    }
}

impl<D: Digit, const N: usize> ShlAssign<usize> for Square<D, N> {
    #[inline]
    fn shl_assign(&mut self, bits: usize) {
        shl_assign_digits(self.le_digits_mut(), bits);
    }
}

impl<D: Digit, const N: usize> ShrAssign<usize> for Square<D, N> {
    #[inline]
    fn shr_assign(&mut self, bits: usize) {
        shr_assign_digits(self.le_digits_mut(), bits);
    }
}

macro_rules! forward_shift {
    ($t:ident, $imp:ident, $method:ident, $op:tt) => {
        impl<D: Digit, const N: usize> $imp<usize> for &$t<D, N> {
            type Output = $t<D, N>;

            #[inline]
            fn $method(self, bits: usize) -> Self::Output {
                let mut result = *self;
                result $op bits;
                result
            }
        }

        impl<D: Digit, const N: usize> $imp<usize> for $t<D, N> {
            type Output = $t<D, N>;

            #[inline]
            fn $method(mut self, bits: usize) -> Self::Output {
                self $op bits;
                self
            }
        }
    };
}

forward_shift!(BigUInt, Shl, shl, <<=);
forward_shift!(BigUInt, Shr, shr, >>=);
forward_shift!(Square, Shl, shl, <<=);
forward_shift!(Square, Shr, shr, >>=);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shift_within_a_digit() {
        let x = BigUInt::<u8, 1>::from(0b11u8);
        assert_eq!(x << 7, BigUInt::from(0b1000_0000u8));
        assert_eq!(x << 9, BigUInt::zero());
        assert_eq!(x << 8, BigUInt::zero());
        assert_eq!(x >> 1, BigUInt::one());
        assert_eq!(x >> 2, BigUInt::zero());
    }

    #[test]
    fn shift_across_digits() {
        let x = BigUInt::<u8, 3>::from(0x01_8001u32);
        assert_eq!(&x << 1, BigUInt::from(0x03_0002u32));
        assert_eq!(&x << 12, BigUInt::from(0x00_1000u32));
        assert_eq!(&x >> 1, BigUInt::from(0x00_C000u32));
        assert_eq!(&x >> 15, BigUInt::from(0b11u8));
        assert_eq!(&x >> 16, BigUInt::one());
        assert_eq!(&x >> 24, BigUInt::zero());
        assert_eq!(&x >> 1000, BigUInt::zero());
    }

    #[test]
    fn shift_agrees_with_native() {
        let values = [1u64, 0xDEAD_BEEF, 0x8000_0000_0000_0001, u64::MAX];
        for &value in values.iter() {
            let x = BigUInt::<u16, 4>::from(value);
            for bits in 0..64 {
                assert_eq!((x << bits).to_u128(), (value << bits) as u128);
                assert_eq!((x >> bits).to_u128(), (value >> bits) as u128);
            }
        }
    }

    #[test]
    fn assign_forms() {
        let mut x = BigUInt::<u32, 2>::one();
        x <<= 32;
        assert_eq!(x.digits(), &[0, 1]);
        x >>= 31;
        assert_eq!(x.digits(), &[2, 0]);
    }

    #[test]
    fn square_shifts_through_both_halves() {
        let x = Square::from(BigUInt::<u8, 1>::from(0x81u8));
        assert_eq!((x << 4).le_digits(), &[0x10, 0x08]);
        assert_eq!(((x << 8) >> 8), x);
    }

    #[test]
    fn one_bit_shift_reports_the_dropped_bit() {
        let mut data = [0x80u8, 0x80];
        assert!(shl_one_assign(&mut data, true));
        assert_eq!(data, [0x01, 0x01]);
        assert!(!shl_one_assign(&mut data, false));
        assert_eq!(data, [0x02, 0x02]);
    }
}
