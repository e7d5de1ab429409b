use core::ops::MulAssign;

use crate::{BigUInt, Digit, Number, Result, Square};

/// Schoolbook multiplication `product += lhs * rhs`, dropping everything that
/// does not fit in `product`.
///
/// If `product.len() >= lhs.len() + rhs.len()`, nothing is dropped.
/// The caller passes a zeroed `product` for a plain multiplication.
pub(crate) fn mul_into<D: Digit>(lhs: &[D], rhs: &[D], product: &mut [D]) {
    for (i, &x) in lhs.iter().enumerate() {
        if x == D::ZERO {
            continue;
        }

        let mut carry = D::ZERO;
        for (j, &y) in rhs.iter().enumerate() {
            let k = i + j;
            if k >= product.len() {
                break;
            }
            (product[k], carry) = x.mac(y, product[k], carry);
        }

        // propagate into the digits above this row
        let mut k = i + rhs.len();
        let mut carry_in = carry != D::ZERO;
        let mut pending = carry;
        while carry_in && k < product.len() {
            (product[k], carry_in) = product[k].adc(pending, false);
            pending = D::ONE;
            k += 1;
        }
    }
}

/// Product in `T`, i.e. modulo $2^{w \cdot T::DIGITS}$.
pub(crate) fn wrapping_mul<T: Number>(lhs: &T, rhs: &T) -> T {
    let mut product = T::zero();
    mul_into(lhs.significant_digits(), rhs.significant_digits(), product.le_digits_mut());
    product
}

/// In-place `digits = digits * factor + addend`, returns the digit carried out.
pub(crate) fn mac_assign_digit<D: Digit>(digits: &mut [D], factor: D, addend: D) -> D {
    let mut carry = addend;
    for digit in digits.iter_mut() {
        (*digit, carry) = digit.mac(factor, D::ZERO, carry);
    }
    carry
}

// Multiplication in BigUInt / 2^{wN}

impl<'a, D: Digit, const N: usize> MulAssign<&'a Self> for BigUInt<D, N> {
    /// Truncating product.
    fn mul_assign(&mut self, factor: &'a Self) {
        *self = wrapping_mul(self, factor);
    }
}

forward_binop!([D: Digit, const N: usize] BigUInt<D, N>, Mul, mul, MulAssign, mul_assign);

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// Exact product in twice the digits, no truncation.
    pub fn widening_mul(&self, factor: &Self) -> Square<D, N> {
        let mut product = Square::default();
        mul_into(&self.0, &factor.0, product.le_digits_mut());
        product
    }

    pub fn wrapping_mul(&self, factor: &Self) -> Self {
        wrapping_mul(self, factor)
    }

    /// Fails: iff the exact product does not fit in `N` digits.
    pub fn checked_mul(&self, factor: &Self) -> Result<Self> {
        self.widening_mul(factor).try_narrow()
    }

    /// Multiplication by a single digit, returning the digit carried out of the top.
    pub fn overflowing_mul_digit(&self, factor: D) -> (Self, D) {
        let mut product = *self;
        let carry = mac_assign_digit(&mut product.0, factor, D::ZERO);
        (product, carry)
    }
}

impl<D: Digit, const N: usize> Square<D, N> {
    pub fn wrapping_mul(&self, factor: &Self) -> Self {
        wrapping_mul(self, factor)
    }
}
