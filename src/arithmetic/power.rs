use crate::{BigUInt, Digit, Number, Square};

use super::wrapping_mul;

/// Exponentiation by squaring, scanning the exponent from its most significant bit.
///
/// Every multiplication wraps modulo the width of `T`, as the operators do.
/// $x^0 = 1$, including $0^0$.
pub(crate) fn generic_pow<T: Number>(base: &T, exponent: usize) -> T {
    let mut power = T::one();
    let bits = usize::BITS - exponent.leading_zeros();

    for i in (0..bits).rev() {
        power = wrapping_mul(&power, &power);
        if (exponent >> i) & 1 == 1 {
            power = wrapping_mul(&power, base);
        }
    }

    power
}

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// Wrapping exponentiation.
    pub fn pow(&self, exponent: usize) -> Self {
        generic_pow(self, exponent)
    }
}

impl<D: Digit, const N: usize> Square<D, N> {
    pub fn pow(&self, exponent: usize) -> Self {
        generic_pow(self, exponent)
    }
}
