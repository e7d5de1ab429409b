use core::ops::SubAssign;

use crate::{BigUInt, Digit, Result, Sum};

/// Two argument subtraction of raw slices: `a -= b`, returns the borrow out of `a`.
///
/// The caller must ensure `a.len() >= b.len()`, the missing digits of `b` count as zero.
/// With a borrow, `a` holds the difference modulo $2^{w \cdot \text{len}(a)}$.
pub(crate) fn sub_assign_borrow<D: Digit>(a: &mut [D], b: &[D]) -> bool {
    debug_assert!(a.len() >= b.len());
    let mut borrow = false;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        (*a, borrow) = a.sbb(*b, borrow);
    }

    if borrow {
        for a in a_hi {
            (*a, borrow) = a.sbb(D::ZERO, borrow);
            if !borrow {
                break;
            }
        }
    }

    borrow
}

// Subtraction in BigUInt / 2^{wN} -- can forget borrows

impl<'a, D: Digit, const N: usize> SubAssign<&'a Self> for BigUInt<D, N> {
    #[inline]
    fn sub_assign(&mut self, subtrahend: &'a Self) {
        sub_assign_borrow(&mut self.0, &subtrahend.0);
    }
}

forward_binop!([D: Digit, const N: usize] BigUInt<D, N>, Sub, sub, SubAssign, sub_assign);

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// The wrapped difference, with [`Exception::Underflow`][crate::Exception::Underflow] if a borrow was dropped.
    pub fn overflowing_sub(&self, subtrahend: &Self) -> Sum<Self> {
        let mut value = *self;
        let borrow = sub_assign_borrow(&mut value.0, &subtrahend.0);
        Sum::borrowed(value, borrow)
    }

    pub fn checked_sub(&self, subtrahend: &Self) -> Result<Self> {
        self.overflowing_sub(subtrahend).into_result()
    }

    pub fn wrapping_sub(&self, subtrahend: &Self) -> Self {
        self - subtrahend
    }

    /// $2^{wN} - x$, i.e. the additive inverse in the wrapping ring.
    pub fn wrapping_neg(&self) -> Self {
        Self::ZERO - self
    }
}
