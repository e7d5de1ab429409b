use core::{cmp::Ordering, convert::TryFrom, fmt};

use zeroize::Zeroize;

use super::{BigUInt, Number, Square};
use crate::{Digit, Error, Result};

impl<D: Digit, const N: usize> Default for BigUInt<D, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Digit, const N: usize> Default for Square<D, N> {
    fn default() -> Self {
        Self([[D::ZERO; N]; 2])
    }
}

impl<D: Digit, const N: usize> Zeroize for BigUInt<D, N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<D: Digit, const N: usize> Zeroize for Square<D, N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// This is *little endian* ordering, as opposed to the default
/// ordering on arrays and slices!
///
/// Missing digits of the shorter side count as zero.
pub(crate) fn generic_cmp<D: Digit>(m: &[D], n: &[D]) -> Ordering {
    for i in (0..m.len().max(n.len())).rev() {
        let m_i = m.get(i).copied().unwrap_or(D::ZERO);
        let n_i = n.get(i).copied().unwrap_or(D::ZERO);
        match m_i.cmp(&n_i) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<D: Digit, const N: usize> Ord for BigUInt<D, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        generic_cmp(&self.0, &other.0)
    }
}

impl<D: Digit, const N: usize> PartialOrd for BigUInt<D, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit, const N: usize> Ord for Square<D, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        generic_cmp(self.le_digits(), other.le_digits())
    }
}

impl<D: Digit, const N: usize> PartialOrd for Square<D, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// Tri-state comparison: negative, zero or positive.
    ///
    /// The relational operators agree with its sign.
    pub fn compare(&self, other: &Self) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

macro_rules! from_native {
    ($($native:ty),*) => {$(
        /// Zero-extends, or silently drops the high bits if `N` digits are too narrow.
        impl<D: Digit, const N: usize> From<$native> for BigUInt<D, N> {
            fn from(value: $native) -> Self {
                Number::from_u128(value as u128)
            }
        }

        impl<D: Digit, const N: usize> TryFrom<BigUInt<D, N>> for $native {
            type Error = Error;
            /// Fails if the value does not fit.
            fn try_from(unsigned: BigUInt<D, N>) -> Result<Self> {
                if unsigned.bit_length() > <$native>::BITS as usize {
                    return Err(Error::Overflow);
                }
                Ok(unsigned.to_u128() as $native)
            }
        }
    )*};
}

from_native!(u8, u16, u32, u64, u128, usize);

fn debug_digits<D: Digit>(digits: &[D], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, digit) in digits.iter().rev().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }

        #[cfg(feature = "hex-debug")] {
            let bytes = digit.be_bytes();
            let bytes: &[u8] = bytes.as_ref();
            write!(f, "{}", delog::hex_str!(bytes))?;
        }

        #[cfg(not(feature = "hex-debug"))] {
            write!(f, "{:0width$X}", digit, width = D::BITS / 4)?;
        }
    }
    f.write_str("]")
}

impl<D: Digit, const N: usize> fmt::Debug for BigUInt<D, N> {
    /// Big-endian digits, in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_digits(&self.0, f)
    }
}

impl<D: Digit, const N: usize> fmt::Debug for Square<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_digits(self.le_digits(), f)
    }
}

#[cfg(feature = "ct-maybe")]
impl<D: Digit, const N: usize> subtle::ConditionallySelectable for BigUInt<D, N> {
    fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
        let mut selected = *a;
        for (digit, other) in selected.0.iter_mut().zip(b.0.iter()) {
            digit.conditional_assign(other, choice);
        }
        selected
    }
}

#[cfg(feature = "ct-maybe")]
impl<D: Digit, const N: usize> subtle::ConstantTimeEq for BigUInt<D, N> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(subtle::Choice::from(1), |equal, (a, b)| equal & a.ct_eq(b))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordering_is_little_endian() {
        let a = BigUInt::<u8, 2>::from_digits([0xFF, 0x01]);
        let b = BigUInt::<u8, 2>::from_digits([0x00, 0x02]);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.compare(&b), -1);
        assert_eq!(b.compare(&a), 1);
        assert_eq!(a.compare(&a), 0);
    }

    #[test]
    fn compare_agrees_with_relations() {
        let values = [0u16, 1, 255, 256, 257, 0x7FFF, 0xFFFF];
        for &x in values.iter() {
            for &y in values.iter() {
                let (a, b) = (BigUInt::<u8, 2>::from(x), BigUInt::<u8, 2>::from(y));
                let sign = a.compare(&b);
                assert_eq!(a < b, sign < 0);
                assert_eq!(a <= b, sign <= 0);
                assert_eq!(a > b, sign > 0);
                assert_eq!(a >= b, sign >= 0);
                assert_eq!(a == b, sign == 0);
                assert_eq!(a != b, sign != 0);
                assert_eq!(sign, x.cmp(&y) as i32);
            }
        }
    }

    #[test]
    fn generic_cmp_pads_with_zeros() {
        assert_eq!(generic_cmp(&[1u32, 0, 0], &[1u32]), Ordering::Equal);
        assert_eq!(generic_cmp(&[1u32, 0, 1], &[1u32]), Ordering::Greater);
        assert_eq!(generic_cmp(&[5u32], &[1u32, 1]), Ordering::Less);
    }

    #[test]
    fn try_into_native() {
        let x = BigUInt::<u32, 4>::from(u64::MAX);
        assert_eq!(u64::try_from(x), Ok(u64::MAX));
        assert_eq!(u32::try_from(x), Err(Error::Overflow));

        let y = BigUInt::<u32, 4>::MAX;
        assert_eq!(u128::try_from(y), Ok(u128::MAX));
        let z = BigUInt::<u64, 3>::MAX;
        assert_eq!(u128::try_from(z), Err(Error::Overflow));
    }

    #[test]
    fn zeroize() {
        let mut x = BigUInt::<u16, 3>::MAX;
        x.zeroize();
        assert!(x.is_zero());
    }

    #[test]
    #[cfg(not(feature = "hex-debug"))]
    fn debug() {
        let u = BigUInt::<u32, 2>::from_digits([0x76543210, 0xFEDCBA98]);
        assert_eq!(format!("{:?}", u), "[FEDCBA98, 76543210]");
    }

    #[test]
    #[cfg(feature = "hex-debug")]
    fn debug() {
        let u = BigUInt::<u32, 2>::from_digits([0x76543210, 0xFEDCBA98]);
        let debug = format!("{:?}", u);
        assert!(debug.starts_with('['));
        assert!(debug.ends_with(']'));
        assert!(debug.contains(", "));
    }
}
