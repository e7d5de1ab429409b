//! Arithmetic on [`BigUInt`] (and, where the fixed-point layer needs it, on [`Square`]).
//!
//! The operators implement arithmetic "$\text{mod } 2^{wN}$", that is, dropping
//! all carries and borrows. This keeps the common path branch-free.
//!
//! Exactness is opt-in:
//! - `overflowing_{add,sub}` report the dropped carry/borrow as a [`Sum`],
//! - `checked_{add,sub,mul,div,rem}` fail with an [`Error`][crate::Error],
//! - [`Checked`] offers the same as operators,
//! - `widening_mul` returns the exact double-width [`Square`].
//!
//! [`Sum`]: crate::Sum
//! [`Square`]: crate::Square

use ref_cast::RefCast;

use crate::{BigUInt, Digit, Result};

mod add;
mod subtract;
mod multiply;
mod divide;
mod shift;
mod power;

pub use divide::Division;
pub(crate) use divide::div_rem_assign_digit;
pub(crate) use multiply::{mac_assign_digit, wrapping_mul};

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, RefCast)]
/// Intentionally-checked arithmetic.
///
/// The operators on `Checked<BigUInt>` return a [`Result`] instead of wrapping,
/// failing with `Overflow`, `Underflow` or `DivisionByZero`.
///
/// ```
/// use fixed_uint::{BigUInt, Error};
///
/// let x = BigUInt::<u8, 1>::from(255u8);
/// let one = BigUInt::<u8, 1>::one();
/// assert_eq!(x.checked() + one.checked(), Err(Error::Overflow));
/// ```
pub struct Checked<T>(pub T);

impl<D: Digit, const N: usize> BigUInt<D, N> {
    /// View as [`Checked`], without copying.
    pub fn checked(&self) -> &Checked<Self> {
        Checked::ref_cast(self)
    }
}

macro_rules! checked_binop {
    ($imp:ident, $method:ident, $checked:ident) => {
        impl<'a, 'b, D: Digit, const N: usize> core::ops::$imp<&'b Checked<BigUInt<D, N>>>
            for &'a Checked<BigUInt<D, N>>
        {
            type Output = Result<Checked<BigUInt<D, N>>>;

            fn $method(self, other: &'b Checked<BigUInt<D, N>>) -> Self::Output {
                self.0.$checked(&other.0).map(Checked)
            }
        }

        impl<D: Digit, const N: usize> core::ops::$imp for Checked<BigUInt<D, N>> {
            type Output = Result<Checked<BigUInt<D, N>>>;

            fn $method(self, other: Self) -> Self::Output {
                self.0.$checked(&other.0).map(Checked)
            }
        }
    };
}

checked_binop!(Add, add, checked_add);
checked_binop!(Sub, sub, checked_sub);
checked_binop!(Mul, mul, checked_mul);
checked_binop!(Div, div, checked_div);
checked_binop!(Rem, rem, checked_rem);
