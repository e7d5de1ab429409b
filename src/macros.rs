/// Derives all owned / borrowed combinations of a binary operator from its
/// `XAssign<&Self>` implementation.
///
/// The generics are passed in brackets, e.g. `[D: Digit, const N: usize] BigUInt<D, N>`.
macro_rules! forward_binop {
    ([$($generics:tt)*] $t:ty, $imp:ident, $method:ident, $imp_assign:ident, $method_assign:ident) => {
        impl<'a, 'b, $($generics)*> core::ops::$imp<&'b $t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $method(self, other: &'b $t) -> $t {
                let mut result = *self;
                core::ops::$imp_assign::$method_assign(&mut result, other);
                result
            }
        }

        impl<'b, $($generics)*> core::ops::$imp<&'b $t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, other: &'b $t) -> $t {
                core::ops::$imp::$method(&self, other)
            }
        }

        impl<'a, $($generics)*> core::ops::$imp<$t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $method(self, other: $t) -> $t {
                core::ops::$imp::$method(self, &other)
            }
        }

        impl<$($generics)*> core::ops::$imp<$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, other: $t) -> $t {
                core::ops::$imp::$method(&self, &other)
            }
        }

        impl<$($generics)*> core::ops::$imp_assign<$t> for $t {
            #[inline]
            fn $method_assign(&mut self, other: $t) {
                core::ops::$imp_assign::$method_assign(self, &other)
            }
        }
    };
}
