//! Type aliases by bit-size, independent of architecture/features.
//!
//! The digit is the native machine word: `u64` on 64-bit targets, `u32` otherwise
//! (see `build.rs`, and the features `u32` / `u64` to override).

use crate::{BigUInt, FixedPoint};
pub use aliases::*;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

// 32-bit
#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    pub type NativeDigit = u32;

    pub type U64 = BigUInt<NativeDigit, 2>;
    pub type U128 = BigUInt<NativeDigit, 4>;
    pub type U256 = BigUInt<NativeDigit, 8>;
    pub type U512 = BigUInt<NativeDigit, 16>;
    pub type U1024 = BigUInt<NativeDigit, 32>;
    pub type U2048 = BigUInt<NativeDigit, 64>;
    pub type U4096 = BigUInt<NativeDigit, 128>;

    pub type Fixed128<const DIGITS: usize> = FixedPoint<NativeDigit, 4, 10, DIGITS>;
    pub type Fixed256<const DIGITS: usize> = FixedPoint<NativeDigit, 8, 10, DIGITS>;
}

// 64-bit
#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    pub type NativeDigit = u64;

    pub type U64 = BigUInt<NativeDigit, 1>;
    pub type U128 = BigUInt<NativeDigit, 2>;
    pub type U256 = BigUInt<NativeDigit, 4>;
    pub type U512 = BigUInt<NativeDigit, 8>;
    pub type U1024 = BigUInt<NativeDigit, 16>;
    pub type U2048 = BigUInt<NativeDigit, 32>;
    pub type U4096 = BigUInt<NativeDigit, 64>;

    pub type Fixed128<const DIGITS: usize> = FixedPoint<NativeDigit, 2, 10, DIGITS>;
    pub type Fixed256<const DIGITS: usize> = FixedPoint<NativeDigit, 4, 10, DIGITS>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bit_sizes() {
        assert_eq!(U64::BITS, 64);
        assert_eq!(U128::BITS, 128);
        assert_eq!(U256::BITS, 256);
        assert_eq!(U4096::BITS, 4096);
    }

    #[test]
    fn fixed_aliases() {
        let price: Fixed128<18> = "1234.5".parse().unwrap();
        assert_eq!(price.to_string(), "1234.500000000000000000");
        let x: Fixed256<2> = "0.05".parse().unwrap();
        assert_eq!((x * x).to_string(), "0.00");
    }
}
