//! Property tests for the integer engine and the fixed-point layer.
//!
//! With feature `extended-testing`, each property runs many more cases.

use fixed_uint::digit;
use fixed_uint::{BigUInt, Division, Error, Exception, FixedPoint, Square};
use proptest::prelude::*;

type U192 = BigUInt<u32, 6>;
type U64x8 = BigUInt<u8, 8>;
type Cents = FixedPoint<u64, 2, 10, 2>;

fn config() -> ProptestConfig {
    if cfg!(feature = "extended-testing") {
        ProptestConfig::with_cases(10_000)
    } else {
        ProptestConfig::default()
    }
}

fn u192() -> impl Strategy<Value = U192> {
    prop::array::uniform6(any::<u32>()).prop_map(U192::from_digits)
}

/// Values with a random number of significant digits, so that short divisors come up.
fn u192_sparse() -> impl Strategy<Value = U192> {
    (u192(), 0usize..=U192::BITS).prop_map(|(x, bits)| x >> bits)
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn decimal_round_trip(x in u192()) {
        let text = x.to_string();
        prop_assert_eq!(text.parse::<U192>(), Ok(x));
    }

    #[test]
    fn decimal_agrees_with_native(value in any::<u64>()) {
        let x = U64x8::from(value);
        prop_assert_eq!(x.to_string(), value.to_string());
        prop_assert_eq!(value.to_string().parse::<U64x8>(), Ok(x));
    }

    #[test]
    fn decimal_keeps_low_places(value in any::<u128>(), max_digits in 1usize..45) {
        let x = BigUInt::<u16, 8>::from(value);
        let text = value.to_string();
        let expected = &text[text.len().saturating_sub(max_digits)..];
        prop_assert_eq!(x.decimal(max_digits).to_string(), expected);
    }

    #[test]
    fn add_then_sub(a in u192(), b in u192()) {
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!((a - b) + b, a);
    }

    #[test]
    fn overflow_is_reported(a in any::<u64>(), b in any::<u64>()) {
        let sum = U64x8::from(a).overflowing_add(&U64x8::from(b));
        let (expected, carry) = a.overflowing_add(b);
        prop_assert_eq!(sum.value, U64x8::from(expected));
        prop_assert_eq!(sum.exception == Exception::Overflow, carry);
    }

    #[test]
    fn word_multiplication_is_exact(a in any::<u64>(), b in any::<u64>()) {
        let product = digit::mul(a, b);
        let exact = (a as u128) * (b as u128);
        prop_assert_eq!(product.low, exact as u64);
        prop_assert_eq!(product.high, (exact >> 64) as u64);
    }

    #[test]
    fn widening_multiplication_is_exact(a in any::<u64>(), b in any::<u64>()) {
        let product = U64x8::from(a).widening_mul(&U64x8::from(b));
        prop_assert_eq!(product.lo().to_u128() | (product.hi().to_u128() << 64), (a as u128) * (b as u128));
    }

    #[test]
    fn division_invariant(a in u192(), b in u192_sparse()) {
        prop_assume!(!b.is_zero());
        let Division { quotient, remainder } = a.div_rem(&b).unwrap();
        prop_assert!(remainder < b);
        let product = quotient.widening_mul(&b);
        prop_assert_eq!(product.wrapping_add(&Square::from(remainder)).try_narrow(), Ok(a));
    }

    #[test]
    fn division_agrees_with_native(a in any::<u128>(), b in 1u128..) {
        let x = BigUInt::<u32, 4>::from(a);
        let n = BigUInt::<u32, 4>::from(b);
        prop_assert_eq!((x / n).to_u128(), a / b);
        prop_assert_eq!((x % n).to_u128(), a % b);
    }

    #[test]
    fn compare_agrees_with_relations(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (U64x8::from(a), U64x8::from(b));
        let sign = x.compare(&y);
        prop_assert_eq!(sign, a.cmp(&b) as i32);
        prop_assert_eq!(x < y, sign < 0);
        prop_assert_eq!(x == y, sign == 0);
        prop_assert_eq!(x > y, sign > 0);
    }

    #[test]
    fn shifts_agree_with_native(value in any::<u64>(), bits in 0usize..64) {
        let x = U64x8::from(value);
        prop_assert_eq!((x << bits).to_u128(), (value << bits) as u128);
        prop_assert_eq!((x >> bits).to_u128(), (value >> bits) as u128);
    }

    #[test]
    fn fixed_point_round_trip(integer in 0u64..1_000_000_000, fraction in 0u64..100) {
        let text = format!("{}.{:02}", integer, fraction);
        let x: Cents = text.parse().unwrap();
        prop_assert_eq!(x.atoms().to_u128(), (integer * 100 + fraction) as u128);
        prop_assert_eq!(x.to_string(), text);
    }

    #[test]
    fn fixed_point_display_round_trip(atoms in any::<u128>()) {
        let x = Cents::from_atoms(BigUInt::from(atoms));
        prop_assert_eq!(x.to_string().parse::<Cents>(), Ok(x));
    }

    #[test]
    fn fixed_point_overflow_is_reported(integer in (u128::MAX / 100 + 1)..) {
        prop_assert_eq!(integer.to_string().parse::<Cents>(), Err(Error::Overflow));
        prop_assert_eq!(format!("{}.5", integer).parse::<Cents>(), Err(Error::Overflow));
    }

    #[test]
    fn overlong_integer_part_is_reported(text in "[1-9][0-9]{39,80}") {
        prop_assert_eq!(text.parse::<Cents>(), Err(Error::Overflow));
    }

    #[test]
    fn fixed_point_mul_div(a in 0u64..1_000_000, b in 1u64..1_000_000) {
        let x = Cents::from_atoms(BigUInt::from(a));
        let y = Cents::from_atoms(BigUInt::from(b));
        prop_assert_eq!((x * y).atoms().to_u128(), (a as u128 * b as u128) / 100);
        prop_assert_eq!((x / y).atoms().to_u128(), (a as u128 * 100) / b as u128);
    }
}
