//! Unit tests for fixed-point arithmetic

use core_types::{Number, FRAC_BITS, FRAC_MASK};
use num_traits::{Bounded, One, Zero};

fn num(s: &str) -> Number {
    s.parse().expect("valid literal")
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn test_integer_round_trip_is_exact() {
        for n in (-32_768..=32_767).step_by(7) {
            assert_eq!(Number::from_int(n).to_f64(), f64::from(n));
        }
        assert_eq!(Number::from_int(32_767).to_f64(), 32_767.0);
        assert_eq!(Number::from_int(-32_768).to_f64(), -32_768.0);
    }

    #[test]
    fn test_digit_runs_combine() {
        let value = Number::from_digits("12") + Number::from_fraction_digits("5");
        assert_eq!(value.to_f64(), 12.5);
    }

    #[test]
    fn test_fraction_rounds_to_nearest() {
        // 0.1 * 65536 = 6553.6
        assert_eq!(Number::from_fraction_digits("1").raw(), 6554);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(num("-2.75").to_f64(), -2.75);
    }

    #[test]
    fn test_frac_mask_matches_bits() {
        assert_eq!(FRAC_MASK, (1 << FRAC_BITS) - 1);
        assert_eq!(num("3.5").raw() & FRAC_MASK, 1 << (FRAC_BITS - 1));
    }

    #[test]
    fn test_integer_part_floors() {
        assert_eq!(num("2.75").integer_part(), 2);
        assert_eq!(num("-2.25").integer_part(), -3);
    }
}

#[cfg(test)]
mod arithmetic_tests {
    use super::*;

    #[test]
    fn test_add_negate_is_zero() {
        for raw in [0, 1, -1, 65_536, 123_456_789, i32::MAX, i32::MIN, -987_654] {
            let x = Number::from_raw(raw);
            assert_eq!(x + (-x), Number::ZERO);
        }
    }

    #[test]
    fn test_sub() {
        assert_eq!(Number::from_int(3) - Number::from_int(5), Number::from_int(-2));
    }

    #[test]
    fn test_mul_div_round_trip_within_one_ulp() {
        let cases = [
            (num("3.1875"), Number::from_int(7)),
            (num("16383.5"), Number::from_int(2)),
            (num("-10922.33"), Number::from_int(3)),
            (num("0.001"), Number::from_int(1)),
            (num("100.5"), Number::from_int(300)),
            (num("-0.75"), num("-1.5")),
            (num("32.767"), Number::from_int(1000)),
            (Number::from_int(-16_384), Number::from_int(2)),
            (num("0.0001"), num("-32767.5")),
            (Number::MAX, num("0.5")),
            (Number::MIN + Number::EPSILON, num("0.5")),
            (Number::from_raw(1 << 30), num("0.5")),
        ];
        for (x, y) in cases {
            let back = (x * y) / y;
            assert!(
                (back.raw() - x.raw()).abs() <= 1,
                "{} * {} / {} = {}",
                x,
                y,
                y,
                back
            );
        }
    }

    #[test]
    fn test_overflow_wraps_around() {
        assert_eq!(Number::MAX + Number::EPSILON, Number::MIN);
        assert_eq!(Number::MIN - Number::EPSILON, Number::MAX);
        assert_eq!(Number::from_int(200) * Number::from_int(200), Number::from_int(40_000 - 65_536));
    }

    #[test]
    fn test_div_by_zero_saturates() {
        assert_eq!(Number::from_int(10) / Number::ZERO, Number::MAX);
        assert_eq!(Number::from_int(-10) / Number::ZERO, Number::MIN);
        assert_eq!(Number::ZERO / Number::ZERO, Number::ZERO);
    }

    #[test]
    fn test_floor_div_matches_floor() {
        let two = Number::from_int(2);
        assert_eq!(Number::from_int(-3).floor_div(two), Number::from_int(-2));
        assert_eq!(Number::from_int(3).floor_div(two), Number::from_int(1));
        assert_eq!(num("-0.5").floor_div(Number::from_int(3)), Number::from_int(-1));
        assert_eq!(Number::from_int(7).floor_div(num("-2")), Number::from_int(-4));
    }

    #[test]
    fn test_floor_div_by_zero() {
        assert_eq!(Number::from_int(5).floor_div(Number::ZERO), Number::MAX.floor());
        assert_eq!(Number::from_int(-5).floor_div(Number::ZERO), Number::MIN);
    }

    #[test]
    fn test_modulo_follows_dividend_sign() {
        let three = Number::from_int(3);
        assert_eq!(Number::from_int(7) % three, Number::from_int(1));
        assert_eq!(Number::from_int(-7) % three, Number::from_int(-1));
        assert_eq!(num("5.5") % Number::from_int(2), num("1.5"));
        assert_eq!(Number::from_int(7) % Number::ZERO, Number::ZERO);
    }

    #[test]
    fn test_num_traits() {
        assert!(Number::zero().is_zero());
        assert_eq!(Number::one(), Number::from_int(1));
        assert_eq!(Number::max_value(), Number::MAX);
        assert_eq!(Number::min_value(), Number::MIN);
    }
}

#[cfg(test)]
mod bitwise_tests {
    use super::*;

    #[test]
    fn test_bitwise_on_raw_bits() {
        let a = Number::from_raw(0b1100);
        let b = Number::from_raw(0b1010);
        assert_eq!((a & b).raw(), 0b1000);
        assert_eq!((a | b).raw(), 0b1110);
        assert_eq!((a ^ b).raw(), 0b0110);
        assert_eq!((!a).raw(), !0b1100);
    }

    #[test]
    fn test_shift_count_uses_integer_portion() {
        let one = Number::ONE;
        assert_eq!(one.logical_shift_left(num("1.75")), Number::from_int(2));
        assert_eq!(Number::from_int(8).logical_shift_right(Number::from_int(2)), Number::from_int(2));
    }

    #[test]
    fn test_arithmetic_right_extends_sign() {
        let x = Number::from_int(-8);
        assert_eq!(x.arithmetic_shift_right(Number::from_int(1)), Number::from_int(-4));
        assert_eq!(x.arithmetic_shift_right(Number::from_int(40)).raw(), -1);
    }

    #[test]
    fn test_logical_right_is_unsigned() {
        let x = Number::from_raw(-1);
        assert_eq!(x.logical_shift_right(Number::from_int(1)).raw(), i32::MAX);
    }

    #[test]
    fn test_arithmetic_left_keeps_sign() {
        let x = Number::from_raw(-0x4000_0001);
        let shifted = x.arithmetic_shift_left(Number::from_int(1));
        assert!(shifted.raw() < 0);
        assert_eq!(Number::from_int(3).arithmetic_shift_left(Number::from_int(1)), Number::from_int(6));
    }

    #[test]
    fn test_oversized_and_negative_counts() {
        let x = Number::from_int(5);
        assert_eq!(x.logical_shift_left(Number::from_int(32)), Number::ZERO);
        assert_eq!(x.logical_shift_right(Number::from_int(99)), Number::ZERO);
        assert_eq!(x.logical_shift_left(Number::from_int(-3)), x);
    }
}

#[cfg(test)]
mod logic_tests {
    use super::*;

    #[test]
    fn test_logical_operators_yield_zero_or_one() {
        let two = Number::from_int(2);
        assert_eq!(two.logical_and(Number::ZERO), Number::ZERO);
        assert_eq!(two.logical_and(two), Number::ONE);
        assert_eq!(Number::ZERO.logical_or(two), Number::ONE);
        assert_eq!(Number::ZERO.logical_not(), Number::ONE);
        assert_eq!(Number::EPSILON.logical_not(), Number::ZERO);
    }

    #[test]
    fn test_compare_three_way() {
        let a = Number::from_int(1);
        let b = Number::from_int(2);
        assert_eq!(a.compare(b), Number::from_int(-1));
        assert_eq!(b.compare(a), Number::from_int(1));
        assert_eq!(a.compare(a), Number::ZERO);
    }
}
