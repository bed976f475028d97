//! Fixed-point number representation.
//!
//! A [`Number`] is a signed Q16.16 scaled integer: the real value it stands
//! for is `raw / 2^16`. Every operation works on the raw integer and never
//! touches floating-point hardware.
//!
//! # Overflow
//!
//! All operations wrap around on overflow (two's complement). Division by
//! zero saturates instead of trapping:
//!
//! | operation      | `x > 0`          | `x < 0`          | `x == 0` |
//! |----------------|------------------|------------------|----------|
//! | `x / 0`        | [`Number::MAX`]  | [`Number::MIN`]  | `0`      |
//! | `x.floor_div(0)` | `MAX` floored  | [`Number::MIN`]  | `0`      |
//! | `x % 0`        | `0`              | `0`              | `0`      |
//!
//! # Examples
//!
//! ```
//! use core_types::Number;
//!
//! let a = Number::from_int(3);
//! let b: Number = "12.5".parse().unwrap();
//!
//! assert_eq!((a * b).to_f64(), 37.5);
//! assert_eq!(Number::from_int(-3).floor_div(Number::from_int(2)), Number::from_int(-2));
//! ```

use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};
use std::str::FromStr;

use num_integer::Integer;
use num_traits::{Bounded, One, Zero};

use crate::error::ParseNumberError;

/// Number of fractional bits in the raw representation.
pub const FRAC_BITS: u32 = 16;

/// Mask selecting the fractional bits of a raw value.
pub const FRAC_MASK: i32 = (1 << FRAC_BITS) - 1;

/// Guard bits used while converting decimal fractions.
const FRACTION_GUARD_BITS: u32 = 32;

/// Signed Q16.16 fixed-point number.
///
/// Ordering and equality compare the raw representation, which matches the
/// ordering of the real values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Number(i32);

impl Number {
    /// Zero
    pub const ZERO: Number = Number(0);
    /// One
    pub const ONE: Number = Number(1 << FRAC_BITS);
    /// Smallest representable value (-32768)
    pub const MIN: Number = Number(i32::MIN);
    /// Largest representable value (just below 32768)
    pub const MAX: Number = Number(i32::MAX);
    /// One unit of least precision (2^-16)
    pub const EPSILON: Number = Number(1);
    /// Quarter turn, π/2
    pub const HALF_PI: Number = Number(102_944);
    /// Half turn, π
    pub const PI: Number = Number(205_887);
    /// Full turn, 2π
    pub const TWO_PI: Number = Number(411_775);
    /// Natural logarithm of 2
    pub const LN_2: Number = Number(45_426);
    /// Base-2 logarithm of e
    pub const LOG2_E: Number = Number(94_548);
    /// Base-10 logarithm of 2
    pub const LOG10_2: Number = Number(19_728);

    /// Wrap a raw Q16.16 integer.
    pub const fn from_raw(raw: i32) -> Self {
        Number(raw)
    }

    /// The raw Q16.16 integer.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Exact conversion of an integer. Values outside `[-32768, 32767]` wrap.
    pub const fn from_int(n: i32) -> Self {
        Number(n.wrapping_shl(FRAC_BITS))
    }

    /// `1` for true, `0` for false.
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Number::ONE
        } else {
            Number::ZERO
        }
    }

    /// Parse a run of decimal digits as an integer.
    ///
    /// Non-digit characters are ignored. The accumulation wraps around like
    /// every other operation.
    pub fn from_digits(digits: &str) -> Self {
        let value = digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0i32, |acc, d| acc.wrapping_mul(10).wrapping_add(d as i32));
        Number::from_int(value)
    }

    /// Parse a run of decimal digits as the part after a radix point.
    ///
    /// `from_fraction_digits("5")` is one half. The digits are folded from the
    /// least significant end with extra guard bits and rounded to the nearest
    /// representable value, so `"999999"` rounds up to one.
    pub fn from_fraction_digits(digits: &str) -> Self {
        let scaled = digits
            .chars()
            .rev()
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |acc, d| (acc + (u64::from(d) << FRACTION_GUARD_BITS)) / 10);
        let shift = FRACTION_GUARD_BITS - FRAC_BITS;
        let rounded = (scaled + (1 << (shift - 1))) >> shift;
        Number(rounded as i32)
    }

    /// Presentation-only conversion to a host float.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(1u32 << FRAC_BITS)
    }

    /// Integer part, rounded toward negative infinity.
    pub const fn integer_part(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Whether the fractional bits are all zero.
    pub const fn is_integer(self) -> bool {
        self.0 & FRAC_MASK == 0
    }

    /// Clear the fractional bits, rounding toward negative infinity.
    pub const fn floor(self) -> Self {
        Number(self.0 & !FRAC_MASK)
    }

    /// Non-zero numbers are true.
    pub const fn is_truthy(self) -> bool {
        self.0 != 0
    }

    /// Floor division: the quotient rounded toward negative infinity.
    ///
    /// Computed exactly over the raw integers, so `-3 // 2 == -2`.
    pub fn floor_div(self, rhs: Number) -> Number {
        if rhs.0 == 0 {
            return (self / rhs).floor();
        }
        let quotient = Integer::div_floor(&i64::from(self.0), &i64::from(rhs.0));
        Number::from_int(quotient as i32)
    }

    /// Shift the raw bits left, keeping the sign bit in place.
    pub fn arithmetic_shift_left(self, amount: Number) -> Number {
        let count = shift_count(amount);
        let sign = self.0 & i32::MIN;
        if count >= 32 {
            return Number(sign);
        }
        Number(((self.0 << count) & i32::MAX) | sign)
    }

    /// Shift the raw bits right, extending the sign bit.
    pub fn arithmetic_shift_right(self, amount: Number) -> Number {
        Number(self.0 >> shift_count(amount).min(31))
    }

    /// Shift the raw bits left as an unsigned word.
    pub fn logical_shift_left(self, amount: Number) -> Number {
        match shift_count(amount) {
            count if count >= 32 => Number::ZERO,
            count => Number(((self.0 as u32) << count) as i32),
        }
    }

    /// Shift the raw bits right as an unsigned word, filling with zeros.
    pub fn logical_shift_right(self, amount: Number) -> Number {
        match shift_count(amount) {
            count if count >= 32 => Number::ZERO,
            count => Number(((self.0 as u32) >> count) as i32),
        }
    }

    /// Both operands truthy.
    pub const fn logical_and(self, rhs: Number) -> Number {
        Number::from_bool(self.is_truthy() && rhs.is_truthy())
    }

    /// Either operand truthy.
    pub const fn logical_or(self, rhs: Number) -> Number {
        Number::from_bool(self.is_truthy() || rhs.is_truthy())
    }

    /// `1` for zero, `0` otherwise.
    pub const fn logical_not(self) -> Number {
        Number::from_bool(!self.is_truthy())
    }

    /// Three-way comparison yielding `-1`, `0` or `1`.
    pub fn compare(self, rhs: Number) -> Number {
        Number::from_int(self.cmp(&rhs) as i32)
    }
}

/// Bit count taken from the integer portion of a shift operand.
fn shift_count(amount: Number) -> u32 {
    amount.integer_part().clamp(0, 32) as u32
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        Number(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        Number(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number(self.0.wrapping_neg())
    }
}

impl Mul for Number {
    type Output = Number;

    /// Widening multiply, truncated toward zero on the way back down.
    ///
    /// The rescaled magnitude never exceeds the exact product, so dividing
    /// the result by the same factor stays in range.
    fn mul(self, rhs: Number) -> Number {
        let product = i64::from(self.0) * i64::from(rhs.0);
        Number((product / (1 << FRAC_BITS)) as i32)
    }
}

impl Div for Number {
    type Output = Number;

    /// Widening divide, rounded half away from zero.
    fn div(self, rhs: Number) -> Number {
        if rhs.0 == 0 {
            return match self.0.signum() {
                1 => Number::MAX,
                -1 => Number::MIN,
                _ => Number::ZERO,
            };
        }
        let dividend = i64::from(self.0) << FRAC_BITS;
        let divisor = i64::from(rhs.0);
        let negative = (dividend < 0) != (divisor < 0);
        let (n, d) = (dividend.unsigned_abs(), divisor.unsigned_abs());
        let magnitude = ((n + d / 2) / d) as i64;
        let quotient = if negative { -magnitude } else { magnitude };
        Number(quotient as i32)
    }
}

impl Rem for Number {
    type Output = Number;

    /// Truncated remainder of the raw values; the sign follows the dividend.
    fn rem(self, rhs: Number) -> Number {
        if rhs.0 == 0 {
            return Number::ZERO;
        }
        Number(self.0.wrapping_rem(rhs.0))
    }
}

impl BitAnd for Number {
    type Output = Number;

    fn bitand(self, rhs: Number) -> Number {
        Number(self.0 & rhs.0)
    }
}

impl BitOr for Number {
    type Output = Number;

    fn bitor(self, rhs: Number) -> Number {
        Number(self.0 | rhs.0)
    }
}

impl BitXor for Number {
    type Output = Number;

    fn bitxor(self, rhs: Number) -> Number {
        Number(self.0 ^ rhs.0)
    }
}

impl Not for Number {
    type Output = Number;

    fn not(self) -> Number {
        Number(!self.0)
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for Number {
    fn one() -> Self {
        Number::ONE
    }
}

impl Bounded for Number {
    fn min_value() -> Self {
        Number::MIN
    }

    fn max_value() -> Self {
        Number::MAX
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::from_int(n)
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Parse `[-]digits[.digits]` without going through a float.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(ParseNumberError::InvalidDigit(s.to_string()));
        }
        let value = Number::from_digits(whole) + Number::from_fraction_digits(fraction);
        Ok(if negative { -value } else { value })
    }
}

/// Integers print without a radix point; other values print with up to six
/// decimals and no trailing zeros.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.integer_part());
        }
        let text = format!("{:.6}", self.to_f64());
        f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
    }
}
