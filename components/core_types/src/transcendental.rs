//! Trigonometric and logarithmic functions on [`Number`].
//!
//! Each function reduces its argument into a small interval, evaluates a
//! truncated Taylor series using fixed-point multiply and add only, and maps
//! the result back through the symmetries of the function.

use crate::number::{Number, FRAC_BITS};

/// `(2k)(2k+1)` denominators of the sine series, innermost term first.
const SINE_DENOMINATORS: [i32; 5] = [110, 72, 42, 20, 6];

/// Odd divisors of the `atanh` series, innermost term first. The
/// outermost `t^11 / 11` term seeds the fold.
const ATANH_DIVISORS: [i32; 5] = [9, 7, 5, 3, 1];
const ATANH_SEED_DIVISOR: i32 = 11;

impl Number {
    /// Sine of an angle in radians.
    ///
    /// The angle is reduced modulo 2π and split into a quadrant and an offset
    /// in `[0, π/2)`; the polynomial only ever sees the offset.
    ///
    /// ```
    /// use core_types::Number;
    ///
    /// let one = Number::HALF_PI.sin();
    /// assert!((one - Number::ONE).raw().abs() < 8);
    /// ```
    pub fn sin(self) -> Number {
        sine_of_reduced(self.raw().rem_euclid(Number::TWO_PI.raw()))
    }

    /// Cosine of an angle in radians, as the sine a quarter turn ahead.
    pub fn cos(self) -> Number {
        let reduced = self.raw().rem_euclid(Number::TWO_PI.raw());
        sine_of_reduced((reduced + Number::HALF_PI.raw()).rem_euclid(Number::TWO_PI.raw()))
    }

    /// Natural logarithm. Non-positive arguments yield [`Number::MIN`].
    pub fn ln(self) -> Number {
        match log_decompose(self) {
            Some((exponent, ln_mantissa)) => Number::from_int(exponent) * Number::LN_2 + ln_mantissa,
            None => Number::MIN,
        }
    }

    /// Base-2 logarithm. Non-positive arguments yield [`Number::MIN`].
    ///
    /// Exact powers of two produce exact results.
    pub fn lb(self) -> Number {
        match log_decompose(self) {
            Some((exponent, ln_mantissa)) => Number::from_int(exponent) + ln_mantissa * Number::LOG2_E,
            None => Number::MIN,
        }
    }

    /// Base-10 logarithm. Non-positive arguments yield [`Number::MIN`].
    pub fn lg(self) -> Number {
        if self.raw() <= 0 {
            return Number::MIN;
        }
        self.lb() * Number::LOG10_2
    }
}

/// Sine of a raw angle already reduced into `[0, 2π)`.
fn sine_of_reduced(reduced: i32) -> Number {
    let quadrant = reduced / Number::HALF_PI.raw();
    let offset = Number::from_raw(reduced - quadrant * Number::HALF_PI.raw());
    match quadrant {
        0 => sine_kernel(offset),
        1 => sine_kernel(Number::HALF_PI - offset),
        2 => -sine_kernel(offset),
        _ => -sine_kernel(Number::HALF_PI - offset),
    }
}

/// Degree-11 Taylor polynomial for sine, valid on `[0, π/2]`.
fn sine_kernel(x: Number) -> Number {
    let x2 = x * x;
    let series = SINE_DENOMINATORS
        .iter()
        .fold(Number::ONE, |acc, &d| Number::ONE - (x2 * acc) / Number::from_int(d));
    x * series
}

/// Split a positive `x` into `(e, ln m)` with `x = m * 2^e`, `m` in `[1, 2)`.
///
/// `ln m` comes from `2 atanh((m - 1) / (m + 1))`, whose argument stays
/// below one third, so the series converges quickly.
fn log_decompose(x: Number) -> Option<(i32, Number)> {
    let raw = x.raw();
    if raw <= 0 {
        return None;
    }
    let msb = 31 - raw.leading_zeros() as i32;
    let exponent = msb - FRAC_BITS as i32;
    let mantissa = if exponent >= 0 {
        Number::from_raw(raw >> exponent)
    } else {
        Number::from_raw(raw << -exponent)
    };

    let t = (mantissa - Number::ONE) / (mantissa + Number::ONE);
    let t2 = t * t;
    let seed = Number::ONE / Number::from_int(ATANH_SEED_DIVISOR);
    let series = ATANH_DIVISORS
        .iter()
        .fold(seed, |acc, &d| Number::ONE / Number::from_int(d) + t2 * acc);
    Some((exponent, Number::from_int(2) * t * series))
}
