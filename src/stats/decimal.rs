//! Decimal statistics over arbitrary-precision decimals.

use super::{Summary, header, keep_max, keep_min, push_field};
use crate::category::Category;
use bigdecimal::{BigDecimal, Zero};
use num_bigint::{BigInt, Sign};
use std::fmt;

/// Fraction digits of the reported decimal average.
pub const AVERAGE_SCALE: i64 = 10;

/// Count, min, max, sum and rounded average of float lines.
#[derive(Clone, Debug, Default)]
pub struct DecimalStats {
    count: u64,
    min: Option<BigDecimal>,
    max: Option<BigDecimal>,
    sum: BigDecimal,
}

impl DecimalStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, value: BigDecimal) {
        self.count += 1;
        keep_min(&mut self.min, &value);
        keep_max(&mut self.max, &value);
        self.sum = &self.sum + &value;
    }

    pub fn min(&self) -> Option<&BigDecimal> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&BigDecimal> {
        self.max.as_ref()
    }

    pub fn sum(&self) -> Option<&BigDecimal> {
        (self.count > 0).then_some(&self.sum)
    }

    /// `sum / count` with exactly [`AVERAGE_SCALE`] fraction digits, ties
    /// rounded away from zero.
    pub fn average(&self) -> Option<BigDecimal> {
        if self.count == 0 {
            return None;
        }
        // sum = m / 10^s, so avg * 10^AVERAGE_SCALE = m * 10^(AVERAGE_SCALE - s) / count
        let (mantissa, scale) = self.sum.as_bigint_and_exponent();
        let shift = AVERAGE_SCALE - scale;
        let count = BigInt::from(self.count);
        let (numerator, denominator) = if shift >= 0 {
            (mantissa * pow10(shift.unsigned_abs()), count)
        } else {
            (mantissa, count * pow10(shift.unsigned_abs()))
        };
        let quotient = div_round_half_away(&numerator, &denominator);
        Some(BigDecimal::new(quotient, AVERAGE_SCALE))
    }
}

impl Summary for DecimalStats {
    fn category(&self) -> Category {
        Category::Float
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn format(&self, full: bool) -> String {
        let mut out = header(Category::Float, self.count);
        if full {
            push_field(&mut out, "Min", self.min().map(Stripped));
            push_field(&mut out, "Max", self.max().map(Stripped));
            push_field(&mut out, "Sum", self.sum().map(Stripped));
            push_field(&mut out, "Avg", self.average().as_ref().map(Plain));
        }
        out
    }
}

/// Plain notation, every digit of the scale kept: `61500.0012500000`.
struct Plain<'a>(&'a BigDecimal);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&plain_string(self.0))
    }
}

/// Plain notation without trailing zeros: `1.50` prints `1.5`, `1.2E+3` prints `1200`.
struct Stripped<'a>(&'a BigDecimal);

impl fmt::Display for Stripped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_zero() {
            return f.write_str("0");
        }
        f.write_str(&plain_string(&self.0.normalized()))
    }
}

fn plain_string(value: &BigDecimal) -> String {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let sign = if mantissa.sign() == Sign::Minus { "-" } else { "" };
    let digits = mantissa.magnitude().to_string();
    let Ok(scale) = usize::try_from(scale) else {
        // Negative scale appends zeros; zero stays a single `0`.
        if mantissa.sign() == Sign::NoSign {
            return digits;
        }
        let zeros = "0".repeat(usize::try_from(scale.unsigned_abs()).unwrap_or(0));
        return format!("{sign}{digits}{zeros}");
    };
    if scale == 0 {
        format!("{sign}{digits}")
    } else if digits.len() > scale {
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        format!("{sign}{whole}.{fraction}")
    } else {
        format!("{sign}0.{}{digits}", "0".repeat(scale - digits.len()))
    }
}

fn pow10(exp: u64) -> BigInt {
    // Parsed scales are bounded by MAX_DECIMAL_SCALE, so the shift stays small.
    BigInt::from(10u32).pow(u32::try_from(exp).unwrap_or(u32::MAX))
}

// Integer division with ties away from zero. `den` is always positive.
fn div_round_half_away(num: &BigInt, den: &BigInt) -> BigInt {
    let quotient = num / den;
    let remainder = num % den;
    if remainder.magnitude() * 2u32 < *den.magnitude() {
        quotient
    } else if num.sign() == Sign::Minus {
        quotient - 1u32
    } else {
        quotient + 1u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn stats_of(values: &[&str]) -> DecimalStats {
        let mut stats = DecimalStats::new();
        for v in values {
            stats.update(dec(v));
        }
        stats
    }

    #[test]
    fn plain_string_never_uses_exponents() {
        assert_eq!(plain_string(&dec("1.23E5")), "123000");
        assert_eq!(plain_string(&dec("2.5E-3")), "0.0025");
        assert_eq!(plain_string(&dec("-0.5")), "-0.5");
        assert_eq!(plain_string(&BigDecimal::new(BigInt::from(0), -4)), "0");
        assert_eq!(plain_string(&BigDecimal::new(BigInt::from(5), 10)), "0.0000000005");
    }

    #[test]
    fn stripped_drops_trailing_zeros() {
        assert_eq!(Stripped(&dec("1.50")).to_string(), "1.5");
        assert_eq!(Stripped(&dec("0.000")).to_string(), "0");
        assert_eq!(Stripped(&dec("120.0")).to_string(), "120");
    }

    #[test]
    fn average_rounds_half_away_from_zero() {
        // 2 / 3 = 0.666..., 1e-10 / 2 is an exact tie
        assert_eq!(stats_of(&["1", "1", "0"]).average(), Some(dec("0.6666666667")));
        assert_eq!(stats_of(&["0.0000000001", "0"]).average(), Some(dec("0.0000000001")));
        assert_eq!(stats_of(&["-0.0000000001", "0"]).average(), Some(dec("-0.0000000001")));
        assert_eq!(stats_of(&["-1", "-1", "0"]).average(), Some(dec("-0.6666666667")));
    }

    #[test]
    fn average_keeps_ten_fraction_digits() {
        let stats = stats_of(&["1.23E5", "2.5E-3"]);
        let avg = stats.average().unwrap();
        assert_eq!(Plain(&avg).to_string(), "61500.0012500000");
    }

    #[test]
    fn average_of_large_exponent_values() {
        let stats = stats_of(&["1E20", "3E20"]);
        assert_eq!(
            Plain(&stats.average().unwrap()).to_string(),
            "200000000000000000000.0000000000"
        );
    }
}
