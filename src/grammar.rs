//! Whole-line grammars for the numeric categories and their value parsers.
//!
//! Recognition and parsing are kept apart: [`is_integer`] and [`is_float`] are
//! pure predicates, while [`parse_integer`] and [`parse_decimal`] build the
//! arbitrary-precision value for a line that already matched.
//!
//! Digits are ASCII only. `\d` in the `regex` crate matches any Unicode decimal
//! digit, which would admit tokens such as `١٢٣`, so the patterns spell out `[0-9]`.

use anyhow::{Context, Result, bail};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("valid integer regex"));

// (a) digits '.' digits [exp], (b) '.' digits [exp], (c) digits exp
static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[-+]?[0-9]+\.[0-9]+([eE][-+]?[0-9]+)?$|",
        r"^[-+]?\.[0-9]+([eE][-+]?[0-9]+)?$|",
        r"^[-+]?[0-9]+[eE][-+]?[0-9]+$",
    ))
    .expect("valid float regex")
});

/// Largest accepted scale magnitude of a parsed decimal.
///
/// Plain-notation rendering costs time and memory linear in the scale, so
/// `1e20000000` would expand to twenty million digits. Literals beyond this
/// bound fail to parse.
pub const MAX_DECIMAL_SCALE: i64 = 100_000;

/// Whether `line` is an optionally signed run of decimal digits.
pub fn is_integer(line: &str) -> bool {
    INTEGER.is_match(line)
}

/// Whether `line` is a decimal literal: fractional, leading-dot or exponent form.
pub fn is_float(line: &str) -> bool {
    FLOAT.is_match(line)
}

/// Parse an integer-shaped line into an unbounded integer.
///
/// # Errors
/// Fails only if `text` does not follow the integer grammar.
pub fn parse_integer(text: &str) -> Result<BigInt> {
    text.parse::<BigInt>()
        .with_context(|| format!("parse integer {text:?}"))
}

/// Parse a float-shaped line into a decimal, keeping the digits and scale as written.
///
/// `1.50` keeps scale 2, `1.23E5` becomes unscaled `123` with scale `-3`.
///
/// # Errors
/// Fails if the mantissa is not numeric or the exponent pushes the scale
/// beyond [`MAX_DECIMAL_SCALE`] in either direction.
pub fn parse_decimal(text: &str) -> Result<BigDecimal> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], &text[at + 1..]),
        None => (text, ""),
    };
    let exponent: i64 = if exponent.is_empty() {
        0
    } else {
        exponent
            .parse()
            .with_context(|| format!("exponent out of range in {text:?}"))?
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    // `whole` carries the sign, and may be nothing but the sign (`-.5`).
    let unscaled: BigInt = format!("{whole}{fraction}")
        .parse()
        .with_context(|| format!("parse decimal {text:?}"))?;

    let scale = i64::try_from(fraction.len())
        .ok()
        .and_then(|digits| digits.checked_sub(exponent))
        .filter(|scale| scale.abs() <= MAX_DECIMAL_SCALE);
    let Some(scale) = scale else {
        bail!("exponent out of range in {text:?}");
    };
    Ok(BigDecimal::new(unscaled, scale))
}
