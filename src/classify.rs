//! First-match classification of a line into a [`Category`] plus its parsed value.

use crate::category::Category;
use crate::grammar::{is_float, is_integer, parse_decimal, parse_integer};
use anyhow::Result;
use bigdecimal::BigDecimal;
use log::warn;
use num_bigint::BigInt;

/// A classified line with the payload its category accumulates.
#[derive(Clone, Debug, PartialEq)]
pub enum Classified<'a> {
    Integer(BigInt),
    Float(BigDecimal),
    /// The line itself; strings carry no parsed value.
    Text(&'a str),
}

impl Classified<'_> {
    pub fn category(&self) -> Category {
        match self {
            Classified::Integer(_) => Category::Integer,
            Classified::Float(_) => Category::Float,
            Classified::Text(_) => Category::String,
        }
    }
}

/// Whether `category`'s grammar recognizes `line`. Pure, no parsing.
pub fn accepts(category: Category, line: &str) -> bool {
    match category {
        Category::Integer => is_integer(line),
        Category::Float => is_float(line),
        Category::String => true,
    }
}

/// Parse `line` as a value of `category`.
///
/// # Errors
/// Fails when the category's parser rejects a line its grammar admitted.
pub fn parse(category: Category, line: &str) -> Result<Classified<'_>> {
    Ok(match category {
        Category::Integer => Classified::Integer(parse_integer(line)?),
        Category::Float => Classified::Float(parse_decimal(line)?),
        Category::String => Classified::Text(line),
    })
}

/// Offer `line` to each category in [`Category::ALL`] order and return the first
/// that both recognizes and parses it.
///
/// A parse failure after a grammar match is logged and treated as a rejection,
/// so the line moves on to the next category.
pub fn classify(line: &str) -> Classified<'_> {
    for category in Category::ALL {
        if !accepts(category, line) {
            continue;
        }
        match parse(category, line) {
            Ok(classified) => return classified,
            Err(err) => warn!("Invalid {category} format: {line}: {err:#}"),
        }
    }
    // String accepts everything.
    Classified::Text(line)
}
