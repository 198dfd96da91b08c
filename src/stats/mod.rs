//! Streaming statistics, one accumulator per category.
//!
//! Each accumulator takes one classified value at a time and never forgets or
//! rounds what it has seen: integers sum as [`BigInt`](num_bigint::BigInt),
//! decimals as [`BigDecimal`](bigdecimal::BigDecimal).
//!
//! Reports share one layout:
//!
//! ```text
//! Integer Statistics:
//!   Count: 2
//!   Min: 1
//!   Max: 5
//!   Sum: 6
//!   Avg: 3
//! ```
//!
//! The short form stops after the `Count` line. With no observations every
//! field after `Count` reads [`NOT_AVAILABLE`].

mod decimal;
mod integer;
mod text;

pub use decimal::{AVERAGE_SCALE, DecimalStats};
pub use integer::IntegerStats;
pub use text::TextStats;

use crate::category::Category;
use std::fmt::Display;

/// Placeholder for statistics that do not exist yet.
pub const NOT_AVAILABLE: &str = "N/A";

/// Read side shared by all accumulators.
pub trait Summary {
    /// Category this accumulator belongs to.
    fn category(&self) -> Category;

    /// Number of values observed so far.
    fn count(&self) -> u64;

    /// Render the report. `full` adds every field after `Count`.
    fn format(&self, full: bool) -> String;
}

fn header(category: Category, count: u64) -> String {
    format!("{} Statistics:\n  Count: {count}", category.title())
}

fn push_field<T: Display>(out: &mut String, label: &str, value: Option<T>) {
    let value = value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string());
    out.push_str(&format!("\n  {label}: {value}"));
}

// The first value seeds the slot; later ones replace it only on a strict win.
fn keep_min<T: Ord + Clone>(slot: &mut Option<T>, v: &T) {
    match slot {
        Some(cur) => {
            if *v < *cur {
                *cur = v.clone()
            }
        }
        None => *slot = Some(v.clone()),
    }
}

fn keep_max<T: Ord + Clone>(slot: &mut Option<T>, v: &T) {
    match slot {
        Some(cur) => {
            if *v > *cur {
                *cur = v.clone()
            }
        }
        None => *slot = Some(v.clone()),
    }
}
