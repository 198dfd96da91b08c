//! Integer statistics over unbounded integers.

use super::{Summary, header, keep_max, keep_min, push_field};
use crate::category::Category;
use num_bigint::BigInt;

/// Count, min, max, sum and truncated average of integer lines.
#[derive(Clone, Debug, Default)]
pub struct IntegerStats {
    count: u64,
    min: Option<BigInt>,
    max: Option<BigInt>,
    sum: BigInt,
}

impl IntegerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, value: BigInt) {
        self.count += 1;
        keep_min(&mut self.min, &value);
        keep_max(&mut self.max, &value);
        self.sum += value;
    }

    pub fn min(&self) -> Option<&BigInt> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&BigInt> {
        self.max.as_ref()
    }

    /// Exact sum, or `None` before the first value.
    pub fn sum(&self) -> Option<&BigInt> {
        (self.count > 0).then_some(&self.sum)
    }

    /// `sum / count` truncated toward zero; the fractional part is dropped.
    pub fn average(&self) -> Option<BigInt> {
        (self.count > 0).then(|| &self.sum / BigInt::from(self.count))
    }
}

impl Summary for IntegerStats {
    fn category(&self) -> Category {
        Category::Integer
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn format(&self, full: bool) -> String {
        let mut out = header(Category::Integer, self.count);
        if full {
            push_field(&mut out, "Min", self.min());
            push_field(&mut out, "Max", self.max());
            push_field(&mut out, "Sum", self.sum());
            push_field(&mut out, "Avg", self.average());
        }
        out
    }
}
