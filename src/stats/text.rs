//! String statistics: count plus shortest and longest line length.

use super::{Summary, header, push_field};
use crate::category::Category;

/// Count and length extremes of string lines.
///
/// Lengths are Unicode scalar values (`chars().count()`), not bytes. This only
/// differs from a UTF-16 code-unit count for characters outside the Basic
/// Multilingual Plane.
#[derive(Clone, Debug, Default)]
pub struct TextStats {
    count: u64,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl TextStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, line: &str) {
        let len = line.chars().count();
        self.count += 1;
        self.min_len = Some(self.min_len.map_or(len, |cur| cur.min(len)));
        self.max_len = Some(self.max_len.map_or(len, |cur| cur.max(len)));
    }

    pub fn min_len(&self) -> Option<usize> {
        self.min_len
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

impl Summary for TextStats {
    fn category(&self) -> Category {
        Category::String
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn format(&self, full: bool) -> String {
        let mut out = header(Category::String, self.count);
        if full {
            push_field(&mut out, "Min Length", self.min_len);
            push_field(&mut out, "Max Length", self.max_len);
        }
        out
    }
}
