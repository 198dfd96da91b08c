//! The three fixed line categories and their output file names.

use std::fmt;

/// Category a line is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    /// Dispatch priority. A line belongs to the first category whose grammar
    /// accepts it, so integer-shaped tokens never reach the float grammar.
    pub const ALL: [Category; 3] = [Category::Integer, Category::Float, Category::String];

    /// Output file basename, before the configured prefix is applied.
    pub fn basename(self) -> &'static str {
        match self {
            Category::Integer => "integers.txt",
            Category::Float => "floats.txt",
            Category::String => "strings.txt",
        }
    }

    /// Capitalized name used in report headers.
    pub fn title(self) -> &'static str {
        match self {
            Category::Integer => "Integer",
            Category::Float => "Float",
            Category::String => "String",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Integer => "integer",
            Category::Float => "float",
            Category::String => "string",
        };
        f.write_str(name)
    }
}
