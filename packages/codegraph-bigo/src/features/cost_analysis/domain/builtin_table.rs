//! Built-in operation complexities
//!
//! One static table per language family, built on first use. Entries above
//! O(n) decide a classification on their own; O(n) entries are iteration-style
//! calls that count as a loop level.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::ComplexityClass;
use crate::features::parsing::ports::LanguageFamily;

lazy_static! {
    /// Brace-family (JavaScript-style collection methods)
    pub static ref BRACE_BUILTINS: HashMap<&'static str, ComplexityClass> = {
        let mut m = HashMap::with_capacity(16);

        // Sorting
        m.insert("sort", ComplexityClass::Linearithmic);
        m.insert("toSorted", ComplexityClass::Linearithmic);

        // Iteration
        m.insert("forEach", ComplexityClass::Linear);
        m.insert("map", ComplexityClass::Linear);
        m.insert("filter", ComplexityClass::Linear);
        m.insert("reduce", ComplexityClass::Linear);
        m.insert("reduceRight", ComplexityClass::Linear);
        m.insert("flatMap", ComplexityClass::Linear);
        m.insert("some", ComplexityClass::Linear);
        m.insert("every", ComplexityClass::Linear);

        // Search
        m.insert("find", ComplexityClass::Linear);
        m.insert("findIndex", ComplexityClass::Linear);
        m.insert("indexOf", ComplexityClass::Linear);
        m.insert("lastIndexOf", ComplexityClass::Linear);
        m.insert("includes", ComplexityClass::Linear);

        m
    };

    /// Indentation-family (Python builtins and list methods)
    pub static ref INDENT_BUILTINS: HashMap<&'static str, ComplexityClass> = {
        let mut m = HashMap::with_capacity(16);

        // Sorting
        m.insert("sorted", ComplexityClass::Linearithmic);
        m.insert("sort", ComplexityClass::Linearithmic);

        // Iteration
        m.insert("map", ComplexityClass::Linear);
        m.insert("filter", ComplexityClass::Linear);
        m.insert("enumerate", ComplexityClass::Linear);
        m.insert("zip", ComplexityClass::Linear);
        m.insert("reversed", ComplexityClass::Linear);

        // Reductions
        m.insert("sum", ComplexityClass::Linear);
        m.insert("min", ComplexityClass::Linear);
        m.insert("max", ComplexityClass::Linear);
        m.insert("any", ComplexityClass::Linear);
        m.insert("all", ComplexityClass::Linear);

        // Search
        m.insert("index", ComplexityClass::Linear);
        m.insert("count", ComplexityClass::Linear);

        m
    };
}

/// Read-only view of one family's built-in table
#[derive(Debug, Clone, Copy)]
pub struct BuiltinComplexityTable {
    entries: &'static HashMap<&'static str, ComplexityClass>,
}

impl BuiltinComplexityTable {
    pub fn for_family(family: LanguageFamily) -> Self {
        let entries: &'static HashMap<&'static str, ComplexityClass> = match family {
            LanguageFamily::BraceDelimited => &BRACE_BUILTINS,
            LanguageFamily::IndentationDelimited => &INDENT_BUILTINS,
        };
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<ComplexityClass> {
        self.entries.get(name).copied()
    }

    /// Entries that decide a classification by themselves (> O(n))
    pub fn is_superlinear(&self, name: &str) -> bool {
        self.lookup(name)
            .map_or(false, |class| class > ComplexityClass::Linear)
    }

    /// Entries that count as one loop level (= O(n))
    pub fn is_iteration(&self, name: &str) -> bool {
        self.lookup(name) == Some(ComplexityClass::Linear)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
