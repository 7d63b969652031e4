//! Self-call detection
//!
//! A body is recursive when the function's own name appears as a whole word
//! followed by `(`. Member calls (`this.fib(`, `self.fib(`) count. A
//! value-returning exit (`return <expr>` on one line) is the divide-and-conquer
//! proxy; it is a heuristic, not a call-count analysis.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens;

static VALUE_RETURN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\breturn\b[ \t]*[^\s;}]").expect("valid regex literal"));

/// Outcome of recursion detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recursion {
    pub divide_and_conquer: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RecursionDetector;

impl RecursionDetector {
    pub fn new() -> Self {
        Self
    }

    /// `Some` when `body` calls `name`
    pub fn detect(&self, name: &str, body: &str) -> Option<Recursion> {
        if name.is_empty() || !calls_itself(name, body) {
            return None;
        }
        Some(Recursion {
            divide_and_conquer: has_value_return(body),
        })
    }
}

fn calls_itself(name: &str, body: &str) -> bool {
    tokens::calls(body).any(|(_, word)| word == name)
}

pub fn has_value_return(body: &str) -> bool {
    VALUE_RETURN.is_match(body)
}
