//! Source location types
//!
//! All offsets are UTF-8 byte offsets into the analyzed text.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Single location in source code (1-based line, 0-based character column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A detected function: where its name is and where its body is.
///
/// `decl_start..decl_end` covers the identifier (used for display),
/// `body_start..body_end` covers the text handed to the classifier.
/// Invariant: `decl_start <= decl_end <= body_start <= body_end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSpan {
    pub name: String,
    pub decl_start: usize,
    pub decl_end: usize,
    pub body_start: usize,
    pub body_end: usize,
}

impl FunctionSpan {
    pub fn new(
        name: impl Into<String>,
        decl_start: usize,
        decl_end: usize,
        body_start: usize,
        body_end: usize,
    ) -> Self {
        debug_assert!(decl_start <= decl_end);
        debug_assert!(decl_end <= body_start);
        debug_assert!(body_start <= body_end);

        Self {
            name: name.into(),
            decl_start,
            decl_end,
            body_start,
            body_end,
        }
    }

    pub fn decl_range(&self) -> Range<usize> {
        self.decl_start..self.decl_end
    }

    pub fn body_range(&self) -> Range<usize> {
        self.body_start..self.body_end
    }

    /// Body slice of `text`, or "" if the span does not belong to it
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.body_range()).unwrap_or("")
    }

    /// True when the span ordering invariant holds within a text of `len` bytes
    pub fn is_well_formed(&self, len: usize) -> bool {
        self.decl_start <= self.decl_end
            && self.decl_end <= self.body_start
            && self.body_start <= self.body_end
            && self.body_end <= len
    }
}

/// Byte offset → line/column lookup for one text.
///
/// Built once per text; lookups are a binary search over line starts.
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Location of a byte offset. Offsets past the end clamp to the end,
    /// offsets inside a multi-byte character round down to its start.
    pub fn location(&self, offset: usize) -> Location {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.text[line_start..offset].chars().count();

        Location::new(line as u32 + 1, column as u32)
    }
}
