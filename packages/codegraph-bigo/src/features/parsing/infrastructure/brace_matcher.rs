//! Balanced-delimiter scanning for brace bodies
//!
//! One left-to-right pass with a stack pairs every `{` with the `}` at which
//! the depth counter started at that `{` returns to zero. Stray `}` with an
//! empty stack are ignored and a `{` still open at end-of-text has no match.
//! Pairing everything up front keeps extraction O(length) no matter how many
//! declarations share (or fail to close) the same text.

use rustc_hash::FxHashMap;

pub struct BraceMatcher {
    closes: FxHashMap<usize, usize>,
    unmatched_opens: usize,
}

impl BraceMatcher {
    /// Pair braces in already-masked text
    pub fn new(masked: &str) -> Self {
        let mut closes = FxHashMap::default();
        let mut stack: Vec<usize> = Vec::new();

        for (i, b) in masked.bytes().enumerate() {
            match b {
                b'{' => stack.push(i),
                b'}' => {
                    if let Some(open) = stack.pop() {
                        closes.insert(open, i);
                    }
                }
                _ => {}
            }
        }

        Self {
            closes,
            unmatched_opens: stack.len(),
        }
    }

    /// Offset of the `}` closing the `{` at `open`
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        self.closes.get(&open).copied()
    }

    /// `{` left open at end-of-text
    pub fn unmatched_opens(&self) -> usize {
        self.unmatched_opens
    }
}
