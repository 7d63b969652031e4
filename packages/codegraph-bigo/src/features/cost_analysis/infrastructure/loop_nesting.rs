//! Loop-nesting measurement
//!
//! Depth is the largest number of loop scopes open at once inside a body.
//! Loop scopes are opened by `for`/`while`/`do` and by calls to iteration-style
//! built-ins (`map`, `forEach`, `enumerate`, ...), whose scope is their
//! argument list. Both meters are single forward passes.

use super::tokens::{is_ident_byte, next_non_space};
use crate::features::cost_analysis::domain::BuiltinComplexityTable;

/// Measures maximum loop-nesting depth of a masked function body
pub trait LoopNestingMeter: Send + Sync {
    fn max_depth(&self, body: &str) -> usize;
}

// ═══════════════════════════════════════════════════════════════════════════
// Brace-delimited bodies
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKind {
    Paren,
    Brace,
    /// Unbraced loop body, closed by `;` or by the end of its block
    Statement,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    kind: FrameKind,
    is_loop: bool,
    /// Body of a `do` loop; a `while` right after it is the loop condition
    is_do_body: bool,
    /// Paren holding a loop header; `Some(true)` when a loop body follows it
    header: Option<bool>,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            is_loop: false,
            is_do_body: false,
            header: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    /// After `for`/`while`; `true` when a body follows the header
    Header(bool),
    /// After a loop header or `do`; `true` for a `do` body
    Body(bool),
    /// After an iteration built-in name; its `(` opens a loop scope
    Call,
}

struct BraceScan {
    stack: Vec<Frame>,
    open_loops: usize,
    max_depth: usize,
    pending: Pending,
    after_do_body: bool,
    /// A block inside an unbraced loop body just closed; the loop body ends
    /// at the next token unless that token is `else`
    statement_block_closed: bool,
}

impl BraceScan {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            open_loops: 0,
            max_depth: 0,
            pending: Pending::None,
            after_do_body: false,
            statement_block_closed: false,
        }
    }

    fn push(&mut self, frame: Frame) {
        if frame.is_loop {
            self.open_loops += 1;
            self.max_depth = self.max_depth.max(self.open_loops);
        }
        self.stack.push(frame);
    }

    fn pop(&mut self) -> Option<Frame> {
        let frame = self.stack.pop()?;
        if frame.is_loop {
            self.open_loops -= 1;
        }
        if frame.is_do_body {
            self.after_do_body = true;
        }
        Some(frame)
    }

    fn pop_statements(&mut self) {
        while matches!(self.stack.last(), Some(f) if f.kind == FrameKind::Statement) {
            self.pop();
        }
    }

    fn loop_body(&mut self, kind: FrameKind, is_do: bool) {
        self.push(Frame {
            is_loop: true,
            is_do_body: is_do,
            ..Frame::new(kind)
        });
    }

    /// Handle one word. `iteration_call` is set for an iteration built-in
    /// followed by `(`.
    fn word(&mut self, word: &str, iteration_call: bool) {
        if std::mem::take(&mut self.statement_block_closed) && word != "else" {
            self.pop_statements();
        }
        if let Pending::Body(is_do) = self.pending {
            self.loop_body(FrameKind::Statement, is_do);
        }
        let after_do_body = std::mem::take(&mut self.after_do_body);

        self.pending = match word {
            "for" => Pending::Header(true),
            "while" => Pending::Header(!after_do_body),
            "do" => Pending::Body(true),
            // `for await (`, `for each (`
            _ if matches!(self.pending, Pending::Header(_)) => self.pending,
            _ if iteration_call => Pending::Call,
            _ => Pending::None,
        };
    }

    fn punct(&mut self, b: u8) {
        let pending = std::mem::replace(&mut self.pending, Pending::None);
        if !b.is_ascii_whitespace() {
            self.after_do_body = false;
            if std::mem::take(&mut self.statement_block_closed) {
                self.pop_statements();
            }
        }

        match b {
            b'(' => {
                let mut frame = Frame::new(FrameKind::Paren);
                match pending {
                    Pending::Header(has_body) => frame.header = Some(has_body),
                    Pending::Call => frame.is_loop = true,
                    Pending::Body(is_do) => {
                        self.loop_body(FrameKind::Statement, is_do);
                    }
                    Pending::None => {}
                }
                self.push(frame);
            }
            b')' => {
                self.pop_statements();
                if matches!(self.stack.last(), Some(f) if f.kind == FrameKind::Paren) {
                    if let Some(Frame {
                        header: Some(true), ..
                    }) = self.pop()
                    {
                        self.pending = Pending::Body(false);
                    }
                }
            }
            b'{' => match pending {
                Pending::Header(true) => self.loop_body(FrameKind::Brace, false),
                Pending::Body(is_do) => self.loop_body(FrameKind::Brace, is_do),
                _ => self.push(Frame::new(FrameKind::Brace)),
            },
            b'}' => {
                self.pop_statements();
                if matches!(self.stack.last(), Some(f) if f.kind == FrameKind::Brace) {
                    self.pop();
                    // `for (...) if (c) { ... } else { ... }`
                    self.statement_block_closed = matches!(
                        self.stack.last(),
                        Some(f) if f.kind == FrameKind::Statement
                    );
                }
            }
            b';' => {
                if let Pending::Body(_) = pending {
                    // `while (busy());`
                    self.max_depth = self.max_depth.max(self.open_loops + 1);
                }
                self.pop_statements();
            }
            _ if b.is_ascii_whitespace() => self.pending = pending,
            _ => {
                if let Pending::Body(is_do) = pending {
                    self.loop_body(FrameKind::Statement, is_do);
                }
            }
        }
    }
}

/// Meter for curly-brace languages
#[derive(Debug, Clone, Copy)]
pub struct BraceLoopMeter {
    builtins: BuiltinComplexityTable,
}

impl BraceLoopMeter {
    pub fn new(builtins: BuiltinComplexityTable) -> Self {
        Self { builtins }
    }
}

impl LoopNestingMeter for BraceLoopMeter {
    fn max_depth(&self, body: &str) -> usize {
        let bytes = body.as_bytes();
        let mut scan = BraceScan::new();
        let mut pos = 0;

        while pos < bytes.len() {
            let b = bytes[pos];
            if !is_ident_byte(b) {
                scan.punct(b);
                pos += 1;
                continue;
            }

            let start = pos;
            while pos < bytes.len() && is_ident_byte(bytes[pos]) {
                pos += 1;
            }
            let word = &body[start..pos];
            let iteration_call = !bytes[start].is_ascii_digit()
                && self.builtins.is_iteration(word)
                && matches!(next_non_space(body, pos), Some((_, b'(')));
            scan.word(word, iteration_call);
        }

        scan.max_depth
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Indentation-delimited bodies
// ═══════════════════════════════════════════════════════════════════════════

/// Meter for indentation languages
///
/// `for`/`while` headers open a scope over the lines indented below them.
/// On any other line, each comprehension `for` clause adds one level; a line
/// with no comprehension but an iteration built-in call adds one level.
#[derive(Debug, Clone, Copy)]
pub struct IndentLoopMeter {
    builtins: BuiltinComplexityTable,
}

impl IndentLoopMeter {
    pub fn new(builtins: BuiltinComplexityTable) -> Self {
        Self { builtins }
    }

    fn inline_level(&self, line: &str) -> usize {
        let mut comprehension_fors = 0;
        let mut iteration_call = false;
        for (start, word) in super::tokens::identifiers(line) {
            if word == "for" {
                comprehension_fors += 1;
            } else if !iteration_call && self.builtins.is_iteration(word) {
                iteration_call = super::tokens::is_call(line, start + word.len());
            }
        }
        if comprehension_fors > 0 {
            comprehension_fors
        } else {
            usize::from(iteration_call)
        }
    }
}

impl LoopNestingMeter for IndentLoopMeter {
    fn max_depth(&self, body: &str) -> usize {
        let mut headers: Vec<usize> = Vec::new();
        let mut max_depth = 0;

        for (indent, line) in logical_lines(body) {
            while matches!(headers.last(), Some(h) if *h >= indent) {
                headers.pop();
            }

            let level = if is_loop_header(line) {
                headers.push(indent);
                headers.len()
            } else {
                headers.len() + self.inline_level(line)
            };
            max_depth = max_depth.max(level);
        }

        max_depth
    }
}

fn is_loop_header(line: &str) -> bool {
    let mut words = super::tokens::identifiers(line);
    let first = match words.next() {
        Some((0, w)) if w == "async" => words.next().map(|(_, w)| w),
        Some((0, w)) => Some(w),
        _ => None,
    };
    matches!(first, Some("for" | "while"))
}

/// Non-blank logical lines as `(indent, text)`, with bracket continuations
/// joined onto the line that opened them. `text` has its indentation removed.
fn logical_lines(body: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut depth: usize = 0;
    let mut current: Option<(usize, usize)> = None;
    let mut offset = 0;

    for raw in body.split_inclusive('\n') {
        let line_start = offset;
        offset += raw.len();

        if current.is_none() {
            let trimmed = raw.trim_start_matches([' ', '\t']);
            if trimmed.trim().is_empty() {
                continue;
            }
            let indent = raw.len() - trimmed.len();
            current = Some((indent, line_start + indent));
        }

        depth = raw.bytes().fold(depth, |depth, b| match b {
            b'(' | b'[' | b'{' => depth + 1,
            b')' | b']' | b'}' => depth.saturating_sub(1),
            _ => depth,
        });

        if depth == 0 {
            if let Some((indent, start)) = current.take() {
                lines.push((indent, body[start..offset].trim_end()));
            }
        }
    }

    if let Some((indent, start)) = current {
        lines.push((indent, body[start..].trim_end()));
    }
    lines
}
