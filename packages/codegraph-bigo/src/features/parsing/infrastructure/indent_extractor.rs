//! Indentation-delimited function extraction (Python)
//!
//! A definition starts at a `def name(...):` header. Its body is either the
//! rest of the header line (`def f(): return 1`) or the block of lines below
//! it: the first non-blank line fixes the block indentation, blank lines are
//! kept, and the first line indented less than the block ends it. Lines inside
//! an open bracket continue the previous line and never end a block.
//!
//! All headers are resolved in one pass over the lines with a stack of open
//! definitions, so nested definitions do not rescan their parents.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use super::source_mask::{mask_source, LexicalSyntax};
use crate::features::parsing::ports::{FunctionExtractor, LanguageFamily};
use crate::shared::models::FunctionSpan;

static DEF_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^([ \t]*)(?:async[ \t]+)?def[ \t]+([A-Za-z_]\w*)[ \t]*\((?:[^()]|\([^()]*\))*\)[ \t]*(?:->[^:\n]*)?:",
    )
    .expect("valid regex literal")
});

struct Header<'a> {
    name: &'a str,
    decl_start: usize,
    decl_end: usize,
    indent: usize,
    /// Offset just past the header's `:`
    end: usize,
}

struct OpenDef<'a> {
    header: Header<'a>,
    block: Option<Block>,
}

#[derive(Clone, Copy)]
struct Block {
    indent: usize,
    start: usize,
}

/// Indentation-based extraction strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct IndentExtractor;

impl IndentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionExtractor for IndentExtractor {
    fn family(&self) -> LanguageFamily {
        LanguageFamily::IndentationDelimited
    }

    fn mask(&self, text: &str) -> String {
        mask_source(text, LexicalSyntax::Hash)
    }

    fn extract(&self, masked: &str) -> Vec<FunctionSpan> {
        let mut headers = DEF_HEADER
            .captures_iter(masked)
            .filter_map(|caps| {
                let indent = caps.get(1)?;
                let name = caps.get(2)?;
                Some(Header {
                    name: name.as_str(),
                    decl_start: name.start(),
                    decl_end: name.end(),
                    indent: indent.as_str().chars().count(),
                    end: caps.get(0)?.end(),
                })
            })
            .peekable();

        let mut spans: BTreeMap<usize, FunctionSpan> = BTreeMap::new();
        let mut open: Vec<OpenDef> = Vec::new();
        let mut bracket_depth: usize = 0;
        let mut last_content_end: usize = 0;
        let mut line_start = 0;

        while line_start < masked.len() {
            let line_end = masked[line_start..]
                .find('\n')
                .map_or(masked.len(), |i| line_start + i);
            let line = &masked[line_start..line_end];
            let is_blank = line.trim().is_empty();

            if !is_blank && bracket_depth == 0 {
                let indent = indentation(line);
                close_blocks(&mut open, &mut spans, indent, line_start, last_content_end);
            }

            while let Some(header) = headers.next_if(|h| h.end <= line_end) {
                let rest = masked[header.end..line_end].trim_end();
                if rest.trim().is_empty() {
                    open.push(OpenDef {
                        header,
                        block: None,
                    });
                } else {
                    let body_end = header.end + rest.len();
                    emit(&mut spans, &header, header.end, body_end);
                }
            }

            bracket_depth = update_bracket_depth(bracket_depth, line);
            if !is_blank {
                last_content_end = line_start + line.trim_end().len();
            }
            line_start = line_end + 1;
        }

        while let Some(def) = open.pop() {
            if let Some(block) = def.block {
                emit(&mut spans, &def.header, block.start, last_content_end);
            }
        }

        spans.into_values().collect()
    }
}

/// Resolve open definitions against a content line at `indent`.
fn close_blocks<'a>(
    open: &mut Vec<OpenDef<'a>>,
    spans: &mut BTreeMap<usize, FunctionSpan>,
    indent: usize,
    line_start: usize,
    last_content_end: usize,
) {
    while let Some(top) = open.last_mut() {
        match top.block {
            Some(block) if indent < block.indent => {
                if let Some(def) = open.pop() {
                    emit(spans, &def.header, block.start, last_content_end);
                }
            }
            Some(_) => break,
            None if indent > top.header.indent => {
                top.block = Some(Block {
                    indent,
                    start: line_start,
                });
                break;
            }
            None => {
                tracing::trace!(
                    "discarding def '{}' at {}: no indented body",
                    top.header.name,
                    top.header.decl_start
                );
                open.pop();
            }
        }
    }
}

fn emit(
    spans: &mut BTreeMap<usize, FunctionSpan>,
    header: &Header,
    body_start: usize,
    body_end: usize,
) {
    spans.entry(header.decl_start).or_insert_with(|| {
        FunctionSpan::new(
            header.name,
            header.decl_start,
            header.decl_end,
            body_start,
            body_end.max(body_start),
        )
    });
}

fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

fn update_bracket_depth(depth: usize, line: &str) -> usize {
    line.bytes().fold(depth, |depth, b| match b {
        b'(' | b'[' | b'{' => depth + 1,
        b')' | b']' | b'}' => depth.saturating_sub(1),
        _ => depth,
    })
}
