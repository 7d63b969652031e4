//! Brace-delimited function extraction (JavaScript, TypeScript, Java, C, C++)
//!
//! Candidates come from a fixed, priority-ordered list of declaration shapes.
//! Shapes overlap on purpose (`function f() {` is also a method-shaped
//! `f() {`), so spans are de-duplicated by declaration offset, and by opening
//! brace, keeping whichever shape came first in priority order.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use super::brace_matcher::BraceMatcher;
use super::source_mask::{mask_source, LexicalSyntax};
use crate::features::parsing::ports::{FunctionExtractor, LanguageFamily};
use crate::shared::models::FunctionSpan;

/// Identifiers that look like `name(...) {` but open a control block
const CONTROL_KEYWORDS: &[&str] = &[
    "if",
    "else",
    "for",
    "foreach",
    "while",
    "do",
    "switch",
    "case",
    "catch",
    "try",
    "with",
    "synchronized",
    "using",
    "lock",
    "fixed",
    "function",
    "return",
    "throw",
    "new",
    "typeof",
    "sizeof",
    "delete",
    "void",
    "await",
    "yield",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKind {
    /// `function name(params) {`
    FunctionDeclaration,
    /// `const name = function (params) {`
    FunctionExpression,
    /// `const name = (params) => {`
    ArrowFunction,
    /// `name(params) {`
    MethodDefinition,
    /// `name: function (params) {`, `name: (params) => {`
    PropertyFunction,
}

impl ShapeKind {
    fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::FunctionDeclaration => "function_declaration",
            ShapeKind::FunctionExpression => "function_expression",
            ShapeKind::ArrowFunction => "arrow_function",
            ShapeKind::MethodDefinition => "method_definition",
            ShapeKind::PropertyFunction => "property_function",
        }
    }
}

struct DeclarationShape {
    kind: ShapeKind,
    /// Group 1 is the function name; the match ends just past the body's `{`
    pattern: Regex,
}

static DECLARATION_SHAPES: Lazy<Vec<DeclarationShape>> = Lazy::new(|| {
    let shape = |kind, pattern: &str| DeclarationShape {
        kind,
        pattern: Regex::new(pattern).expect("valid regex literal"),
    };

    vec![
        shape(
            ShapeKind::FunctionDeclaration,
            r"\bfunction\b\s*\*?\s*([A-Za-z_$][\w$]*)\s*(?:<[^<>{}()]*>)?\s*\((?:[^()]|\([^()]*\))*\)(?:\s*:\s*[^{};=()]+?)?\s*\{",
        ),
        shape(
            ShapeKind::FunctionExpression,
            r"(?:\b(?:const|let|var)\s+)?([A-Za-z_$][\w$]*)(?:\s*:\s*[^=;{}()]+?)?\s*=\s*(?:async\s+)?function\b\s*\*?\s*(?:[A-Za-z_$][\w$]*)?\s*\((?:[^()]|\([^()]*\))*\)(?:\s*:\s*[^{};=()]+?)?\s*\{",
        ),
        shape(
            ShapeKind::ArrowFunction,
            r"(?:\b(?:const|let|var)\s+)?([A-Za-z_$][\w$]*)(?:\s*:\s*[^=;{}()]+?)?\s*=\s*(?:async\s+)?(?:<[^<>{}()]*>\s*)?(?:\((?:[^()]|\([^()]*\))*\)|[A-Za-z_$][\w$]*)(?:\s*:\s*[^{};=()]+?)?\s*=>\s*\{",
        ),
        shape(
            ShapeKind::MethodDefinition,
            r"([A-Za-z_$][\w$]*)\s*\((?:[^()]|\([^()]*\))*\)(?:[ \t]*:[ \t]*[\w$.<>\[\]|&?, ]+?)?(?:\s*(?:const|noexcept|override|final|throws\s+[\w$.,\s]+?))*\s*\{",
        ),
        shape(
            ShapeKind::PropertyFunction,
            r"([A-Za-z_$][\w$]*)\s*:\s*(?:async\s+)?(?:function\b\s*\*?\s*(?:[A-Za-z_$][\w$]*)?\s*\((?:[^()]|\([^()]*\))*\)|(?:\((?:[^()]|\([^()]*\))*\)|[A-Za-z_$][\w$]*)(?:\s*:\s*[^{};=()]+?)?\s*=>)(?:\s*:\s*[^{};=()]+?)?\s*\{",
        ),
    ]
});

/// Brace-balanced extraction strategy
#[derive(Debug, Default, Clone, Copy)]
pub struct BraceExtractor;

impl BraceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FunctionExtractor for BraceExtractor {
    fn family(&self) -> LanguageFamily {
        LanguageFamily::BraceDelimited
    }

    fn mask(&self, text: &str) -> String {
        mask_source(text, LexicalSyntax::CStyle)
    }

    fn extract(&self, masked: &str) -> Vec<FunctionSpan> {
        let matcher = BraceMatcher::new(masked);
        let mut by_decl: BTreeMap<usize, FunctionSpan> = BTreeMap::new();
        let mut claimed_bodies: FxHashSet<usize> = FxHashSet::default();

        for shape in DECLARATION_SHAPES.iter() {
            for caps in shape.pattern.captures_iter(masked) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };

                if shape.kind == ShapeKind::MethodDefinition
                    && (CONTROL_KEYWORDS.contains(&name.as_str())
                        || preceded_by_word(masked, name.start(), "new"))
                {
                    continue;
                }

                let open = whole.end() - 1;
                let Some(close) = matcher.matching_close(open) else {
                    tracing::trace!(
                        "discarding unbalanced {} '{}' at {}",
                        shape.kind.as_str(),
                        name.as_str(),
                        name.start()
                    );
                    continue;
                };

                if by_decl.contains_key(&name.start()) || !claimed_bodies.insert(open) {
                    continue;
                }

                by_decl.insert(
                    name.start(),
                    FunctionSpan::new(name.as_str(), name.start(), name.end(), open + 1, close),
                );
            }
        }

        tracing::trace!(
            "brace extraction: {} spans, {} unmatched '{{'",
            by_decl.len(),
            matcher.unmatched_opens()
        );

        by_decl.into_values().collect()
    }
}

/// True when the last word before `offset` is `word`
fn preceded_by_word(text: &str, offset: usize, word: &str) -> bool {
    let before = text[..offset].trim_end();
    before.ends_with(word)
        && before[..before.len() - word.len()]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_' || c == '$'))
}
