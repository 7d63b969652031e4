//! Integration tests for function extraction
//!
//! Checks span boundaries against the input text, since hosts slice and
//! position with them directly.

#[path = "../common/mod.rs"]
mod common;

use codegraph_bigo::features::parsing::{
    BraceExtractor, FunctionExtractor, IndentExtractor, LanguageId,
};
use codegraph_bigo::{analyze, FunctionSpan, LineIndex, Location};
use common::*;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn spans_with(extractor: &dyn FunctionExtractor, text: &str) -> Vec<FunctionSpan> {
    extractor.extract(&extractor.mask(text))
}

fn assert_spans_well_formed(text: &str, spans: &[FunctionSpan]) {
    for span in spans {
        assert!(span.is_well_formed(text.len()), "malformed span {:?}", span);
        assert_eq!(&text[span.decl_range()], span.name);
    }
}

// =============================================================================
// BRACE FAMILY
// =============================================================================

#[test]
fn test_typescript_module_spans() {
    let text = r#"
import { sortBy } from "./util";

/** Sum with a reduce. */
export function total(xs: number[]): number {
  return xs.reduce((a, b) => a + b, 0);
}

export const byName = function (a: User, b: User): number {
  return a.name.localeCompare(b.name);
};

export const load = async (id: string): Promise<User> => {
  const res = await fetch(`/users/${id}`);
  return res.json();
};

export class Repo {
  private cache = new Map<string, User>();

  find(id: string): User | undefined {
    return this.cache.get(id);
  }
}
"#;
    let spans = spans_with(&BraceExtractor::new(), text);
    assert_spans_well_formed(text, &spans);

    let names: Vec<&str> = spans.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["total", "byName", "load", "find"]);

    assert_eq!(
        spans[0].body(text).trim(),
        "return xs.reduce((a, b) => a + b, 0);"
    );
    assert_eq!(spans[3].body(text).trim(), "return this.cache.get(id);");
}

#[test]
fn test_body_excludes_braces() {
    let spans = spans_with(&BraceExtractor::new(), SIMPLE_FUNCTION_JS);
    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(&SIMPLE_FUNCTION_JS[span.body_start - 1..span.body_start], "{");
    assert_eq!(&SIMPLE_FUNCTION_JS[span.body_end..span.body_end + 1], "}");
    assert_eq!(span.body(SIMPLE_FUNCTION_JS), "\n  return 42;\n");
}

#[test]
fn test_offsets_survive_multibyte_comments_and_strings() {
    let text = "// größe - ünïcode\nconst s = \"日本語 { \";\nfunction après() {\n  return s;\n}\n";
    let results = analyze(text, "javascript");
    assert_eq!(results.len(), 1);
    let span = &results[0].span;
    assert_eq!(&text[span.decl_range()], "après");
    assert_eq!(
        LineIndex::new(text).location(span.decl_start),
        Location::new(3, 9)
    );
}

#[test]
fn test_unbalanced_tail_keeps_earlier_functions() {
    let text = format!("{}{}function truncated(a) {{\n  for (;;) {{\n", LINEAR_SEARCH_JS, HANOI_JS);
    let results = analyze(&text, "javascript");
    let names: Vec<&str> = results.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["linearSearch", "hanoi"]);
}

// =============================================================================
// INDENTATION FAMILY
// =============================================================================

#[test]
fn test_python_block_boundaries() {
    let text = "def outer(xs):\n    total = 0\n\n    def inner(x):\n        return x * 2\n\n    for x in xs:\n        total += inner(x)\n    return total\n\nprint(outer([1, 2]))\n";
    let spans = spans_with(&IndentExtractor::new(), text);
    assert_spans_well_formed(text, &spans);

    let names: Vec<&str> = spans.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["outer", "inner"]);

    assert!(spans[0].body(text).starts_with("    total = 0"));
    assert!(spans[0].body(text).ends_with("    return total"));
    assert_eq!(spans[1].body(text), "        return x * 2");
}

#[test]
fn test_python_one_liners_and_signatures() {
    let text = "def ident(x): return x\n\nasync def fetch(url: str) -> bytes:\n    return await get(url)\n\ndef wrapped(\n    a,\n    b,\n):\n    return a\n";
    let results = analyze(text, "py");
    let names: Vec<&str> = results.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["ident", "fetch", "wrapped"]);
    assert_eq!(results[0].span.body(text), " return x");
    assert_eq!(results[2].span.body(text), "    return a");
}

#[test]
fn test_python_positions() {
    let results = analyze(BUBBLE_SORT_PY, "python");
    let index = LineIndex::new(BUBBLE_SORT_PY);
    assert_eq!(index.location(results[0].span.decl_start), Location::new(2, 4));
}

// =============================================================================
// TERMINATION
// =============================================================================

fn assert_fast<F: FnOnce() -> usize>(label: &str, f: F) {
    let start = Instant::now();
    let found = f();
    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_secs(5),
        "{} took {:?} ({} results)",
        label,
        elapsed,
        found
    );
}

#[test]
fn test_adversarial_unbalanced_brace_input_terminates() {
    let opens = "function f(a) {\n  for (;;) {\n".repeat(5_000);
    assert_fast("unclosed opens", || analyze(&opens, "javascript").len());
    assert!(analyze(&opens, "javascript").is_empty());

    let closes = "}) ] ;\n".repeat(20_000);
    assert_fast("stray closes", || analyze(&closes, "javascript").len());

    let calls = "a(b) {".repeat(10_000);
    assert_fast("method-shaped prefixes", || analyze(&calls, "cpp").len());
}

#[test]
fn test_adversarial_python_input_terminates() {
    let headers = "def f():\n".repeat(10_000);
    assert_fast("bodiless headers", || analyze(&headers, "python").len());
    assert!(analyze(&headers, "python").is_empty());

    let mut nested = String::new();
    for depth in 0..200 {
        nested.push_str(&" ".repeat(depth * 2));
        nested.push_str(&format!("def f{}(x):\n", depth));
    }
    nested.push_str(&" ".repeat(400));
    nested.push_str("return x\n");
    assert_fast("deep nesting", || analyze(&nested, "python").len());
    assert_eq!(analyze(&nested, "python").len(), 200);
}

#[test]
fn test_every_language_extracts_in_source_order() {
    let brace_text = format!("{}{}{}", BUBBLE_SORT_JS, SORT_NUMBERS_JS, SIMPLE_FUNCTION_JS);
    for lang in LanguageId::ALL {
        let text = match lang {
            LanguageId::Python => BUBBLE_SORT_PY.repeat(3),
            _ => brace_text.clone(),
        };
        let results = analyze(&text, lang.name());
        assert!(!results.is_empty(), "{} found nothing", lang);
        for r in &results {
            assert!(r.span.is_well_formed(text.len()));
        }
        assert_source_order(&results);
    }
}
