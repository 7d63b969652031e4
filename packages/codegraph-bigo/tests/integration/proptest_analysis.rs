//! Property-based tests for the analysis engine
//!
//! Arbitrary and adversarial text must never panic, must terminate, and must
//! always yield well-formed spans in source order. Generated functions with a
//! known loop depth must classify accordingly.

use codegraph_bigo::features::parsing::LanguageId;
use codegraph_bigo::{analyze, AnalysisResult, ComplexityClass};
use proptest::prelude::*;

const TAGS: &[&str] = &["javascript", "typescript", "java", "c", "cpp", "python"];

const SOUP_TOKENS: &[&str] = &[
    "{", "}", "(", ")", ";", ":", "\n", "    ", "\"", "'", "`", "//", "/*", "#",
    "function f(x) ", "def g(x):", "for (;;) ", "for x in xs:", "while ", "do ",
    "return ", "xs.sort()", "xs.map(", "=> ",
];

// Strategy for text dense in the characters the scanners care about
fn syntax_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::sample::select(SOUP_TOKENS).prop_map(str::to_string),
            1 => "[a-z]{1,6}",
            1 => "\\PC{0,4}",
        ],
        0..120,
    )
    .prop_map(|parts| parts.concat())
}

// Strategy for function names that cannot collide with keywords, built-ins
// or the generated bodies
fn fn_name() -> impl Strategy<Value = String> {
    "fn_[a-z0-9]{1,8}"
}

fn brace_function(name: &str, depth: usize) -> String {
    let mut out = format!("function {}(n) {{\n", name);
    for level in 0..depth {
        out.push_str(&"  ".repeat(level + 1));
        out.push_str(&format!(
            "for (let i{0} = 0; i{0} < n; i{0}++) {{\n",
            level
        ));
    }
    out.push_str(&"  ".repeat(depth + 1));
    out.push_str("visit(n);\n");
    for level in (0..depth).rev() {
        out.push_str(&"  ".repeat(level + 1));
        out.push_str("}\n");
    }
    out.push_str("}\n");
    out
}

fn python_function(name: &str, depth: usize) -> String {
    let mut out = format!("def {}(xs):\n", name);
    for level in 0..depth {
        out.push_str(&"    ".repeat(level + 1));
        out.push_str(&format!("for x{} in xs:\n", level));
    }
    out.push_str(&"    ".repeat(depth + 1));
    out.push_str("visit(xs)\n");
    out
}

fn check_well_formed(text: &str, results: &[AnalysisResult]) -> Result<(), TestCaseError> {
    for r in results {
        prop_assert!(r.span.is_well_formed(text.len()), "malformed {:?}", r.span);
        prop_assert_eq!(&text[r.span.decl_range()], r.span.name.as_str());
    }
    for pair in results.windows(2) {
        prop_assert!(pair[0].span.decl_start < pair[1].span.decl_start);
    }
    Ok(())
}

proptest! {
    /// Property: arbitrary text never panics and spans are always well formed
    #[test]
    fn prop_arbitrary_text_is_safe(text in "\\PC{0,400}", tag_idx in 0..TAGS.len()) {
        let results = analyze(&text, TAGS[tag_idx]);
        check_well_formed(&text, &results)?;
    }

    /// Property: syntax-dense, mostly unbalanced text is safe for every family
    #[test]
    fn prop_syntax_soup_is_safe(text in syntax_soup()) {
        for tag in TAGS {
            let results = analyze(&text, tag);
            check_well_formed(&text, &results)?;
        }
    }

    /// Property: analysis is a pure function of its input
    #[test]
    fn prop_analysis_is_deterministic(text in syntax_soup(), tag_idx in 0..TAGS.len()) {
        let first = analyze(&text, TAGS[tag_idx]);
        let second = analyze(&text, TAGS[tag_idx]);
        prop_assert_eq!(first, second);
    }

    /// Property: unrecognized tags always yield nothing
    #[test]
    fn prop_unknown_tags_are_empty(text in syntax_soup(), tag in "[a-z+#]{0,12}") {
        prop_assume!(LanguageId::from_tag(&tag).is_none());
        prop_assert!(analyze(&text, &tag).is_empty());
    }

    /// Property: generated brace functions classify by their loop depth, in order
    #[test]
    fn prop_brace_loop_depth(
        functions in prop::collection::vec((fn_name(), 0..6usize), 1..6),
        tag_idx in 0..5usize,
    ) {
        let text: String = functions
            .iter()
            .map(|(name, depth)| brace_function(name, *depth))
            .collect();
        let results = analyze(&text, TAGS[tag_idx]);

        prop_assert_eq!(results.len(), functions.len());
        for ((name, depth), result) in functions.iter().zip(&results) {
            prop_assert_eq!(result.name(), name.as_str());
            prop_assert_eq!(result.complexity, ComplexityClass::from_loop_depth(*depth));
        }
        check_well_formed(&text, &results)?;
    }

    /// Property: generated Python functions classify by their loop depth, in order
    #[test]
    fn prop_python_loop_depth(functions in prop::collection::vec((fn_name(), 0..6usize), 1..6)) {
        let text = functions
            .iter()
            .map(|(name, depth)| python_function(name, *depth))
            .collect::<Vec<_>>()
            .join("\n");
        let results = analyze(&text, "python");

        prop_assert_eq!(results.len(), functions.len());
        for ((name, depth), result) in functions.iter().zip(&results) {
            prop_assert_eq!(result.name(), name.as_str());
            prop_assert_eq!(result.complexity, ComplexityClass::from_loop_depth(*depth));
        }
        check_well_formed(&text, &results)?;
    }

    /// Property: a truncated tail never hides the complete functions before it
    #[test]
    fn prop_truncation_keeps_complete_prefix(
        functions in prop::collection::vec((fn_name(), 0..4usize), 1..4),
        cut in 2..40usize,
    ) {
        let complete: String = functions
            .iter()
            .map(|(name, depth)| brace_function(name, *depth))
            .collect();
        let tail = brace_function("fn_tail", 3);
        let truncated = format!("{}{}", complete, &tail[..tail.len().saturating_sub(cut)]);

        let results = analyze(&truncated, "javascript");
        let names: Vec<&str> = results.iter().map(|r| r.name()).collect();
        let expected: Vec<&str> = functions.iter().map(|(n, _)| n.as_str()).collect();
        prop_assert_eq!(names, expected);
    }
}
