//! Integration tests for complexity classification
//!
//! Drives the public `analyze` entry point with realistic functions and checks
//! the classification rules and their precedence end to end.

#[path = "../common/mod.rs"]
mod common;

use codegraph_bigo::{analyze, ClassificationSignal, ComplexityClass, Dispatcher, Severity, SourceUnit};
use common::*;
use pretty_assertions::assert_eq;

// =============================================================================
// LOOP NESTING
// =============================================================================

#[test]
fn test_simple_function_is_constant() {
    let result = single(SIMPLE_FUNCTION_JS, "javascript");
    assert_eq!(result.name(), "simpleFunction");
    assert_eq!(result.complexity, ComplexityClass::Constant);
    assert_eq!(result.complexity.to_string(), "O(1)");
    assert_eq!(result.signal, ClassificationSignal::LoopNesting { depth: 0 });
}

#[test]
fn test_linear_search_is_linear() {
    let result = single(LINEAR_SEARCH_JS, "javascript");
    assert_eq!(result.name(), "linearSearch");
    assert_eq!(result.complexity, ComplexityClass::Linear);
}

#[test]
fn test_bubble_sort_is_quadratic() {
    let result = single(BUBBLE_SORT_JS, "javascript");
    assert_eq!(result.name(), "bubbleSort");
    assert_eq!(result.complexity, ComplexityClass::Quadratic);
    assert_eq!(result.complexity.to_string(), "O(n²)");
    assert!(result.is_slow());
}

#[test]
fn test_triple_and_deeper_nesting() {
    let code = r#"
function cube(n) {
  for (let i = 0; i < n; i++) {
    for (let j = 0; j < n; j++) {
      for (let k = 0; k < n; k++) {
        visit(i, j, k);
      }
    }
  }
}

function tesseract(n) {
  for (let a = 0; a < n; a++)
    for (let b = 0; b < n; b++)
      for (let c = 0; c < n; c++)
        for (let d = 0; d < n; d++)
          visit(a, b, c, d);
}
"#;
    assert_eq!(
        summarize(code, "javascript"),
        vec![
            ("cube".to_string(), ComplexityClass::Cubic),
            ("tesseract".to_string(), ComplexityClass::Polynomial(4)),
        ]
    );
    assert_eq!(ComplexityClass::Polynomial(4).to_string(), "O(n^4)");
}

#[test]
fn test_sequential_loops_stay_linear() {
    let code = r#"
function twoPasses(xs) {
  let total = 0;
  for (const x of xs) { total += x; }
  while (total > 100) { total -= 100; }
  return total;
}
"#;
    assert_eq!(single(code, "js").complexity, ComplexityClass::Linear);
}

#[test]
fn test_iteration_builtin_inside_loop_nests() {
    let code = r#"
function intersect(a, b) {
  const out = [];
  for (const x of a) {
    if (b.includes(x)) {
      out.push(x);
    }
  }
  return out;
}
"#;
    let result = single(code, "javascript");
    assert_eq!(result.complexity, ComplexityClass::Quadratic);
    assert_eq!(result.signal, ClassificationSignal::LoopNesting { depth: 2 });
}

#[test]
fn test_loop_in_else_branch_of_unbraced_body_nests() {
    let code = "function f(a) {\n  for (let i = 0; i < n; i++) if (a[i]) { x(); } else { for (let j = 0; j < n; j++) { y(); } }\n}\n";
    let result = single(code, "javascript");
    assert_eq!(result.complexity, ComplexityClass::Quadratic);
    assert_eq!(result.signal, ClassificationSignal::LoopNesting { depth: 2 });
}

#[test]
fn test_loops_in_comments_and_strings_are_ignored() {
    let code = r#"
function quiet() {
  // for (;;) { for (;;) { } }
  /* while (true) { items.sort(); } */
  const label = "for (let i = 0; i < n; i++) { }";
  return label;
}
"#;
    assert_eq!(single(code, "javascript").complexity, ComplexityClass::Constant);
}

// =============================================================================
// BUILT-IN CALLS
// =============================================================================

#[test]
fn test_sort_call_is_linearithmic() {
    let result = single(SORT_NUMBERS_JS, "javascript");
    assert_eq!(result.name(), "sortNumbers");
    assert_eq!(result.complexity, ComplexityClass::Linearithmic);
    assert_eq!(
        result.signal,
        ClassificationSignal::Builtin {
            name: "sort".to_string()
        }
    );
}

#[test]
fn test_sort_overrides_nested_loops() {
    let code = r#"
function rank(rows) {
  for (let i = 0; i < rows.length; i++) {
    for (let j = 0; j < rows[i].length; j++) {
      rows[i][j] = score(rows[i][j]);
    }
  }
  return rows.sort(byScore);
}
"#;
    assert_eq!(single(code, "javascript").complexity, ComplexityClass::Linearithmic);
}

#[test]
fn test_sort_property_access_is_not_a_call() {
    let code = "function pick(opts) {\n  return opts.sort === 'asc';\n}\n";
    assert_eq!(single(code, "javascript").complexity, ComplexityClass::Constant);
}

// =============================================================================
// RECURSION
// =============================================================================

#[test]
fn test_recursion_with_value_return_is_logarithmic() {
    let result = single(BINARY_SEARCH_JS, "javascript");
    assert_eq!(result.complexity, ComplexityClass::Logarithmic);
    assert_eq!(
        result.signal,
        ClassificationSignal::Recursion {
            divide_and_conquer: true
        }
    );
}

#[test]
fn test_recursion_without_value_return_is_exponential() {
    let result = single(HANOI_JS, "javascript");
    assert_eq!(result.complexity, ComplexityClass::Exponential);
    assert_eq!(result.complexity.to_string(), "O(2^n)");
    assert_eq!(
        result.signal,
        ClassificationSignal::Recursion {
            divide_and_conquer: false
        }
    );
}

#[test]
fn test_recursion_overrides_loops_and_builtins() {
    let code = r#"
function walk(grid, n) {
  for (let i = 0; i < n; i++) {
    for (let j = 0; j < n; j++) {
      grid[i][j] = 0;
    }
  }
  grid.sort();
  if (n > 0) walk(grid, n - 1);
}
"#;
    let result = single(code, "javascript");
    assert_eq!(result.complexity, ComplexityClass::Exponential);
    assert!(matches!(result.signal, ClassificationSignal::Recursion { .. }));
}

#[test]
fn test_name_in_comment_is_not_recursion() {
    let code = "function countdown(n) {\n  // countdown(n - 1) would recurse\n  return n;\n}\n";
    assert_eq!(single(code, "javascript").complexity, ComplexityClass::Constant);
}

// =============================================================================
// OTHER BRACE LANGUAGES
// =============================================================================

#[test]
fn test_java_methods() {
    let code = r#"
public class Search {
    public static int linear(int[] xs, int target) {
        for (int i = 0; i < xs.length; i++) {
            if (xs[i] == target) return i;
        }
        return -1;
    }

    public static long fib(int n) {
        if (n < 2) return n;
        return fib(n - 1) + fib(n - 2);
    }
}
"#;
    assert_eq!(
        summarize(code, "java"),
        vec![
            ("linear".to_string(), ComplexityClass::Linear),
            ("fib".to_string(), ComplexityClass::Logarithmic),
        ]
    );
}

#[test]
fn test_c_and_cpp_functions() {
    let c = "int sum(const int *a, int n) {\n    int s = 0;\n    for (int i = 0; i < n; i++) s += a[i];\n    return s;\n}\n";
    assert_eq!(summarize(c, "c"), vec![("sum".to_string(), ComplexityClass::Linear)]);

    let cpp = r#"
int Matrix::trace() const {
    int t = 0;
    for (int i = 0; i < n_; ++i) {
        t += at(i, i);
    }
    return t;
}
"#;
    assert_eq!(summarize(cpp, "cpp"), vec![("trace".to_string(), ComplexityClass::Linear)]);
}

#[test]
fn test_object_literal_functions_are_reported() {
    let code = r#"
const handlers = {
  reset() { return 0; },
  scan: function (rows) { for (const r of rows) { for (const c of r) { visit(c); } } },
  total: (xs = defaults()) => { return xs.reduce((a, b) => a + b, 0); },
};
"#;
    assert_eq!(
        summarize(code, "javascript"),
        vec![
            ("reset".to_string(), ComplexityClass::Constant),
            ("scan".to_string(), ComplexityClass::Quadratic),
            ("total".to_string(), ComplexityClass::Linear),
        ]
    );
}

#[test]
fn test_typescript_tags_share_the_brace_strategy() {
    let code = "const total = (xs: number[]): number => {\n  return xs.reduce((a, b) => a + b, 0);\n};\n";
    for tag in ["typescript", "ts", "typescriptreact", "TypeScript"] {
        assert_eq!(
            summarize(code, tag),
            vec![("total".to_string(), ComplexityClass::Linear)],
            "tag {}",
            tag
        );
    }
}

// =============================================================================
// PYTHON
// =============================================================================

#[test]
fn test_python_bubble_sort_is_quadratic() {
    let result = single(BUBBLE_SORT_PY, "python");
    assert_eq!(result.name(), "bubble_sort");
    assert_eq!(result.complexity, ComplexityClass::Quadratic);
}

#[test]
fn test_python_module() {
    let code = r#"
import math


def constant(x):
    return x + 1


def ordered(items):
    """Return items sorted; for loops in docstrings do not count."""
    return sorted(items)


def pairs(xs):
    return [(a, b) for a in xs for b in xs]


class Tree:
    def depth(self, node):
        if node is None:
            return 0
        return 1 + max(self.depth(node.left), self.depth(node.right))

    def visit(self, node):
        if node:
            self.visit(node.left)
            print(node.value)


def mean(xs):
    total = 0
    for x in xs:
        total += x
    return total / len(xs)
"#;
    assert_eq!(
        summarize(code, "python"),
        vec![
            ("constant".to_string(), ComplexityClass::Constant),
            ("ordered".to_string(), ComplexityClass::Linearithmic),
            ("pairs".to_string(), ComplexityClass::Quadratic),
            ("depth".to_string(), ComplexityClass::Logarithmic),
            ("visit".to_string(), ComplexityClass::Exponential),
            ("mean".to_string(), ComplexityClass::Linear),
        ]
    );
}

// =============================================================================
// DISPATCH CONTRACT
// =============================================================================

#[test]
fn test_unknown_language_is_empty() {
    assert!(analyze(BUBBLE_SORT_JS, "unknown-lang").is_empty());
    assert!(analyze(BUBBLE_SORT_JS, "rust").is_empty());
    assert!(analyze(BUBBLE_SORT_JS, "").is_empty());
}

#[test]
fn test_empty_and_garbage_input() {
    assert!(analyze("", "javascript").is_empty());
    assert!(analyze("", "python").is_empty());
    assert!(analyze("}}}{{{ ))(( def : function", "javascript").is_empty());
    assert!(analyze("def :\n  \n\tdef", "python").is_empty());
}

#[test]
fn test_results_are_in_declaration_order() {
    let code = format!("{}{}{}{}", SORT_NUMBERS_JS, BUBBLE_SORT_JS, SIMPLE_FUNCTION_JS, HANOI_JS);
    let results = analyze(&code, "javascript");
    assert_source_order(&results);
    let names: Vec<&str> = results.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["sortNumbers", "bubbleSort", "simpleFunction", "hanoi"]);
}

#[test]
fn test_analysis_is_deterministic() {
    let code = format!("{}{}{}", LINEAR_SEARCH_JS, BINARY_SEARCH_JS, BUBBLE_SORT_JS);
    let first = analyze(&code, "javascript");
    for _ in 0..5 {
        assert_eq!(analyze(&code, "javascript"), first);
    }
}

#[test]
fn test_batch_matches_individual_calls() {
    let units = vec![
        SourceUnit::new(BUBBLE_SORT_JS, "javascript"),
        SourceUnit::new(BUBBLE_SORT_PY, "python"),
        SourceUnit::new(HANOI_JS, "cobol"),
        SourceUnit::new(SORT_NUMBERS_JS, "js"),
    ];
    let batch = Dispatcher::global().analyze_batch(&units);
    assert_eq!(batch.len(), units.len());
    for (unit, results) in units.iter().zip(&batch) {
        assert_eq!(results, &analyze(&unit.text, &unit.language));
    }
    assert!(batch[2].is_empty());
}

#[test]
fn test_concurrent_calls_agree() {
    let code = format!("{}{}", BUBBLE_SORT_JS, BINARY_SEARCH_JS);
    let expected = analyze(&code, "javascript");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| analyze(&code, "javascript")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_severity_mapping() {
    let results = analyze(
        &format!("{}{}{}", SIMPLE_FUNCTION_JS, LINEAR_SEARCH_JS, BUBBLE_SORT_JS),
        "javascript",
    );
    let severities: Vec<Severity> = results.iter().map(|r| r.severity()).collect();
    assert_eq!(
        severities,
        vec![Severity::Low, Severity::Moderate, Severity::Elevated]
    );
    assert_eq!(severities[2].default_color(), "#FF9800");
}
