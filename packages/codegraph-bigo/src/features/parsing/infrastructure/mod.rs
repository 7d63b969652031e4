//! Parsing infrastructure
//!
//! Regex and delimiter-scanning extractors. No grammar, no AST: every
//! extractor works on masked text and tolerates malformed input.

mod brace_extractor;
mod brace_matcher;
mod indent_extractor;
mod source_mask;

pub use brace_extractor::BraceExtractor;
pub use brace_matcher::BraceMatcher;
pub use indent_extractor::IndentExtractor;
pub use source_mask::{mask_source, LexicalSyntax};
