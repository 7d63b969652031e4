//! Function Extractor Port
//!
//! One implementation per syntactic family (brace-balanced, indentation-based),
//! never one per language tag.

use super::LanguageFamily;
use crate::shared::models::FunctionSpan;

/// Finds function spans in source text of one language family.
///
/// Implementations are stateless: the same input always yields the same spans,
/// and malformed input yields fewer spans rather than an error.
pub trait FunctionExtractor: Send + Sync {
    /// Family this extractor handles
    fn family(&self) -> LanguageFamily;

    /// Blank out comments and string literal contents.
    ///
    /// The result has the same byte length and line structure as `text`, so
    /// every offset computed on it is valid for `text` too.
    fn mask(&self, text: &str) -> String;

    /// Extract spans from masked text, ascending by `decl_start`, at most one
    /// span per `decl_start`.
    fn extract(&self, masked: &str) -> Vec<FunctionSpan>;
}
