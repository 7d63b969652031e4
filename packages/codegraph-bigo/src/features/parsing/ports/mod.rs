//! Parsing ports (interfaces)

mod extractor;
mod language;

pub use extractor::FunctionExtractor;
pub use language::{LanguageFamily, LanguageId};
