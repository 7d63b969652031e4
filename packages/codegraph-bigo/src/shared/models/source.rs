//! Analysis input

use serde::{Deserialize, Serialize};

/// Immutable (text, language tag) pair handed to the engine.
///
/// The tag is free-form; unrecognized tags are not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub text: String,
    pub language: String,
}

impl SourceUnit {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }
}
