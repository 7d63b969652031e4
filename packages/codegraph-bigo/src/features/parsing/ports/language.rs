//! Language identifiers and extraction families

use serde::{Deserialize, Serialize};

/// Syntactic family a language belongs to.
///
/// Extraction and loop measurement are chosen per family, not per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageFamily {
    /// Curly-brace bodies (JavaScript, TypeScript, Java, C, C++)
    BraceDelimited,
    /// Indentation bodies (Python)
    IndentationDelimited,
}

impl LanguageFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageFamily::BraceDelimited => "brace-delimited",
            LanguageFamily::IndentationDelimited => "indentation-delimited",
        }
    }
}

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Python,
}

impl LanguageId {
    pub const ALL: [LanguageId; 6] = [
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Java,
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::Python,
    ];

    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Java => "java",
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::Python => "python",
        }
    }

    pub fn family(&self) -> LanguageFamily {
        match self {
            LanguageId::Python => LanguageFamily::IndentationDelimited,
            _ => LanguageFamily::BraceDelimited,
        }
    }

    /// Resolve an editor-style language tag ("javascript", "typescriptreact", "c++", ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "javascriptreact" | "jsx" | "mjs" | "cjs" => {
                Some(LanguageId::JavaScript)
            }
            "typescript" | "ts" | "typescriptreact" | "tsx" => Some(LanguageId::TypeScript),
            "java" => Some(LanguageId::Java),
            "c" | "h" => Some(LanguageId::C),
            "cpp" | "c++" | "cc" | "cxx" | "hpp" => Some(LanguageId::Cpp),
            "python" | "py" | "pyi" => Some(LanguageId::Python),
            _ => None,
        }
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(LanguageId::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(LanguageId::TypeScript),
            "java" => Some(LanguageId::Java),
            "c" | "h" => Some(LanguageId::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Some(LanguageId::Cpp),
            "py" | "pyi" => Some(LanguageId::Python),
            _ => None,
        }
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::JavaScript => &["js", "jsx", "mjs", "cjs"],
            LanguageId::TypeScript => &["ts", "tsx", "mts", "cts"],
            LanguageId::Java => &["java"],
            LanguageId::C => &["c", "h"],
            LanguageId::Cpp => &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
            LanguageId::Python => &["py", "pyi"],
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
