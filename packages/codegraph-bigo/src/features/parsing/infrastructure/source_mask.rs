//! Source masking
//!
//! Replaces comments and the contents of string literals with spaces so that
//! declaration patterns, brace matching and loop detection only ever see code.
//! String delimiters are kept (`"    "`), which keeps `return "x"` a value return.
//! Newlines are kept and every masked byte becomes exactly one space, so the
//! masked text has the same length and line structure as the input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lexical syntax used to find comments and strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalSyntax {
    /// `//`, `/* */`, `"`, `'`, `` ` ``
    CStyle,
    /// `#`, `"""`, `'''`, `"`, `'`
    Hash,
}

static C_STYLE_LEXEMES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"//[^\n]*|/\*(?s:.*?)\*/|"(?:[^"\\\n]|\\(?s:.))*"|'(?:[^'\\\n]|\\(?s:.))*'|`(?:[^`\\]|\\(?s:.))*`"#,
    )
    .expect("valid regex literal")
});

static HASH_LEXEMES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"#[^\n]*|"""(?s:.*?)"""|'''(?s:.*?)'''|"(?:[^"\\\n]|\\(?s:.))*"|'(?:[^'\\\n]|\\(?s:.))*'"#,
    )
    .expect("valid regex literal")
});

impl LexicalSyntax {
    fn lexemes(&self) -> &'static Regex {
        match self {
            LexicalSyntax::CStyle => &C_STYLE_LEXEMES,
            LexicalSyntax::Hash => &HASH_LEXEMES,
        }
    }
}

/// Mask comments and string contents of `text`.
pub fn mask_source(text: &str, syntax: LexicalSyntax) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut last = 0;

    for lexeme in syntax.lexemes().find_iter(text) {
        masked.push_str(&text[last..lexeme.start()]);

        let raw = lexeme.as_str();
        let keep = delimiter_len(raw);
        if keep == 0 {
            blank_into(&mut masked, raw);
        } else {
            masked.push_str(&raw[..keep]);
            blank_into(&mut masked, &raw[keep..raw.len() - keep]);
            masked.push_str(&raw[raw.len() - keep..]);
        }

        last = lexeme.end();
    }

    masked.push_str(&text[last..]);
    debug_assert_eq!(masked.len(), text.len());
    masked
}

/// Bytes of delimiter kept on each side; 0 for comments.
fn delimiter_len(lexeme: &str) -> usize {
    if lexeme.starts_with("\"\"\"") || lexeme.starts_with("'''") {
        if lexeme.len() >= 6 {
            return 3;
        }
    }
    match lexeme.as_bytes().first() {
        Some(b'"' | b'\'' | b'`') if lexeme.len() >= 2 => 1,
        _ => 0,
    }
}

fn blank_into(out: &mut String, segment: &str) {
    out.extend(
        segment
            .bytes()
            .map(|b| if b == b'\n' { '\n' } else { ' ' }),
    );
}
