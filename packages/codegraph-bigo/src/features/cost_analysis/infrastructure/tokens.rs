//! Word-level scanning over masked source
//!
//! Bytes >= 0x80 count as identifier bytes, so identifier slices always start
//! and end on ASCII boundaries and are valid `&str` slices.

#[inline]
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

/// Identifiers (whole words) in `text` with their byte offsets.
///
/// Words starting with a digit are numeric literals and are skipped.
pub fn identifiers(text: &str) -> Identifiers<'_> {
    Identifiers { text, pos: 0 }
}

pub struct Identifiers<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Identifiers<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            if !is_ident_byte(bytes[self.pos]) {
                self.pos += 1;
                continue;
            }
            let start = self.pos;
            while self.pos < bytes.len() && is_ident_byte(bytes[self.pos]) {
                self.pos += 1;
            }
            if !bytes[start].is_ascii_digit() {
                return Some((start, &self.text[start..self.pos]));
            }
        }
        None
    }
}

/// First non-whitespace byte at or after `from`
pub fn next_non_space(text: &str, from: usize) -> Option<(usize, u8)> {
    let rest = text.as_bytes().get(from..)?;
    rest.iter()
        .position(|b| !b.is_ascii_whitespace())
        .map(|i| (from + i, rest[i]))
}

/// True when the word ending at `end` is immediately followed by a call `(`
pub fn is_call(text: &str, end: usize) -> bool {
    matches!(next_non_space(text, end), Some((_, b'(')))
}

/// Calls (`name(` or `name (`) in `text`
pub fn calls(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    identifiers(text).filter(move |(start, word)| is_call(text, start + word.len()))
}
