//! Match highlighting for option labels
//!
//! Splits a label around every case-insensitive occurrence of a needle. The
//! needle is matched as a literal substring, never as a pattern.

/// A run of label text, either matching the needle or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Split `text` into alternating plain and matched segments
///
/// Occurrences are found left to right without overlap. An empty needle
/// (or empty text) yields the whole text as one plain segment.
pub fn highlight<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    if text.is_empty() || needle.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle_lower: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len_at(&text[pos..], &needle_lower) {
            Some(len) => {
                if plain_start < pos {
                    segments.push(Segment::plain(&text[plain_start..pos]));
                }
                segments.push(Segment::matched(&text[pos..pos + len]));
                pos += len;
                plain_start = pos;
            }
            None => {
                // Advance one char, staying on a UTF-8 boundary
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

/// Byte length of the prefix of `haystack` whose lowercase form equals
/// `needle_lower`, if any
///
/// Compares lowercase expansions char by char so that labels whose
/// lowercase form has a different byte length still map back to exact
/// slices of the original text.
fn match_len_at(haystack: &str, needle_lower: &[char]) -> Option<usize> {
    let mut matched = 0;

    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            if needle_lower.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle_lower.len() {
            return Some(offset + ch.len_utf8());
        }
    }

    None
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
