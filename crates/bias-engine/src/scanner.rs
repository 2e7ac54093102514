//! Whole-word, case-insensitive location of catalog terms

use shared_types::{Occurrence, TextPosition};
use tracing::debug;

use crate::catalog::PatternCatalog;

/// Maps between byte offsets and codepoint offsets of one text
pub(crate) struct CharIndex {
    starts: Vec<usize>,
    len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            starts: text.char_indices().map(|(byte, _)| byte).collect(),
            len: text.len(),
        }
    }

    /// Codepoint offset of a byte offset that lies on a char boundary
    pub(crate) fn char_offset(&self, byte: usize) -> usize {
        self.starts.partition_point(|&start| start < byte)
    }

    /// Byte offset of a codepoint offset; `None` past the end of the text
    pub(crate) fn byte_offset(&self, char_offset: usize) -> Option<usize> {
        if char_offset == self.starts.len() {
            Some(self.len)
        } else {
            self.starts.get(char_offset).copied()
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.starts.len()
    }
}

/// Codepoint length of a text, the unit spans and scores are measured in
pub fn text_length(text: &str) -> usize {
    text.chars().count()
}

/// Find every catalog term in `text`.
///
/// Entries are visited in catalog order; each entry's matches are reported
/// left to right. Matches of different entries may overlap.
pub fn scan(catalog: &PatternCatalog, text: &str) -> Vec<Occurrence> {
    if text.is_empty() {
        return Vec::new();
    }

    let index = CharIndex::new(text);
    let mut occurrences = Vec::new();

    for compiled in catalog.iter() {
        let entry = compiled.entry();
        let mut cursor = 0;

        while cursor <= text.len() {
            let Some(found) = compiled.pattern().find_at(text, cursor) else {
                break;
            };
            let (start, end) = (found.start(), found.end());

            if start == end {
                cursor = next_char_boundary(text, end);
                continue;
            }

            if is_whole_word(text, start, end) {
                occurrences.push(Occurrence {
                    term: text[start..end].to_string(),
                    category: entry.category,
                    severity: entry.severity,
                    suggestion: entry.suggestion.clone(),
                    position: TextPosition::new(index.char_offset(start), index.char_offset(end)),
                });
                cursor = end;
            } else {
                cursor = next_char_boundary(text, start);
            }
        }
    }

    debug!(
        occurrences = occurrences.len(),
        text_length = index.char_count(),
        "Scanned text"
    );
    occurrences
}

/// True when neither neighbour of `text[start..end]` is a letter or digit
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Byte offset just past the char at `byte`, or one past the end
fn next_char_boundary(text: &str, byte: usize) -> usize {
    text[byte..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| byte + c.len_utf8())
}
