//! Substitution of resolved occurrences with their suggestions

use tracing::{debug, warn};

use crate::resolver::ResolvedOccurrences;
use crate::scanner::CharIndex;

/// Replace every resolved occurrence in `text` with its suggestion.
///
/// Substitutions are applied from the end of the text towards the start so
/// offsets of occurrences still to be processed stay valid. Occurrences whose
/// span does not fit `text` are skipped.
pub fn rewrite(text: &str, resolved: &ResolvedOccurrences) -> String {
    if resolved.is_empty() {
        return text.to_string();
    }

    let index = CharIndex::new(text);
    let mut ordered: Vec<_> = resolved.iter().collect();
    ordered.sort_by(|a, b| b.position.end.cmp(&a.position.end));

    let mut rewritten = text.to_string();
    let mut applied = 0usize;

    for occurrence in ordered {
        let span = occurrence.position;
        let bytes = index
            .byte_offset(span.start)
            .zip(index.byte_offset(span.end))
            .filter(|(start, end)| start < end);

        let Some((start, end)) = bytes else {
            warn!(
                term = %occurrence.term,
                start = span.start,
                end = span.end,
                text_length = index.char_count(),
                "Skipping occurrence outside text"
            );
            continue;
        };

        rewritten.replace_range(start..end, &occurrence.suggestion);
        applied += 1;
    }

    debug!(applied, "Rewrote text");
    rewritten
}
