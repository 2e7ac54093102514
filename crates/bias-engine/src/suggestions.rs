//! General inclusive-writing tips, independent of the catalog

pub const GENERAL_SUGGESTIONS: &[&str] = &[
    "Use gender-neutral language (they/them instead of he/she)",
    "Focus on skills and qualifications rather than personality traits",
    "Avoid age-related terms that might exclude candidates",
    "Use inclusive terminology that welcomes all backgrounds",
    "Emphasize required skills over cultural 'fit'",
    "Replace jargon with clear, professional language",
];

pub fn general_suggestions() -> &'static [&'static str] {
    GENERAL_SUGGESTIONS
}

/// The first `limit` tips, for display
pub fn top_suggestions(limit: usize) -> Vec<String> {
    GENERAL_SUGGESTIONS
        .iter()
        .take(limit)
        .map(|tip| tip.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_general_suggestions_are_stable() {
        assert_eq!(general_suggestions().len(), 6);
        assert!(general_suggestions()[0].contains("gender-neutral"));
    }

    #[test]
    fn test_top_suggestions_takes_prefix() {
        let top = top_suggestions(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[2], GENERAL_SUGGESTIONS[2]);
        assert_eq!(top_suggestions(100).len(), GENERAL_SUGGESTIONS.len());
        assert!(top_suggestions(0).is_empty());
    }
}
