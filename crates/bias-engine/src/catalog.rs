//! Registry of biased terms and their neutral alternatives

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_types::{Category, Severity};

use crate::error::{BiasEngineError, Result};
use crate::scanner;

type TermTable = &'static [(&'static str, &'static str)];

/// Built-in catalog content as (category, severity, [(term, suggestion)])
const BUILTIN_PATTERNS: &[(Category, Severity, TermTable)] = &[
    (
        Category::Gender,
        Severity::High,
        &[
            ("dominant", "influential"),
            ("aggressive", "proactive"),
            ("ninja", "expert"),
            ("rock star", "skilled professional"),
            ("guru", "expert"),
            ("manpower", "workforce"),
            ("chairman", "chairperson"),
            ("spokesman", "spokesperson"),
            ("salesman", "salesperson"),
        ],
    ),
    (
        Category::Gender,
        Severity::Medium,
        &[
            ("competitive", "goal-oriented"),
            ("assertive", "confident"),
            ("driven", "motivated"),
            ("ambitious", "goal-focused"),
            ("strong", "effective"),
        ],
    ),
    (
        Category::Gender,
        Severity::Low,
        &[("guys", "team"), ("he/she", "they"), ("his/her", "their")],
    ),
    (
        Category::Age,
        Severity::High,
        &[
            ("young", "energetic"),
            ("mature", "experienced"),
            ("senior", "experienced"),
            ("junior", "entry-level"),
            ("fresh graduate", "recent graduate"),
            ("digital native", "tech-savvy"),
        ],
    ),
    (
        Category::Age,
        Severity::Medium,
        &[
            ("energetic", "enthusiastic"),
            ("dynamic", "adaptable"),
            ("tech-savvy", "technically skilled"),
            ("recent graduate", "new professional"),
        ],
    ),
    (
        Category::Age,
        Severity::Low,
        &[("new", "emerging"), ("experienced", "skilled")],
    ),
    (
        Category::Racial,
        Severity::High,
        &[
            ("articulate", "well-spoken"),
            ("urban", "metropolitan"),
            ("diverse background", "varied experience"),
            ("cultural fit", "team alignment"),
            ("native speaker", "fluent speaker"),
        ],
    ),
    (
        Category::Racial,
        Severity::Medium,
        &[
            ("exotic", "unique"),
            ("traditional", "established"),
            ("mainstream", "conventional"),
        ],
    ),
    (
        Category::Racial,
        Severity::Low,
        &[("foreign", "international"), ("ethnic", "cultural")],
    ),
];

lazy_static! {
    /// Process-wide built-in catalog, compiled once on first use
    pub static ref DEFAULT_CATALOG: PatternCatalog =
        PatternCatalog::new(builtin_entries()).unwrap();
}

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub category: Category,
    pub severity: Severity,
    pub term: String,
    pub suggestion: String,
}

impl PatternEntry {
    pub fn new(category: Category, severity: Severity, term: &str, suggestion: &str) -> Self {
        Self {
            category,
            severity,
            term: term.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

/// Catalog entry paired with its case-insensitive literal matcher
#[derive(Debug, Clone)]
pub struct CompiledEntry {
    entry: PatternEntry,
    pattern: Regex,
}

impl CompiledEntry {
    pub fn entry(&self) -> &PatternEntry {
        &self.entry
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// A suggestion that would itself be flagged by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionConflict {
    pub term: String,
    pub suggestion: String,
    /// Catalog terms found inside the suggestion
    pub flagged: Vec<String>,
}

/// Immutable, validated set of pattern entries.
///
/// Entries iterate grouped by category (gender, age, racial) and then by
/// severity (high, medium, low); within a group the supplied order is kept.
/// That order is the default tie-break used when resolving overlaps.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    entries: Vec<CompiledEntry>,
}

impl PatternCatalog {
    /// Validate and compile a catalog.
    ///
    /// Rejects blank terms and terms that the case-insensitive matcher of an
    /// earlier entry would match in full.
    pub fn new(entries: Vec<PatternEntry>) -> Result<Self> {
        let mut whole_terms: Vec<Regex> = Vec::with_capacity(entries.len());
        let mut compiled = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.term.trim().is_empty() {
                return Err(BiasEngineError::EmptyTerm {
                    suggestion: entry.suggestion,
                });
            }
            if whole_terms.iter().any(|seen| seen.is_match(&entry.term)) {
                return Err(BiasEngineError::DuplicateTerm(entry.term));
            }

            let escaped = regex::escape(&entry.term);
            let invalid = |source| BiasEngineError::InvalidPattern {
                term: entry.term.clone(),
                source,
            };
            let pattern = Regex::new(&format!("(?i){}", escaped)).map_err(invalid)?;
            let whole = Regex::new(&format!("(?i)^(?:{})$", escaped)).map_err(invalid)?;

            whole_terms.push(whole);
            compiled.push(CompiledEntry { entry, pattern });
        }

        // stable, so listed order survives within a group
        compiled.sort_by(|a, b| {
            category_order(a.entry.category)
                .cmp(&category_order(b.entry.category))
                .then_with(|| b.entry.severity.rank().cmp(&a.entry.severity.rank()))
        });

        Ok(Self { entries: compiled })
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        DEFAULT_CATALOG.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter().map(CompiledEntry::entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by term, ignoring case
    pub fn find(&self, term: &str) -> Option<&PatternEntry> {
        let term = term.to_lowercase();
        self.entries().find(|entry| entry.term.to_lowercase() == term)
    }

    /// Entries whose suggestion contains another catalog term as a whole word.
    ///
    /// Rewriting with such an entry can leave flagged text behind, so a single
    /// rewrite pass is not guaranteed to reach a clean text.
    pub fn suggestion_conflicts(&self) -> Vec<SuggestionConflict> {
        self.entries()
            .filter_map(|entry| {
                let flagged: Vec<String> = scanner::scan(self, &entry.suggestion)
                    .into_iter()
                    .map(|occurrence| occurrence.term)
                    .collect();
                if flagged.is_empty() {
                    None
                } else {
                    Some(SuggestionConflict {
                        term: entry.term.clone(),
                        suggestion: entry.suggestion.clone(),
                        flagged,
                    })
                }
            })
            .collect()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn category_order(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or(Category::ALL.len())
}

/// Rows of the built-in catalog in iteration order
pub fn builtin_entries() -> Vec<PatternEntry> {
    BUILTIN_PATTERNS
        .iter()
        .flat_map(|(category, severity, terms)| {
            terms.iter().map(move |(term, suggestion)| {
                PatternEntry::new(*category, *severity, term, suggestion)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_compiles() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.len(), 39);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_covers_every_category_and_severity() {
        let catalog = PatternCatalog::builtin();
        for category in Category::ALL {
            for severity in Severity::ALL {
                assert!(
                    catalog
                        .entries()
                        .any(|e| e.category == category && e.severity == severity),
                    "missing {:?}/{:?}",
                    category,
                    severity
                );
            }
        }
    }

    #[test]
    fn test_iteration_is_grouped_by_category_then_severity() {
        let catalog = PatternCatalog::builtin();
        let groups: Vec<(Category, Severity)> = catalog
            .entries()
            .map(|e| (e.category, e.severity))
            .fold(Vec::new(), |mut acc, group| {
                if acc.last() != Some(&group) {
                    acc.push(group);
                }
                acc
            });
        let expected: Vec<(Category, Severity)> = Category::ALL
            .iter()
            .flat_map(|c| Severity::ALL.iter().map(move |s| (*c, *s)))
            .collect();
        assert_eq!(groups, expected);
    }

    #[test]
    fn test_custom_catalog_is_regrouped_keeping_listed_order() {
        let catalog = PatternCatalog::new(vec![
            PatternEntry::new(Category::Racial, Severity::Low, "zeta", "z"),
            PatternEntry::new(Category::Gender, Severity::Low, "beta", "b"),
            PatternEntry::new(Category::Gender, Severity::High, "alpha", "a"),
            PatternEntry::new(Category::Gender, Severity::High, "gamma", "g"),
        ])
        .unwrap();
        let terms: Vec<&str> = catalog.entries().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["alpha", "gamma", "beta", "zeta"]);
    }

    #[test]
    fn test_rejects_empty_term() {
        let result = PatternCatalog::new(vec![PatternEntry::new(
            Category::Age,
            Severity::Low,
            "   ",
            "x",
        )]);
        assert!(matches!(result, Err(BiasEngineError::EmptyTerm { .. })));
    }

    #[test]
    fn test_rejects_case_insensitive_duplicates() {
        let result = PatternCatalog::new(vec![
            PatternEntry::new(Category::Age, Severity::Low, "Young", "x"),
            PatternEntry::new(Category::Age, Severity::High, "young", "y"),
        ]);
        match result {
            Err(BiasEngineError::DuplicateTerm(term)) => assert_eq!(term, "young"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_terms_equal_under_case_folding() {
        // U+017F LATIN SMALL LETTER LONG S folds to 's'
        let result = PatternCatalog::new(vec![
            PatternEntry::new(Category::Gender, Severity::Medium, "strong", "effective"),
            PatternEntry::new(Category::Gender, Severity::Medium, "\u{17f}trong", "effective"),
        ]);
        match result {
            Err(BiasEngineError::DuplicateTerm(term)) => assert_eq!(term, "\u{17f}trong"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_terms_that_only_share_a_prefix() {
        let catalog = PatternCatalog::new(vec![
            PatternEntry::new(Category::Age, Severity::High, "young", "energetic"),
            PatternEntry::new(Category::Age, Severity::Low, "young talent", "new talent"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_terms_with_regex_metacharacters_are_literal() {
        let catalog = PatternCatalog::new(vec![PatternEntry::new(
            Category::Gender,
            Severity::Low,
            "he/she (or)",
            "they",
        )])
        .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_find_ignores_case() {
        let catalog = PatternCatalog::builtin();
        let entry = catalog.find("Rock Star").unwrap();
        assert_eq!(entry.suggestion, "skilled professional");
        assert!(catalog.find("engineer").is_none());
    }

    #[test]
    fn test_builtin_reports_suggestion_chains() {
        let conflicts = PatternCatalog::builtin().suggestion_conflicts();
        let young = conflicts.iter().find(|c| c.term == "young").unwrap();
        assert_eq!(young.flagged, vec!["energetic".to_string()]);
        assert!(conflicts.iter().all(|c| c.term != "aggressive"));
    }
}
