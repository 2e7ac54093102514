//! Catalog-driven bias detection for free-form text.
//!
//! The pipeline is `scan -> {score, resolve -> rewrite}`:
//! - [`scanner::scan`] locates catalog terms as whole words, ignoring case
//! - [`score::score`] turns raw occurrences into a 0-100 diversity score
//! - [`resolver::resolve`] drops overlapping occurrences by priority
//! - [`rewrite::rewrite`] substitutes the survivors with neutral wording

pub mod catalog;
pub mod config;
pub mod error;
pub mod resolver;
pub mod rewrite;
pub mod scanner;
pub mod score;
pub mod suggestions;

pub use catalog::{PatternCatalog, PatternEntry, SuggestionConflict};
pub use config::EngineConfig;
pub use error::{BiasEngineError, Result};
pub use resolver::ResolvedOccurrences;

use shared_types::{AnalysisReport, CategoryCounts, Occurrence, RewriteReport, SeverityCounts};
use tracing::{debug, instrument, warn};

/// BiasEngine entry point
#[derive(Debug, Clone)]
pub struct BiasEngine {
    catalog: PatternCatalog,
    config: EngineConfig,
}

impl BiasEngine {
    /// Engine over the built-in catalog with default settings
    pub fn new() -> Self {
        Self {
            catalog: PatternCatalog::builtin(),
            config: EngineConfig::default(),
        }
    }

    /// Build an engine, validating any catalog supplied by the config
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let catalog = match &config.catalog {
            Some(entries) => PatternCatalog::new(entries.clone())?,
            None => PatternCatalog::builtin(),
        };

        for conflict in catalog.suggestion_conflicts() {
            warn!(
                term = %conflict.term,
                suggestion = %conflict.suggestion,
                flagged = ?conflict.flagged,
                "Catalog suggestion contains a flagged term"
            );
        }

        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scan(&self, text: &str) -> Vec<Occurrence> {
        scanner::scan(&self.catalog, text)
    }

    pub fn score(&self, occurrences: &[Occurrence], text_len: usize) -> u8 {
        score::score(occurrences, text_len)
    }

    pub fn resolve(&self, occurrences: &[Occurrence]) -> ResolvedOccurrences {
        resolver::resolve(occurrences)
    }

    pub fn rewrite(&self, text: &str, resolved: &ResolvedOccurrences) -> String {
        rewrite::rewrite(text, resolved)
    }

    pub fn general_suggestions(&self) -> &'static [&'static str] {
        suggestions::general_suggestions()
    }

    /// Scan and score a text, with per-category and per-severity tallies
    #[instrument(skip_all, fields(text_length = tracing::field::Empty))]
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let text_length = scanner::text_length(text);
        tracing::Span::current().record("text_length", text_length);

        let bias_items = self.scan(text);
        let diversity_score = self.score(&bias_items, text_length);

        AnalysisReport {
            total_bias_count: bias_items.len(),
            bias_counts: CategoryCounts::tally(&bias_items),
            severity_counts: SeverityCounts::tally(&bias_items),
            diversity_score,
            bias_items,
            suggestions: suggestions::top_suggestions(self.config.suggestion_limit),
        }
    }

    /// Rewrite once and score the result by scanning it again
    #[instrument(skip_all, fields(text_length = tracing::field::Empty))]
    pub fn rewrite_text(&self, text: &str) -> RewriteReport {
        tracing::Span::current().record("text_length", scanner::text_length(text));

        let bias_items = self.scan(text);
        let resolved = self.resolve(&bias_items);
        let rewritten_text = self.rewrite(text, &resolved);

        let remaining = self.scan(&rewritten_text);
        let diversity_score = self.score(&remaining, scanner::text_length(&rewritten_text));

        RewriteReport {
            original_text: text.to_string(),
            rewritten_text,
            bias_items,
            diversity_score,
            improvements: resolved.len(),
        }
    }

    /// Rewrite repeatedly until a scan comes back empty or the configured
    /// pass limit is reached
    #[instrument(skip_all, fields(max_passes = self.config.max_rewrite_passes))]
    pub fn rewrite_until_clean(&self, text: &str) -> String {
        let mut current = text.to_string();

        for pass in 0..self.config.max_rewrite_passes {
            let occurrences = self.scan(&current);
            if occurrences.is_empty() {
                debug!(pass, "Text is clean");
                return current;
            }
            let resolved = self.resolve(&occurrences);
            current = self.rewrite(&current, &resolved);
        }

        let remaining = self.scan(&current).len();
        if remaining > 0 {
            debug!(remaining, "Pass limit reached with occurrences left");
        }
        current
    }
}

impl Default for BiasEngine {
    fn default() -> Self {
        Self::new()
    }
}
