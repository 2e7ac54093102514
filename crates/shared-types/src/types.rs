use serde::{Deserialize, Serialize};

/// Bias dimension a catalog term belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gender,
    Age,
    Racial,
}

impl Category {
    /// All categories in catalog iteration order
    pub const ALL: [Category; 3] = [Category::Gender, Category::Age, Category::Racial];
}

/// Impact weight of a catalog term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severities in catalog iteration order
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    /// Score penalty charged for one occurrence
    pub fn weight(&self) -> u32 {
        match self {
            Severity::High => 15,
            Severity::Medium => 8,
            Severity::Low => 3,
        }
    }

    /// Priority rank used when overlapping occurrences compete (higher wins)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 2,
            Severity::Medium => 1,
            Severity::Low => 0,
        }
    }
}

/// Half-open codepoint range `[start, end)` within the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextPosition {
    pub start: usize,
    pub end: usize,
}

impl TextPosition {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of codepoints covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overlaps(&self, other: &TextPosition) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A located match of a catalog term in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// The matched text with its original casing
    pub term: String,
    pub category: Category,
    pub severity: Severity,
    pub suggestion: String,
    pub position: TextPosition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub gender: usize,
    pub age: usize,
    pub racial: usize,
}

impl CategoryCounts {
    pub fn tally(occurrences: &[Occurrence]) -> Self {
        let mut counts = Self::default();
        for occurrence in occurrences {
            match occurrence.category {
                Category::Gender => counts.gender += 1,
                Category::Age => counts.age += 1,
                Category::Racial => counts.racial += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn tally(occurrences: &[Occurrence]) -> Self {
        let mut counts = Self::default();
        for occurrence in occurrences {
            match occurrence.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }
}

/// Result of analysing one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub bias_items: Vec<Occurrence>,
    pub diversity_score: u8,
    pub total_bias_count: usize,
    pub bias_counts: CategoryCounts,
    pub severity_counts: SeverityCounts,
    pub suggestions: Vec<String>,
}

/// Result of rewriting one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteReport {
    pub original_text: String,
    pub rewritten_text: String,
    /// Raw occurrences found in the original text
    pub bias_items: Vec<Occurrence>,
    /// Score of the rewritten text, re-scanned
    pub diversity_score: u8,
    /// Number of substitutions applied
    pub improvements: usize,
}
