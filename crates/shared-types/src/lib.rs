pub mod types;

pub use types::{
    AnalysisReport, Category, CategoryCounts, Occurrence, RewriteReport, Severity,
    SeverityCounts, TextPosition,
};
