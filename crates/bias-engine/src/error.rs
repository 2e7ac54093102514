use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiasEngineError {
    #[error("Catalog entry has an empty term (suggestion: {suggestion:?})")]
    EmptyTerm { suggestion: String },

    #[error("Duplicate catalog term: {0}")]
    DuplicateTerm(String),

    #[error("Invalid pattern for term {term:?}: {source}")]
    InvalidPattern {
        term: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BiasEngineError>;
