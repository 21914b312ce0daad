/// Error types raised by the analysis engine
///
/// File loading and report writing failures are not represented here; those
/// are application concerns and travel as `anyhow::Error`.

use thiserror::Error;

/// Errors produced by the text analysis engine
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The search term could not be compiled as a regular expression
    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Readability scores need at least one word and one sentence
    #[error("Readability is undefined for {words} words in {sentences} sentences")]
    DivisionByZero { words: usize, sentences: usize },

    /// An argument was outside the accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
