/// Text Analyzer - word statistics, search and readability for plain text
///
/// This library counts word frequencies, searches documents for literal terms
/// or regular expressions, and scores readability with the Flesch Reading Ease
/// and Flesch-Kincaid Grade Level formulas.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main analyzer types for convenience
pub use crate::core::analyzer::{AnalysisReport, TextAnalyzer};
pub use crate::core::error::AnalysisError;
pub use crate::core::readability::{count_sentences, estimate_syllables, ReadabilityScores};
pub use crate::core::search::{MatchShape, SearchMode, SearchResults, Searcher};
pub use crate::core::statistics::WordFrequencyTable;
pub use crate::utils::file_utils::TextDocument;

use crate::core::readability::ReadabilityInputs;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count the words of a document
///
/// The returned table answers word counts, top-N ranking, average word
/// length and total word queries.
pub fn analyze<S: AsRef<str>>(lines: &[S]) -> WordFrequencyTable {
    WordFrequencyTable::from_lines(lines)
}

/// Search a document for a term
///
/// # Arguments
///
/// * `lines` - Document lines
/// * `term` - Literal text or regular expression, matched case-insensitively
/// * `mode` - How to interpret `term`
///
/// # Returns
///
/// The matches in line order, or the reason the term was rejected
pub fn search<S: AsRef<str>>(
    lines: &[S],
    term: &str,
    mode: SearchMode,
) -> Result<SearchResults, AnalysisError> {
    let mut searcher = Searcher::new(term, mode)?;
    searcher.execute(lines);
    Ok(searcher.into_results())
}

/// Readability scores for the given totals
///
/// Fails with `DivisionByZero` when there are no words or no sentences.
pub fn readability(
    total_words: usize,
    total_sentences: usize,
    total_syllables: usize,
) -> Result<ReadabilityScores, AnalysisError> {
    ReadabilityInputs::new(total_words, total_sentences, total_syllables).scores()
}

/// Load a file and run a full analysis on it
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to analyze
/// * `config` - Analysis options
/// * `search_term` - Optional term to search for
///
/// # Returns
///
/// The analysis report, or the error that prevented loading the file
pub fn analyze_file<P: AsRef<std::path::Path>>(
    file_path: P,
    config: &config::AnalyzerConfig,
    search_term: Option<&str>,
) -> anyhow::Result<AnalysisReport> {
    let document = TextDocument::load(file_path.as_ref())?;
    let analyzer = TextAnalyzer::new(config, search_term);

    Ok(analyzer.analyze(document.lines()))
}

/// Library configuration and utilities
pub mod config {
    use std::path::{Path, PathBuf};

    use log::{error, info, warn};
    use serde::Deserialize;

    use crate::core::search::{MatchShape, SearchMode};

    /// Options for one analysis run
    #[derive(Debug, Clone, PartialEq, Deserialize)]
    #[serde(default)]
    pub struct AnalyzerConfig {
        /// Number of most frequent words to report (0 for none)
        pub top_n: usize,
        /// How the search term is interpreted
        pub search_mode: SearchMode,
        /// Which match count the hit frequency uses
        pub match_shape: MatchShape,
        /// CSV file that receives one result row per run
        pub csv_path: Option<PathBuf>,
    }

    impl Default for AnalyzerConfig {
        fn default() -> Self {
            Self {
                top_n: 0,
                search_mode: SearchMode::Literal,
                match_shape: MatchShape::Lines,
                csv_path: None,
            }
        }
    }

    /// Create default configuration
    pub fn default_config() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    /// Load configuration from a JSON file
    ///
    /// A missing file or invalid JSON is logged and falls back to the defaults.
    pub fn load_config(path: &Path) -> AnalyzerConfig {
        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return default_config();
        }

        let config_str = match std::fs::read_to_string(path) {
            Ok(config_str) => config_str,
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                return default_config();
            }
        };

        match serde_json::from_str(&config_str) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("Invalid JSON in configuration file: {}", e);
                default_config()
            }
        }
    }

    /// Parse a top-N argument
    ///
    /// Negative or non-numeric values mean no top-N listing was requested.
    pub fn parse_top_n(value: &str) -> Option<usize> {
        match value.trim().parse::<i64>() {
            Ok(n) if n > 0 => usize::try_from(n).ok(),
            Ok(_) => None,
            Err(_) => {
                warn!("Ignoring non-numeric top-N value: {}", value);
                None
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_top_n() {
            assert_eq!(parse_top_n("5"), Some(5));
            assert_eq!(parse_top_n(" 12 "), Some(12));
            assert_eq!(parse_top_n("0"), None);
            assert_eq!(parse_top_n("-3"), None);
            assert_eq!(parse_top_n("many"), None);
        }

        #[test]
        fn test_load_config() {
            let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = temp_dir.path().join("config.json");
            std::fs::write(&path, r#"{"top_n": 3, "search_mode": "pattern"}"#).unwrap();

            let config = load_config(&path);
            assert_eq!(config.top_n, 3);
            assert_eq!(config.search_mode, SearchMode::Pattern);
            assert_eq!(config.match_shape, MatchShape::Lines);
            assert_eq!(config.csv_path, None);
        }

        #[test]
        fn test_load_config_fallbacks() {
            let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
            assert_eq!(load_config(&temp_dir.path().join("absent.json")), default_config());

            let path = temp_dir.path().join("broken.json");
            std::fs::write(&path, "{ not json").unwrap();
            assert_eq!(load_config(&path), default_config());
        }
    }
}
