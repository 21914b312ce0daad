/// Document analyzer
///
/// This file contains the TextAnalyzer, which runs word statistics, the
/// optional search and readability scoring over one document and gathers
/// everything into a single report.

use std::collections::BTreeMap;
use std::time::Instant;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::core::readability::{count_sentences, ReadabilityInputs, ReadabilityScores};
use crate::core::search::{MatchShape, SearchResults, Searcher};
use crate::core::statistics::WordFrequencyTable;

/// Search section of a report
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    #[serde(flatten)]
    pub results: SearchResults,
    /// Shape the hit frequency was computed from
    pub match_shape: MatchShape,
    /// Matches as a percentage of all words
    pub hit_frequency: f64,
}

/// Everything learned about one document
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub total_lines: usize,
    pub total_words: usize,
    pub distinct_words: usize,
    pub average_word_length: f64,
    /// Counts in alphabetical order
    pub word_counts: BTreeMap<String, usize>,
    /// Most frequent words, empty unless requested
    pub top_words: Vec<(String, usize)>,
    pub total_sentences: usize,
    pub total_syllables: usize,
    /// None when the document has no words or no sentences
    pub readability: Option<ReadabilityScores>,
    /// None when no search was requested or the search term was rejected
    pub search: Option<SearchSummary>,
    /// Problems that cut part of the analysis short
    pub runtime_errors: Vec<String>,
}

impl AnalysisReport {
    pub fn readability_inputs(&self) -> ReadabilityInputs {
        ReadabilityInputs::new(self.total_words, self.total_sentences, self.total_syllables)
    }

    /// Hit frequency of the search, 0.0 when no search ran
    pub fn hit_frequency(&self) -> f64 {
        self.search.as_ref().map_or(0.0, |s| s.hit_frequency)
    }
}

/// Runs a full analysis with a fixed configuration
pub struct TextAnalyzer {
    /// Configuration options
    config: AnalyzerConfig,

    /// Search term, if any
    search_term: Option<String>,
}

impl TextAnalyzer {
    /// Create a new TextAnalyzer
    ///
    /// # Arguments
    ///
    /// * `config` - Analysis options
    /// * `search_term` - Term to search for; `None` or an empty term skips the search
    pub fn new(config: &AnalyzerConfig, search_term: Option<&str>) -> Self {
        Self {
            config: config.clone(),
            search_term: search_term
                .filter(|term| !term.is_empty())
                .map(str::to_string),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a document's lines
    ///
    /// An invalid search pattern does not stop the analysis; it is logged and
    /// recorded in `runtime_errors` and the report carries no search section.
    pub fn analyze<S: AsRef<str>>(&self, lines: &[S]) -> AnalysisReport {
        let start_time = Instant::now();
        let mut runtime_errors = Vec::new();

        let table = WordFrequencyTable::from_lines(lines);
        let total_words = table.total_words();
        let total_sentences = count_sentences(lines);
        let total_syllables = table.total_syllables();

        let readability = match ReadabilityInputs::new(total_words, total_sentences, total_syllables)
            .scores()
        {
            Ok(scores) => Some(scores),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };

        let search = match &self.search_term {
            Some(term) => match Searcher::new(term, self.config.search_mode) {
                Ok(mut searcher) => {
                    searcher.execute(lines);
                    let results = searcher.into_results();
                    let hit_frequency = results.hit_frequency(total_words, self.config.match_shape);
                    Some(SearchSummary {
                        results,
                        match_shape: self.config.match_shape,
                        hit_frequency,
                    })
                }
                Err(e) => {
                    error!("Search skipped: {}", e);
                    runtime_errors.push(e.to_string());
                    None
                }
            },
            None => None,
        };

        let top_words = table.top_n_words(self.config.top_n);
        debug!("Top {} words: {:?}", self.config.top_n, top_words);

        let report = AnalysisReport {
            total_lines: lines.len(),
            total_words,
            distinct_words: table.distinct_words(),
            average_word_length: table.average_word_length(),
            word_counts: table.sorted_counts(),
            top_words,
            total_sentences,
            total_syllables,
            readability,
            search,
            runtime_errors,
        };

        info!("Analysis completed in {:?}", start_time.elapsed());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::SearchMode;

    const LINES: [&str; 2] = ["The quick brown fox.", "The fox jumps!"];

    #[test]
    fn test_analyze_without_search() {
        let analyzer = TextAnalyzer::new(&AnalyzerConfig::default(), None);
        let report = analyzer.analyze(&LINES);

        assert_eq!(report.total_lines, 2);
        assert_eq!(report.total_words, 7);
        assert_eq!(report.distinct_words, 5);
        assert!(report.top_words.is_empty());
        assert!(report.search.is_none());
        assert_eq!(report.hit_frequency(), 0.0);
        assert!(report.runtime_errors.is_empty());
    }

    #[test]
    fn test_analyze_with_search_and_top_n() {
        let config = AnalyzerConfig {
            top_n: 2,
            ..AnalyzerConfig::default()
        };
        let report = TextAnalyzer::new(&config, Some("fox")).analyze(&LINES);

        assert_eq!(
            report.top_words,
            vec![("fox".to_string(), 2), ("the".to_string(), 2)]
        );
        let search = report.search.as_ref().unwrap();
        assert_eq!(search.results.match_count(), 2);
        assert!((report.hit_frequency() - 200.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_term_skips_search() {
        let report = TextAnalyzer::new(&AnalyzerConfig::default(), Some("")).analyze(&LINES);
        assert!(report.search.is_none());
        assert!(report.runtime_errors.is_empty());
    }

    #[test]
    fn test_invalid_pattern_recorded() {
        let config = AnalyzerConfig {
            search_mode: SearchMode::Pattern,
            ..AnalyzerConfig::default()
        };
        let report = TextAnalyzer::new(&config, Some("fox(")).analyze(&LINES);

        assert!(report.search.is_none());
        assert_eq!(report.runtime_errors.len(), 1);
        // The rest of the analysis still ran
        assert_eq!(report.total_words, 7);
        assert!(report.readability.is_some());
    }

    #[test]
    fn test_empty_document() {
        let lines: [&str; 0] = [];
        let report = TextAnalyzer::new(&AnalyzerConfig::default(), Some("x")).analyze(&lines);

        assert_eq!(report.total_words, 0);
        assert_eq!(report.average_word_length, 0.0);
        assert!(report.readability.is_none());
        assert_eq!(report.search.as_ref().unwrap().hit_frequency, 0.0);
    }
}
