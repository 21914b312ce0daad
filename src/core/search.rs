/// Line and word search
///
/// A `Searcher` owns one compiled, case-insensitive matcher. Literal terms are
/// escaped before compilation so both modes share the same matching path.

use log::{debug, error};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::core::error::AnalysisError;
use crate::core::tokenizer::tokenize;

/// How the search term is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match
    #[default]
    Literal,
    /// Case-insensitive regular expression
    Pattern,
}

/// Which match count a hit frequency is based on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchShape {
    /// Lines containing at least one match
    #[default]
    Lines,
    /// Words containing at least one match
    Words,
}

/// A line containing the search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    /// 1-based line number
    pub line_number: usize,
    /// Full content of the matching line
    pub line: String,
}

/// A word containing the search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    /// 1-based line number
    pub line_number: usize,
    /// 1-based position of the word within its line
    pub word_number: usize,
    /// The word as it appears in the line
    pub word: String,
}

/// Outcome of running a search over a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub term: String,
    pub mode: SearchMode,
    pub line_matches: Vec<LineMatch>,
    pub word_matches: Vec<WordMatch>,
}

impl SearchResults {
    /// Number of lines with at least one match
    pub fn match_count(&self) -> usize {
        self.line_matches.len()
    }

    /// Number of words with at least one match
    pub fn word_match_count(&self) -> usize {
        self.word_matches.len()
    }

    /// Count for the requested match shape
    pub fn count(&self, shape: MatchShape) -> usize {
        match shape {
            MatchShape::Lines => self.match_count(),
            MatchShape::Words => self.word_match_count(),
        }
    }

    /// Matches as a percentage of all words
    ///
    /// # Arguments
    ///
    /// * `total_words` - Word count of the searched document
    /// * `shape` - Which match count to use
    ///
    /// # Returns
    ///
    /// The percentage, or 0.0 for a document without words
    pub fn hit_frequency(&self, total_words: usize, shape: MatchShape) -> f64 {
        if total_words == 0 {
            return 0.0;
        }
        self.count(shape) as f64 / total_words as f64 * 100.0
    }
}

/// Case-insensitive searcher for one term
#[derive(Debug, Clone)]
pub struct Searcher {
    term: String,
    mode: SearchMode,
    matcher: Regex,
    line_matches: Vec<LineMatch>,
    word_matches: Vec<WordMatch>,
}

impl Searcher {
    /// Create a searcher and compile its matcher
    ///
    /// # Arguments
    ///
    /// * `term` - Search term, literal text or a regular expression
    /// * `mode` - How to interpret the term
    ///
    /// # Returns
    ///
    /// The searcher, `InvalidArgument` for an empty term, or `InvalidPattern`
    /// when the term is not a valid regular expression
    pub fn new(term: &str, mode: SearchMode) -> Result<Self, AnalysisError> {
        if term.is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "search term must not be empty".to_string(),
            ));
        }

        let source = match mode {
            SearchMode::Literal => regex::escape(term),
            SearchMode::Pattern => term.to_string(),
        };

        let matcher = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                error!("Error compiling search pattern {}: {}", term, e);
                AnalysisError::InvalidPattern {
                    pattern: term.to_string(),
                    source: e,
                }
            })?;

        Ok(Self {
            term: term.to_string(),
            mode,
            matcher,
            line_matches: Vec::new(),
            word_matches: Vec::new(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Scan every line, replacing the results of any earlier run
    pub fn execute<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.line_matches.clear();
        self.word_matches.clear();

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let line_number = index + 1;

            if self.matcher.is_match(line) {
                self.line_matches.push(LineMatch {
                    line_number,
                    line: line.to_string(),
                });
            }

            // Anchored patterns can hit a word without hitting its line
            for (word_index, word) in tokenize(line).enumerate() {
                if self.matcher.is_match(word) {
                    self.word_matches.push(WordMatch {
                        line_number,
                        word_number: word_index + 1,
                        word: word.to_string(),
                    });
                }
            }
        }

        debug!(
            "Search for '{}' matched {} lines and {} words",
            self.term,
            self.line_matches.len(),
            self.word_matches.len()
        );
    }

    /// Number of lines with at least one match
    pub fn match_count(&self) -> usize {
        self.line_matches.len()
    }

    /// Number of words with at least one match
    pub fn word_match_count(&self) -> usize {
        self.word_matches.len()
    }

    pub fn line_matches(&self) -> &[LineMatch] {
        &self.line_matches
    }

    pub fn word_matches(&self) -> &[WordMatch] {
        &self.word_matches
    }

    /// Snapshot of the latest run
    pub fn results(&self) -> SearchResults {
        SearchResults {
            term: self.term.clone(),
            mode: self.mode,
            line_matches: self.line_matches.clone(),
            word_matches: self.word_matches.clone(),
        }
    }

    /// Consume the searcher and keep only its results
    pub fn into_results(self) -> SearchResults {
        SearchResults {
            term: self.term,
            mode: self.mode,
            line_matches: self.line_matches,
            word_matches: self.word_matches,
        }
    }
}
