/// Word frequency statistics
///
/// This module aggregates lowercased tokens into occurrence counts and answers
/// ranking and averaging queries over them.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::Serialize;

use crate::core::readability::estimate_syllables;
use crate::core::tokenizer::tokenize;

/// Mapping from lowercased word to the number of times it occurs
#[derive(Debug, Clone, Default, Serialize)]
pub struct WordFrequencyTable {
    /// Occurrence count per lowercased word
    counts: HashMap<String, usize>,

    /// Number of tokens counted so far
    total: usize,
}

impl WordFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from every line of a document
    ///
    /// # Arguments
    ///
    /// * `lines` - Document lines
    ///
    /// # Returns
    ///
    /// A populated frequency table
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut table = Self::new();
        table.count_words(lines);
        table
    }

    /// Tokenize every line and add each lowercased token to the table
    ///
    /// Calling this twice with the same lines counts every word twice.
    pub fn count_words<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            for token in tokenize(line.as_ref()) {
                *self.counts.entry(token.to_lowercase()).or_insert(0) += 1;
                self.total += 1;
            }
        }

        debug!(
            "Counted {} words ({} distinct) over {} lines",
            self.total,
            self.counts.len(),
            lines.len()
        );
    }

    /// Read-only view of the counts
    pub fn word_counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Counts ordered alphabetically by word
    pub fn sorted_counts(&self) -> BTreeMap<String, usize> {
        self.counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect()
    }

    /// Total number of word occurrences
    pub fn total_words(&self) -> usize {
        self.total
    }

    /// Number of distinct words
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Average word length in characters, weighted by occurrence
    ///
    /// # Returns
    ///
    /// The weighted mean length, or 0.0 when no words were counted
    pub fn average_word_length(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total_length: usize = self
            .counts
            .iter()
            .map(|(word, count)| word.chars().count() * count)
            .sum();

        total_length as f64 / self.total as f64
    }

    /// Every word ranked by count descending, ties in ascending word order
    pub fn ranked_words(&self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        ranked.sort_by(|a, b| match b.1.cmp(&a.1) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        });

        ranked
    }

    /// The `n` most frequent words
    ///
    /// # Arguments
    ///
    /// * `n` - Number of entries wanted; 0 yields nothing and anything past
    ///   the distinct word count yields the whole table
    ///
    /// # Returns
    ///
    /// (word, count) pairs ranked as in [`ranked_words`](Self::ranked_words)
    pub fn top_n_words(&self, n: usize) -> Vec<(String, usize)> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked = self.ranked_words();
        ranked.truncate(n);
        ranked
    }

    /// Estimated syllables over every occurrence of every word
    pub fn total_syllables(&self) -> usize {
        self.counts
            .iter()
            .map(|(word, count)| estimate_syllables(word) * count)
            .sum()
    }
}
