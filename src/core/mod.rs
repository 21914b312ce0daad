/// Core module for text analysis
///
/// This module contains the analysis engine: tokenization, word statistics,
/// search, readability scoring, and the analyzer that ties them together.

pub mod analyzer;
pub mod error;
pub mod readability;
pub mod search;
pub mod statistics;
pub mod tokenizer;
