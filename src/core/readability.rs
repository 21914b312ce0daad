/// Readability scoring
///
/// Syllable estimation, sentence counting, and the Flesch Reading Ease and
/// Flesch-Kincaid Grade Level formulas.

use serde::Serialize;

use crate::core::error::AnalysisError;

const VOWELS: &str = "aeiouy";

/// Characters that end a sentence
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c.to_ascii_lowercase())
}

/// Estimate the number of syllables in a single word
///
/// Counts runs of consecutive vowels (`y` included), drops one for a
/// trailing silent `e` when more than one run was found, and never returns
/// less than 1 for a non-empty word.
///
/// # Arguments
///
/// * `word` - A single token; punctuation should already be stripped
///
/// # Returns
///
/// The estimated syllable count, or 0 for an empty word
pub fn estimate_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut last_was_vowel = false;

    for c in word.chars() {
        if is_vowel(c) {
            if !last_was_vowel {
                count += 1;
            }
            last_was_vowel = true;
        } else {
            last_was_vowel = false;
        }
    }

    if count > 1 && word.ends_with(['e', 'E']) {
        count -= 1;
    }

    count.max(1)
}

/// Count sentence terminators across all lines
///
/// Every `.`, `!` and `?` counts, so `"?!"` is two sentences.
pub fn count_sentences<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| {
            line.as_ref()
                .chars()
                .filter(|c| SENTENCE_TERMINATORS.contains(c))
                .count()
        })
        .sum()
}

/// Totals the readability formulas are computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadabilityInputs {
    pub total_words: usize,
    pub total_sentences: usize,
    pub total_syllables: usize,
}

/// Both readability scores plus the averages they derive from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadabilityScores {
    pub average_sentence_length: f64,
    pub average_syllables_per_word: f64,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
}

impl ReadabilityInputs {
    pub fn new(total_words: usize, total_sentences: usize, total_syllables: usize) -> Self {
        Self {
            total_words,
            total_sentences,
            total_syllables,
        }
    }

    /// Compute both scores
    ///
    /// # Returns
    ///
    /// The scores, or `DivisionByZero` when there are no words or no sentences
    pub fn scores(&self) -> Result<ReadabilityScores, AnalysisError> {
        if self.total_words == 0 || self.total_sentences == 0 {
            return Err(AnalysisError::DivisionByZero {
                words: self.total_words,
                sentences: self.total_sentences,
            });
        }

        let asl = self.total_words as f64 / self.total_sentences as f64;
        let asw = self.total_syllables as f64 / self.total_words as f64;

        Ok(ReadabilityScores {
            average_sentence_length: asl,
            average_syllables_per_word: asw,
            flesch_reading_ease: 206.835 - 1.015 * asl - 84.6 * asw,
            flesch_kincaid_grade: 0.39 * asl + 11.8 * asw - 15.59,
        })
    }
}

/// Flesch Reading Ease, or `None` when it is undefined
pub fn flesch_reading_ease(
    total_words: usize,
    total_sentences: usize,
    total_syllables: usize,
) -> Option<f64> {
    ReadabilityInputs::new(total_words, total_sentences, total_syllables)
        .scores()
        .ok()
        .map(|scores| scores.flesch_reading_ease)
}

/// Flesch-Kincaid Grade Level, or `None` when it is undefined
pub fn flesch_kincaid_grade(
    total_words: usize,
    total_sentences: usize,
    total_syllables: usize,
) -> Option<f64> {
    ReadabilityInputs::new(total_words, total_sentences, total_syllables)
        .scores()
        .ok()
        .map(|scores| scores.flesch_kincaid_grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_syllables() {
        assert_eq!(estimate_syllables("cake"), 1);
        assert_eq!(estimate_syllables("banana"), 3);
        assert_eq!(estimate_syllables("the"), 1);
        assert_eq!(estimate_syllables("queue"), 1);
        assert_eq!(estimate_syllables("rhythm"), 1);
        assert_eq!(estimate_syllables("readability"), 5);
    }

    #[test]
    fn test_estimate_syllables_case_insensitive() {
        assert_eq!(estimate_syllables("CAKE"), 1);
        assert_eq!(estimate_syllables("BaNaNa"), 3);
    }

    #[test]
    fn test_estimate_syllables_minimum() {
        assert_eq!(estimate_syllables("hmm"), 1);
        assert_eq!(estimate_syllables("42"), 1);
        assert_eq!(estimate_syllables("e"), 1);
        assert_eq!(estimate_syllables(""), 0);
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences(&["One. Two! Three?"]), 3);
        assert_eq!(count_sentences(&["Really?!", "Wait..."]), 5);
        assert_eq!(count_sentences(&["no terminators here", ""]), 0);
    }

    #[test]
    fn test_scores() {
        let scores = ReadabilityInputs::new(7, 2, 7).scores().unwrap();
        assert!((scores.average_sentence_length - 3.5).abs() < 1e-9);
        assert!((scores.average_syllables_per_word - 1.0).abs() < 1e-9);
        assert!((scores.flesch_reading_ease - 118.6825).abs() < 1e-9);
        assert!((scores.flesch_kincaid_grade - (-2.425)).abs() < 1e-9);
    }

    #[test]
    fn test_scores_undefined() {
        assert!(matches!(
            ReadabilityInputs::new(0, 3, 0).scores(),
            Err(AnalysisError::DivisionByZero { words: 0, sentences: 3 })
        ));
        assert!(matches!(
            ReadabilityInputs::new(10, 0, 12).scores(),
            Err(AnalysisError::DivisionByZero { .. })
        ));
        assert_eq!(flesch_reading_ease(0, 0, 0), None);
        assert_eq!(flesch_kincaid_grade(5, 0, 5), None);
    }

    #[test]
    fn test_score_helpers_agree() {
        let scores = ReadabilityInputs::new(100, 5, 150).scores().unwrap();
        assert_eq!(flesch_reading_ease(100, 5, 150), Some(scores.flesch_reading_ease));
        assert_eq!(flesch_kincaid_grade(100, 5, 150), Some(scores.flesch_kincaid_grade));
    }
}
