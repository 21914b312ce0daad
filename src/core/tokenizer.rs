/// Word tokenizer
///
/// A word is a maximal run of letters, digits and underscores. Everything
/// else separates words, and runs of separators never produce empty tokens.

/// Returns true for characters that belong to a word
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazy iterator over the words of a single line
///
/// Cheap to clone: a clone walks the remaining words again without
/// allocating.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(is_word_char)?;
        let tail = &self.rest[start..];
        let end = tail
            .find(|c: char| !is_word_char(c))
            .unwrap_or(tail.len());

        let (token, rest) = tail.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

/// Split a line into word tokens, keeping their original casing
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { rest: line }
}

/// Count the tokens across every line
pub fn count_tokens<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().map(|line| tokenize(line.as_ref()).count()).sum()
}
