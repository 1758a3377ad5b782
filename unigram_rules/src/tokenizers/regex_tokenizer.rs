use regex::Regex;
use unigram::errors::{Result, UnigramError};
use unigram::pipeline::Tokenize;

/// Tokenizer that emits every non-overlapping match of a regular expression
/// rule set.
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Creates a new [`RegexTokenizer`].
    ///
    /// # Arguments
    ///
    /// * `pattern` - A regular expression matching a single token.
    ///
    /// # Errors
    ///
    /// If `pattern` is not a valid regular expression, an error variant will
    /// be returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use unigram_rules::tokenizers::RegexTokenizer;
    ///
    /// let tokenizer = RegexTokenizer::new(r"\w+");
    /// assert!(tokenizer.is_ok());
    ///
    /// let tokenizer = RegexTokenizer::new(r"\w+(");
    /// assert!(tokenizer.is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| UnigramError::invalid_argument("pattern", e.to_string()))?;
        Ok(Self { pattern })
    }

    /// The default rule set: a run of word characters, or a single symbol.
    pub const fn word_pattern() -> &'static str {
        r"\w+|[^\w\s]"
    }
}

impl Tokenize for RegexTokenizer {
    /// Splits the text into all non-overlapping matches of the rule set.
    /// Text between matches is discarded.
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pattern() {
        let tokenizer = RegexTokenizer::new(RegexTokenizer::word_pattern()).unwrap();
        assert_eq!(
            vec!["the", "dog", "barks", "!"],
            tokenizer.tokenize("the dog barks!")
        );
    }

    #[test]
    fn test_word_pattern_punctuation_split() {
        let tokenizer = RegexTokenizer::new(RegexTokenizer::word_pattern()).unwrap();
        assert_eq!(
            vec!["don", "'", "t", "stop", ",", "please", "."],
            tokenizer.tokenize("don't stop, please.")
        );
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::new(r"[a-z]+").unwrap();
        assert_eq!(vec!["og", "arks"], tokenizer.tokenize("Dog Barks"));
    }

    #[test]
    fn test_no_match() {
        let tokenizer = RegexTokenizer::new(r"\w+").unwrap();
        assert!(tokenizer.tokenize("  ...  ").is_empty());
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = RegexTokenizer::new(r"\w+").unwrap();
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RegexTokenizer::new(r"(");
        assert!(result.is_err());
    }
}
