use crate::errors::{Result, UnigramError};

/// Sequence of words with optional part-of-speech tags.
///
/// Words and tags are stored in two parallel arrays, so `words()[i]` is
/// annotated by `tags()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<String>,
    tags: Vec<Option<String>>,
}

impl Sentence {
    /// Creates a new [`Sentence`] from a sequence of untagged tokens.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens in surface order, e.g. the output of a tokenizer.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * `tokens` is empty.
    /// * `tokens` contains an empty token.
    ///
    /// # Examples
    ///
    /// ```
    /// use unigram::Sentence;
    ///
    /// let s = Sentence::from_tokens(["How", "are", "you", "?"]);
    /// assert!(s.is_ok());
    ///
    /// let s = Sentence::from_tokens::<[&str; 0], _>([]);
    /// assert!(s.is_err());
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(UnigramError::invalid_argument("tokens", "must not be empty"));
        }
        if words.iter().any(String::is_empty) {
            return Err(UnigramError::invalid_argument(
                "tokens",
                "contains an empty token",
            ));
        }
        let tags = vec![None; words.len()];
        Ok(Self { words, tags })
    }

    /// Creates a new [`Sentence`] from a tagged string.
    ///
    /// Tokens are separated by whitespaces, and each token takes the form
    /// `word/tag`. A backslash escapes the following character, so
    /// whitespaces, slashes, and backslashes can occur inside words and tags
    /// as `\ `, `\/`, and `\\`.
    ///
    /// # Arguments
    ///
    /// * `tagged_text` - A tagged string.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * `tagged_text` is empty.
    /// * `tagged_text` starts/ends with a whitespace.
    /// * `tagged_text` contains consecutive whitespaces.
    /// * A token has no tag separator, an empty word, an empty tag, or more
    ///   than one tag separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use unigram::Sentence;
    ///
    /// let s = Sentence::from_tagged("the/DET dog/NOUN");
    /// assert!(s.is_ok());
    ///
    /// let s = Sentence::from_tagged("the/DET dog");
    /// assert!(s.is_err());
    /// ```
    pub fn from_tagged<S>(tagged_text: S) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let tagged_text = tagged_text.as_ref();

        if tagged_text.is_empty() {
            return Err(UnigramError::invalid_argument("tagged_text", "is empty"));
        }

        let mut words = vec![];
        let mut tags = vec![];
        let mut word = String::new();
        let mut tag: Option<String> = None;
        let mut escape = false;
        for c in tagged_text.chars() {
            match (escape, c) {
                (false, '\\') => {
                    escape = true;
                }
                (false, ' ') => {
                    if words.is_empty() && word.is_empty() && tag.is_none() {
                        return Err(UnigramError::invalid_argument(
                            "tagged_text",
                            "starts with a whitespace",
                        ));
                    }
                    if word.is_empty() && tag.is_none() {
                        return Err(UnigramError::invalid_argument(
                            "tagged_text",
                            "contains consecutive whitespaces",
                        ));
                    }
                    Self::push_tagged_token(&mut words, &mut tags, &mut word, &mut tag)?;
                }
                (false, '/') => {
                    if tag.is_some() {
                        return Err(UnigramError::invalid_argument(
                            "tagged_text",
                            "a token contains multiple tag separators",
                        ));
                    }
                    tag = Some(String::new());
                }
                (_, _) => {
                    escape = false;
                    match tag.as_mut() {
                        Some(tag) => tag.push(c),
                        None => word.push(c),
                    }
                }
            }
        }
        if word.is_empty() && tag.is_none() {
            return Err(UnigramError::invalid_argument(
                "tagged_text",
                "ends with a whitespace",
            ));
        }
        Self::push_tagged_token(&mut words, &mut tags, &mut word, &mut tag)?;

        Ok(Self { words, tags })
    }

    fn push_tagged_token(
        words: &mut Vec<String>,
        tags: &mut Vec<Option<String>>,
        word: &mut String,
        tag: &mut Option<String>,
    ) -> Result<()> {
        let tag = tag.take().ok_or_else(|| {
            UnigramError::invalid_argument("tagged_text", "a token has no tag separator")
        })?;
        if word.is_empty() {
            return Err(UnigramError::invalid_argument(
                "tagged_text",
                "a token has an empty word",
            ));
        }
        if tag.is_empty() {
            return Err(UnigramError::invalid_argument(
                "tagged_text",
                "a token has an empty tag",
            ));
        }
        words.push(std::mem::take(word));
        tags.push(Some(tag));
        Ok(())
    }

    /// Generates a tagged string of this sentence, the inverse of
    /// [`Sentence::from_tagged()`].
    ///
    /// # Errors
    ///
    /// If the sentence contains an untagged token, an error variant will be
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use unigram::Sentence;
    ///
    /// let s = Sentence::from_tagged("the/DET dog/NOUN").unwrap();
    /// assert_eq!("the/DET dog/NOUN", s.to_tagged_string().unwrap());
    /// ```
    pub fn to_tagged_string(&self) -> Result<String> {
        let mut result = String::new();
        for (word, tag) in self.words.iter().zip(&self.tags) {
            let tag = tag.as_ref().ok_or_else(|| {
                UnigramError::invalid_argument("sentence", "contains an untagged token")
            })?;
            if !result.is_empty() {
                result.push(' ');
            }
            Self::push_escaped(&mut result, word);
            result.push('/');
            Self::push_escaped(&mut result, tag);
        }
        Ok(result)
    }

    fn push_escaped(result: &mut String, s: &str) {
        for c in s.chars() {
            if matches!(c, ' ' | '/' | '\\') {
                result.push('\\');
            }
            result.push(c);
        }
    }

    /// Returns the words of this sentence.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the tags of this sentence. An entry is [`None`] when the
    /// corresponding word has not been tagged.
    pub fn tags(&self) -> &[Option<String>] {
        &self.tags
    }

    /// Returns a mutable reference to the tags of this sentence.
    pub fn tags_mut(&mut self) -> &mut [Option<String>] {
        &mut self.tags
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the sentence has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over (word, tag) pairs.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.tags.iter().map(Option::as_deref))
    }
}
