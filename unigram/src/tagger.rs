use crate::errors::{Result, UnigramError};
use crate::model::UnigramModel;
use crate::sentence::Sentence;

/// Unigram part-of-speech tagger.
///
/// The tagger assigns each word the tag it occurred with most frequently in
/// the training data, independent of context. Words that never occurred in
/// the training data receive the configured default tag.
#[derive(Debug)]
pub struct Tagger {
    model: UnigramModel,
    default_tag: String,
}

impl Tagger {
    /// Creates a new [`Tagger`].
    ///
    /// # Arguments
    ///
    /// * `model` - A trained model.
    /// * `default_tag` - The tag assigned to words absent from the model.
    ///
    /// # Errors
    ///
    /// If `default_tag` is empty, an error variant will be returned.
    pub fn new<S>(model: UnigramModel, default_tag: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let default_tag = default_tag.into();
        if default_tag.is_empty() {
            return Err(UnigramError::invalid_argument(
                "default_tag",
                "must not be empty",
            ));
        }
        Ok(Self { model, default_tag })
    }

    /// Returns the tag of a single word.
    ///
    /// # Examples
    ///
    /// ```
    /// use unigram::{Sentence, Tagger, Trainer};
    ///
    /// let mut trainer = Trainer::new();
    /// trainer
    ///     .add_example(&Sentence::from_tagged("the/DET the/DET dog/NOUN").unwrap())
    ///     .unwrap();
    /// let tagger = Tagger::new(trainer.train(), "UNK").unwrap();
    ///
    /// assert_eq!("DET", tagger.tag_word("the"));
    /// assert_eq!("NOUN", tagger.tag_word("dog"));
    /// assert_eq!("UNK", tagger.tag_word("cat"));
    /// ```
    pub fn tag_word(&self, word: &str) -> &str {
        self.model.best_tag(word).unwrap_or(&self.default_tag)
    }

    /// Tags every word of a sentence, overwriting existing tags.
    ///
    /// # Arguments
    ///
    /// * `sentence` - Input sentence.
    ///
    /// # Returns
    ///
    /// A sentence in which every word carries a tag.
    pub fn tag(&self, mut sentence: Sentence) -> Sentence {
        let tags: Vec<_> = sentence
            .words()
            .iter()
            .map(|word| Some(self.tag_word(word).to_string()))
            .collect();
        sentence.tags_mut().clone_from_slice(&tags);
        sentence
    }

    /// Returns the model this tagger was constructed from.
    pub fn model(&self) -> &UnigramModel {
        &self.model
    }

    /// Returns the default tag.
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::Trainer;

    fn train(examples: &[&str]) -> UnigramModel {
        let mut trainer = Trainer::new();
        for example in examples {
            trainer
                .add_example(&Sentence::from_tagged(example).unwrap())
                .unwrap();
        }
        trainer.train()
    }

    #[test]
    fn test_new_empty_default_tag() {
        let result = Tagger::new(UnigramModel::default(), "");
        assert_eq!(
            "InvalidArgumentError: default_tag: must not be empty",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_tag_word_single_tag() {
        let tagger = Tagger::new(train(&["the/DET dog/NOUN"]), "UNK").unwrap();
        assert_eq!("DET", tagger.tag_word("the"));
        assert_eq!("NOUN", tagger.tag_word("dog"));
    }

    #[test]
    fn test_tag_word_unseen() {
        let tagger = Tagger::new(train(&["the/DET dog/NOUN"]), "UNK").unwrap();
        assert_eq!("UNK", tagger.tag_word("cat"));
    }

    #[test]
    fn test_tag_word_most_frequent() {
        let tagger = Tagger::new(
            train(&["run/NOUN", "run/VERB run/VERB", "run/VERB"]),
            "UNK",
        )
        .unwrap();
        assert_eq!("VERB", tagger.tag_word("run"));
    }

    #[test]
    fn test_tag_sentence() {
        let tagger = Tagger::new(train(&["the/DET the/DET dog/NOUN"]), "UNK").unwrap();
        let s = Sentence::from_tokens(["the", "dog", "cat"]).unwrap();
        let s = tagger.tag(s);
        assert_eq!("the/DET dog/NOUN cat/UNK", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_tag_overwrites_existing_tags() {
        let tagger = Tagger::new(train(&["the/DET"]), "UNK").unwrap();
        let s = Sentence::from_tagged("the/NOUN").unwrap();
        let s = tagger.tag(s);
        assert_eq!("the/DET", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_empty_model_falls_back_everywhere() {
        let tagger = Tagger::new(UnigramModel::default(), "NN").unwrap();
        let s = Sentence::from_tokens(["completely", "unseen"]).unwrap();
        let s = tagger.tag(s);
        assert_eq!("completely/NN unseen/NN", s.to_tagged_string().unwrap());
    }
}
