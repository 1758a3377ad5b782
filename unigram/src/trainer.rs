use crate::errors::{Result, UnigramError};
use crate::model::UnigramModel;
use crate::sentence::Sentence;

/// Trainer of a [`UnigramModel`].
///
/// The trainer counts how often each word occurs with each tag. Counting is
/// a single pass and order-insensitive, so examples can be added in any
/// order.
///
/// # Examples
///
/// ```
/// use unigram::{Sentence, Tagger, Trainer};
///
/// let mut trainer = Trainer::new();
/// trainer
///     .add_example(&Sentence::from_tagged("the/DET dog/NOUN").unwrap())
///     .unwrap();
/// trainer
///     .add_example(&Sentence::from_tagged("the/DET cat/NOUN").unwrap())
///     .unwrap();
///
/// let model = trainer.train();
/// let tagger = Tagger::new(model, "UNK").unwrap();
///
/// assert_eq!("DET", tagger.tag_word("the"));
/// assert_eq!("UNK", tagger.tag_word("horse"));
/// ```
#[derive(Debug, Default)]
pub struct Trainer {
    model: UnigramModel,
}

impl Trainer {
    /// Creates a new [`Trainer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tagged sentence to the training data.
    ///
    /// # Arguments
    ///
    /// * `sentence` - A sentence in which every word carries a tag.
    ///
    /// # Errors
    ///
    /// If the sentence contains an untagged token, an error variant will be
    /// returned and no count of the sentence is applied.
    pub fn add_example(&mut self, sentence: &Sentence) -> Result<()> {
        if sentence.tags().iter().any(Option::is_none) {
            return Err(UnigramError::invalid_argument(
                "sentence",
                "contains an untagged token",
            ));
        }
        for (word, tag) in sentence.iter_pairs() {
            // checked above
            self.model.add(word, tag.unwrap());
        }
        Ok(())
    }

    /// Returns the number of distinct words seen so far.
    pub fn n_words(&self) -> usize {
        self.model.n_words()
    }

    /// Finishes training and returns the learned model.
    pub fn train(self) -> UnigramModel {
        self.model
    }
}
