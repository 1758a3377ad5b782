use hashbrown::HashMap;

/// Word to tag frequency table learned by a [`Trainer`](crate::Trainer).
///
/// For each word, tags are stored together with the number of times the
/// (word, tag) pair occurred in the training data. Tags are kept in the
/// order they were first seen, so [`UnigramModel::best_tag()`] resolves
/// count ties deterministically in favor of the earlier tag.
#[derive(Debug, Clone, Default)]
pub struct UnigramModel {
    freqs: HashMap<String, Vec<(String, u32)>>,
}

impl UnigramModel {
    /// Increments the count of a (word, tag) pair.
    pub(crate) fn add(&mut self, word: &str, tag: &str) {
        let tag_freqs = self
            .freqs
            .entry(word.to_string())
            .or_insert_with(Vec::new);
        if let Some((_, count)) = tag_freqs.iter_mut().find(|(t, _)| t == tag) {
            *count += 1;
        } else {
            tag_freqs.push((tag.to_string(), 1));
        }
    }

    /// Returns the number of times the given (word, tag) pair was seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use unigram::{Sentence, Trainer};
    ///
    /// let mut trainer = Trainer::new();
    /// trainer
    ///     .add_example(&Sentence::from_tagged("the/DET dog/NOUN the/DET").unwrap())
    ///     .unwrap();
    /// let model = trainer.train();
    ///
    /// assert_eq!(2, model.count("the", "DET"));
    /// assert_eq!(0, model.count("the", "NOUN"));
    /// ```
    pub fn count(&self, word: &str, tag: &str) -> u32 {
        self.freqs
            .get(word)
            .and_then(|tag_freqs| tag_freqs.iter().find(|(t, _)| t == tag))
            .map_or(0, |(_, count)| *count)
    }

    /// Returns the most frequent tag of the given word, or [`None`] if the
    /// word was never seen during training.
    ///
    /// Ties are broken in favor of the tag seen first.
    pub fn best_tag(&self, word: &str) -> Option<&str> {
        let tag_freqs = self.freqs.get(word)?;
        let mut best: Option<(&str, u32)> = None;
        for (tag, count) in tag_freqs {
            if best.map_or(true, |(_, best_count)| *count > best_count) {
                best = Some((tag, *count));
            }
        }
        best.map(|(tag, _)| tag)
    }

    /// Returns the number of distinct words in the table.
    pub fn n_words(&self) -> usize {
        self.freqs.len()
    }

    /// Returns `true` if the model contains no statistics.
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut model = UnigramModel::default();
        model.add("the", "DET");
        model.add("the", "DET");
        model.add("the", "NOUN");
        assert_eq!(2, model.count("the", "DET"));
        assert_eq!(1, model.count("the", "NOUN"));
        assert_eq!(1, model.n_words());
    }

    #[test]
    fn test_count_unseen() {
        let model = UnigramModel::default();
        assert_eq!(0, model.count("the", "DET"));
        assert!(model.is_empty());
    }

    #[test]
    fn test_best_tag_most_frequent() {
        let mut model = UnigramModel::default();
        model.add("run", "VERB");
        model.add("run", "NOUN");
        model.add("run", "NOUN");
        assert_eq!(Some("NOUN"), model.best_tag("run"));
    }

    #[test]
    fn test_best_tag_tie_prefers_first_seen() {
        let mut model = UnigramModel::default();
        model.add("run", "VERB");
        model.add("run", "NOUN");
        assert_eq!(Some("VERB"), model.best_tag("run"));
    }

    #[test]
    fn test_best_tag_unseen() {
        let mut model = UnigramModel::default();
        model.add("the", "DET");
        assert_eq!(None, model.best_tag("dog"));
    }
}
