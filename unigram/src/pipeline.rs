//! Ordered processing stages applied to a text document.
//!
//! A [`Pipeline`] owns a sequence of [`Stage`]s, validates that the sequence
//! is runnable, and applies each stage to a [`Document`] in order.

use crate::errors::{Result, UnigramError};
use crate::sentence::Sentence;
use crate::tagger::Tagger;

/// A text document moving through a pipeline.
///
/// Holds the raw text together with the token/tag state produced by the
/// stages that have run so far.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    sentence: Option<Sentence>,
}

impl Document {
    /// Creates a new [`Document`] from raw text.
    pub fn new<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            text: text.into(),
            sentence: None,
        }
    }

    /// Creates a new [`Document`] that already carries tokens, for pipelines
    /// without a tokenize stage.
    pub fn with_sentence<S>(text: S, sentence: Sentence) -> Self
    where
        S: Into<String>,
    {
        Self {
            text: text.into(),
            sentence: Some(sentence),
        }
    }

    /// Returns the raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the token/tag state, or [`None`] if no tokens exist yet.
    pub fn sentence(&self) -> Option<&Sentence> {
        self.sentence.as_ref()
    }

    /// Consumes the document and returns the token/tag state.
    pub fn into_sentence(self) -> Option<Sentence> {
        self.sentence
    }
}

/// Seam for the external tokenizer collaborator.
///
/// Tokenization itself is out of scope of this crate; implementations live
/// elsewhere (e.g. the regex tokenizer of `unigram_rules`).
pub trait Tokenize {
    /// Splits raw text into tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Kind of a pipeline stage, used for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Tokenize,
    Tag,
}

/// A processing stage of a [`Pipeline`].
pub trait Stage {
    /// Returns the kind of this stage.
    fn kind(&self) -> StageKind;

    /// Applies this stage to the document in place.
    fn apply(&self, doc: &mut Document) -> Result<()>;
}

/// Stage that tokenizes the document's raw text.
///
/// Replaces the document's token/tag state, so tags produced by an earlier
/// run become stale and are dropped.
pub struct TokenizeStage<T> {
    tokenizer: T,
}

impl<T> TokenizeStage<T>
where
    T: Tokenize,
{
    /// Creates a new [`TokenizeStage`] wrapping the given tokenizer.
    pub const fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }
}

impl<T> Stage for TokenizeStage<T>
where
    T: Tokenize,
{
    fn kind(&self) -> StageKind {
        StageKind::Tokenize
    }

    fn apply(&self, doc: &mut Document) -> Result<()> {
        let tokens = self.tokenizer.tokenize(&doc.text);
        doc.sentence = if tokens.is_empty() {
            None
        } else {
            Some(Sentence::from_tokens(tokens)?)
        };
        Ok(())
    }
}

/// Stage that tags the document's tokens.
pub struct TagStage {
    tagger: Tagger,
}

impl TagStage {
    /// Creates a new [`TagStage`] wrapping the given tagger.
    pub const fn new(tagger: Tagger) -> Self {
        Self { tagger }
    }
}

impl Stage for TagStage {
    fn kind(&self) -> StageKind {
        StageKind::Tag
    }

    fn apply(&self, doc: &mut Document) -> Result<()> {
        let sentence = doc.sentence.take().ok_or_else(|| {
            UnigramError::invalid_pipeline("the tag stage requires tokens, but the document has none")
        })?;
        doc.sentence = Some(self.tagger.tag(sentence));
        Ok(())
    }
}

/// Ordered collection of stages.
///
/// # Examples
///
/// ```
/// use unigram::pipeline::{Document, Pipeline, TagStage, Tokenize, TokenizeStage};
/// use unigram::{Tagger, UnigramModel};
///
/// struct WhitespaceTokenizer;
///
/// impl Tokenize for WhitespaceTokenizer {
///     fn tokenize(&self, text: &str) -> Vec<String> {
///         text.split_whitespace().map(str::to_string).collect()
///     }
/// }
///
/// let tagger = Tagger::new(UnigramModel::default(), "NN").unwrap();
/// let mut pipeline = Pipeline::new();
/// pipeline.push(Box::new(TokenizeStage::new(WhitespaceTokenizer)));
/// pipeline.push(Box::new(TagStage::new(tagger)));
///
/// let doc = pipeline.run(Document::new("a dog barks")).unwrap();
/// let s = doc.into_sentence().unwrap();
/// assert_eq!("a/NN dog/NN barks/NN", s.to_tagged_string().unwrap());
/// ```
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Creates a new empty [`Pipeline`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the end of the pipeline.
    pub fn push(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage on the given document in order.
    ///
    /// The stage sequence is validated against the document before any stage
    /// runs, so a misconfigured pipeline fails without partial effects.
    ///
    /// # Errors
    ///
    /// This function will return an error variant when:
    ///
    /// * The pipeline is empty.
    /// * The pipeline contains more than one stage of the same kind.
    /// * A tokenize stage comes after a tag stage.
    /// * The pipeline has no tokenize stage and the document has no tokens.
    /// * A stage fails.
    pub fn run(&self, mut doc: Document) -> Result<Document> {
        self.validate(&doc)?;
        for stage in &self.stages {
            stage.apply(&mut doc)?;
        }
        Ok(doc)
    }

    fn validate(&self, doc: &Document) -> Result<()> {
        if self.stages.is_empty() {
            return Err(UnigramError::invalid_pipeline(
                "the pipeline has no stages to run",
            ));
        }
        let mut idx_tokenize = None;
        let mut idx_tag = None;
        for (i, stage) in self.stages.iter().enumerate() {
            match stage.kind() {
                StageKind::Tokenize => {
                    if idx_tokenize.replace(i).is_some() {
                        return Err(UnigramError::invalid_pipeline(
                            "the pipeline contains multiple tokenize stages",
                        ));
                    }
                }
                StageKind::Tag => {
                    if idx_tag.replace(i).is_some() {
                        return Err(UnigramError::invalid_pipeline(
                            "the pipeline contains multiple tag stages",
                        ));
                    }
                }
            }
        }
        if let (Some(idx_tokenize), Some(idx_tag)) = (idx_tokenize, idx_tag) {
            if idx_tokenize > idx_tag {
                return Err(UnigramError::invalid_pipeline(
                    "the tokenize stage must come before the tag stage",
                ));
            }
        }
        if idx_tokenize.is_none() && idx_tag.is_some() && doc.sentence.is_none() {
            return Err(UnigramError::invalid_pipeline(
                "the pipeline has no tokenize stage and the document has no tokens",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::Trainer;

    struct WhitespaceTokenizer;

    impl Tokenize for WhitespaceTokenizer {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }
    }

    fn tagger() -> Tagger {
        let mut trainer = Trainer::new();
        trainer
            .add_example(&Sentence::from_tagged("the/DET dog/NOUN barks/VERB").unwrap())
            .unwrap();
        Tagger::new(trainer.train(), "UNK").unwrap()
    }

    #[test]
    fn test_run_tokenize_and_tag() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TokenizeStage::new(WhitespaceTokenizer)));
        pipeline.push(Box::new(TagStage::new(tagger())));
        let doc = pipeline.run(Document::new("the dog meows")).unwrap();
        let s = doc.into_sentence().unwrap();
        assert_eq!("the/DET dog/NOUN meows/UNK", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_run_empty_pipeline() {
        let pipeline = Pipeline::new();
        let result = pipeline.run(Document::new("the dog"));
        assert_eq!(
            "InvalidPipelineError: the pipeline has no stages to run",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_run_multiple_tokenize_stages() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TokenizeStage::new(WhitespaceTokenizer)));
        pipeline.push(Box::new(TokenizeStage::new(WhitespaceTokenizer)));
        let result = pipeline.run(Document::new("the dog"));
        assert_eq!(
            "InvalidPipelineError: the pipeline contains multiple tokenize stages",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_run_multiple_tag_stages() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TagStage::new(tagger())));
        pipeline.push(Box::new(TagStage::new(tagger())));
        let s = Sentence::from_tokens(["the"]).unwrap();
        let result = pipeline.run(Document::with_sentence("the", s));
        assert_eq!(
            "InvalidPipelineError: the pipeline contains multiple tag stages",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_run_tag_before_tokenize() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TagStage::new(tagger())));
        pipeline.push(Box::new(TokenizeStage::new(WhitespaceTokenizer)));
        let s = Sentence::from_tokens(["the"]).unwrap();
        let result = pipeline.run(Document::with_sentence("the", s));
        assert_eq!(
            "InvalidPipelineError: the tokenize stage must come before the tag stage",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_run_tag_without_tokens() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TagStage::new(tagger())));
        let result = pipeline.run(Document::new("the dog"));
        assert_eq!(
            "InvalidPipelineError: the pipeline has no tokenize stage and the document has no tokens",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_run_tag_with_provided_tokens() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TagStage::new(tagger())));
        let s = Sentence::from_tokens(["the", "dog"]).unwrap();
        let doc = pipeline.run(Document::with_sentence("the dog", s)).unwrap();
        let s = doc.into_sentence().unwrap();
        assert_eq!("the/DET dog/NOUN", s.to_tagged_string().unwrap());
    }

    #[test]
    fn test_tokenizer_produces_no_tokens() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TokenizeStage::new(WhitespaceTokenizer)));
        pipeline.push(Box::new(TagStage::new(tagger())));
        let result = pipeline.run(Document::new("   "));
        assert_eq!(
            "InvalidPipelineError: the tag stage requires tokens, but the document has none",
            result.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_tokenize_drops_stale_tags() {
        let mut pipeline = Pipeline::new();
        pipeline.push(Box::new(TokenizeStage::new(WhitespaceTokenizer)));
        let s = Sentence::from_tagged("old/X").unwrap();
        let doc = pipeline.run(Document::with_sentence("the dog", s)).unwrap();
        let s = doc.into_sentence().unwrap();
        assert_eq!(&["the", "dog"], s.words());
        assert!(s.tags().iter().all(Option::is_none));
    }
}
