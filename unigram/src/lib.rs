//! # Unigram
//!
//! A frequency based unigram part-of-speech tagger: a trainer counts how
//! often each word occurs with each tag, and a tagger assigns each word its
//! most frequent tag, falling back to a default tag for unseen words.
//!
//! ## Examples
//!
//! ```
//! use unigram::{Sentence, Tagger, Trainer};
//!
//! let mut trainer = Trainer::new();
//! trainer
//!     .add_example(&Sentence::from_tagged("the/DET dog/NOUN barks/VERB").unwrap())
//!     .unwrap();
//! trainer
//!     .add_example(&Sentence::from_tagged("the/DET cat/NOUN sleeps/VERB").unwrap())
//!     .unwrap();
//!
//! let tagger = Tagger::new(trainer.train(), "UNK").unwrap();
//!
//! let s = Sentence::from_tokens(["the", "cat", "purrs"]).unwrap();
//! let s = tagger.tag(s);
//! assert_eq!("the/DET cat/NOUN purrs/UNK", s.to_tagged_string().unwrap());
//! ```
//!
//! Tokenization is not part of this crate; implement
//! [`pipeline::Tokenize`] (e.g. with the regex tokenizer of the
//! `unigram_rules` crate) to feed raw text through a [`pipeline::Pipeline`].

pub mod errors;
pub mod pipeline;

mod model;
mod sentence;
mod tagger;
mod trainer;

pub use errors::{Result, UnigramError};
pub use model::UnigramModel;
pub use sentence::Sentence;
pub use tagger::Tagger;
pub use trainer::Trainer;
