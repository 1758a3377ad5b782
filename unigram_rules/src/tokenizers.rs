//! Tokenizers implementing [`unigram::pipeline::Tokenize`].

mod regex_tokenizer;

pub use regex_tokenizer::RegexTokenizer;
