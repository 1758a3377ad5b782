use std::fs::File;
use std::io::{prelude::*, stderr, stdin, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use unigram::pipeline::{Document, Pipeline, TagStage, TokenizeStage};
use unigram::{Sentence, Tagger, Trainer, UnigramError};
use unigram_rules::{
    string_filters::LowercaseFilter, tokenizers::RegexTokenizer, StringFilter,
};

#[derive(Parser, Debug)]
#[command(about = "A program to tag parts of speech with a unigram model.")]
struct Args {
    /// A tagged training corpus (word/tag pairs separated by whitespaces)
    #[arg(long, required = true)]
    tagged: Vec<PathBuf>,

    /// The tag to assign to words not seen during training
    #[arg(long, default_value = "NN")]
    default_tag: String,

    /// The regex rule set used for tokenization
    #[arg(long)]
    pattern: Option<String>,

    /// Do not lowercase training data and input text.
    #[arg(long)]
    no_norm: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let lowercase_filter = LowercaseFilter::new();

    eprintln!("Loading dataset...");
    let mut trainer = Trainer::new();
    let mut n_sents = 0;
    for path in args.tagged {
        eprintln!("Loading {path:?} ...");
        let f = File::open(path)?;
        let f = BufReader::new(f);
        for (i, line) in f.lines().enumerate() {
            if i % 10000 == 0 {
                eprint!("# of sentences: {i}\r");
                stderr().flush()?;
            }
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let s = Sentence::from_tagged(&line)?;
            let s = if args.no_norm {
                s
            } else {
                let mut new_s =
                    Sentence::from_tokens(s.words().iter().map(|w| lowercase_filter.filter(w)))?;
                new_s.tags_mut().clone_from_slice(s.tags());
                new_s
            };
            trainer.add_example(&s)?;
            n_sents += 1;
        }
        eprintln!("# of sentences: {n_sents}");
    }
    eprintln!("# of words: {}", trainer.n_words());

    let pattern = args
        .pattern
        .as_deref()
        .unwrap_or_else(|| RegexTokenizer::word_pattern());
    let tokenizer = RegexTokenizer::new(pattern)?;
    let tagger = Tagger::new(trainer.train(), &args.default_tag)?;
    let mut pipeline = Pipeline::new();
    pipeline.push(Box::new(TokenizeStage::new(tokenizer)));
    pipeline.push(Box::new(TagStage::new(tagger)));

    eprintln!("Start tagging");
    let mut n_tokens = 0;
    let start = Instant::now();
    for line in stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            println!();
            continue;
        }
        let line = if args.no_norm {
            line
        } else {
            lowercase_filter.filter(line)
        };
        let sentence = match pipeline.run(Document::new(line)) {
            Ok(doc) => doc.into_sentence(),
            // the rule set matched nothing in this line
            Err(UnigramError::InvalidPipeline(_)) => None,
            Err(e) => return Err(e.into()),
        };
        match sentence {
            Some(s) => {
                n_tokens += s.len();
                println!("{}", s.to_tagged_string()?);
            }
            None => println!(),
        }
    }
    let duration = start.elapsed();
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [tokens/sec]",
        n_tokens as f64 / duration.as_secs_f64()
    );

    Ok(())
}
