use std::fs::File;
use std::io::{prelude::*, stderr, stdin, BufReader};
use std::path::PathBuf;

use clap::Parser;
use unigram::{Sentence, Tagger, Trainer};
use unigram_rules::{string_filters::LowercaseFilter, StringFilter};

#[derive(Parser, Debug)]
#[command(about = "A program to evaluate the accuracy of the unigram tagger.")]
struct Args {
    /// A tagged training corpus (word/tag pairs separated by whitespaces)
    #[arg(long, required = true)]
    tagged: Vec<PathBuf>,

    /// The tag to assign to words not seen during training
    #[arg(long, default_value = "NN")]
    default_tag: String,

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

    let tagger = Tagger::new(trainer.train(), &args.default_tag)?;

    eprintln!("Start evaluation");
    let mut n_cor_known = 0;
    let mut n_known = 0;
    let mut n_cor_unknown = 0;
    let mut n_unknown = 0;
    for line in stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let reference = Sentence::from_tagged(&line)?;
        let reference = if args.no_norm {
            reference
        } else {
            let mut new_s = Sentence::from_tokens(
                reference.words().iter().map(|w| lowercase_filter.filter(w)),
            )?;
            new_s.tags_mut().clone_from_slice(reference.tags());
            new_s
        };
        for (word, reference_tag) in reference.iter_pairs() {
            if let Some(reference_tag) = reference_tag {
                let correct = tagger.tag_word(word) == reference_tag;
                if tagger.model().best_tag(word).is_some() {
                    n_known += 1;
                    if correct {
                        n_cor_known += 1;
                    }
                } else {
                    n_unknown += 1;
                    if correct {
                        n_cor_unknown += 1;
                    }
                }
            }
        }
    }

    let n_total = n_known + n_unknown;
    let n_cor = n_cor_known + n_cor_unknown;
    println!("Accuracy: {}", n_cor as f64 / n_total as f64);
    println!("Known word accuracy: {}", n_cor_known as f64 / n_known as f64);
    println!(
        "Unknown word accuracy: {}",
        n_cor_unknown as f64 / n_unknown as f64
    );
    println!(
        "Tokens: {}, Known: {}, Unknown: {}",
        n_total, n_known, n_unknown
    );

    Ok(())
}
