//! Normalization pipelines and the name registry both transports share.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

use crate::bag::bag_words;
use crate::lemma::lemmatize;
use crate::pos::{self, WordClass};
use crate::tokenize::{is_dropped, tokenize};

/// A pipeline turns a sentence into an ordered list of normalized tokens.
pub type PipelineFn = fn(&str) -> Vec<String>;

/// Registry key of the default pipeline.
pub const DEFAULT_PIPELINE: &str = "nltk_POS_lemmatizer";

static PIPELINES: Lazy<HashMap<&'static str, PipelineFn>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, PipelineFn> = HashMap::new();
    m.insert("nltk_stemmer", stemmer);
    m.insert("nltk_no_POS_lemmatizer", no_pos_lemmatizer);
    m.insert(DEFAULT_PIPELINE, pos_lemmatizer);
    m
});

/// Look up a pipeline by name. Unknown or absent names silently fall back
/// to the default POS-aware lemmatizer.
pub fn resolve(name: Option<&str>) -> PipelineFn {
    name.and_then(|n| PIPELINES.get(n))
        .copied()
        .unwrap_or(pos_lemmatizer)
}

/// Snowball-stem each surviving token. Casing is left untouched.
pub fn stemmer(sentence: &str) -> Vec<String> {
    let stemmer = Stemmer::create(Algorithm::English);
    tokenize(sentence)
        .into_iter()
        .filter(|t| !is_dropped(t))
        .map(|t| stemmer.stem(&t).into_owned())
        .collect()
}

/// Lemmatize each surviving token as a noun, without grammatical context.
pub fn no_pos_lemmatizer(sentence: &str) -> Vec<String> {
    tokenize(sentence)
        .into_iter()
        .filter(|t| !is_dropped(t))
        .map(|t| lemmatize(&t.to_lowercase(), WordClass::Noun))
        .collect()
}

/// Tag each surviving token and lemmatize it under its word class.
pub fn pos_lemmatizer(sentence: &str) -> Vec<String> {
    let tokens: Vec<String> = tokenize(sentence)
        .into_iter()
        .filter(|t| !is_dropped(t))
        .collect();
    pos::pos_tag(&tokens)
        .into_iter()
        .map(|(token, tag)| lemmatize(&token, WordClass::from_tag(tag)))
        .collect()
}

/// Result of one preprocessing request, shared by both transports.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NlpResponse {
    pub processed_words: Vec<String>,
    pub bag: Vec<u8>,
}

/// Run the named pipeline over a sentence and encode the result against
/// the vocabulary. Everything is computed fresh per call.
pub fn apply(sentence: &str, known_words: &[String], pipeline: Option<&str>) -> NlpResponse {
    let nlp = resolve(pipeline);
    let processed_words = nlp(sentence);
    let bag = bag_words(&processed_words, known_words);
    NlpResponse {
        processed_words,
        bag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pos_lemmatizer_reduces_and_lowercases() {
        let out = pos_lemmatizer("The cats are running.");
        assert_eq!(out, words(&["the", "cat", "be", "run"]));
    }

    #[test]
    fn no_pos_lemmatizer_treats_everything_as_nouns() {
        // without grammatical context "running" stays inflected
        let out = no_pos_lemmatizer("The cats are running.");
        assert_eq!(out, words(&["the", "cat", "are", "running"]));
    }

    #[test]
    fn stemmer_conflates_inflections() {
        let out = stemmer("jumping jumps jumped");
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|s| s == &out[0]), "stems differ: {out:?}");
    }

    #[test]
    fn stemmer_keeps_casing() {
        assert_eq!(stemmer("Dogs"), words(&["Dog"]));
    }

    #[test]
    fn punctuation_tokens_are_dropped_by_every_pipeline() {
        for nlp in [stemmer as PipelineFn, no_pos_lemmatizer, pos_lemmatizer] {
            let out = nlp("wait , stop . go ? now !");
            assert!(
                !out.iter().any(|t| ["?", "!", ",", "."].contains(&t.as_str())),
                "punctuation leaked: {out:?}"
            );
        }
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let sentence = "The cats are running.";
        let default = resolve(None)(sentence);
        assert_eq!(resolve(Some("no_such_pipeline"))(sentence), default);
        assert_eq!(resolve(Some(DEFAULT_PIPELINE))(sentence), default);
    }

    #[test]
    fn apply_matches_the_documented_example() {
        let vocab = words(&["cat", "run", "dog"]);
        let out = apply("The cats are running.", &vocab, Some(DEFAULT_PIPELINE));
        assert!(out.processed_words.contains(&"cat".to_string()));
        assert!(out.processed_words.contains(&"run".to_string()));
        assert_eq!(out.bag, vec![1, 1, 0]);
    }

    #[test]
    fn apply_is_idempotent() {
        let vocab = words(&["jump"]);
        let a = apply("jumping jumps jumped", &vocab, Some("nltk_stemmer"));
        let b = apply("jumping jumps jumped", &vocab, Some("nltk_stemmer"));
        assert_eq!(a, b);
    }

    #[test]
    fn bag_length_tracks_vocabulary_for_any_sentence() {
        for sentence in ["", "one", "a few more words here", "?!"] {
            let vocab = words(&["alpha", "beta"]);
            assert_eq!(apply(sentence, &vocab, None).bag.len(), 2);
        }
    }
}
