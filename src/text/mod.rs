//! Text processing pipeline.
//!
//! Turns raw text into normalized tokens: emoji glossing, sentence splitting,
//! tokenization, idiomatic-token merging, then lemmatization or stemming.

pub mod lemmatize;
pub mod stem;
pub mod tokenize;

pub use lemmatize::Lemmatizer;
pub use stem::PorterStemmer;

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Result;
use crate::resources;

/// How tokens are reduced to lexicon keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenNormalization {
    /// Rule-based lemmatization (default)
    #[default]
    Lemmatization,
    /// Porter stemming
    Stemming,
}

/// Text-to-token pipeline for one language
#[derive(Debug, Clone)]
pub struct TextPipeline {
    normalization: TokenNormalization,
    convert_emojis: bool,
    pattern: Regex,
    lemmatizer: Lemmatizer,
    stemmer: PorterStemmer,
    emojis: FxHashMap<String, Vec<String>>,
    idioms: FxHashMap<String, String>,
}

impl TextPipeline {
    /// Build an English pipeline. `vocabulary` seeds lemma validation and
    /// normally holds the lexicon's words plus function words.
    pub fn english(
        normalization: TokenNormalization,
        vocabulary: FxHashSet<String>,
    ) -> Result<Self> {
        let exceptions = resources::load_lemma_exceptions()?;
        let mut vocabulary = vocabulary;
        // Lemma targets and function words must validate as lemmas themselves
        vocabulary.extend(exceptions.values().cloned());
        vocabulary.extend(resources::load_stopwords());
        vocabulary.extend(resources::load_keepwords());

        Ok(Self {
            normalization,
            convert_emojis: true,
            pattern: tokenize::word_pattern(),
            lemmatizer: Lemmatizer::new(exceptions, vocabulary),
            stemmer: PorterStemmer::new(),
            emojis: resources::load_emojis()?,
            idioms: resources::load_idioms()?,
        })
    }

    /// Current normalization mode
    #[must_use]
    pub const fn normalization(&self) -> TokenNormalization {
        self.normalization
    }

    /// Switch between lemmatization and stemming
    pub fn set_normalization(&mut self, normalization: TokenNormalization) {
        self.normalization = normalization;
    }

    /// Whether emoji are glossed into words before tokenization
    pub fn set_convert_emojis(&mut self, convert: bool) {
        self.convert_emojis = convert;
    }

    /// Normalize a single word with the active mode
    #[must_use]
    pub fn normalize_word(&self, word: &str) -> String {
        let word = word.to_lowercase();
        match self.normalization {
            TokenNormalization::Lemmatization => self.lemmatizer.lemma(&word),
            TokenNormalization::Stemming => self.stemmer.stem(&word),
        }
    }

    /// Replace known emoji with their gloss words
    #[must_use]
    pub fn gloss_emojis(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            // Prefer the two-char form with a variation selector
            let glossed = if i + 1 < chars.len() {
                let pair: String = chars[i..=i + 1].iter().collect();
                self.emojis.get(&pair).map(|words| (words, 2))
            } else {
                None
            };
            let glossed =
                glossed.or_else(|| self.emojis.get(&chars[i].to_string()).map(|w| (w, 1)));

            if let Some((words, consumed)) = glossed {
                out.push(' ');
                out.push_str(&words.join(" "));
                out.push(' ');
                i += consumed;
            } else {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }

    /// Collapse known multiword expressions into single underscore tokens
    #[must_use]
    pub fn merge_idioms(&self, tokens: Vec<String>) -> Vec<String> {
        if self.idioms.is_empty() {
            return tokens;
        }
        let mut merged = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            let mut matched = false;
            // Longest expression first
            for window in (2..=3).rev() {
                if i + window > tokens.len() {
                    continue;
                }
                let phrase = tokens[i..i + window].join(" ");
                if let Some(token) = self.idioms.get(&phrase) {
                    merged.push(token.clone());
                    i += window;
                    matched = true;
                    break;
                }
            }
            if !matched {
                merged.push(tokens[i].clone());
                i += 1;
            }
        }
        merged
    }

    /// Tokenize one sentence without normalizing
    #[must_use]
    pub fn raw_tokens(&self, sentence: &str) -> Vec<String> {
        self.merge_idioms(tokenize::tokenize(sentence, &self.pattern))
    }

    /// Process text into normalized tokens, sentence boundaries kept
    #[must_use]
    pub fn process_sentences(&self, text: &str) -> Vec<Vec<String>> {
        let text = if self.convert_emojis {
            self.gloss_emojis(text)
        } else {
            text.to_string()
        };
        tokenize::split_sentences(&text)
            .iter()
            .map(|sentence| {
                self.raw_tokens(sentence)
                    .iter()
                    .map(|token| self.normalize_word(token))
                    .collect()
            })
            .collect()
    }

    /// Process text into one flat list of normalized tokens
    #[must_use]
    pub fn process(&self, text: &str) -> Vec<String> {
        self.process_sentences(text).into_iter().flatten().collect()
    }
}
