//! Emotion lexicon loading and lookup.
//!
//! A lexicon maps words to the set of Plutchik emotions they evoke. The crate
//! ships a built-in English lexicon in the NRC style; external lexicons can be
//! loaded from JSON (`{"word": ["emotion", ...]}`) or from the tab-separated
//! NRC distribution format.

pub mod emotion;

pub use emotion::Emotion;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{EmoGraphError, Result};
use crate::resources;

/// Set of emotions evoked by a single word.
///
/// Few words evoke more than four emotions, so the set stays inline.
pub type EmotionSet = SmallVec<[Emotion; 4]>;

/// A word-to-emotions lexicon
#[derive(Debug, Clone, Default)]
pub struct EmotionLexicon {
    entries: FxHashMap<String, EmotionSet>,
}

impl EmotionLexicon {
    /// The built-in English lexicon shipped with the crate
    pub fn builtin_english() -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(resources::LEXICON_EN)?;
        Self::from_entries(raw)
    }

    /// Load a lexicon from a JSON file mapping words to emotion name lists
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(&content)?;
        Self::from_entries(raw)
    }

    /// Load a lexicon from the NRC tab-separated distribution format.
    ///
    /// Each line reads `word<TAB>emotion<TAB>flag` with flag 0 or 1. The
    /// `positive` and `negative` polarity rows carried by the distribution
    /// are skipped; any other unknown emotion name is an error.
    pub fn from_nrc_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut entries: FxHashMap<String, EmotionSet> = FxHashMap::default();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(word), Some(emotion), Some(flag)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(EmoGraphError::lexicon(format!(
                    "Malformed NRC line {}: expected word<TAB>emotion<TAB>flag",
                    lineno + 1
                )));
            };

            // Polarity rows are not part of the eight-emotion model
            if emotion == "positive" || emotion == "negative" {
                continue;
            }
            if flag != "1" {
                continue;
            }

            let emotion: Emotion = emotion.parse()?;
            let set = entries.entry(word.to_lowercase()).or_default();
            if !set.contains(&emotion) {
                set.push(emotion);
            }
        }

        log::info!("Loaded {} words from NRC lexicon", entries.len());
        Ok(Self { entries })
    }

    fn from_entries(raw: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut entries: FxHashMap<String, EmotionSet> = FxHashMap::default();
        for (word, names) in raw {
            let set = entries.entry(word.to_lowercase()).or_default();
            for name in names {
                let emotion: Emotion = name.parse()?;
                if !set.contains(&emotion) {
                    set.push(emotion);
                }
            }
        }
        Ok(Self { entries })
    }

    /// Emotions evoked by a word, if any. Lookup is case-insensitive.
    #[must_use]
    pub fn emotions_of(&self, word: &str) -> Option<&EmotionSet> {
        if word.chars().any(char::is_uppercase) {
            self.entries.get(&word.to_lowercase())
        } else {
            self.entries.get(word)
        }
    }

    /// Whether the word has at least one emotion association
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.emotions_of(word).is_some()
    }

    /// Number of words in the lexicon
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (word, emotions) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmotionSet)> {
        self.entries.iter().map(|(w, e)| (w.as_str(), e))
    }

    /// Derive a lexicon with every key rewritten by `normalize`, merging the
    /// emotion sets of words that collapse onto the same key.
    ///
    /// Used to align the lexicon with the token normalization of the text
    /// pipeline, so a lemmatized (or stemmed) token still finds its entry.
    #[must_use]
    pub fn map_keys(&self, normalize: impl Fn(&str) -> String) -> Self {
        let mut entries: FxHashMap<String, EmotionSet> = FxHashMap::default();
        for (word, emotions) in &self.entries {
            let key = normalize(word);
            let set = entries.entry(key).or_default();
            for &emotion in emotions {
                if !set.contains(&emotion) {
                    set.push(emotion);
                }
            }
        }
        Self { entries }
    }

    /// Write the lexicon to a JSON file in the same shape `from_json_path` reads
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let raw: BTreeMap<&str, Vec<&str>> = self
            .entries
            .iter()
            .map(|(w, es)| (w.as_str(), es.iter().map(|e| e.as_str()).collect()))
            .collect();
        let json = serde_json::to_string_pretty(&raw)?;
        std::fs::write(path, json)?;
        log::info!("Wrote {} lexicon entries to {}", self.len(), path.display());
        Ok(())
    }
}
