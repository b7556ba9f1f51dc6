//! Embedded language resources.
//!
//! All default English data ships inside the binary so the library works
//! without any download step. Each loader parses the embedded JSON on demand;
//! callers cache the result in their own structures.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::Result;

/// Built-in English emotion lexicon, NRC style
pub const LEXICON_EN: &str = include_str!("../../assets/lexicon_en.json");

/// Emoji to English gloss words
pub const EMOJIS_EN: &str = include_str!("../../assets/emojis_en.json");

/// Word to antonym, used for negation flipping
pub const ANTONYMS_EN: &str = include_str!("../../assets/antonyms_en.json");

/// Multiword expressions collapsed to a single token
pub const IDIOMS_EN: &str = include_str!("../../assets/idioms_en.json");

/// Synonym groups and hypernym links for semantic enrichment
pub const SEMANTIC_RELATIONS_EN: &str = include_str!("../../assets/semantic_relations_en.json");

/// Irregular inflections for the lemmatizer
pub const LEMMA_EXCEPTIONS_EN: &str = include_str!("../../assets/lemma_exceptions_en.json");

/// English function words dropped from forma mentis networks
pub const STOPWORDS_EN: &str = include_str!("../../assets/stopwords_en.txt");

/// Negations and pronouns kept in forma mentis networks regardless of class
pub const KEEPWORDS_EN: &str = include_str!("../../assets/keepwords_en.txt");

/// Load the emoji-to-gloss table
pub fn load_emojis() -> Result<FxHashMap<String, Vec<String>>> {
    let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(EMOJIS_EN)?;
    Ok(raw.into_iter().collect())
}

/// Load the antonym table
pub fn load_antonyms() -> Result<FxHashMap<String, String>> {
    let raw: BTreeMap<String, String> = serde_json::from_str(ANTONYMS_EN)?;
    Ok(raw.into_iter().collect())
}

/// Load the idiomatic token table (multiword expression -> merged token)
pub fn load_idioms() -> Result<FxHashMap<String, String>> {
    let raw: BTreeMap<String, String> = serde_json::from_str(IDIOMS_EN)?;
    Ok(raw.into_iter().collect())
}

/// Load the irregular-inflection table for the lemmatizer
pub fn load_lemma_exceptions() -> Result<FxHashMap<String, String>> {
    let raw: BTreeMap<String, String> = serde_json::from_str(LEMMA_EXCEPTIONS_EN)?;
    Ok(raw.into_iter().collect())
}

/// Load the default stopword set
#[must_use]
pub fn load_stopwords() -> FxHashSet<String> {
    STOPWORDS_EN
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Load the default keepword set (negations and pronouns)
#[must_use]
pub fn load_keepwords() -> FxHashSet<String> {
    KEEPWORDS_EN
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Semantic relations used for network enrichment
#[derive(Debug, Clone, Deserialize)]
pub struct SemanticRelations {
    /// Groups of mutually synonymous words
    pub synonyms: Vec<Vec<String>>,
    /// Word to its hypernyms
    pub hypernyms: BTreeMap<String, Vec<String>>,
}

impl SemanticRelations {
    /// Load the embedded English relations table
    pub fn builtin_english() -> Result<Self> {
        Ok(serde_json::from_str(SEMANTIC_RELATIONS_EN)?)
    }

    /// Words synonymous with `word`, excluding the word itself
    #[must_use]
    pub fn synonyms_of(&self, word: &str) -> Vec<&str> {
        let mut found = Vec::new();
        for group in &self.synonyms {
            if group.iter().any(|w| w == word) {
                found.extend(group.iter().map(String::as_str).filter(|w| *w != word));
            }
        }
        found
    }

    /// Hypernyms of `word`, if any
    #[must_use]
    pub fn hypernyms_of(&self, word: &str) -> &[String] {
        self.hypernyms.get(word).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_resources_parse() {
        assert!(!load_emojis().unwrap().is_empty());
        assert!(!load_antonyms().unwrap().is_empty());
        assert!(!load_idioms().unwrap().is_empty());
        assert!(!load_lemma_exceptions().unwrap().is_empty());
        assert!(load_stopwords().contains("the"));
        assert!(load_keepwords().contains("not"));
    }

    #[test]
    fn test_semantic_relations_lookup() {
        let relations = SemanticRelations::builtin_english().unwrap();
        let syns = relations.synonyms_of("happy");
        assert!(syns.contains(&"glad"));
        assert!(!syns.contains(&"happy"));
        assert!(
            relations
                .hypernyms_of("dog")
                .iter()
                .any(|h| h == "animal")
        );
        assert!(relations.hypernyms_of("zzz").is_empty());
    }
}
