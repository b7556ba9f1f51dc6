//! Forma mentis network construction.
//!
//! Per sentence, tokens are normalized, negations are folded into antonyms,
//! function words are dropped, and every surviving pair within `max_distance`
//! positions of each other is linked. Synonym and hypernym layers can then be
//! added over the resulting vertex set.

use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::network::{Edge, EdgeKind, FormamentisNetwork, ordered};
use crate::resources::{self, SemanticRelations};
use crate::text::TextPipeline;

/// Negation tokens that flip the following word to its antonym
const NEGATIONS: [&str; 8] = [
    "not", "no", "never", "nothing", "none", "neither", "nor", "cannot",
];

/// Semantic layers that can enrich a network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    /// Link synonymous vertices
    Synonyms,
    /// Link vertices to their hypernyms
    Hypernyms,
}

/// Configurable builder for forma mentis networks
#[derive(Debug, Clone)]
pub struct FormamentisBuilder {
    target_word: Option<String>,
    keepwords: FxHashSet<String>,
    stopwords: FxHashSet<String>,
    max_distance: usize,
    enrichment: Vec<Enrichment>,
    multiplex: bool,
}

impl Default for FormamentisBuilder {
    fn default() -> Self {
        Self {
            target_word: None,
            keepwords: FxHashSet::default(),
            stopwords: FxHashSet::default(),
            max_distance: 3,
            enrichment: Vec::new(),
            multiplex: false,
        }
    }
}

impl FormamentisBuilder {
    /// Start from the defaults: distance 3, no enrichment, simple network
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the result to the semantic frame of one word
    #[must_use]
    pub fn target_word(mut self, word: impl Into<String>) -> Self {
        self.target_word = Some(word.into());
        self
    }

    /// Words kept regardless of the stopword list
    #[must_use]
    pub fn keepwords(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.keepwords.extend(words.into_iter().map(|w| w.to_lowercase()));
        self
    }

    /// Words dropped even if kept by default; a word listed as both a
    /// keepword and a stopword is dropped
    #[must_use]
    pub fn stopwords(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.stopwords.extend(words.into_iter().map(|w| w.to_lowercase()));
        self
    }

    /// Maximum token distance at which two words are linked
    #[must_use]
    pub const fn max_distance(mut self, distance: usize) -> Self {
        self.max_distance = distance;
        self
    }

    /// Add semantic layers over the network vocabulary
    #[must_use]
    pub fn enrichment(mut self, layers: impl IntoIterator<Item = Enrichment>) -> Self {
        self.enrichment.extend(layers);
        self
    }

    /// Keep each edge kind in its own layer
    #[must_use]
    pub const fn multiplex(mut self, multiplex: bool) -> Self {
        self.multiplex = multiplex;
        self
    }

    /// Build the network for `text`
    pub fn build(&self, text: &str, pipeline: &TextPipeline) -> Result<FormamentisNetwork> {
        let antonyms = resources::load_antonyms()?;
        let default_keep = resources::load_keepwords();
        let default_stop = resources::load_stopwords();

        let mut syntactic: Vec<Edge> = Vec::new();
        let mut seen: FxHashSet<(String, String)> = FxHashSet::default();

        for sentence in pipeline.process_sentences(text) {
            // Fold "not good" into "bad" before filtering
            let mut words: Vec<String> = Vec::with_capacity(sentence.len());
            let mut i = 0;
            while i < sentence.len() {
                let word = &sentence[i];
                if NEGATIONS.contains(&word.as_str()) && i + 1 < sentence.len() {
                    if let Some(antonym) = antonyms.get(&sentence[i + 1]) {
                        words.push(antonym.clone());
                        i += 2;
                        continue;
                    }
                }
                words.push(word.clone());
                i += 1;
            }

            // Filter to content words, remembering original positions so the
            // distance window reflects the text, not the filtered list
            let kept: Vec<(usize, &String)> = words
                .iter()
                .enumerate()
                .filter(|(_, word)| self.keeps(word, &default_keep, &default_stop))
                .collect();

            for ((pos_a, word_a), (pos_b, word_b)) in kept.iter().tuple_combinations() {
                if pos_b - pos_a > self.max_distance || word_a == word_b {
                    continue;
                }
                let key = ordered(word_a, word_b);
                if seen.insert(key.clone()) {
                    syntactic.push(key);
                }
            }
        }

        let mut network = if self.enrichment.is_empty() {
            if self.multiplex {
                let mut layers = BTreeMap::new();
                layers.insert(EdgeKind::Syntactic, syntactic);
                FormamentisNetwork::from_layers(layers)
            } else {
                FormamentisNetwork::from_edges(syntactic)
            }
        } else {
            self.enrich(syntactic)?
        };

        if let Some(target) = &self.target_word {
            network = network.neighborhood(&target.to_lowercase());
        }

        log::debug!(
            "Built forma mentis network: {} vertices, {} edges",
            network.vertices.len(),
            network.edges.len()
        );
        Ok(network)
    }

    /// Stopword policy: caller stopwords always drop, caller keepwords then
    /// the built-in negation/pronoun list keep, default stopwords drop,
    /// anything else is a content word and stays.
    fn keeps(
        &self,
        word: &str,
        default_keep: &FxHashSet<String>,
        default_stop: &FxHashSet<String>,
    ) -> bool {
        if self.stopwords.contains(word) {
            return false;
        }
        if self.keepwords.contains(word) || default_keep.contains(word) {
            return true;
        }
        !default_stop.contains(word)
    }

    /// Add the requested semantic layers over the syntactic vocabulary
    fn enrich(&self, syntactic: Vec<Edge>) -> Result<FormamentisNetwork> {
        let relations = SemanticRelations::builtin_english()?;
        let vocabulary: FxHashSet<&str> = syntactic
            .iter()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
            .collect();

        let mut synonym_edges: Vec<Edge> = Vec::new();
        let mut hypernym_edges: Vec<Edge> = Vec::new();
        let mut seen: FxHashSet<(String, String)> = FxHashSet::default();

        for &word in &vocabulary {
            if self.enrichment.contains(&Enrichment::Synonyms) {
                for synonym in relations.synonyms_of(word) {
                    if vocabulary.contains(synonym) {
                        let key = ordered(word, synonym);
                        if seen.insert(key.clone()) {
                            synonym_edges.push(key);
                        }
                    }
                }
            }
            if self.enrichment.contains(&Enrichment::Hypernyms) {
                for hypernym in relations.hypernyms_of(word) {
                    if vocabulary.contains(hypernym.as_str()) && hypernym != word {
                        let key = ordered(word, hypernym);
                        if seen.insert(key.clone()) {
                            hypernym_edges.push(key);
                        }
                    }
                }
            }
        }

        if self.multiplex {
            let mut layers = BTreeMap::new();
            layers.insert(EdgeKind::Syntactic, syntactic);
            if self.enrichment.contains(&Enrichment::Synonyms) {
                layers.insert(EdgeKind::Synonym, synonym_edges);
            }
            if self.enrichment.contains(&Enrichment::Hypernyms) {
                layers.insert(EdgeKind::Hypernym, hypernym_edges);
            }
            Ok(FormamentisNetwork::from_layers(layers))
        } else {
            let mut edges = syntactic;
            let existing: FxHashSet<(String, String)> = edges.iter().cloned().collect();
            for edge in synonym_edges.into_iter().chain(hypernym_edges) {
                if !existing.contains(&edge) {
                    edges.push(edge);
                }
            }
            Ok(FormamentisNetwork::from_edges(edges))
        }
    }
}
