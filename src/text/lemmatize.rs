//! Rule-based English lemmatizer.
//!
//! WordNet-morphy style: irregular forms come from an exception table, regular
//! inflections from suffix substitution rules whose candidates are validated
//! against a known vocabulary. Tokens that resolve to nothing known fall back
//! to a conservative suffix strip, or are left untouched.

use rustc_hash::{FxHashMap, FxHashSet};

/// Suffix substitution rules, tried in order
const RULES: [(&str, &str); 14] = [
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("ves", "f"),
    ("s", ""),
    ("ied", "y"),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
    ("est", ""),
];

/// English lemmatizer with exception table and vocabulary validation
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: FxHashMap<String, String>,
    vocabulary: FxHashSet<String>,
}

impl Lemmatizer {
    /// Create a lemmatizer from an irregular-form table and a vocabulary of
    /// known lemmas (lexicon words, stopwords, relation words)
    #[must_use]
    pub fn new(exceptions: FxHashMap<String, String>, vocabulary: FxHashSet<String>) -> Self {
        Self {
            exceptions,
            vocabulary,
        }
    }

    /// Add words to the vocabulary used for candidate validation
    pub fn extend_vocabulary(&mut self, words: impl IntoIterator<Item = String>) {
        self.vocabulary.extend(words);
    }

    /// Lemmatize a single lowercase token
    #[must_use]
    pub fn lemma(&self, word: &str) -> String {
        // Possessives fold onto the base noun
        let word = word.strip_suffix("'s").unwrap_or(word);

        if let Some(base) = self.exceptions.get(word) {
            return base.clone();
        }
        if self.vocabulary.contains(word) {
            return word.to_string();
        }

        // Try each rule and keep the first candidate the vocabulary knows
        for (suffix, replacement) in RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let candidate = format!("{stem}{replacement}");
                if self.vocabulary.contains(&candidate) {
                    return candidate;
                }
                // Doubled final consonant: hopping -> hop
                let bytes = stem.as_bytes();
                if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
                    let dedoubled = &stem[..stem.len() - 1];
                    if self.vocabulary.contains(dedoubled) {
                        return dedoubled.to_string();
                    }
                }
            }
        }

        fallback(word)
    }
}

/// Conservative strip for words outside the vocabulary
fn fallback(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("s") {
        if stem.len() >= 3
            && !stem.ends_with('s')
            && !stem.ends_with('u')
            && !stem.ends_with('i')
        {
            return stem.to_string();
        }
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        let exceptions: FxHashMap<String, String> = [
            ("went", "go"),
            ("children", "child"),
            ("felt", "feel"),
            ("was", "be"),
            ("dying", "die"),
        ]
        .into_iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
        let vocabulary: FxHashSet<String> = [
            "go", "child", "feel", "be", "cry", "love", "fear", "happy", "die", "smile", "hop",
            "during", "wolf",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        Lemmatizer::new(exceptions, vocabulary)
    }

    #[test]
    fn test_exceptions_win() {
        let l = lemmatizer();
        assert_eq!(l.lemma("went"), "go");
        assert_eq!(l.lemma("children"), "child");
        assert_eq!(l.lemma("was"), "be");
    }

    #[test]
    fn test_vocabulary_words_pass_through() {
        let l = lemmatizer();
        assert_eq!(l.lemma("happy"), "happy");
        assert_eq!(l.lemma("during"), "during");
    }

    #[test]
    fn test_rule_candidates_validated() {
        let l = lemmatizer();
        assert_eq!(l.lemma("cries"), "cry");
        assert_eq!(l.lemma("cried"), "cry");
        assert_eq!(l.lemma("crying"), "cry");
        assert_eq!(l.lemma("loved"), "love");
        assert_eq!(l.lemma("loves"), "love");
        assert_eq!(l.lemma("loving"), "love");
        assert_eq!(l.lemma("fears"), "fear");
        assert_eq!(l.lemma("dying"), "die");
        assert_eq!(l.lemma("smiled"), "smile");
        assert_eq!(l.lemma("hopping"), "hop");
        assert_eq!(l.lemma("wolves"), "wolf");
    }

    #[test]
    fn test_possessive_folds() {
        let l = lemmatizer();
        assert_eq!(l.lemma("child's"), "child");
    }

    #[test]
    fn test_fallback_strips_plain_plural() {
        let l = lemmatizer();
        assert_eq!(l.lemma("tables"), "table");
        assert_eq!(l.lemma("glass"), "glass");
    }
}
