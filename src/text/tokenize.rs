//! Sentence splitting and word tokenization.

use regex::Regex;

/// Abbreviations that do not terminate a sentence
const ABBREVIATIONS: [&str; 12] = [
    "mr", "mrs", "ms", "dr", "prof", "st", "etc", "vs", "jr", "sr", "inc", "fig",
];

/// Compile the word token pattern: alphabetic runs with inner apostrophes,
/// hyphens or underscores (underscores carry merged idioms through)
pub fn word_pattern() -> Regex {
    // Fixed pattern, cannot fail to compile
    Regex::new(r"[A-Za-z](?:[A-Za-z'_-]*[A-Za-z])?").unwrap()
}

/// Split text into sentences on `.`, `!` and `?`, guarding common
/// abbreviations and single-initial periods
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        match ch {
            '.' => {
                if terminates_sentence(&current) {
                    push_sentence(&mut sentences, &mut current);
                } else {
                    current.push(ch);
                }
            }
            '!' | '?' => push_sentence(&mut sentences, &mut current),
            _ => current.push(ch),
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

/// A period ends the sentence unless the word before it is an abbreviation
/// or a bare initial
fn terminates_sentence(current: &str) -> bool {
    let last_word: String = current
        .chars()
        .rev()
        .take_while(|c| c.is_alphabetic())
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    if last_word.len() == 1 {
        return false;
    }
    !ABBREVIATIONS.contains(&last_word.to_lowercase().as_str())
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

/// Extract lowercase word tokens from a sentence
#[must_use]
pub fn tokenize(sentence: &str, pattern: &Regex) -> Vec<String> {
    pattern
        .find_iter(sentence)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
