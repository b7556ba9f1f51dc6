//! Emotion counting over texts and networks.

use std::collections::BTreeMap;
use std::fmt;

use crate::lexicon::{Emotion, EmotionLexicon};
use crate::network::FormamentisNetwork;
use crate::text::TextPipeline;

/// How raw emotion counts are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationStrategy {
    /// Raw counts
    #[default]
    None,
    /// Divide by the total number of tokens
    TextLength,
    /// Divide by the number of tokens carrying at least one emotion
    EmotionWords,
}

/// Something emotions can be counted over
#[derive(Debug, Clone, Copy)]
pub enum ScoreInput<'a> {
    /// Raw text, tokenized and normalized by the pipeline
    Text(&'a str),
    /// A forma mentis network, scored over its vertices
    Network(&'a FormamentisNetwork),
}

impl<'a> From<&'a str> for ScoreInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a FormamentisNetwork> for ScoreInput<'a> {
    fn from(network: &'a FormamentisNetwork) -> Self {
        Self::Network(network)
    }
}

/// Per-emotion scores, with the matched words when requested
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScores {
    values: [f64; 8],
    words: Option<BTreeMap<Emotion, Vec<String>>>,
}

impl EmotionScores {
    /// All-zero scores
    #[must_use]
    pub fn zero() -> Self {
        Self {
            values: [0.0; 8],
            words: None,
        }
    }

    /// Build from a raw value array in [`Emotion::ALL`] order
    #[must_use]
    pub const fn from_values(values: [f64; 8]) -> Self {
        Self {
            values,
            words: None,
        }
    }

    /// Score for one emotion
    #[must_use]
    pub fn get(&self, emotion: Emotion) -> f64 {
        self.values[emotion.index()]
    }

    /// Iterate (emotion, score) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(|&e| (e, self.values[e.index()]))
    }

    /// The words counted for each emotion, if collected
    #[must_use]
    pub const fn words(&self) -> Option<&BTreeMap<Emotion, Vec<String>>> {
        self.words.as_ref()
    }

    /// Sum of all eight scores
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// The emotion with the highest score, if any score is positive.
    ///
    /// Ties resolve to the emotion that comes first in [`Emotion::ALL`].
    #[must_use]
    pub fn dominant(&self) -> Option<Emotion> {
        let (best, score) = Emotion::ALL
            .iter()
            .map(|&e| (e, self.values[e.index()]))
            .fold((Emotion::Anger, f64::NEG_INFINITY), |acc, cur| {
                if cur.1 > acc.1 { cur } else { acc }
            });
        (score > 0.0).then_some(best)
    }
}

impl fmt::Display for EmotionScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (emotion, score) in self.iter() {
            writeln!(f, "{emotion:>13}  {score:.4}")?;
        }
        Ok(())
    }
}

/// Count emotions over the input.
///
/// Every token (or vertex) that the lexicon knows contributes one count to
/// each emotion it evokes. Tokens from text are normalized by the pipeline
/// first; network vertices are assumed normalized already.
#[must_use]
pub fn count_emotions(
    input: ScoreInput<'_>,
    lexicon: &EmotionLexicon,
    pipeline: &TextPipeline,
    strategy: NormalizationStrategy,
    collect_words: bool,
) -> EmotionScores {
    let tokens: Vec<String> = match input {
        ScoreInput::Text(text) => pipeline.process(text),
        ScoreInput::Network(network) => network.vertices.clone(),
    };

    let mut values = [0.0_f64; 8];
    let mut words: BTreeMap<Emotion, Vec<String>> = BTreeMap::new();
    let mut emotion_tokens = 0_usize;

    for token in &tokens {
        let Some(emotions) = lexicon.emotions_of(token) else {
            continue;
        };
        emotion_tokens += 1;
        for &emotion in emotions {
            values[emotion.index()] += 1.0;
            if collect_words {
                words.entry(emotion).or_default().push(token.clone());
            }
        }
    }

    let divisor = match strategy {
        NormalizationStrategy::None => None,
        NormalizationStrategy::TextLength => Some(tokens.len()),
        NormalizationStrategy::EmotionWords => Some(emotion_tokens),
    };
    if let Some(divisor) = divisor {
        if divisor > 0 {
            for value in &mut values {
                *value /= divisor as f64;
            }
        }
    }

    EmotionScores {
        values,
        words: collect_words.then_some(words),
    }
}

/// Raw per-emotion counts and the number of emotion-bearing tokens, the
/// shape the z-score machinery consumes
#[must_use]
pub fn raw_counts(
    input: ScoreInput<'_>,
    lexicon: &EmotionLexicon,
    pipeline: &TextPipeline,
) -> ([u64; 8], u64) {
    let tokens: Vec<String> = match input {
        ScoreInput::Text(text) => pipeline.process(text),
        ScoreInput::Network(network) => network.vertices.clone(),
    };

    let mut counts = [0_u64; 8];
    let mut emotion_tokens = 0_u64;
    for token in &tokens {
        if let Some(emotions) = lexicon.emotions_of(token) {
            emotion_tokens += 1;
            for &emotion in emotions {
                counts[emotion.index()] += 1;
            }
        }
    }
    (counts, emotion_tokens)
}
