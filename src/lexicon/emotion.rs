//! The Plutchik emotion model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EmoGraphError;

/// One of the eight basic emotions of Plutchik's model.
///
/// The ordering matches the canonical wheel layout and is relied on by the
/// renderer: opposite emotions sit four positions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Anger
    Anger,
    /// Trust
    Trust,
    /// Surprise
    Surprise,
    /// Disgust
    Disgust,
    /// Joy
    Joy,
    /// Sadness
    Sadness,
    /// Fear
    Fear,
    /// Anticipation
    Anticipation,
}

impl Emotion {
    /// All eight emotions, in canonical order
    pub const ALL: [Self; 8] = [
        Self::Anger,
        Self::Trust,
        Self::Surprise,
        Self::Disgust,
        Self::Joy,
        Self::Sadness,
        Self::Fear,
        Self::Anticipation,
    ];

    /// Lowercase name of the emotion
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anger => "anger",
            Self::Trust => "trust",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Fear => "fear",
            Self::Anticipation => "anticipation",
        }
    }

    /// Index of the emotion in [`Emotion::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Anger => 0,
            Self::Trust => 1,
            Self::Surprise => 2,
            Self::Disgust => 3,
            Self::Joy => 4,
            Self::Sadness => 5,
            Self::Fear => 6,
            Self::Anticipation => 7,
        }
    }

    /// The emotion diametrically opposed on the Plutchik wheel
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Anger => Self::Fear,
            Self::Trust => Self::Disgust,
            Self::Surprise => Self::Anticipation,
            Self::Disgust => Self::Trust,
            Self::Joy => Self::Sadness,
            Self::Sadness => Self::Joy,
            Self::Fear => Self::Anger,
            Self::Anticipation => Self::Surprise,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = EmoGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anger" => Ok(Self::Anger),
            "trust" => Ok(Self::Trust),
            "surprise" => Ok(Self::Surprise),
            "disgust" => Ok(Self::Disgust),
            "joy" => Ok(Self::Joy),
            "sadness" => Ok(Self::Sadness),
            "fear" => Ok(Self::Fear),
            "anticipation" => Ok(Self::Anticipation),
            other => Err(EmoGraphError::lexicon(format!(
                "Unknown emotion name: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_symmetric() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.opposite().opposite(), emotion);
        }
    }

    #[test]
    fn test_round_trip_names() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str().parse::<Emotion>().unwrap(), emotion);
        }
        assert!("boredom".parse::<Emotion>().is_err());
    }
}
