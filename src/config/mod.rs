//! Configuration for the analysis facade.

use crate::text::TokenNormalization;

/// Configuration for [`crate::EmoScores`]
#[derive(Debug, Clone)]
pub struct EmoScoresConfig {
    /// How tokens are reduced to lexicon keys
    pub normalization: TokenNormalization,
    /// Gloss emoji into words before tokenization
    pub convert_emojis: bool,
    /// Monte Carlo samples per z-score lookup entry
    pub n_samples: usize,
    /// Show a progress bar while sampling
    pub show_progress: bool,
    /// Fixed RNG seed for reproducible z-scores
    pub seed: Option<u64>,
}

impl Default for EmoScoresConfig {
    fn default() -> Self {
        Self {
            normalization: TokenNormalization::Lemmatization,
            convert_emojis: true,
            n_samples: crate::baselines::DEFAULT_SAMPLES,
            show_progress: false,
            seed: None,
        }
    }
}
