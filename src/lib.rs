//! A Rust library for emotional profiling of texts: forma mentis networks,
//! Plutchik emotion scores with statistical baselines, and SVG rendering.

pub mod api;
pub mod baselines;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod network;
pub mod render;
pub mod resources;
pub mod scores;
pub mod text;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use api::EmoScores;
pub use config::EmoScoresConfig;
pub use error::{EmoGraphError, Result};
pub use lexicon::{Emotion, EmotionLexicon, EmotionSet};

// Scoring and baselines
pub use baselines::{
    Baseline, LookupTable, SIGNIFICANCE_THRESHOLD, ZscoreOptions, significant_only, zscores,
};
pub use scores::{EmotionScores, NormalizationStrategy, ScoreInput, count_emotions};

// Networks
pub use network::{Edge, EdgeKind, EdgeSet, Enrichment, FormamentisBuilder, FormamentisNetwork};

// Rendering
pub use render::{
    FormamentisRenderOptions, NetworkLayout, PlutchikOptions, render_formamentis, render_plutchik,
    save_svg,
};

// Text processing
pub use text::{TextPipeline, TokenNormalization};
