//! The analysis facade.
//!
//! [`EmoScores`] wires the lexicon, text pipeline, baseline machinery and
//! renderers together behind the operations most callers need: emotion
//! profiles, z-scores, forma mentis networks and their SVG renditions.

use rustc_hash::FxHashSet;
use std::path::Path;

use crate::baselines::{
    Baseline, LookupTable, SIGNIFICANCE_THRESHOLD, ZscoreOptions, significant_only, zscores,
};
use crate::config::EmoScoresConfig;
use crate::error::Result;
use crate::lexicon::{Emotion, EmotionLexicon};
use crate::network::{FormamentisBuilder, FormamentisNetwork, io as network_io};
use crate::render::{
    FormamentisRenderOptions, PlutchikOptions, render_formamentis, render_plutchik,
};
use crate::resources::{self, SemanticRelations};
use crate::scores::{EmotionScores, NormalizationStrategy, ScoreInput, count_emotions};
use crate::text::{TextPipeline, TokenNormalization};

/// Emotion analysis over texts and forma mentis networks.
///
/// Holds a lexicon keyed consistently with its text pipeline, a baseline to
/// test against, and a cache of sampling statistics. Constructed with the
/// built-in English lexicon by default; external NRC-format lexicons load via
/// [`EmoScores::with_lexicon`].
#[derive(Debug)]
pub struct EmoScores {
    config: EmoScoresConfig,
    /// Lexicon as loaded, before key normalization
    raw_lexicon: EmotionLexicon,
    /// Lexicon re-keyed by the pipeline's normalization
    lexicon: EmotionLexicon,
    pipeline: TextPipeline,
    baseline: Baseline,
    lookup: LookupTable,
}

impl EmoScores {
    /// English analyzer with the built-in lexicon and default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EmoScoresConfig::default())
    }

    /// English analyzer with the built-in lexicon
    pub fn with_config(config: EmoScoresConfig) -> Result<Self> {
        Self::with_lexicon(EmotionLexicon::builtin_english()?, config)
    }

    /// Analyzer over a caller-provided lexicon
    pub fn with_lexicon(raw_lexicon: EmotionLexicon, config: EmoScoresConfig) -> Result<Self> {
        let mut pipeline =
            TextPipeline::english(config.normalization, pipeline_vocabulary(&raw_lexicon)?)?;
        pipeline.set_convert_emojis(config.convert_emojis);

        let lexicon = raw_lexicon.map_keys(|w| pipeline.normalize_word(w));
        let baseline = Baseline::from_lexicon(&lexicon);

        log::info!(
            "Analyzer ready: {} lexicon entries, {} after normalization",
            raw_lexicon.len(),
            lexicon.len()
        );
        Ok(Self {
            config,
            raw_lexicon,
            lexicon,
            pipeline,
            baseline,
            lookup: LookupTable::new(),
        })
    }

    /// Switch between lemmatization and stemming.
    ///
    /// Re-keys the lexicon, rebuilds the default baseline and drops cached
    /// sampling statistics.
    pub fn set_normalization(&mut self, normalization: TokenNormalization) {
        self.config.normalization = normalization;
        self.pipeline.set_normalization(normalization);
        self.lexicon = self.raw_lexicon.map_keys(|w| self.pipeline.normalize_word(w));
        self.baseline = Baseline::from_lexicon(&self.lexicon);
        self.lookup.clear();
    }

    /// Replace the baseline with the emotion distribution of a reference text
    pub fn set_baseline_text(&mut self, text: &str) {
        self.baseline = Baseline::from_text(text, &self.lexicon, &self.pipeline);
        self.lookup.clear();
    }

    /// Replace the baseline with explicit per-word emotion sets
    pub fn set_baseline_distributions(&mut self, distributions: Vec<Vec<Emotion>>) {
        self.baseline = Baseline::from_distributions(distributions);
        self.lookup.clear();
    }

    /// Restore the default baseline built from the lexicon itself
    pub fn reset_baseline(&mut self) {
        self.baseline = Baseline::from_lexicon(&self.lexicon);
        self.lookup.clear();
    }

    /// The lexicon as keyed for lookup
    #[must_use]
    pub const fn lexicon(&self) -> &EmotionLexicon {
        &self.lexicon
    }

    /// The text pipeline in use
    #[must_use]
    pub const fn pipeline(&self) -> &TextPipeline {
        &self.pipeline
    }

    /// Raw emotion counts over a text or network
    #[must_use]
    pub fn emotions<'a>(&self, input: impl Into<ScoreInput<'a>>) -> EmotionScores {
        self.emotions_with(input, NormalizationStrategy::None, false)
    }

    /// Emotion counts with an explicit normalization strategy, optionally
    /// collecting the words behind each count
    #[must_use]
    pub fn emotions_with<'a>(
        &self,
        input: impl Into<ScoreInput<'a>>,
        strategy: NormalizationStrategy,
        collect_words: bool,
    ) -> EmotionScores {
        count_emotions(
            input.into(),
            &self.lexicon,
            &self.pipeline,
            strategy,
            collect_words,
        )
    }

    /// Z-scores of the input's emotion profile against the current baseline
    #[must_use]
    pub fn zscores<'a>(&mut self, input: impl Into<ScoreInput<'a>>) -> EmotionScores {
        let options = ZscoreOptions {
            n_samples: self.config.n_samples,
            seed: self.config.seed,
            progress: self.config.show_progress,
        };
        zscores(
            input.into(),
            &self.lexicon,
            &self.pipeline,
            &self.baseline,
            &mut self.lookup,
            &options,
        )
    }

    /// Z-scores with a one-off sample count
    #[must_use]
    pub fn zscores_with<'a>(
        &mut self,
        input: impl Into<ScoreInput<'a>>,
        n_samples: usize,
    ) -> EmotionScores {
        let options = ZscoreOptions {
            n_samples,
            seed: self.config.seed,
            progress: self.config.show_progress,
        };
        zscores(
            input.into(),
            &self.lexicon,
            &self.pipeline,
            &self.baseline,
            &mut self.lookup,
            &options,
        )
    }

    /// Build a forma mentis network with default options
    pub fn formamentis_network(&self, text: &str) -> Result<FormamentisNetwork> {
        self.formamentis_network_with(text, &FormamentisBuilder::new())
    }

    /// Build a forma mentis network with a configured builder
    pub fn formamentis_network_with(
        &self,
        text: &str,
        builder: &FormamentisBuilder,
    ) -> Result<FormamentisNetwork> {
        builder.build(text, &self.pipeline)
    }

    /// Normalized tokens of the text that survive into its forma mentis
    /// network vocabulary
    pub fn lemmatize_text(&self, text: &str) -> Result<Vec<String>> {
        let network = self.formamentis_network(text)?;
        let vertices: FxHashSet<&str> = network.vertices.iter().map(String::as_str).collect();
        Ok(self
            .pipeline
            .process(text)
            .into_iter()
            .filter(|token| vertices.contains(token.as_str()))
            .collect())
    }

    /// Export a simple network's edges to a text file
    pub fn export_formamentis(&self, network: &FormamentisNetwork, path: &Path) -> Result<()> {
        network_io::export_edges(network, path)
    }

    /// Import a network from an edge file
    pub fn import_formamentis(&self, path: &Path) -> Result<FormamentisNetwork> {
        network_io::import_edges(path)
    }

    /// Render scores as a Plutchik flower
    #[must_use]
    pub fn render_plutchik(&self, scores: &EmotionScores, options: &PlutchikOptions) -> String {
        render_plutchik(scores, options)
    }

    /// Render a network with the given layout options
    pub fn render_formamentis(
        &self,
        network: &FormamentisNetwork,
        options: &FormamentisRenderOptions,
    ) -> Result<String> {
        render_formamentis(network, options)
    }

    /// Flower of statistically significant emotions only: z-scores against
    /// the baseline, petals inside the +-1.96 reject range greyed out
    #[must_use]
    pub fn significant_emotions_flower<'a>(
        &mut self,
        input: impl Into<ScoreInput<'a>>,
        title: Option<String>,
    ) -> String {
        let zs = self.zscores(input);
        let options = PlutchikOptions {
            reject_range: Some((-SIGNIFICANCE_THRESHOLD, SIGNIFICANCE_THRESHOLD)),
            title,
            show_values: true,
            ..Default::default()
        };
        render_plutchik(&zs, &options)
    }

    /// Flower of a text's forma mentis network: build the network, z-score
    /// its vocabulary, render with the significance reject range
    pub fn formamentis_flower(
        &mut self,
        text: &str,
        builder: &FormamentisBuilder,
        title: Option<String>,
    ) -> Result<String> {
        let network = self.formamentis_network_with(text, builder)?;
        let zs = self.zscores(&network);
        let options = PlutchikOptions {
            reject_range: Some((-SIGNIFICANCE_THRESHOLD, SIGNIFICANCE_THRESHOLD)),
            title,
            show_values: true,
            ..Default::default()
        };
        Ok(render_plutchik(&zs, &options))
    }

    /// Z-scores filtered to the significant emotions only
    #[must_use]
    pub fn significant_zscores<'a>(&mut self, input: impl Into<ScoreInput<'a>>) -> EmotionScores {
        let zs = self.zscores(input);
        significant_only(&zs, (-SIGNIFICANCE_THRESHOLD, SIGNIFICANCE_THRESHOLD))
    }
}

/// Vocabulary the lemmatizer validates candidates against: lexicon words
/// plus every word the resource tables can introduce into a text
fn pipeline_vocabulary(lexicon: &EmotionLexicon) -> Result<FxHashSet<String>> {
    let mut vocabulary: FxHashSet<String> =
        lexicon.iter().map(|(w, _)| w.to_string()).collect();
    for (key, value) in resources::load_antonyms()? {
        vocabulary.insert(key);
        vocabulary.insert(value);
    }
    for glosses in resources::load_emojis()?.into_values() {
        vocabulary.extend(glosses);
    }
    let relations = SemanticRelations::builtin_english()?;
    for group in &relations.synonyms {
        vocabulary.extend(group.iter().cloned());
    }
    for (word, hypernyms) in &relations.hypernyms {
        vocabulary.insert(word.clone());
        vocabulary.extend(hypernyms.iter().cloned());
    }
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> EmoScores {
        let config = EmoScoresConfig {
            seed: Some(1),
            ..Default::default()
        };
        EmoScores::with_config(config).unwrap()
    }

    #[test]
    fn test_emotions_on_text() {
        let scores = analyzer().emotions("Such happiness: I love my wonderful dog");
        // happiness, love, wonderful and dog all evoke joy; only three add trust
        assert!(scores.get(Emotion::Joy) >= 4.0);
        assert!(scores.get(Emotion::Joy) > scores.get(Emotion::Trust));
        assert_eq!(scores.dominant(), Some(Emotion::Joy));
    }

    #[test]
    fn test_normalization_switch_rekeys_lexicon() {
        let mut analyzer = analyzer();
        assert!(analyzer.lexicon().contains("happy"));
        analyzer.set_normalization(TokenNormalization::Stemming);
        // Porter maps happy -> happi, and lookups follow
        assert!(analyzer.lexicon().contains("happi"));
        let scores = analyzer.emotions("happily happy");
        assert!(scores.get(Emotion::Joy) >= 1.0);
    }

    #[test]
    fn test_zscores_deterministic_with_seed() {
        let text = "joy and delight, a happy smile full of love";
        let first = analyzer().zscores(text);
        let second = analyzer().zscores(text);
        assert_eq!(first, second);
        assert!(first.get(Emotion::Joy) > 0.0);
    }

    #[test]
    fn test_lemmatize_text_restricts_to_network() {
        let tokens = analyzer()
            .lemmatize_text("The happy dogs were chasing the ball.")
            .unwrap();
        assert!(tokens.contains(&"happy".to_string()));
        assert!(tokens.contains(&"dog".to_string()));
        assert!(!tokens.contains(&"the".to_string()));
    }

    #[test]
    fn test_significant_zscores_filters() {
        let mut analyzer = analyzer();
        let filtered = analyzer.significant_zscores("fear terror panic dread horror nightmare");
        for (_, score) in filtered.iter() {
            assert!(score == 0.0 || score.abs() > SIGNIFICANCE_THRESHOLD);
        }
        assert!(filtered.get(Emotion::Fear) > SIGNIFICANCE_THRESHOLD);
    }

    #[test]
    fn test_flower_pipeline() {
        let mut analyzer = analyzer();
        let svg = analyzer.significant_emotions_flower(
            "fear terror panic dread horror nightmare",
            Some("Night terrors".to_string()),
        );
        assert!(svg.contains("Night terrors"));
        assert!(svg.contains("data-emotion=\"fear\""));
    }

    #[test]
    fn test_baseline_change_resets_lookup() {
        let mut analyzer = analyzer();
        let _ = analyzer.zscores("joy and fear");
        analyzer.set_baseline_text("fear fear fear terror panic dread");
        // Against an all-fear baseline, a fearful text stops standing out
        let zs = analyzer.zscores("fear terror panic");
        assert!(zs.get(Emotion::Fear) <= SIGNIFICANCE_THRESHOLD);
    }
}
