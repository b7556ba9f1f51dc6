//! Emotion baselines and statistical significance.
//!
//! A baseline is the emotion distribution of a reference word pool, by
//! default the lexicon itself. Observed emotion counts are compared against
//! Monte Carlo samples of equally many words drawn from that pool; the
//! resulting z-scores say which emotions a text over- or under-expresses.

use indicatif::ParallelProgressIterator;
use rand::prelude::*;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::lexicon::{Emotion, EmotionLexicon, EmotionSet};
use crate::scores::{EmotionScores, ScoreInput, raw_counts};
use crate::text::TextPipeline;
use crate::utils::progress::sampling_progress_bar;

/// Default number of Monte Carlo samples
pub const DEFAULT_SAMPLES: usize = 300;

/// Two-sided 5% significance threshold on a z-score
pub const SIGNIFICANCE_THRESHOLD: f64 = 1.96;

/// A reference emotion distribution to test texts against
#[derive(Debug, Clone)]
pub struct Baseline {
    /// Emotion sets of every word in the reference pool
    pool: Vec<EmotionSet>,
    /// Fraction of pool words evoking each emotion
    probabilities: [f64; 8],
}

impl Baseline {
    /// Baseline over the lexicon itself: every lexicon word once
    #[must_use]
    pub fn from_lexicon(lexicon: &EmotionLexicon) -> Self {
        Self::from_pool(lexicon.iter().map(|(_, emotions)| emotions.clone()).collect())
    }

    /// Baseline over the emotion-bearing tokens of a reference text
    #[must_use]
    pub fn from_text(text: &str, lexicon: &EmotionLexicon, pipeline: &TextPipeline) -> Self {
        let pool = pipeline
            .process(text)
            .iter()
            .filter_map(|token| lexicon.emotions_of(token).cloned())
            .collect();
        Self::from_pool(pool)
    }

    /// Baseline from explicit per-word emotion sets
    #[must_use]
    pub fn from_distributions(distributions: Vec<Vec<Emotion>>) -> Self {
        let pool = distributions
            .into_iter()
            .map(|emotions| {
                let mut set = EmotionSet::new();
                for emotion in emotions {
                    if !set.contains(&emotion) {
                        set.push(emotion);
                    }
                }
                set
            })
            .collect();
        Self::from_pool(pool)
    }

    fn from_pool(pool: Vec<EmotionSet>) -> Self {
        let mut probabilities = [0.0_f64; 8];
        for emotions in &pool {
            for &emotion in emotions {
                probabilities[emotion.index()] += 1.0;
            }
        }
        if !pool.is_empty() {
            for p in &mut probabilities {
                *p /= pool.len() as f64;
            }
        }
        Self { pool, probabilities }
    }

    /// Fraction of pool words evoking `emotion`
    #[must_use]
    pub fn probability(&self, emotion: Emotion) -> f64 {
        self.probabilities[emotion.index()]
    }

    /// Number of words in the reference pool
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Count emotions over `n` words drawn from the pool with replacement
    fn sample_counts(&self, n: u64, rng: &mut StdRng) -> [u64; 8] {
        let mut counts = [0_u64; 8];
        for _ in 0..n {
            // Pool is never empty when this is called
            if let Some(emotions) = self.pool.choose(rng) {
                for &emotion in emotions {
                    counts[emotion.index()] += 1;
                }
            }
        }
        counts
    }
}

/// Per-emotion mean and standard deviation of sampled counts
#[derive(Debug, Clone, Copy)]
struct SampleStats {
    mean: f64,
    std_dev: f64,
}

/// Cache of sampling statistics keyed by sample size.
///
/// Texts of the same emotion-word count share the same null distribution,
/// so the Monte Carlo work is done once per size.
#[derive(Debug, Default)]
pub struct LookupTable {
    stats: FxHashMap<u64, [SampleStats; 8]>,
}

impl LookupTable {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all cached statistics (required when the baseline changes)
    pub fn clear(&mut self) {
        self.stats.clear();
    }

    /// Number of cached sample sizes
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Options for the z-score computation
#[derive(Debug, Clone, Copy)]
pub struct ZscoreOptions {
    /// Number of Monte Carlo samples
    pub n_samples: usize,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    /// Show a progress bar while sampling
    pub progress: bool,
}

impl Default for ZscoreOptions {
    fn default() -> Self {
        Self {
            n_samples: DEFAULT_SAMPLES,
            seed: None,
            progress: false,
        }
    }
}

/// Z-scores of observed emotion counts against a baseline.
///
/// `counts` are the observed per-emotion counts and `n` the number of
/// emotion-bearing words they came from. Sampling statistics are cached in
/// `lookup` per value of `n`.
#[must_use]
pub fn zscores_from_counts(
    counts: [u64; 8],
    n: u64,
    baseline: &Baseline,
    lookup: &mut LookupTable,
    options: &ZscoreOptions,
) -> EmotionScores {
    if n == 0 || baseline.pool.is_empty() || options.n_samples == 0 {
        return EmotionScores::zero();
    }

    let stats = lookup
        .stats
        .entry(n)
        .or_insert_with(|| sample_statistics(baseline, n, options));

    let mut values = [0.0_f64; 8];
    for emotion in Emotion::ALL {
        let i = emotion.index();
        if stats[i].std_dev > 0.0 {
            values[i] = (counts[i] as f64 - stats[i].mean) / stats[i].std_dev;
        }
    }
    EmotionScores::from_values(values)
}

/// Convenience wrapper: count emotions in the input, then compute z-scores
#[must_use]
pub fn zscores(
    input: ScoreInput<'_>,
    lexicon: &EmotionLexicon,
    pipeline: &TextPipeline,
    baseline: &Baseline,
    lookup: &mut LookupTable,
    options: &ZscoreOptions,
) -> EmotionScores {
    let (counts, n) = raw_counts(input, lexicon, pipeline);
    zscores_from_counts(counts, n, baseline, lookup, options)
}

/// Zero every score inside the reject range, keeping only the emotions that
/// are statistically over- or under-represented
#[must_use]
pub fn significant_only(scores: &EmotionScores, reject_range: (f64, f64)) -> EmotionScores {
    let mut values = [0.0_f64; 8];
    for (emotion, score) in scores.iter() {
        if score < reject_range.0 || score > reject_range.1 {
            values[emotion.index()] = score;
        }
    }
    EmotionScores::from_values(values)
}

/// Mean and standard deviation of per-emotion counts over repeated draws
fn sample_statistics(baseline: &Baseline, n: u64, options: &ZscoreOptions) -> [SampleStats; 8] {
    let base_seed = options.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!(
        "Sampling {} draws of {n} words from a pool of {}",
        options.n_samples,
        baseline.pool.len()
    );

    let sample = |i: usize| -> [u64; 8] {
        // Independent, reproducible stream per sample
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
        baseline.sample_counts(n, &mut rng)
    };

    let samples: Vec<[u64; 8]> = if options.progress {
        let bar = sampling_progress_bar(options.n_samples as u64);
        (0..options.n_samples)
            .into_par_iter()
            .progress_with(bar)
            .map(sample)
            .collect()
    } else {
        (0..options.n_samples).into_par_iter().map(sample).collect()
    };

    let total = samples.len() as f64;
    std::array::from_fn(|i| {
        let mean = samples.iter().map(|s| s[i] as f64).sum::<f64>() / total;
        let variance = samples
            .iter()
            .map(|s| {
                let d = s[i] as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / total;
        SampleStats {
            mean,
            std_dev: variance.sqrt(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TokenNormalization;
    use rustc_hash::FxHashSet;

    fn fixtures() -> (EmotionLexicon, TextPipeline) {
        let lexicon = EmotionLexicon::builtin_english().unwrap();
        let vocabulary: FxHashSet<String> = lexicon.iter().map(|(w, _)| w.to_string()).collect();
        let pipeline =
            TextPipeline::english(TokenNormalization::Lemmatization, vocabulary).unwrap();
        (lexicon, pipeline)
    }

    fn seeded() -> ZscoreOptions {
        ZscoreOptions {
            n_samples: 300,
            seed: Some(42),
            progress: false,
        }
    }

    #[test]
    fn test_baseline_probabilities_sum_over_emotions() {
        let (lexicon, _) = fixtures();
        let baseline = Baseline::from_lexicon(&lexicon);
        assert_eq!(baseline.pool_len(), lexicon.len());
        for emotion in Emotion::ALL {
            let p = baseline.probability(emotion);
            assert!(p > 0.0 && p < 1.0, "{emotion}: {p}");
        }
    }

    #[test]
    fn test_fearful_text_scores_fear_high() {
        let (lexicon, pipeline) = fixtures();
        let baseline = Baseline::from_lexicon(&lexicon);
        let mut lookup = LookupTable::new();
        let text = "Terror and fear. The dread and panic of the nightmare. \
                    Afraid of the dark, scared of the ghost, the horror of death.";
        let zs = zscores(
            ScoreInput::Text(text),
            &lexicon,
            &pipeline,
            &baseline,
            &mut lookup,
            &seeded(),
        );
        assert!(zs.get(Emotion::Fear) > SIGNIFICANCE_THRESHOLD);
        assert!(zs.get(Emotion::Fear) > zs.get(Emotion::Joy));
    }

    #[test]
    fn test_lookup_table_caches_by_sample_size() {
        let (lexicon, pipeline) = fixtures();
        let baseline = Baseline::from_lexicon(&lexicon);
        let mut lookup = LookupTable::new();
        let options = seeded();

        let first = zscores(
            ScoreInput::Text("joy and fear"),
            &lexicon,
            &pipeline,
            &baseline,
            &mut lookup,
            &options,
        );
        assert_eq!(lookup.len(), 1);
        // Same emotion-word count reuses the cached statistics exactly
        let second = zscores(
            ScoreInput::Text("joy and fear"),
            &lexicon,
            &pipeline,
            &baseline,
            &mut lookup,
            &options,
        );
        assert_eq!(lookup.len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_zero_zscores() {
        let (lexicon, pipeline) = fixtures();
        let baseline = Baseline::from_lexicon(&lexicon);
        let mut lookup = LookupTable::new();
        let zs = zscores(
            ScoreInput::Text("the of and"),
            &lexicon,
            &pipeline,
            &baseline,
            &mut lookup,
            &seeded(),
        );
        assert_eq!(zs.total(), 0.0);
    }

    #[test]
    fn test_significant_only_applies_reject_range() {
        let scores = EmotionScores::from_values([2.5, 1.0, -0.5, -3.0, 0.0, 1.96, -1.96, 4.0]);
        let filtered = significant_only(&scores, (-1.96, 1.96));
        assert_eq!(filtered.get(Emotion::Anger), 2.5);
        assert_eq!(filtered.get(Emotion::Disgust), -3.0);
        assert_eq!(filtered.get(Emotion::Trust), 0.0);
        // Boundary values fall inside the reject range
        assert_eq!(filtered.get(Emotion::Sadness), 0.0);
        assert_eq!(filtered.get(Emotion::Fear), 0.0);
    }

    #[test]
    fn test_baseline_from_distributions() {
        let baseline = Baseline::from_distributions(vec![
            vec![Emotion::Joy],
            vec![Emotion::Joy, Emotion::Trust],
            vec![Emotion::Fear],
            vec![],
        ]);
        assert_eq!(baseline.pool_len(), 4);
        assert!((baseline.probability(Emotion::Joy) - 0.5).abs() < 1e-9);
        assert!((baseline.probability(Emotion::Fear) - 0.25).abs() < 1e-9);
    }
}
