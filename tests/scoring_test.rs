use emo_graph::{
    EmoScores, EmoScoresConfig, Emotion, NormalizationStrategy, SIGNIFICANCE_THRESHOLD,
    TokenNormalization,
};

fn seeded_analyzer() -> EmoScores {
    let config = EmoScoresConfig {
        seed: Some(42),
        ..Default::default()
    };
    EmoScores::with_config(config).unwrap()
}

/// Test raw emotion counting over a short text
#[test]
fn test_emotion_counts() {
    let analyzer = seeded_analyzer();
    let scores = analyzer.emotions("What happiness, I love my wonderful dog");
    // happiness, love, wonderful and dog all evoke joy; joy outscores trust
    assert!(scores.get(Emotion::Joy) >= 4.0);
    assert!(scores.get(Emotion::Joy) > scores.get(Emotion::Trust));
    assert_eq!(scores.dominant(), Some(Emotion::Joy));
    assert_eq!(scores.get(Emotion::Disgust), 0.0);
}

/// Test that normalization strategies divide consistently
#[test]
fn test_normalization_strategies() {
    let analyzer = seeded_analyzer();
    let text = "the dog was afraid of the dark";

    let raw = analyzer.emotions_with(text, NormalizationStrategy::None, false);
    let by_length = analyzer.emotions_with(text, NormalizationStrategy::TextLength, false);
    let by_emotion = analyzer.emotions_with(text, NormalizationStrategy::EmotionWords, false);

    assert!(raw.total() > 0.0);
    assert!(by_length.total() < raw.total());
    assert!(by_emotion.total() <= raw.total());
    for (emotion, score) in by_length.iter() {
        assert!(score <= raw.get(emotion));
    }
}

/// Test word collection alongside the counts
#[test]
fn test_return_words() {
    let analyzer = seeded_analyzer();
    let scores = analyzer.emotions_with(
        "fear of the dark night",
        NormalizationStrategy::None,
        true,
    );
    let words = scores.words().expect("words were requested");
    assert!(
        words
            .get(&Emotion::Fear)
            .is_some_and(|w| w.contains(&"fear".to_string()))
    );
}

/// Test that z-scores are reproducible with a fixed seed
#[test]
fn test_zscores_reproducible() {
    let text = "Terror and fear, the dread and panic of the nightmare.";
    let first = seeded_analyzer().zscores(text);
    let second = seeded_analyzer().zscores(text);
    assert_eq!(first, second);
}

/// Test that a strongly fearful text exceeds the significance threshold
#[test]
fn test_fearful_text_is_significant() {
    let mut analyzer = seeded_analyzer();
    let text = "Terror and fear. The dread and panic of the nightmare. \
                Afraid of the dark, scared of the ghost, the horror of death.";
    let zs = analyzer.zscores(text);
    assert!(zs.get(Emotion::Fear) > SIGNIFICANCE_THRESHOLD);

    let filtered = analyzer.significant_zscores(text);
    assert!(filtered.get(Emotion::Fear) > SIGNIFICANCE_THRESHOLD);
    for (_, score) in filtered.iter() {
        assert!(score == 0.0 || score.abs() > SIGNIFICANCE_THRESHOLD);
    }
}

/// Test switching the analyzer from lemmatization to stemming
#[test]
fn test_stemming_switch() {
    let mut analyzer = seeded_analyzer();
    let before = analyzer.emotions("happiness happy");
    assert_eq!(before.get(Emotion::Joy), 2.0);

    analyzer.set_normalization(TokenNormalization::Stemming);
    // Both tokens stem to the same re-keyed lexicon entry
    let after = analyzer.emotions("happiness happy");
    assert_eq!(after.get(Emotion::Joy), 2.0);
    // The merged entry carries the union of the two emotion sets
    assert_eq!(after.get(Emotion::Trust), 2.0);
    assert!(before.get(Emotion::Trust) < after.get(Emotion::Trust));
}

/// Test that a custom baseline changes what counts as significant
#[test]
fn test_custom_text_baseline() {
    let mut analyzer = seeded_analyzer();
    analyzer.set_baseline_text(
        "fear terror panic dread horror nightmare afraid scared ghost death",
    );
    // Against an all-fear baseline a fearful text is unremarkable
    let zs = analyzer.zscores("fear terror panic dread");
    assert!(zs.get(Emotion::Fear) <= SIGNIFICANCE_THRESHOLD);

    analyzer.reset_baseline();
    let zs = analyzer.zscores("fear terror panic dread");
    assert!(zs.get(Emotion::Fear) > 0.0);
}
