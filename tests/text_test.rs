use emo_graph::lexicon::EmotionLexicon;
use emo_graph::{Emotion, TextPipeline, TokenNormalization};
use rustc_hash::FxHashSet;

use std::io::Write as _;

fn pipeline(normalization: TokenNormalization) -> TextPipeline {
    let lexicon = EmotionLexicon::builtin_english().unwrap();
    let vocabulary: FxHashSet<String> = lexicon.iter().map(|(w, _)| w.to_string()).collect();
    TextPipeline::english(normalization, vocabulary).unwrap()
}

/// Test the full lemmatizing pipeline over a small paragraph
#[test]
fn test_lemmatized_pipeline() {
    let tokens = pipeline(TokenNormalization::Lemmatization)
        .process("She loved the dogs. They were crying!");
    assert_eq!(tokens, vec!["she", "love", "the", "dog", "they", "be", "cry"]);
}

/// Test that stemming and lemmatization diverge where expected
#[test]
fn test_stemming_differs() {
    let stemmed = pipeline(TokenNormalization::Stemming).process("happily happy");
    assert_eq!(stemmed, vec!["happili", "happi"]);

    let lemmatized = pipeline(TokenNormalization::Lemmatization).process("happily happy");
    assert!(lemmatized.contains(&"happy".to_string()));
}

/// Test emoji glossing before tokenization
#[test]
fn test_emoji_glossing() {
    let tokens = pipeline(TokenNormalization::Lemmatization).process("I ❤️ dogs");
    assert!(tokens.contains(&"love".to_string()));
    assert!(tokens.contains(&"dog".to_string()));
}

/// Test idiom merging into single tokens
#[test]
fn test_idiom_merging() {
    let tokens = pipeline(TokenNormalization::Lemmatization).process("We ate ice cream");
    assert!(tokens.contains(&"ice_cream".to_string()));
    assert!(!tokens.contains(&"ice".to_string()));
}

/// Test that abbreviations do not split sentences
#[test]
fn test_sentence_splitting() {
    let sentences =
        pipeline(TokenNormalization::Lemmatization).process_sentences("Dr. Smith smiled. Then he left.");
    assert_eq!(sentences.len(), 2);
    assert!(sentences[0].contains(&"smile".to_string()));
}

/// Test loading a lexicon from an NRC-style association file
#[test]
fn test_nrc_lexicon_loading() -> emo_graph::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nrc.txt");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "abandon\tfear\t1")?;
    writeln!(file, "abandon\tsadness\t1")?;
    writeln!(file, "abandon\tjoy\t0")?;
    writeln!(file, "abandon\tnegative\t1")?;

    let lexicon = EmotionLexicon::from_nrc_path(&path)?;
    let emotions = lexicon.emotions_of("abandon").unwrap();
    assert!(emotions.contains(&Emotion::Fear));
    assert!(emotions.contains(&Emotion::Sadness));
    assert!(!emotions.contains(&Emotion::Joy));
    Ok(())
}
