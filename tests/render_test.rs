use emo_graph::{
    EmoScores, EmotionScores, FormamentisNetwork, FormamentisRenderOptions, NetworkLayout,
    PlutchikOptions, render_formamentis, render_plutchik, save_svg,
};

use tempfile::tempdir;

/// Test the flower renderer end to end through the facade
#[test]
fn test_plutchik_flower_from_text() {
    let analyzer = EmoScores::new().unwrap();
    let scores = analyzer.emotions("I love my wonderful happy dog");
    let svg = render_plutchik(
        &scores,
        &PlutchikOptions {
            title: Some("A happy text".to_string()),
            show_values: true,
            ..Default::default()
        },
    );
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("data-emotion=").count(), 8);
    assert!(svg.contains("A happy text"));
}

/// Test that the reject range greys out insignificant petals
#[test]
fn test_reject_range() {
    let scores = EmotionScores::from_values([0.5, 0.2, 2.4, -0.1, 0.0, 0.3, -2.1, 1.0]);
    let svg = render_plutchik(
        &scores,
        &PlutchikOptions {
            reject_range: Some((-1.96, 1.96)),
            ..Default::default()
        },
    );
    // Six of eight petals fall inside the range
    assert_eq!(svg.matches("#C8C8C8").count(), 6);
}

/// Test both network layouts render every vertex
#[test]
fn test_network_layouts() -> emo_graph::Result<()> {
    let network = FormamentisNetwork::from_edges(vec![
        ("happy".into(), "dog".into()),
        ("dog".into(), "ball".into()),
        ("ball".into(), "play".into()),
    ]);

    for layout in [NetworkLayout::CircularBundling, NetworkLayout::Force] {
        let options = FormamentisRenderOptions {
            layout,
            ..Default::default()
        };
        let svg = render_formamentis(&network, &options)?;
        for vertex in &network.vertices {
            assert!(svg.contains(vertex.as_str()), "{vertex} missing");
        }
    }
    Ok(())
}

/// Test alpha validation on the network renderer
#[test]
fn test_invalid_alpha_rejected() {
    let network = FormamentisNetwork::from_edges(vec![("a".into(), "b".into())]);
    let options = FormamentisRenderOptions {
        alpha_syntactic: 1.5,
        ..Default::default()
    };
    assert!(render_formamentis(&network, &options).is_err());
}

/// Test writing a rendered document to disk
#[test]
fn test_save_svg() -> emo_graph::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("flower.svg");
    let svg = render_plutchik(&EmotionScores::zero(), &PlutchikOptions::default());
    save_svg(&svg, &path)?;
    assert!(std::fs::read_to_string(&path)?.contains("</svg>"));
    Ok(())
}
