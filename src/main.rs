use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use log::info;

use emo_graph::utils::progress::spinner;
use emo_graph::{
    EmoScores, EmoScoresConfig, FormamentisBuilder, FormamentisRenderOptions, save_svg,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: emo-graph <text-file> [output-dir]");
    };
    let input = PathBuf::from(input);
    let out_dir = args.next().map_or_else(
        || input.parent().unwrap_or(Path::new(".")).to_path_buf(),
        PathBuf::from,
    );

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    info!("Analyzing {} ({} bytes)", input.display(), text.len());

    let config = EmoScoresConfig {
        show_progress: true,
        ..Default::default()
    };
    let mut analyzer = EmoScores::with_config(config)?;

    let start = Instant::now();
    let emotions = analyzer.emotions(text.as_str());
    println!("Emotion counts:\n{emotions}");

    let zscores = analyzer.zscores(text.as_str());
    println!("Z-scores against the lexicon baseline:\n{zscores}");
    info!("Scored in {:?}", start.elapsed());

    let stem = input
        .file_stem()
        .map_or_else(|| "text".to_string(), |s| s.to_string_lossy().into_owned());

    let flower = analyzer.significant_emotions_flower(text.as_str(), Some(stem.clone()));
    let flower_path = out_dir.join(format!("{stem}_flower.svg"));
    save_svg(&flower, &flower_path)?;

    let start = Instant::now();
    let progress = spinner("building forma mentis network");
    let network = analyzer.formamentis_network_with(&text, &FormamentisBuilder::new())?;
    progress.finish_and_clear();
    info!(
        "Built forma mentis network: {} vertices, {} edges in {:?}",
        network.vertices.len(),
        network.edges.len(),
        start.elapsed()
    );

    let svg = analyzer.render_formamentis(&network, &FormamentisRenderOptions::default())?;
    let network_path = out_dir.join(format!("{stem}_network.svg"));
    save_svg(&svg, &network_path)?;

    info!(
        "Wrote {} and {}",
        flower_path.display(),
        network_path.display()
    );
    Ok(())
}
