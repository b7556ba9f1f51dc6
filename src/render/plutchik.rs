//! The Plutchik flower.
//!
//! Eight petals at 45 degree steps, one per emotion, with petal length
//! proportional to the score. Petals inside the reject range, or outside the
//! highlight set, are drawn grey.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::lexicon::Emotion;
use crate::render::{CANVAS, document, escape};
use crate::scores::EmotionScores;

/// Clockwise wheel order starting from the top petal
const WHEEL_ORDER: [Emotion; 8] = [
    Emotion::Joy,
    Emotion::Trust,
    Emotion::Fear,
    Emotion::Surprise,
    Emotion::Sadness,
    Emotion::Disgust,
    Emotion::Anger,
    Emotion::Anticipation,
];

/// Fill color used for non-significant or shadowed petals
const GREY: &str = "#C8C8C8";

/// Canonical petal color per emotion
#[must_use]
pub const fn petal_color(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Joy => "#FFD700",
        Emotion::Trust => "#9ACD32",
        Emotion::Fear => "#228B22",
        Emotion::Surprise => "#87CEEB",
        Emotion::Sadness => "#1E90FF",
        Emotion::Disgust => "#9370DB",
        Emotion::Anger => "#FF4500",
        Emotion::Anticipation => "#FF8C00",
    }
}

/// Options for the flower renderer
#[derive(Debug, Clone, Default)]
pub struct PlutchikOptions {
    /// Grey out petals whose score falls inside this closed range
    pub reject_range: Option<(f64, f64)>,
    /// Emotions drawn in color; everything else is shadowed. None means all.
    pub highlight: Option<Vec<Emotion>>,
    /// Title drawn above the flower
    pub title: Option<String>,
    /// Print the numeric score under each label
    pub show_values: bool,
}

/// Render scores as a Plutchik flower SVG document.
///
/// Score magnitudes are rescaled so the largest petal fills the flower;
/// z-scores therefore draw directly. Negative scores render at magnitude.
#[must_use]
pub fn render_plutchik(scores: &EmotionScores, options: &PlutchikOptions) -> String {
    let center = CANVAS / 2.0;
    let max_radius = CANVAS * 0.38;
    let min_radius = CANVAS * 0.04;

    let max_score = scores
        .iter()
        .map(|(_, s)| s.abs())
        .fold(0.0_f64, f64::max);

    let mut body = String::new();

    if let Some(title) = &options.title {
        let _ = writeln!(
            body,
            r#"<text x="{center}" y="28" text-anchor="middle" font-size="20" font-family="sans-serif">{}</text>"#,
            escape(title)
        );
    }

    for (slot, &emotion) in WHEEL_ORDER.iter().enumerate() {
        let score = scores.get(emotion);
        let angle = 2.0 * PI * slot as f64 / 8.0;

        let rejected = options
            .reject_range
            .is_some_and(|(lo, hi)| score >= lo && score <= hi);
        let shadowed = options
            .highlight
            .as_ref()
            .is_some_and(|set| !set.contains(&emotion));
        let fill = if rejected || shadowed {
            GREY
        } else {
            petal_color(emotion)
        };

        let fraction = if max_score > 0.0 {
            score.abs() / max_score
        } else {
            0.0
        };
        let radius = min_radius + (max_radius - min_radius) * fraction;

        body.push_str(&petal_path(center, angle, radius, fill, emotion));
        body.push('\n');

        // Label just beyond the longest possible petal
        let label_radius = max_radius + 40.0;
        let (lx, ly) = polar(center, angle, label_radius);
        let _ = writeln!(
            body,
            r#"<text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" font-size="14" font-family="sans-serif">{}</text>"#,
            emotion.as_str()
        );
        if options.show_values {
            let _ = writeln!(
                body,
                r##"<text x="{lx:.1}" y="{:.1}" text-anchor="middle" font-size="11" font-family="sans-serif" fill="#555555">{score:.2}</text>"##,
                ly + 14.0
            );
        }
    }

    document(&body)
}

/// A petal as two quadratic curves from the center to the tip and back
fn petal_path(center: f64, angle: f64, radius: f64, fill: &str, emotion: Emotion) -> String {
    let (tip_x, tip_y) = polar(center, angle, radius);
    let spread = PI / 10.0;
    let (c1x, c1y) = polar(center, angle - spread, radius * 0.62);
    let (c2x, c2y) = polar(center, angle + spread, radius * 0.62);
    format!(
        r##"<path d="M {center:.1} {center:.1} Q {c1x:.1} {c1y:.1} {tip_x:.1} {tip_y:.1} Q {c2x:.1} {c2y:.1} {center:.1} {center:.1} Z" fill="{fill}" fill-opacity="0.85" stroke="#666666" stroke-width="0.5" data-emotion="{}"/>"##,
        emotion.as_str()
    )
}

/// Point at `radius` from the center, angle measured clockwise from the top
fn polar(center: f64, angle: f64, radius: f64) -> (f64, f64) {
    (
        center + radius * angle.sin(),
        center - radius * angle.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_eight_petals() {
        let scores = EmotionScores::from_values([1.0; 8]);
        let svg = render_plutchik(&scores, &PlutchikOptions::default());
        assert_eq!(svg.matches("<path").count(), 8);
        assert!(svg.contains("data-emotion=\"joy\""));
        assert!(svg.contains("anticipation"));
    }

    #[test]
    fn test_reject_range_greys_petals() {
        let scores = EmotionScores::from_values([2.5, 0.3, 0.0, -2.2, 1.0, 0.5, 0.1, 0.2]);
        let options = PlutchikOptions {
            reject_range: Some((-1.96, 1.96)),
            ..Default::default()
        };
        let svg = render_plutchik(&scores, &options);
        // anger (2.5) and disgust (-2.2) stay colored, six petals grey out
        assert_eq!(svg.matches(GREY).count(), 6);
        assert!(svg.contains(petal_color(Emotion::Anger)));
        assert!(svg.contains(petal_color(Emotion::Disgust)));
        assert!(!svg.contains(petal_color(Emotion::Joy)));
    }

    #[test]
    fn test_highlight_shadows_rest() {
        let scores = EmotionScores::from_values([1.0; 8]);
        let options = PlutchikOptions {
            highlight: Some(vec![Emotion::Joy]),
            ..Default::default()
        };
        let svg = render_plutchik(&scores, &options);
        assert_eq!(svg.matches(GREY).count(), 7);
        assert!(svg.contains(petal_color(Emotion::Joy)));
    }

    #[test]
    fn test_show_values_prints_scores() {
        let scores = EmotionScores::from_values([1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let options = PlutchikOptions {
            show_values: true,
            ..Default::default()
        };
        let svg = render_plutchik(&scores, &options);
        assert!(svg.contains(">1.50</text>"));
        assert!(svg.contains(r##"fill="#555555""##));
        assert!(svg.contains(r##"stroke="#666666""##));
    }

    #[test]
    fn test_title_escaped() {
        let scores = EmotionScores::zero();
        let options = PlutchikOptions {
            title: Some("Fear & loathing".to_string()),
            ..Default::default()
        };
        let svg = render_plutchik(&scores, &options);
        assert!(svg.contains("Fear &amp; loathing"));
    }
}
