//! Network layouts: circular with bundled edges, and force-directed.

use rand::prelude::*;
use rustc_hash::FxHashMap;
use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::error::{EmoGraphError, Result};
use crate::network::{EdgeKind, EdgeSet, FormamentisNetwork};
use crate::render::{CANVAS, document, escape};

/// Layout algorithm for network rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkLayout {
    /// Vertices on a circle, edges curved toward the center
    #[default]
    CircularBundling,
    /// Fruchterman-Reingold force-directed placement
    Force,
}

/// Options for the network renderer
#[derive(Debug, Clone)]
pub struct FormamentisRenderOptions {
    /// Layout algorithm
    pub layout: NetworkLayout,
    /// Words drawn in the highlight color
    pub highlight: Vec<String>,
    /// Stroke width multiplier
    pub thickness: f64,
    /// Hide vertex labels
    pub hide_labels: bool,
    /// Opacity of syntactic edges, in [0, 1]
    pub alpha_syntactic: f64,
    /// Opacity of synonym edges, in [0, 1]
    pub alpha_synonyms: f64,
    /// Opacity of hypernym edges, in [0, 1]
    pub alpha_hypernyms: f64,
}

impl Default for FormamentisRenderOptions {
    fn default() -> Self {
        Self {
            layout: NetworkLayout::CircularBundling,
            highlight: Vec::new(),
            thickness: 1.0,
            hide_labels: false,
            alpha_syntactic: 0.5,
            alpha_synonyms: 0.5,
            alpha_hypernyms: 0.5,
        }
    }
}

impl FormamentisRenderOptions {
    fn validate(&self) -> Result<()> {
        for (name, alpha) in [
            ("syntactic", self.alpha_syntactic),
            ("synonyms", self.alpha_synonyms),
            ("hypernyms", self.alpha_hypernyms),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(EmoGraphError::Render(format!(
                    "Alpha value for {name} must be between 0.0 and 1.0"
                )));
            }
        }
        Ok(())
    }

    const fn alpha(&self, kind: EdgeKind) -> f64 {
        match kind {
            EdgeKind::Syntactic => self.alpha_syntactic,
            EdgeKind::Synonym => self.alpha_synonyms,
            EdgeKind::Hypernym => self.alpha_hypernyms,
        }
    }
}

/// Stroke color per edge kind
const fn edge_color(kind: EdgeKind) -> &'static str {
    match kind {
        EdgeKind::Syntactic => "#4C72B0",
        EdgeKind::Synonym => "#55A868",
        EdgeKind::Hypernym => "#C44E52",
    }
}

const HIGHLIGHT_COLOR: &str = "#DD8452";
const VERTEX_COLOR: &str = "#333333";

/// Render a forma mentis network as an SVG document
pub fn render_formamentis(
    network: &FormamentisNetwork,
    options: &FormamentisRenderOptions,
) -> Result<String> {
    options.validate()?;

    if network.vertices.is_empty() {
        return Ok(document(""));
    }

    let positions = match options.layout {
        NetworkLayout::CircularBundling => circular_positions(network),
        NetworkLayout::Force => force_positions(network),
    };

    let mut body = String::new();

    // Edges first so vertices draw on top
    for (kind, a, b) in kinded_edges(network) {
        let (&(ax, ay), &(bx, by)) = match (positions.get(a), positions.get(b)) {
            (Some(pa), Some(pb)) => (pa, pb),
            _ => continue,
        };
        let color = edge_color(kind);
        let alpha = options.alpha(kind);
        let width = options.thickness;
        match options.layout {
            NetworkLayout::CircularBundling => {
                // Pull the curve toward the center for a bundled look
                let center = CANVAS / 2.0;
                let cx = (ax + bx) / 2.0 * 0.4 + center * 0.6;
                let cy = (ay + by) / 2.0 * 0.4 + center * 0.6;
                let _ = writeln!(
                    body,
                    r#"<path d="M {ax:.1} {ay:.1} Q {cx:.1} {cy:.1} {bx:.1} {by:.1}" fill="none" stroke="{color}" stroke-opacity="{alpha}" stroke-width="{width}"/>"#
                );
            }
            NetworkLayout::Force => {
                let _ = writeln!(
                    body,
                    r#"<line x1="{ax:.1}" y1="{ay:.1}" x2="{bx:.1}" y2="{by:.1}" stroke="{color}" stroke-opacity="{alpha}" stroke-width="{width}"/>"#
                );
            }
        }
    }

    for vertex in &network.vertices {
        let Some(&(x, y)) = positions.get(vertex.as_str()) else {
            continue;
        };
        let highlighted = options.highlight.iter().any(|w| w == vertex);
        let fill = if highlighted {
            HIGHLIGHT_COLOR
        } else {
            VERTEX_COLOR
        };
        let radius = if highlighted { 5.0 } else { 3.0 };
        let _ = writeln!(
            body,
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="{radius}" fill="{fill}"/>"#
        );
        if !options.hide_labels {
            let weight = if highlighted { "bold" } else { "normal" };
            let _ = writeln!(
                body,
                r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="11" font-family="sans-serif" font-weight="{weight}">{}</text>"#,
                y - 8.0,
                escape(vertex)
            );
        }
    }

    Ok(document(&body))
}

/// Every edge with its kind; simple networks draw as syntactic
fn kinded_edges(network: &FormamentisNetwork) -> Vec<(EdgeKind, &str, &str)> {
    match &network.edges {
        EdgeSet::Simple(edges) => edges
            .iter()
            .map(|(a, b)| (EdgeKind::Syntactic, a.as_str(), b.as_str()))
            .collect(),
        EdgeSet::Multiplex(layers) => layers
            .iter()
            .flat_map(|(&kind, edges)| {
                edges.iter().map(move |(a, b)| (kind, a.as_str(), b.as_str()))
            })
            .collect(),
    }
}

/// Evenly spaced positions on a circle, in vertex order
fn circular_positions(network: &FormamentisNetwork) -> FxHashMap<&str, (f64, f64)> {
    let center = CANVAS / 2.0;
    let radius = CANVAS * 0.4;
    let n = network.vertices.len() as f64;
    network
        .vertices
        .iter()
        .enumerate()
        .map(|(i, vertex)| {
            let angle = 2.0 * PI * i as f64 / n;
            (
                vertex.as_str(),
                (
                    center + radius * angle.sin(),
                    center - radius * angle.cos(),
                ),
            )
        })
        .collect()
}

/// Fruchterman-Reingold layout with a fixed seed so output is reproducible
fn force_positions(network: &FormamentisNetwork) -> FxHashMap<&str, (f64, f64)> {
    const ITERATIONS: usize = 100;
    let n = network.vertices.len();
    let mut rng = StdRng::seed_from_u64(7);

    let index: FxHashMap<&str, usize> = network
        .vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect();
    let edges: Vec<(usize, usize)> = network
        .edges
        .iter()
        .filter_map(|(a, b)| Some((*index.get(a.as_str())?, *index.get(b.as_str())?)))
        .collect();

    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;

    for _ in 0..ITERATIONS {
        let mut disp = vec![(0.0_f64, 0.0_f64); n];

        // Repulsion between all pairs
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attraction along edges
        for &(a, b) in &edges {
            let dx = pos[a].0 - pos[b].0;
            let dy = pos[a].1 - pos[b].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        for i in 0..n {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt().max(1e-6);
            let step = len.min(temperature);
            pos[i].0 += dx / len * step;
            pos[i].1 += dy / len * step;
        }
        temperature *= 0.95;
    }

    // Normalize into the canvas with a margin
    let (min_x, max_x) = bounds(pos.iter().map(|p| p.0));
    let (min_y, max_y) = bounds(pos.iter().map(|p| p.1));
    let margin = CANVAS * 0.1;
    let span = CANVAS - 2.0 * margin;
    let scale_x = if max_x > min_x { span / (max_x - min_x) } else { 0.0 };
    let scale_y = if max_y > min_y { span / (max_y - min_y) } else { 0.0 };

    network
        .vertices
        .iter()
        .map(|vertex| {
            let i = index[vertex.as_str()];
            (
                vertex.as_str(),
                (
                    margin + (pos[i].0 - min_x) * scale_x + if scale_x == 0.0 { span / 2.0 } else { 0.0 },
                    margin + (pos[i].1 - min_y) * scale_y + if scale_y == 0.0 { span / 2.0 } else { 0.0 },
                ),
            )
        })
        .collect()
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
