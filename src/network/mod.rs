//! Forma mentis networks.
//!
//! A forma mentis network is the set of conceptual associations a text draws
//! between words: co-occurring words are linked within each sentence, and the
//! link set can be enriched with synonym and hypernym relations. Networks come
//! in a simple single-layer form or a multiplex form that keeps each edge kind
//! in its own layer.

pub mod builder;
pub mod io;

pub use builder::{Enrichment, FormamentisBuilder};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashSet;

/// An undirected association between two words
pub type Edge = (String, String);

/// The kind of association an edge encodes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Words co-occurring within a sentence window
    Syntactic,
    /// Words linked by a synonym relation
    Synonym,
    /// Words linked by a hypernym relation
    Hypernym,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntactic => f.write_str("syntactic"),
            Self::Synonym => f.write_str("synonym"),
            Self::Hypernym => f.write_str("hypernym"),
        }
    }
}

/// Edge storage: one flat list, or one list per kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeSet {
    /// All edges in a single layer
    Simple(Vec<Edge>),
    /// One layer per edge kind
    Multiplex(BTreeMap<EdgeKind, Vec<Edge>>),
}

impl EdgeSet {
    /// Iterate every edge regardless of layer
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        match self {
            Self::Simple(edges) => Box::new(edges.iter()),
            Self::Multiplex(layers) => Box::new(layers.values().flatten()),
        }
    }

    /// Total number of edges across layers
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Simple(edges) => edges.len(),
            Self::Multiplex(layers) => layers.values().map(Vec::len).sum(),
        }
    }

    /// Whether the set holds no edges
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A forma mentis network: edges plus the vertex set they span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormamentisNetwork {
    /// The association edges
    pub edges: EdgeSet,
    /// Sorted, deduplicated vertex list
    pub vertices: Vec<String>,
}

impl FormamentisNetwork {
    /// Build a simple network from an edge list, deriving the vertex set
    #[must_use]
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let vertices = collect_vertices(edges.iter());
        Self {
            edges: EdgeSet::Simple(edges),
            vertices,
        }
    }

    /// Build a multiplex network from per-kind edge lists
    #[must_use]
    pub fn from_layers(layers: BTreeMap<EdgeKind, Vec<Edge>>) -> Self {
        let vertices = collect_vertices(layers.values().flatten());
        Self {
            edges: EdgeSet::Multiplex(layers),
            vertices,
        }
    }

    /// Whether the network keeps separate edge layers
    #[must_use]
    pub const fn is_multiplex(&self) -> bool {
        matches!(self.edges, EdgeSet::Multiplex(_))
    }

    /// Number of edges incident to a word
    #[must_use]
    pub fn degree(&self, word: &str) -> usize {
        self.edges
            .iter()
            .filter(|(a, b)| a == word || b == word)
            .count()
    }

    /// Distinct words adjacent to `word`, sorted
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<&str> {
        let mut found: Vec<&str> = self
            .edges
            .iter()
            .filter_map(|(a, b)| {
                if a == word {
                    Some(b.as_str())
                } else if b == word {
                    Some(a.as_str())
                } else {
                    None
                }
            })
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }

    /// The semantic frame of a single word: every edge touching `target`,
    /// plus the edges among the vertex set those induce.
    #[must_use]
    pub fn neighborhood(&self, target: &str) -> Self {
        match &self.edges {
            EdgeSet::Simple(edges) => {
                let frame = induced_subgraph(edges, target);
                Self::from_edges(frame)
            }
            EdgeSet::Multiplex(layers) => {
                // Vertex set is induced across all layers together
                let mut vertex_set: FxHashSet<&str> = FxHashSet::default();
                for (a, b) in self.edges.iter() {
                    if a == target || b == target {
                        vertex_set.insert(a);
                        vertex_set.insert(b);
                    }
                }
                let kept: BTreeMap<EdgeKind, Vec<Edge>> = layers
                    .iter()
                    .map(|(kind, edges)| {
                        let edges = edges
                            .iter()
                            .filter(|(a, b)| {
                                vertex_set.contains(a.as_str()) && vertex_set.contains(b.as_str())
                            })
                            .cloned()
                            .collect();
                        (*kind, edges)
                    })
                    .collect();
                Self::from_layers(kept)
            }
        }
    }

    /// Collapse a multiplex network into a simple one, deduplicating edges
    /// that appear in several layers
    #[must_use]
    pub fn flattened(&self) -> Self {
        match &self.edges {
            EdgeSet::Simple(_) => self.clone(),
            EdgeSet::Multiplex(_) => {
                let mut seen: FxHashSet<(String, String)> = FxHashSet::default();
                let mut edges = Vec::new();
                for (a, b) in self.edges.iter() {
                    let key = ordered(a, b);
                    if seen.insert(key) {
                        edges.push((a.clone(), b.clone()));
                    }
                }
                Self::from_edges(edges)
            }
        }
    }
}

/// Edges among the induced vertex set of a target's frame
fn induced_subgraph(edges: &[Edge], target: &str) -> Vec<Edge> {
    let mut vertex_set: FxHashSet<&str> = FxHashSet::default();
    for (a, b) in edges {
        if a == target || b == target {
            vertex_set.insert(a);
            vertex_set.insert(b);
        }
    }
    edges
        .iter()
        .filter(|(a, b)| vertex_set.contains(a.as_str()) && vertex_set.contains(b.as_str()))
        .cloned()
        .collect()
}

/// Normalize an edge to an unordered key
pub(crate) fn ordered(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

fn collect_vertices<'a>(edges: impl Iterator<Item = &'a Edge>) -> Vec<String> {
    let mut vertices: Vec<String> = edges
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect();
    vertices.sort_unstable();
    vertices.dedup();
    vertices
}
