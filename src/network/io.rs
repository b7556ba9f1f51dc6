//! Plain-text import and export of forma mentis edge lists.
//!
//! The format is one edge per line, `word , word`. Only simple networks are
//! supported; multiplex layers have no representation in the format.

use std::fs;
use std::path::Path;

use crate::error::{EmoGraphError, Result};
use crate::network::{EdgeSet, FormamentisNetwork};

/// Write a simple network's edges to a text file
pub fn export_edges(network: &FormamentisNetwork, path: &Path) -> Result<()> {
    let EdgeSet::Simple(edges) = &network.edges else {
        return Err(EmoGraphError::network(
            "Multiplex networks cannot be exported to an edge file",
        ));
    };

    let mut out = String::new();
    for (a, b) in edges {
        out.push_str(a);
        out.push_str(" , ");
        out.push_str(b);
        out.push('\n');
    }
    fs::write(path, out)?;
    log::info!("Exported {} edges to {}", edges.len(), path.display());
    Ok(())
}

/// Read a network back from an edge file
pub fn import_edges(path: &Path) -> Result<FormamentisNetwork> {
    let content = fs::read_to_string(path)?;
    let mut edges = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ',');
        let (Some(a), Some(b)) = (parts.next(), parts.next()) else {
            return Err(EmoGraphError::EdgeFile {
                path: path.to_path_buf(),
                message: format!("Line {} is not a `word , word` pair", lineno + 1),
            });
        };
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() {
            return Err(EmoGraphError::EdgeFile {
                path: path.to_path_buf(),
                message: format!("Line {} has an empty endpoint", lineno + 1),
            });
        }
        edges.push((a.to_string(), b.to_string()));
    }

    Ok(FormamentisNetwork::from_edges(edges))
}
