//! SVG rendering of emotion profiles and forma mentis networks.
//!
//! The renderers emit self-contained SVG documents: a Plutchik flower for
//! per-emotion scores and circular or force-directed layouts for networks.
//! No drawing toolkit is involved; geometry is computed directly.

pub mod formamentis;
pub mod plutchik;

pub use formamentis::{FormamentisRenderOptions, NetworkLayout, render_formamentis};
pub use plutchik::{PlutchikOptions, render_plutchik};

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;

/// Canvas side length used by all renderers
pub const CANVAS: f64 = 600.0;

/// Escape text for inclusion in SVG
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap body markup in an SVG document of the standard canvas size
#[must_use]
pub fn document(body: &str) -> String {
    let mut svg = String::with_capacity(body.len() + 256);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS}" height="{CANVAS}" viewBox="0 0 {CANVAS} {CANVAS}">"#
    );
    svg.push('\n');
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    svg.push('\n');
    svg.push_str(body);
    svg.push_str("</svg>\n");
    svg
}

/// Write an SVG document to disk
pub fn save_svg(svg: &str, path: &Path) -> Result<()> {
    std::fs::write(path, svg)?;
    log::info!("Wrote SVG to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_document_wraps_body() {
        let svg = document("<circle r=\"2\"/>");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<circle"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
