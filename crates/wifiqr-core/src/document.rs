//! Print document composition.
//!
//! The Document Composer collaborator: wraps a rendered symbol and the
//! network name into a self-contained, print-ready HTML card. The network
//! name is user input landing in markup, so it is HTML-escaped here; the
//! SVG comes from our own renderer and is embedded as-is.

use chrono::Utc;

/// Escapes the five HTML-significant characters.
fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Composes a printable HTML card embedding the rendered QR symbol.
///
/// The card carries a heading, the symbol, the network name, a scan hint,
/// and the generation date. Styling is inline so the document prints the
/// same everywhere without external assets.
#[must_use]
pub fn compose_print_html(network_name: &str, qr_svg: &str) -> String {
    let name = html_escape(network_name);
    let generated = Utc::now().format("%Y-%m-%d");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>WiFi access: {name}</title>
<style>
  body {{ font-family: system-ui, sans-serif; margin: 0; display: flex; justify-content: center; }}
  .card {{ text-align: center; padding: 2rem; border: 1px solid #ccc; border-radius: 12px; margin-top: 3rem; }}
  .card h1 {{ font-size: 1.4rem; margin: 0 0 1rem; }}
  .card .network {{ font-size: 1.1rem; font-weight: 600; margin-top: 1rem; }}
  .card .hint {{ color: #555; margin-top: 0.25rem; }}
  .card .generated {{ color: #999; font-size: 0.8rem; margin-top: 1.5rem; }}
  @media print {{ .card {{ border: none; margin-top: 0; }} }}
</style>
</head>
<body>
<div class="card">
  <h1>Connect to WiFi</h1>
  {qr_svg}
  <div class="network">{name}</div>
  <div class="hint">Point your camera at the code to join</div>
  <div class="generated">Generated {generated}</div>
</div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_embeds_svg_and_name() {
        let html = compose_print_html("HomeNet", "<svg>symbol</svg>");
        assert!(html.contains("<svg>symbol</svg>"));
        assert!(html.contains("HomeNet"));
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_network_name_is_html_escaped() {
        let html = compose_print_html("Guest<script>", "<svg/>");
        assert!(html.contains("Guest&lt;script&gt;"));
        assert!(!html.contains("Guest<script>"));
    }

    #[test]
    fn test_html_escape_covers_all_entities() {
        assert_eq!(html_escape("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_document_carries_generation_date() {
        let html = compose_print_html("Net", "<svg/>");
        let year = Utc::now().format("%Y").to_string();
        assert!(html.contains(&format!("Generated {year}")));
    }
}
