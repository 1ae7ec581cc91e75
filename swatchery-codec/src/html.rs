//! Self-contained HTML palette preview. Export-only.
//!
//! Each swatch shows its hex and `rgb()` values; the label color flips
//! between black and white using the 299/587/114 luma weighting so text
//! stays readable on any swatch.

use std::fmt::Write;

use swatchery_color::Color;

/// Integer luma in 0..=255 by the ITU-R BT.601 weights.
fn luma(color: &Color) -> u32 {
    (299 * u32::from(color.r()) + 587 * u32::from(color.g()) + 114 * u32::from(color.b()))
        / 1000
}

fn label_color(color: &Color) -> &'static str {
    if luma(color) >= 128 { "#000000" } else { "#FFFFFF" }
}

pub fn encode(colors: &[Color], name: &str) -> String {
    let title = escape(name);
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n\
         body {{ font-family: sans-serif; margin: 2rem; }}\n\
         .palette {{ display: flex; flex-wrap: wrap; gap: 8px; }}\n\
         .swatch {{ width: 140px; height: 140px; display: flex; flex-direction: column; \
         justify-content: flex-end; padding: 8px; border-radius: 4px; }}\n\
         .swatch span {{ font-size: 13px; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n<div class=\"palette\">\n"
    );

    for color in colors {
        let _ = writeln!(
            out,
            "  <div class=\"swatch\" style=\"background: {bg}; color: {fg};\">\
             <span>{bg}</span><span>rgb({r}, {g}, {b})</span></div>",
            bg = color.hex(),
            fg = label_color(color),
            r = color.r(),
            g = color.g(),
            b = color.b(),
        );
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_self_contained() {
        let html = encode(&[Color::new(255, 0, 0)], "Reds");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Reds</title>"));
        assert!(html.contains("#FF0000"));
        assert!(html.contains("rgb(255, 0, 0)"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn label_contrast_flips_on_luma() {
        assert_eq!(label_color(&Color::new(255, 255, 0)), "#000000");
        assert_eq!(label_color(&Color::new(0, 0, 128)), "#FFFFFF");
        // Pure red sits below the midpoint: 299 * 255 / 1000 = 76.
        assert_eq!(label_color(&Color::new(255, 0, 0)), "#FFFFFF");
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let html = encode(&[Color::BLACK], "<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
