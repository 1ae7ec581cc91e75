//! Plain-text export, one numbered line per color. Export-only.

use std::fmt::Write;

use swatchery_color::Color;

pub fn encode(colors: &[Color], name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Palette: {name}");
    out.push('\n');
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(
            out,
            "Color {}: {} (RGB: {}, {}, {})",
            index + 1,
            color.hex(),
            color.r(),
            color.g(),
            color.b()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_rows_with_hex_and_rgb() {
        let text = encode(
            &[Color::new(255, 0, 0), Color::new(18, 52, 86)],
            "Sample",
        );
        assert!(text.starts_with("Palette: Sample\n"));
        assert!(text.contains("Color 1: #FF0000 (RGB: 255, 0, 0)"));
        assert!(text.contains("Color 2: #123456 (RGB: 18, 52, 86)"));
    }
}
