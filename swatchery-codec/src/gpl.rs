//! GIMP palette (`.gpl`) text format.
//!
//! ```text
//! GIMP Palette
//! Name: Sunset
//! Columns: 8
//! #
//! 255 85 0 #FF5500
//! ```
//!
//! The reader requires the `GIMP Palette` header, honors the `Name:`
//! field, skips `#` comments and blank lines, and clamps out-of-range
//! channel integers into 0..=255. Rows that do not start with three
//! integers are skipped.

use std::fmt::Write;

use log::debug;

use swatchery_color::Color;
use swatchery_palette::Palette;

use crate::{CodecError, Format, Result, finish_import};

pub fn encode(colors: &[Color], name: &str) -> String {
    let mut out = String::from("GIMP Palette\n");
    let _ = writeln!(out, "Name: {name}");
    out.push_str("Columns: 8\n#\n");
    for color in colors {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            color.r(),
            color.g(),
            color.b(),
            color.hex()
        );
    }
    out
}

pub fn decode(bytes: &[u8]) -> Result<Palette> {
    let fail = |detail: &str| CodecError::decode(Format::Gpl, detail);

    let text = std::str::from_utf8(bytes)
        .map_err(|_| fail("input is not valid UTF-8"))?;

    let mut lines = text.lines().map(str::trim);
    let header = lines
        .find(|line| !line.is_empty())
        .ok_or_else(|| fail("empty input"))?;
    if header != "GIMP Palette" {
        return Err(fail("missing GIMP Palette header"));
    }

    let mut name = None;
    let mut colors = Vec::new();
    for line in lines {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(value) = line.strip_prefix("Name:") {
            name = Some(value.trim().to_string());
            continue;
        }
        if line.starts_with("Columns:") {
            continue;
        }

        if let Some(color) = parse_row(line) {
            colors.push(color);
        } else {
            debug!("skipping malformed GPL row: {line}");
        }
    }

    finish_import(Format::Gpl, name, colors)
}

/// `R G B [name]`; the trailing name is ignored. Channels outside
/// 0..=255 are clamped rather than rejected.
fn parse_row(line: &str) -> Option<Color> {
    let mut fields = line.split_whitespace();
    let r = channel(fields.next()?)?;
    let g = channel(fields.next()?)?;
    let b = channel(fields.next()?)?;
    Some(Color::new(r, g, b))
}

fn channel(field: &str) -> Option<u8> {
    let value = field.parse::<i64>().ok()?;
    Some(value.clamp(0, 255) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_scenario_lines() {
        let gpl = encode(&[Color::new(255, 0, 0)], "Reds");
        let lines: Vec<&str> = gpl.lines().collect();
        assert!(lines.contains(&"GIMP Palette"));
        assert!(lines.contains(&"Name: Reds"));
        assert!(lines.contains(&"Columns: 8"));
        assert!(lines.contains(&"255 0 0 #FF0000"));
    }

    #[test]
    fn round_trip_preserves_name_and_colors() {
        let colors = vec![Color::new(255, 85, 0), Color::new(18, 52, 86)];
        let palette = decode(encode(&colors, "Sunset").as_bytes()).unwrap();
        assert_eq!(palette.name(), "Sunset");
        assert_eq!(palette.colors(), colors.as_slice());
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let palette = decode(b"GIMP Palette\nName: Hot\n999 -4 128 overdrive\n").unwrap();
        assert_eq!(palette.colors(), &[Color::new(255, 0, 128)]);
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let input = "GIMP Palette\n# a comment\n\nColumns: 8\n0 0 0 ink\n";
        let palette = decode(input.as_bytes()).unwrap();
        assert_eq!(palette.colors(), &[Color::BLACK]);
    }

    #[test]
    fn missing_header_fails_closed() {
        assert!(matches!(
            decode(b"255 0 0 red\n"),
            Err(CodecError::Decode { .. })
        ));
    }

    #[test]
    fn header_without_rows_fails_closed() {
        assert!(matches!(
            decode(b"GIMP Palette\nName: Empty\n"),
            Err(CodecError::Decode { .. })
        ));
    }
}
