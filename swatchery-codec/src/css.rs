//! Stylesheet exports (CSS custom properties, SCSS and LESS variables)
//! and the shared CSS-like importer.
//!
//! The importer does not parse a stylesheet grammar. It scans the input
//! for color tokens wherever they appear: `#hex` runs of 3, 4, 6 or 8
//! digits and `rgb()`/`rgba()` calls. Duplicates are dropped while
//! first-seen order is preserved. Alpha digits are accepted and
//! discarded; the color model is opaque sRGB.

use std::fmt::Write;

use swatchery_color::Color;
use swatchery_palette::Palette;

use crate::{CodecError, Format, Result, finish_import};

pub fn encode_css(colors: &[Color]) -> String {
    let mut out = String::from(":root {\n");
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(out, "  --color-{}: {};", index + 1, color.hex());
    }
    out.push_str("}\n");
    out
}

pub fn encode_scss(colors: &[Color]) -> String {
    let mut out = String::new();
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(out, "$color-{}: {};", index + 1, color.hex());
    }
    out
}

pub fn encode_less(colors: &[Color]) -> String {
    let mut out = String::new();
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(out, "@color-{}: {};", index + 1, color.hex());
    }
    out
}

pub fn decode(format: Format, bytes: &[u8]) -> Result<Palette> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| CodecError::decode(format, "input is not valid UTF-8"))?;
    finish_import(format, None, extract_colors(text))
}

/// Scan free-form text for color tokens, in document order, first
/// occurrence wins.
pub fn extract_colors(text: &str) -> Vec<Color> {
    let bytes = text.as_bytes();
    let mut found: Vec<(usize, Color)> = Vec::new();

    for start in memchr::memchr_iter(b'#', bytes) {
        if let Some(color) = hex_token(&bytes[start + 1..]) {
            found.push((start, color));
        }
    }

    for start in memchr::memmem::find_iter(bytes, b"rgb") {
        if let Some(color) = rgb_call(&bytes[start + 3..]) {
            found.push((start, color));
        }
    }

    found.sort_by_key(|(position, _)| *position);

    let mut colors: Vec<Color> = Vec::new();
    for (_, color) in found {
        if !colors.contains(&color) {
            colors.push(color);
        }
    }
    colors
}

/// Hex digits after a `#`. Runs of 3 or 6 are plain colors, 4 and 8
/// carry trailing alpha digits which are dropped; any other run length
/// is not a color token.
fn hex_token(rest: &[u8]) -> Option<Color> {
    let run = rest
        .iter()
        .take(8)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();

    let digits = match run {
        3 | 4 => &rest[..3],
        6 | 8 => &rest[..6],
        _ => return None,
    };

    let text = std::str::from_utf8(digits).ok()?;
    Color::parse(text).ok()
}

/// The tail of an `rgb`/`rgba` call, starting right after the `rgb`
/// letters. Channel values are integers 0..=255; a fourth argument is
/// validated as a number and otherwise ignored.
fn rgb_call(rest: &[u8]) -> Option<Color> {
    let rest = rest.strip_prefix(b"a").unwrap_or(rest);
    let open = rest.first()?;
    if *open != b'(' {
        return None;
    }
    let close = memchr::memchr(b')', rest)?;
    let body = std::str::from_utf8(&rest[1..close]).ok()?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    if parts.len() == 4 {
        let alpha = parts[3].trim_end_matches('%');
        alpha.parse::<f64>().ok()?;
    }

    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    Some(Color::new(r, g, b))
}
