//! The single textual parse boundary for [`Color`].
//!
//! Raw text is accepted here and nowhere else; everything behind this
//! module operates on the value type. Supported forms are 3/6-digit hex
//! (`#` optional, case-insensitive), `rgb(r, g, b)` and `hsl(h, s%, l%)`.

use thiserror::Error;

use crate::Color;
use crate::space::Hsl;

/// A color string that matches none of the accepted grammars, carrying
/// the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color string `{0}`")]
pub struct ColorParseError(pub String);

pub(crate) fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let fail = || ColorParseError(input.to_string());
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(fail());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(inner) = function_body(&lower, "rgb") {
        parse_rgb_function(inner).ok_or_else(fail)
    } else if let Some(inner) = function_body(&lower, "hsl") {
        parse_hsl_function(inner).ok_or_else(fail)
    } else {
        parse_hex(trimmed).ok_or_else(fail)
    }
}

fn function_body<'a>(lower: &'a str, name: &str) -> Option<&'a str> {
    lower
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Parse `rgb` or `rrggbb`, with an optional leading `#`. Any other
/// digit count is rejected outright.
fn parse_hex(input: &str) -> Option<Color> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let mut chars = digits.chars();
            let mut next = || {
                let d = chars.next()?.to_digit(16)?;
                Some((d * 17) as u8)
            };
            Some(Color::new(next()?, next()?, next()?))
        },
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(Color::new(r, g, b))
        },
        _ => None,
    }
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let mut parts = body.split(',');
    let r = parse_channel(parts.next()?)?;
    let g = parse_channel(parts.next()?)?;
    let b = parse_channel(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::new(r, g, b))
}

fn parse_channel(part: &str) -> Option<u8> {
    part.trim().parse::<u8>().ok()
}

fn parse_hsl_function(body: &str) -> Option<Color> {
    let mut parts = body.split(',');
    let h = parse_bounded(parts.next()?, 360)?;
    let s = parse_bounded(parts.next()?, 100)?;
    let l = parse_bounded(parts.next()?, 100)?;
    if parts.next().is_some() {
        return None;
    }

    Some(Color::from_hsl(Hsl {
        h: f64::from(h),
        s: f64::from(s),
        l: f64::from(l),
    }))
}

/// An integer in `0..=max`, with an optional trailing `%`.
fn parse_bounded(part: &str, max: u16) -> Option<u16> {
    let digits = part.trim().trim_end_matches('%').trim();
    let value = digits.parse::<u16>().ok()?;
    (value <= max).then_some(value)
}
