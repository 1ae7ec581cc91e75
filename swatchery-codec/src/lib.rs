//! Format-keyed palette encoders and decoders.
//!
//! Export flows one way: colors in, bytes or text out. Import flows the
//! reverse and every decoder funnels its result through the palette
//! validation gate before success; a parse that extracts zero colors is
//! a decode failure, not an empty palette.

pub mod aco;
pub mod ase;
pub mod css;
pub mod error;
pub mod gpl;
pub mod html;
pub mod json;
pub mod tokens;
pub mod txt;

mod wire;

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use swatchery_color::Color;
use swatchery_palette::Palette;

pub use error::{CodecError, Result};

/// The interchange formats the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Css,
    Scss,
    Less,
    Json,
    Txt,
    Html,
    Gpl,
    Ase,
    Aco,
}

impl Format {
    pub const ALL: [Format; 9] = [
        Format::Css,
        Format::Scss,
        Format::Less,
        Format::Json,
        Format::Txt,
        Format::Html,
        Format::Gpl,
        Format::Ase,
        Format::Aco,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Scss => "scss",
            Format::Less => "less",
            Format::Json => "json",
            Format::Txt => "txt",
            Format::Html => "html",
            Format::Gpl => "gpl",
            Format::Ase => "ase",
            Format::Aco => "aco",
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Format::Ase | Format::Aco)
    }

    /// TXT and HTML are export-only; everything else round-trips.
    pub fn supports_decode(&self) -> bool {
        !matches!(self, Format::Txt | Format::Html)
    }

    /// Resolve a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))?;
        extension.parse()
    }

    /// Guess a format from leading bytes. Returns `None` when nothing
    /// matches unambiguously; callers must fail closed rather than guess
    /// further.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"ASEF") {
            return Some(Format::Ase);
        }
        if bytes.starts_with(b"GIMP Palette") {
            return Some(Format::Gpl);
        }
        if bytes.len() >= 4 && bytes[..2] == [0x00, 0x01] {
            return Some(Format::Aco);
        }
        let text = std::str::from_utf8(bytes).ok()?;
        let first = text.trim_start().chars().next()?;
        if first == '{' || first == '[' {
            return Some(Format::Json);
        }
        None
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(Format::Css),
            "scss" => Ok(Format::Scss),
            "less" => Ok(Format::Less),
            "json" => Ok(Format::Json),
            "txt" => Ok(Format::Txt),
            "html" | "htm" => Ok(Format::Html),
            "gpl" => Ok(Format::Gpl),
            "ase" => Ok(Format::Ase),
            "aco" => Ok(Format::Aco),
            other => Err(CodecError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// An encoded palette: text for the stylesheet-like formats, raw bytes
/// for the binary ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    Text(String),
    Binary(Vec<u8>),
}

impl Encoded {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Encoded::Text(text) => text.into_bytes(),
            Encoded::Binary(bytes) => bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Encoded::Text(text) => Some(text),
            Encoded::Binary(_) => None,
        }
    }
}

/// Encode a color list under a display name. Never fails on well-formed
/// colors.
pub fn encode(format: Format, colors: &[Color], name: &str) -> Encoded {
    match format {
        Format::Css => Encoded::Text(css::encode_css(colors)),
        Format::Scss => Encoded::Text(css::encode_scss(colors)),
        Format::Less => Encoded::Text(css::encode_less(colors)),
        Format::Json => Encoded::Text(json::encode(colors, name)),
        Format::Txt => Encoded::Text(txt::encode(colors, name)),
        Format::Html => Encoded::Text(html::encode(colors, name)),
        Format::Gpl => Encoded::Text(gpl::encode(colors, name)),
        Format::Ase => Encoded::Binary(ase::encode(colors)),
        Format::Aco => Encoded::Binary(aco::encode(colors)),
    }
}

/// Decode a buffer in the declared format into a validated palette.
pub fn decode(format: Format, bytes: &[u8]) -> Result<Palette> {
    match format {
        Format::Css | Format::Scss | Format::Less => css::decode(format, bytes),
        Format::Json => json::decode(bytes),
        Format::Gpl => gpl::decode(bytes),
        Format::Ase => ase::decode(bytes),
        Format::Aco => aco::decode(bytes),
        Format::Txt | Format::Html => Err(CodecError::DecodeUnsupported(format)),
    }
}

/// The raw-text API edge: hex strings are parsed here, then the typed
/// encoder runs. Internal callers pass [`Color`] values directly.
pub fn encode_hex(format: Format, raw_colors: &[String], name: &str) -> Result<Encoded> {
    let colors = raw_colors
        .iter()
        .map(|raw| Color::parse(raw))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(encode(format, &colors, name))
}

/// Encode and write to `path` in one step.
pub fn export_to_path(
    path: &Path,
    format: Format,
    colors: &[Color],
    name: &str,
) -> Result<()> {
    fs::write(path, encode(format, colors, name).into_bytes())?;
    Ok(())
}

/// Read `path` and decode it, resolving the format from the extension
/// first and from the leading bytes second.
pub fn import_from_path(path: &Path) -> Result<Palette> {
    let bytes = fs::read(path)?;
    let format = match Format::from_path(path) {
        Ok(format) if format.supports_decode() => format,
        _ => Format::sniff(&bytes)
            .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))?,
    };
    decode(format, &bytes)
}

/// Shared tail of every importer: refuse empty extractions, then run the
/// result through the palette document gate so no decoder can hand out a
/// palette the validator has not seen.
pub(crate) fn finish_import(
    format: Format,
    name: Option<String>,
    colors: Vec<Color>,
) -> Result<Palette> {
    if colors.is_empty() {
        return Err(CodecError::decode(format, "no valid colors found"));
    }
    let document = swatchery_palette::PaletteDocument {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.unwrap_or_else(|| "Imported Palette".to_string()),
        colors: colors.iter().map(Color::hex).collect(),
    };
    Ok(document.to_palette()?)
}
