use thiserror::Error;

use swatchery_color::ColorParseError;
use swatchery_palette::PaletteError;

use crate::Format;

/// Errors raised by the codec registry.
///
/// Decoding fails closed: a structurally invalid buffer yields a
/// [`CodecError::Decode`], never a truncated palette. Encoding does not
/// fail on a well-formed color list.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported format `{0}`")]
    UnsupportedFormat(String),

    #[error("format {0} is export-only")]
    DecodeUnsupported(Format),

    #[error("{format} decode failed: {detail}")]
    Decode { format: Format, detail: String },

    #[error(transparent)]
    Parse(#[from] ColorParseError),

    #[error(transparent)]
    Validation(#[from] PaletteError),

    #[error("codec io failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub(crate) fn decode(format: Format, detail: impl Into<String>) -> Self {
        Self::Decode {
            format,
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
