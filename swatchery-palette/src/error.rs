use thiserror::Error;

/// Errors raised by the palette domain model and its persistence.
///
/// Validation outcomes are expected results and are always returned,
/// never panicked; the io/json variants cover the narrower fatal channel.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("palette colors are empty")]
    EmptyColors,

    #[error("invalid color at index {index}: {reason}")]
    InvalidColor { index: usize, reason: String },

    #[error("duplicate palette id `{0}`")]
    DuplicateId(String),

    #[error("palette io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("palette json failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
