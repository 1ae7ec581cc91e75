//! The persisted JSON document shape and the validation gate.
//!
//! Every importer in the codec layer funnels through
//! [`PaletteDocument::to_palette`], so a format-specific bug cannot push
//! an invalid palette past this module.

use serde::{Deserialize, Serialize};
use swatchery_color::Color;

use crate::collection::PaletteCollection;
use crate::error::{PaletteError, Result};
use crate::palette::Palette;

/// One palette as persisted: `{"id", "name", "colors": ["#RRGGBB", ...]}`.
/// Hex strings are case-insensitive on read and canonical uppercase on
/// write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDocument {
    pub id: String,
    pub name: String,
    pub colors: Vec<String>,
}

/// The whole persisted collection: `{"palettes": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDocument {
    pub palettes: Vec<PaletteDocument>,
}

impl PaletteDocument {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            id: palette.id().to_string(),
            name: palette.name().to_string(),
            colors: palette.colors().iter().map(Color::hex).collect(),
        }
    }

    /// Structural validation: colors present and every element parseable.
    /// The first offending element is reported with its index.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(PaletteError::MissingField("id"));
        }
        if self.colors.is_empty() {
            return Err(PaletteError::EmptyColors);
        }
        for (index, raw) in self.colors.iter().enumerate() {
            if let Err(err) = Color::parse(raw) {
                return Err(PaletteError::InvalidColor {
                    index,
                    reason: err.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn to_palette(&self) -> Result<Palette> {
        self.validate()?;
        let mut colors = Vec::with_capacity(self.colors.len());
        for (index, raw) in self.colors.iter().enumerate() {
            let color = Color::parse(raw).map_err(|err| PaletteError::InvalidColor {
                index,
                reason: err.to_string(),
            })?;
            colors.push(color);
        }
        Ok(Palette::with_id(&self.id, &self.name, colors))
    }
}

impl CollectionDocument {
    pub fn from_collection(collection: &PaletteCollection) -> Self {
        Self {
            palettes: collection.iter().map(PaletteDocument::from_palette).collect(),
        }
    }

    pub fn to_collection(&self) -> Result<PaletteCollection> {
        let palettes = self
            .palettes
            .iter()
            .map(PaletteDocument::to_palette)
            .collect::<Result<Vec<_>>>()?;
        PaletteCollection::new(palettes)
    }
}
