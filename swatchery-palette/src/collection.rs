use swatchery_color::Color;

use crate::error::{PaletteError, Result};
use crate::palette::Palette;

/// An id-keyed set of palettes with stable insertion order.
///
/// The collection is never empty: building one from nothing synthesizes
/// a default palette, and removing the last palette does the same. Ids
/// are unique; iteration order is insertion order so persistence stays
/// stable across save/load cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteCollection {
    palettes: Vec<Palette>,
}

impl PaletteCollection {
    pub fn new(palettes: Vec<Palette>) -> Result<Self> {
        let mut collection = Self {
            palettes: Vec::new(),
        };
        for palette in palettes {
            collection.add(palette)?;
        }
        collection.ensure_non_empty();
        Ok(collection)
    }

    fn default_palette() -> Palette {
        Palette::new(
            "Default",
            vec![Color::BLACK, Color::new(128, 128, 128), Color::WHITE],
        )
    }

    fn ensure_non_empty(&mut self) {
        if self.palettes.is_empty() {
            self.palettes.push(Self::default_palette());
        }
    }

    pub fn add(&mut self, palette: Palette) -> Result<()> {
        if self.palettes.iter().any(|p| p.id() == palette.id()) {
            return Err(PaletteError::DuplicateId(palette.id().to_string()));
        }
        self.palettes.push(palette);
        Ok(())
    }

    /// Remove a palette by id. Removing the last one re-synthesizes the
    /// default so the collection is never left empty.
    pub fn remove(&mut self, id: &str) -> Option<Palette> {
        let index = self.palettes.iter().position(|p| p.id() == id)?;
        let removed = self.palettes.remove(index);
        self.ensure_non_empty();
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Palette> {
        self.palettes.iter_mut().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl Default for PaletteCollection {
    fn default() -> Self {
        Self {
            palettes: vec![Self::default_palette()],
        }
    }
}
