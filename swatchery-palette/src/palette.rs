use swatchery_color::Color;
use uuid::Uuid;

/// An ordered, named set of colors with a stable opaque identity.
///
/// The id is generated once at construction and never reassigned; the
/// name is mutable. Insertion order is significant and duplicates are
/// allowed. Every index operation is bounds-checked and signals through
/// its return value instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    id: String,
    name: String,
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            colors,
        }
    }

    /// Rebuild a palette from persisted parts, keeping its original id.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        colors: Vec<Color>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Remove and return the color at `index`, or `None` when out of
    /// range.
    pub fn remove_color(&mut self, index: usize) -> Option<Color> {
        if index < self.colors.len() {
            Some(self.colors.remove(index))
        } else {
            None
        }
    }

    /// Replace the color at `index`. Returns whether anything changed.
    pub fn update_color(&mut self, index: usize, color: Color) -> bool {
        match self.colors.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            },
            None => false,
        }
    }

    pub fn get_color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }
}
