pub mod collection;
pub mod document;
pub mod error;
pub mod palette;
pub mod storage;

pub use collection::PaletteCollection;
pub use document::{CollectionDocument, PaletteDocument};
pub use error::{PaletteError, Result};
pub use palette::Palette;
pub use storage::{CollectionLoad, CollectionLoadStatus};
