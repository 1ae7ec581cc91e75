pub mod color;
pub mod contrast;
pub mod harmony;
pub mod parse;
pub mod space;

pub use color::Color;
pub use contrast::{ContrastReport, Suggestion, SuggestionRole};
pub use harmony::HarmonyScheme;
pub use parse::ColorParseError;
pub use space::{Cmyk, Hsl, Hsv};
