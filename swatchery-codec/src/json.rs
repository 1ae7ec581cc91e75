//! JSON palette exchange.
//!
//! Export writes `{"name": ..., "colors": ["#RRGGBB", ...]}`. Import is
//! more forgiving: it accepts that object, a full palette-document
//! element (with an id), or a bare array of hex strings, synthesizing
//! the missing identity. Whatever the shape, the extracted strings run
//! through the palette document validator before success.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use swatchery_color::Color;
use swatchery_palette::{Palette, PaletteDocument};

use crate::{CodecError, Format, Result};

#[derive(Serialize)]
struct ExportDocument<'a> {
    name: &'a str,
    colors: Vec<String>,
}

pub fn encode(colors: &[Color], name: &str) -> String {
    let document = ExportDocument {
        name,
        colors: colors.iter().map(Color::hex).collect(),
    };
    // A struct of a str and strings cannot fail to serialize.
    serde_json::to_string_pretty(&document).unwrap_or_default()
}

pub fn decode(bytes: &[u8]) -> Result<Palette> {
    let fail = |detail: &str| CodecError::decode(Format::Json, detail);

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| fail(&format!("invalid JSON: {err}")))?;

    let (id, name, colors) = match &value {
        Value::Object(object) => {
            let colors = object
                .get("colors")
                .ok_or_else(|| fail("missing `colors` array"))?;
            (
                object.get("id").and_then(Value::as_str),
                object.get("name").and_then(Value::as_str),
                color_strings(colors).ok_or_else(|| fail("`colors` must be an array of strings"))?,
            )
        },
        Value::Array(_) => (
            None,
            None,
            color_strings(&value).ok_or_else(|| fail("expected an array of strings"))?,
        ),
        _ => return Err(fail("expected an object or an array")),
    };

    if colors.is_empty() {
        return Err(fail("no valid colors found"));
    }

    let document = PaletteDocument {
        id: id.map_or_else(|| Uuid::new_v4().to_string(), str::to_string),
        name: name.unwrap_or("Imported Palette").to_string(),
        colors,
    };
    Ok(document.to_palette()?)
}

fn color_strings(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|element| element.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_shape() {
        let json = encode(&[Color::new(255, 0, 0)], "Reds");
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Reds");
        assert_eq!(value["colors"][0], "#FF0000");
    }

    #[test]
    fn round_trip_preserves_name_and_colors() {
        let colors = vec![Color::new(255, 85, 0), Color::new(18, 52, 86)];
        let palette = decode(encode(&colors, "Sunset").as_bytes()).unwrap();
        assert_eq!(palette.name(), "Sunset");
        assert_eq!(palette.colors(), colors.as_slice());
    }

    #[test]
    fn bare_arrays_synthesize_identity() {
        let palette = decode(br##"["#FF0000", "#00ff00"]"##).unwrap();
        assert_eq!(palette.name(), "Imported Palette");
        assert!(!palette.id().is_empty());
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn document_elements_keep_their_id() {
        let palette =
            decode(br##"{"id": "p-7", "name": "Kept", "colors": ["#123456"]}"##).unwrap();
        assert_eq!(palette.id(), "p-7");
        assert_eq!(palette.name(), "Kept");
    }

    #[test]
    fn invalid_element_fails_validation_with_its_index() {
        let err = decode(br##"{"colors": ["#FF0000", "#XYZ"]}"##).unwrap_err();
        assert!(matches!(err, CodecError::Validation(_)));
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn empty_and_malformed_inputs_fail_closed() {
        assert!(matches!(decode(b"[]"), Err(CodecError::Decode { .. })));
        assert!(matches!(decode(b"{}"), Err(CodecError::Decode { .. })));
        assert!(matches!(decode(b"not json"), Err(CodecError::Decode { .. })));
        assert!(matches!(
            decode(br#"{"colors": [1, 2]}"#),
            Err(CodecError::Decode { .. })
        ));
    }
}
