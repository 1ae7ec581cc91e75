//! Semantic design-token expansion.
//!
//! A flat palette mapping (keys such as `"primary"` and `"text"`) is
//! expanded into a fixed taxonomy of design tokens covering backgrounds,
//! text, borders, shadows, forms, buttons, links and status colors,
//! ready for CSS export. The taxonomy is a static table and expansion is
//! a pure fold over it, with a fixed fallback color for palette keys the
//! mapping does not provide.

use std::collections::HashMap;
use std::fmt::Write;

use swatchery_color::Color;

/// Where a token takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// A key into the palette mapping.
    Key(&'static str),
    /// A fixed color independent of the palette.
    Literal(Color),
}

/// One entry of the token taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpec {
    pub name: &'static str,
    pub source: TokenSource,
}

/// Color used when a referenced palette key is absent from the mapping.
pub const FALLBACK_COLOR: Color = Color::BLACK;

const fn key(name: &'static str, source: &'static str) -> TokenSpec {
    TokenSpec {
        name,
        source: TokenSource::Key(source),
    }
}

const fn literal(name: &'static str, color: Color) -> TokenSpec {
    TokenSpec {
        name,
        source: TokenSource::Literal(color),
    }
}

/// The full token taxonomy, in emission order.
pub const TOKEN_TABLE: &[TokenSpec] = &[
    // Backgrounds
    key("background-primary", "background"),
    key("background-secondary", "surface"),
    key("background-elevated", "surface"),
    key("background-muted", "muted"),
    key("background-inverse", "text"),
    key("background-accent", "accent"),
    // Text
    key("text-primary", "text"),
    key("text-secondary", "muted"),
    key("text-inverse", "background"),
    key("text-accent", "accent"),
    key("text-error", "error"),
    key("text-warning", "warning"),
    key("text-success", "success"),
    key("text-info", "info"),
    // Borders
    key("border-default", "muted"),
    key("border-strong", "secondary"),
    key("border-focus", "accent"),
    key("border-error", "error"),
    // Shadows
    literal("shadow-color", Color::new(0, 0, 0)),
    literal("shadow-highlight", Color::new(255, 255, 255)),
    // Forms
    key("form-input-background", "surface"),
    key("form-input-text", "text"),
    key("form-input-border", "muted"),
    key("form-input-placeholder", "muted"),
    key("form-label", "text"),
    // Buttons
    key("button-primary-background", "primary"),
    key("button-primary-text", "background"),
    key("button-secondary-background", "secondary"),
    key("button-secondary-text", "text"),
    key("button-disabled-background", "muted"),
    key("button-disabled-text", "surface"),
    // Links
    key("link-default", "accent"),
    key("link-hover", "primary"),
    key("link-visited", "secondary"),
    // Status
    key("status-error", "error"),
    key("status-warning", "warning"),
    key("status-success", "success"),
    key("status-info", "info"),
];

/// One expanded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedToken {
    pub name: &'static str,
    pub color: Color,
}

/// Expand the taxonomy against a palette mapping. Output order is table
/// order; missing keys resolve to [`FALLBACK_COLOR`].
pub fn expand(mapping: &HashMap<String, Color>) -> Vec<ResolvedToken> {
    TOKEN_TABLE
        .iter()
        .map(|spec| ResolvedToken {
            name: spec.name,
            color: match spec.source {
                TokenSource::Key(key) => {
                    mapping.get(key).copied().unwrap_or(FALLBACK_COLOR)
                },
                TokenSource::Literal(color) => color,
            },
        })
        .collect()
}

/// Render expanded tokens as a `:root` block of CSS custom properties.
pub fn to_css(tokens: &[ResolvedToken]) -> String {
    let mut out = String::from(":root {\n");
    for token in tokens {
        let _ = writeln!(out, "  --{}: {};", token.name, token.color.hex());
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> HashMap<String, Color> {
        HashMap::from([
            ("primary".to_string(), Color::new(255, 85, 0)),
            ("background".to_string(), Color::new(18, 18, 18)),
            ("text".to_string(), Color::new(232, 232, 232)),
            ("accent".to_string(), Color::new(77, 168, 218)),
        ])
    }

    #[test]
    fn expansion_covers_the_whole_table_in_order() {
        let tokens = expand(&mapping());
        assert_eq!(tokens.len(), TOKEN_TABLE.len());
        assert_eq!(tokens[0].name, "background-primary");
        assert_eq!(tokens[0].color, Color::new(18, 18, 18));
        let names: Vec<_> = tokens.iter().map(|t| t.name).collect();
        let expected: Vec<_> = TOKEN_TABLE.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn missing_keys_fall_back() {
        let tokens = expand(&mapping());
        let error = tokens.iter().find(|t| t.name == "status-error").unwrap();
        assert_eq!(error.color, FALLBACK_COLOR);
    }

    #[test]
    fn literals_ignore_the_mapping() {
        let tokens = expand(&HashMap::new());
        let shadow = tokens.iter().find(|t| t.name == "shadow-highlight").unwrap();
        assert_eq!(shadow.color, Color::WHITE);
    }

    #[test]
    fn expansion_is_deterministic() {
        assert_eq!(expand(&mapping()), expand(&mapping()));
    }

    #[test]
    fn css_rendering() {
        let css = to_css(&expand(&mapping()));
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --button-primary-background: #FF5500;\n"));
        assert!(css.contains("  --link-default: #4DA8DA;\n"));
        assert!(css.trim_end().ends_with('}'));
    }
}
