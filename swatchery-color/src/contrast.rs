//! WCAG contrast analysis and alternative-color search.

use crate::Color;

/// WCAG 2.x minimum contrast ratios.
pub const AA_LARGE: f64 = 3.0;
pub const AA_NORMAL: f64 = 4.5;
pub const AAA_LARGE: f64 = 4.5;
pub const AAA_NORMAL: f64 = 7.0;

/// Channel difference (out of 255) below which two colors are treated as
/// indistinguishable for a given dichromacy. A coarse heuristic, not a
/// simulation of dichromatic vision.
const CHANNEL_THRESHOLD: i16 = 100;

/// Relative luminance per WCAG: sRGB channels linearized and weighted.
pub fn relative_luminance(color: Color) -> f64 {
    fn linear(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linear(color.r()) + 0.7152 * linear(color.g()) + 0.0722 * linear(color.b())
}

/// Contrast ratio between two colors, `(L_max + 0.05) / (L_min + 0.05)`.
/// Symmetric in its arguments; ranges from 1.0 to 21.0.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Computed WCAG compliance for a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    pub fn evaluate(foreground: Color, background: Color) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            ratio,
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }
}

/// Which of the pair a suggestion replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionRole {
    Foreground,
    Background,
}

/// One compliant replacement found by [`suggest_alternatives`].
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub color: Color,
    pub role: SuggestionRole,
    pub description: String,
    pub ratio: f64,
}

/// Search for compliant variants of a non-compliant pair.
///
/// Four branches are tried in a fixed order (lighten the foreground,
/// darken the foreground, lighten the background, darken the background)
/// at amounts 0.1 through 0.4. Each branch contributes at most one
/// suggestion, the first amount that reaches `target`, so the result
/// holds at most four entries. An already compliant pair yields none.
pub fn suggest_alternatives(
    foreground: Color,
    background: Color,
    target: f64,
) -> Vec<Suggestion> {
    if contrast_ratio(foreground, background) >= target {
        return Vec::new();
    }

    const AMOUNTS: [f64; 4] = [0.1, 0.2, 0.3, 0.4];

    struct Branch {
        role: SuggestionRole,
        verb: &'static str,
        adjust: fn(&Color, f64) -> Color,
    }

    let branches = [
        Branch {
            role: SuggestionRole::Foreground,
            verb: "lighten",
            adjust: Color::lighten,
        },
        Branch {
            role: SuggestionRole::Foreground,
            verb: "darken",
            adjust: Color::darken,
        },
        Branch {
            role: SuggestionRole::Background,
            verb: "lighten",
            adjust: Color::lighten,
        },
        Branch {
            role: SuggestionRole::Background,
            verb: "darken",
            adjust: Color::darken,
        },
    ];

    let mut suggestions = Vec::new();
    for branch in branches {
        for amount in AMOUNTS {
            let (candidate, ratio) = match branch.role {
                SuggestionRole::Foreground => {
                    let c = (branch.adjust)(&foreground, amount);
                    (c, contrast_ratio(c, background))
                },
                SuggestionRole::Background => {
                    let c = (branch.adjust)(&background, amount);
                    (c, contrast_ratio(foreground, c))
                },
            };

            if ratio >= target {
                let role_name = match branch.role {
                    SuggestionRole::Foreground => "foreground",
                    SuggestionRole::Background => "background",
                };
                suggestions.push(Suggestion {
                    color: candidate,
                    role: branch.role,
                    description: format!(
                        "{} {} by {:.0}%",
                        branch.verb,
                        role_name,
                        amount * 100.0
                    ),
                    ratio,
                });
                break;
            }
        }
    }

    suggestions
}

/// Distinguishability of a color pair under common color-vision
/// deficiencies, by channel-difference thresholding. `true` means the
/// pair is likely distinguishable. This intentionally preserves the
/// coarse heuristic of the reference behavior; it is not authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBlindnessReport {
    pub protanopia: bool,
    pub deuteranopia: bool,
    pub tritanopia: bool,
    pub achromatopsia: bool,
}

pub fn color_blindness_report(a: Color, b: Color) -> ColorBlindnessReport {
    let dr = (i16::from(a.r()) - i16::from(b.r())).abs();
    let dg = (i16::from(a.g()) - i16::from(b.g())).abs();
    let db = (i16::from(a.b()) - i16::from(b.b())).abs();

    ColorBlindnessReport {
        // Red-blind: only the green/blue axes carry the difference.
        protanopia: dg > CHANNEL_THRESHOLD || db > CHANNEL_THRESHOLD,
        // Green-blind: red/blue axes.
        deuteranopia: dr > CHANNEL_THRESHOLD || db > CHANNEL_THRESHOLD,
        // Blue-blind: red/green axes.
        tritanopia: dr > CHANNEL_THRESHOLD || dg > CHANNEL_THRESHOLD,
        achromatopsia: contrast_ratio(a, b) > 3.0,
    }
}
