//! Harmony schemes: derive an ordered set of related colors from a base.

use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::Color;

/// A rule for deriving related colors from a base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmonyScheme {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
    Shades,
    Tints,
    /// The only nondeterministic scheme; every other one produces the
    /// same output for the same input.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony scheme `{0}`")]
pub struct UnknownScheme(pub String);

impl FromStr for HarmonyScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "complementary" => Ok(Self::Complementary),
            "analogous" => Ok(Self::Analogous),
            "triadic" => Ok(Self::Triadic),
            "tetradic" => Ok(Self::Tetradic),
            "split_complementary" => Ok(Self::SplitComplementary),
            "monochromatic" => Ok(Self::Monochromatic),
            "shades" => Ok(Self::Shades),
            "tints" => Ok(Self::Tints),
            "random" => Ok(Self::Random),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}

/// Generate `count` colors from `base` under `scheme`.
///
/// The scheme first produces its native seed set; when that is shorter
/// than `count` the list is padded by revisiting existing entries in
/// order, lightening by 0.1 on even positions and darkening by 0.1 on
/// odd ones. Overlong seed sets are trimmed from the end. The padding
/// policy is part of the output contract.
pub fn generate(base: Color, scheme: HarmonyScheme, count: usize) -> Vec<Color> {
    let mut colors = seed_colors(base, scheme, count);

    let seeds = colors.len();
    if seeds == 0 {
        return colors;
    }

    while colors.len() < count {
        let source = colors[colors.len() % seeds];
        let next = if colors.len() % 2 == 0 {
            source.lighten(0.1)
        } else {
            source.darken(0.1)
        };
        colors.push(next);
    }

    colors.truncate(count);
    colors
}

fn seed_colors(base: Color, scheme: HarmonyScheme, count: usize) -> Vec<Color> {
    match scheme {
        HarmonyScheme::Complementary => vec![base, base.complementary()],
        HarmonyScheme::Analogous => base.analogous(5, 30.0),
        HarmonyScheme::Triadic => {
            let [second, third] = base.triadic();
            vec![base, second, third]
        },
        HarmonyScheme::Tetradic => {
            let [second, third, fourth] = base.tetradic();
            vec![base, second, third, fourth]
        },
        HarmonyScheme::SplitComplementary => {
            vec![base, base.rotate_hue(150.0), base.rotate_hue(210.0)]
        },
        HarmonyScheme::Monochromatic => vec![
            base,
            base.desaturate(0.2),
            base.desaturate(0.4),
            base.saturate(0.2),
            base.lighten(0.15),
            base.lighten(0.3),
            base.darken(0.15),
            base.darken(0.3),
        ],
        HarmonyScheme::Shades => base.shades(),
        HarmonyScheme::Tints => base.tints(),
        HarmonyScheme::Random => {
            let mut rng = rand::rng();
            let mut colors = vec![base];
            colors.extend((1..count).map(|_| {
                Color::new(rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>())
            }));
            colors
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color::new(255, 85, 0);

    #[test]
    fn scheme_names_parse() {
        assert_eq!(
            "complementary".parse::<HarmonyScheme>().unwrap(),
            HarmonyScheme::Complementary
        );
        assert_eq!(
            "Split_Complementary".parse::<HarmonyScheme>().unwrap(),
            HarmonyScheme::SplitComplementary
        );
        assert!("vaporwave".parse::<HarmonyScheme>().is_err());
    }

    #[test]
    fn triadic_is_deterministic() {
        let first = generate(BASE, HarmonyScheme::Triadic, 6);
        let second = generate(BASE, HarmonyScheme::Triadic, 6);
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(first[0], BASE);
    }

    #[test]
    fn triadic_pads_with_the_parity_policy() {
        let colors = generate(BASE, HarmonyScheme::Triadic, 5);
        assert_eq!(colors[3], colors[0].darken(0.1));
        assert_eq!(colors[4], colors[1].lighten(0.1));
    }

    #[test]
    fn oversized_seed_set_is_trimmed_from_the_end() {
        let colors = generate(BASE, HarmonyScheme::Tetradic, 3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], BASE);
        assert_eq!(colors[1], BASE.rotate_hue(90.0));
    }

    #[test]
    fn analogous_yields_five_seeds() {
        let colors = generate(BASE, HarmonyScheme::Analogous, 5);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[2], BASE);
    }

    #[test]
    fn monochromatic_caps_at_eight() {
        assert_eq!(generate(BASE, HarmonyScheme::Monochromatic, 8).len(), 8);
        assert_eq!(generate(BASE, HarmonyScheme::Monochromatic, 12).len(), 12);
        let capped = generate(BASE, HarmonyScheme::Monochromatic, 20);
        assert_eq!(capped.len(), 20);
        assert_eq!(capped[8], capped[0].lighten(0.1));
    }

    #[test]
    fn shades_darken_progressively() {
        let colors = generate(BASE, HarmonyScheme::Shades, 8);
        assert_eq!(colors[0], BASE);
        assert_eq!(colors[7], BASE.darken(0.7));
    }

    #[test]
    fn zero_count_yields_nothing() {
        assert!(generate(BASE, HarmonyScheme::Triadic, 0).is_empty());
    }

    #[test]
    fn random_keeps_the_base_first() {
        let colors = generate(BASE, HarmonyScheme::Random, 4);
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0], BASE);
    }
}
