use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::parse::{self, ColorParseError};
use crate::space::{
    self, Cmyk, Hsl, Hsv, clamp_percent, normalize_hue,
};

/// An immutable sRGB color value.
///
/// The byte triple is canonical: every derived view (HSL, HSV, CMYK) is
/// computed on demand, and equality is defined on the bytes, which is the
/// same thing as a case-insensitive canonical-hex match. All transforms
/// return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse any of the accepted textual forms (hex, `rgb()`, `hsl()`).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        parse::parse_color(input)
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Canonical uppercase `#RRGGBB` form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        space::rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = space::hsl_to_rgb(hsl);
        Self::new(r, g, b)
    }

    pub fn to_hsv(&self) -> Hsv {
        space::rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        let (r, g, b) = space::hsv_to_rgb(hsv);
        Self::new(r, g, b)
    }

    pub fn to_cmyk(&self) -> Cmyk {
        space::rgb_to_cmyk(self.r, self.g, self.b)
    }

    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let (r, g, b) = space::cmyk_to_rgb(cmyk);
        Self::new(r, g, b)
    }

    /// Lighten by shifting perceptual lightness (CIE L*), not raw HSL
    /// lightness. `amount` is a fraction in `[0, 1]`; 1.0 saturates at
    /// white.
    pub fn lighten(&self, amount: f64) -> Self {
        self.shift_lightness(amount.clamp(0.0, 1.0) * 100.0)
    }

    /// Darken by shifting perceptual lightness. 1.0 saturates at black.
    pub fn darken(&self, amount: f64) -> Self {
        self.shift_lightness(-amount.clamp(0.0, 1.0) * 100.0)
    }

    fn shift_lightness(&self, delta: f64) -> Self {
        let mut lab = space::rgb_to_lab(self.r, self.g, self.b);
        lab.l += delta;
        // Past the endpoints of the lightness axis only the achromatic
        // extremes remain.
        if lab.l >= 100.0 {
            return Self::WHITE;
        }
        if lab.l <= 0.0 {
            return Self::BLACK;
        }
        let (r, g, b) = space::lab_to_rgb(lab);
        Self::new(r, g, b)
    }

    /// Increase HSL saturation by `amount` (fraction of the full range).
    pub fn saturate(&self, amount: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.s = clamp_percent(hsl.s + amount.clamp(0.0, 1.0) * 100.0);
        Self::from_hsl(hsl)
    }

    /// Decrease HSL saturation by `amount`.
    pub fn desaturate(&self, amount: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.s = clamp_percent(hsl.s - amount.clamp(0.0, 1.0) * 100.0);
        Self::from_hsl(hsl)
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let mut hsl = self.to_hsl();
        hsl.h = normalize_hue(hsl.h + degrees);
        Self::from_hsl(hsl)
    }

    /// The color opposite on the hue wheel.
    pub fn complementary(&self) -> Self {
        self.rotate_hue(180.0)
    }

    /// `count` hues centered on this color, spaced `angle` degrees apart.
    /// The base sits in the middle of the spread; saturation and lightness
    /// are unchanged.
    pub fn analogous(&self, count: usize, angle: f64) -> Vec<Self> {
        let center = (count.saturating_sub(1)) as f64 / 2.0;
        (0..count)
            .map(|i| self.rotate_hue((i as f64 - center) * angle))
            .collect()
    }

    pub fn triadic(&self) -> [Self; 2] {
        [self.rotate_hue(120.0), self.rotate_hue(240.0)]
    }

    pub fn tetradic(&self) -> [Self; 3] {
        [
            self.rotate_hue(90.0),
            self.rotate_hue(180.0),
            self.rotate_hue(270.0),
        ]
    }

    /// The base color followed by seven progressively darker steps,
    /// 0.1 increments up to 0.7.
    pub fn shades(&self) -> Vec<Self> {
        let mut out = vec![*self];
        out.extend((1..=7).map(|i| self.darken(0.1 * f64::from(i))));
        out
    }

    /// The base color followed by seven progressively lighter steps.
    pub fn tints(&self) -> Vec<Self> {
        let mut out = vec![*self];
        out.extend((1..=7).map(|i| self.lighten(0.1 * f64::from(i))));
        out
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
