//! Color space representations and the conversion math between them.
//!
//! All conversions go through canonical sRGB bytes. Derived views use
//! degrees for hue and percentages for the remaining channels, and every
//! view converts back to the original RGB within one step per channel.

/// Hue/saturation/lightness view. Hue in degrees `[0, 360)`,
/// saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue/saturation/value view, same ranges as [`Hsl`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Cyan/magenta/yellow/key view, all channels in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// CIE L*a*b* (D65). Used internally for perceptual lighten/darken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Normalize a hue angle into `[0, 360)`.
pub(crate) fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h.is_nan() { 0.0 } else { h }
}

/// Clamp a percentage channel into `[0, 100]`.
pub(crate) fn clamp_percent(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

fn channel_to_unit(c: u8) -> f64 {
    f64::from(c) / 255.0
}

fn unit_to_channel(u: f64) -> u8 {
    (u.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };
    normalize_hue(h)
}

pub(crate) fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (r, g, b) = (channel_to_unit(r), channel_to_unit(g), channel_to_unit(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl {
        h: hue_of(r, g, b, max, delta),
        s: clamp_percent(s * 100.0),
        l: clamp_percent(l * 100.0),
    }
}

pub(crate) fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = normalize_hue(hsl.h) / 360.0;
    let s = clamp_percent(hsl.s) / 100.0;
    let l = clamp_percent(hsl.l) / 100.0;

    if s == 0.0 {
        let v = unit_to_channel(l);
        return (v, v, v);
    }

    fn hue_component(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        unit_to_channel(hue_component(p, q, h + 1.0 / 3.0)),
        unit_to_channel(hue_component(p, q, h)),
        unit_to_channel(hue_component(p, q, h - 1.0 / 3.0)),
    )
}

pub(crate) fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (r, g, b) = (channel_to_unit(r), channel_to_unit(g), channel_to_unit(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: hue_of(r, g, b, max, delta),
        s: clamp_percent(s * 100.0),
        v: clamp_percent(max * 100.0),
    }
}

pub(crate) fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let h = normalize_hue(hsv.h);
    let s = clamp_percent(hsv.s) / 100.0;
    let v = clamp_percent(hsv.v) / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        unit_to_channel(r + m),
        unit_to_channel(g + m),
        unit_to_channel(b + m),
    )
}

pub(crate) fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    let (r, g, b) = (channel_to_unit(r), channel_to_unit(g), channel_to_unit(b));
    let k = 1.0 - r.max(g).max(b);

    // Pure black: the chromatic channels are undefined, report zeroes.
    if k >= 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 100.0,
        };
    }

    Cmyk {
        c: clamp_percent((1.0 - r - k) / (1.0 - k) * 100.0),
        m: clamp_percent((1.0 - g - k) / (1.0 - k) * 100.0),
        y: clamp_percent((1.0 - b - k) / (1.0 - k) * 100.0),
        k: clamp_percent(k * 100.0),
    }
}

pub(crate) fn cmyk_to_rgb(cmyk: Cmyk) -> (u8, u8, u8) {
    let c = clamp_percent(cmyk.c) / 100.0;
    let m = clamp_percent(cmyk.m) / 100.0;
    let y = clamp_percent(cmyk.y) / 100.0;
    let k = clamp_percent(cmyk.k) / 100.0;

    (
        unit_to_channel((1.0 - c) * (1.0 - k)),
        unit_to_channel((1.0 - m) * (1.0 - k)),
        unit_to_channel((1.0 - y) * (1.0 - k)),
    )
}

// D65 reference white.
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub(crate) fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let r = srgb_to_linear(channel_to_unit(r));
    let g = srgb_to_linear(channel_to_unit(g));
    let b = srgb_to_linear(channel_to_unit(b));

    let x = (r * 0.412_456_4 + g * 0.357_576_1 + b * 0.180_437_5) / XN;
    let y = (r * 0.212_672_9 + g * 0.715_152_2 + b * 0.072_175_0) / YN;
    let z = (r * 0.019_333_9 + g * 0.119_192_0 + b * 0.950_304_1) / ZN;

    fn f(t: f64) -> f64 {
        if t > 0.008_856 {
            t.cbrt()
        } else {
            7.787 * t + 16.0 / 116.0
        }
    }

    let (fx, fy, fz) = (f(x), f(y), f(z));

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub(crate) fn lab_to_rgb(lab: Lab) -> (u8, u8, u8) {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    fn inv(t: f64) -> f64 {
        let cubed = t * t * t;
        if cubed > 0.008_856 {
            cubed
        } else {
            (t - 16.0 / 116.0) / 7.787
        }
    }

    let x = inv(fx) * XN;
    let y = inv(fy) * YN;
    let z = inv(fz) * ZN;

    let r = x * 3.240_454_2 + y * -1.537_138_5 + z * -0.498_531_4;
    let g = x * -0.969_266_0 + y * 1.876_010_8 + z * 0.041_556_0;
    let b = x * 0.055_643_4 + y * -0.204_025_9 + z * 1.057_225_2;

    (
        unit_to_channel(linear_to_srgb(r.clamp(0.0, 1.0))),
        unit_to_channel(linear_to_srgb(g.clamp(0.0, 1.0))),
        unit_to_channel(linear_to_srgb(b.clamp(0.0, 1.0))),
    )
}
