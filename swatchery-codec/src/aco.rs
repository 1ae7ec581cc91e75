//! Adobe Color (`.aco`) swatch files.
//!
//! The writer emits a version-1 section followed by a version-2 section
//! in the same buffer, which is what Adobe tooling expects of the
//! format. Each section: u16 version, u16 color count, then per color a
//! u16 color space (0 = RGB), four u16 channel words (RGB scaled to
//! 0..=65535, fourth word zero) and a trailing u16 zero. Version-2
//! entries additionally carry a u32 name length (characters plus one),
//! the UTF-16BE name and a u16 null terminator.
//!
//! The reader only needs the version-1 section and stops there.

use log::debug;

use swatchery_color::Color;
use swatchery_palette::Palette;

use crate::wire::{Reader, put_u16, put_u32, put_utf16};
use crate::{CodecError, Format, Result, finish_import};

const SPACE_RGB: u16 = 0;

/// 65535 / 255: a byte channel scales to the full u16 range exactly.
const CHANNEL_SCALE: u16 = 257;

pub fn encode(colors: &[Color]) -> Vec<u8> {
    let mut out = Vec::new();
    write_section(&mut out, 1, colors);
    write_section(&mut out, 2, colors);
    out
}

fn write_section(out: &mut Vec<u8>, version: u16, colors: &[Color]) {
    put_u16(out, version);
    put_u16(out, colors.len() as u16);

    for color in colors {
        put_u16(out, SPACE_RGB);
        put_u16(out, u16::from(color.r()) * CHANNEL_SCALE);
        put_u16(out, u16::from(color.g()) * CHANNEL_SCALE);
        put_u16(out, u16::from(color.b()) * CHANNEL_SCALE);
        put_u16(out, 0);

        if version == 2 {
            let name = color.hex();
            put_u32(out, name.encode_utf16().count() as u32 + 1);
            put_utf16(out, &name);
            put_u16(out, 0);
        }
    }
}

pub fn decode(bytes: &[u8]) -> Result<Palette> {
    let fail = |detail: &str| CodecError::decode(Format::Aco, detail);

    let mut reader = Reader::new(bytes);
    let version = reader.u16().ok_or_else(|| fail("truncated header"))?;
    if version != 1 {
        return Err(fail(&format!("expected a version-1 section, found {version}")));
    }
    let count = reader.u16().ok_or_else(|| fail("truncated header"))?;

    let mut colors = Vec::new();
    for index in 0..count {
        let space = reader
            .u16()
            .ok_or_else(|| fail(&format!("truncated entry {index}")))?;
        let mut words = [0u16; 4];
        for word in &mut words {
            *word = reader
                .u16()
                .ok_or_else(|| fail(&format!("truncated entry {index}")))?;
        }

        if space == SPACE_RGB {
            colors.push(Color::new(
                (words[0] / CHANNEL_SCALE) as u8,
                (words[1] / CHANNEL_SCALE) as u8,
                (words[2] / CHANNEL_SCALE) as u8,
            ));
        } else {
            debug!("skipping ACO entry {index} in color space {space}");
        }
    }

    finish_import(Format::Aco, None, colors)
}
