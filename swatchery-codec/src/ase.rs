//! Adobe Swatch Exchange, the `ASEF` binary format.
//!
//! Layout (all integers big-endian): 4-byte signature `ASEF`, u16
//! version 1, u16 version 0, u32 block count, then one color block per
//! swatch: u16 block type `0x0001`, u32 block length, u16 name length
//! in UTF-16 units including the null terminator, the UTF-16BE name,
//! a 4-byte ASCII color-model tag (`RGB ` here), one f32 per channel in
//! `[0, 1]`, and a u16 color type (0 = global).

use log::debug;

use swatchery_color::Color;
use swatchery_palette::Palette;

use crate::wire::{Reader, put_f32, put_u16, put_u32, put_utf16};
use crate::{CodecError, Format, Result, finish_import};

const SIGNATURE: &[u8; 4] = b"ASEF";
const BLOCK_COLOR: u16 = 0x0001;
const MODEL_RGB: &[u8; 4] = b"RGB ";

pub fn encode(colors: &[Color]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(SIGNATURE);
    put_u16(&mut out, 1);
    put_u16(&mut out, 0);
    put_u32(&mut out, colors.len() as u32);

    for color in colors {
        // Swatches carry no name of their own, so the canonical hex
        // doubles as one (same convention as the GPL name column).
        let name = color.hex();
        let name_units = name.encode_utf16().count() as u16 + 1;

        let mut block = Vec::new();
        put_u16(&mut block, name_units);
        put_utf16(&mut block, &name);
        put_u16(&mut block, 0);
        block.extend_from_slice(MODEL_RGB);
        put_f32(&mut block, f32::from(color.r()) / 255.0);
        put_f32(&mut block, f32::from(color.g()) / 255.0);
        put_f32(&mut block, f32::from(color.b()) / 255.0);
        put_u16(&mut block, 0);

        put_u16(&mut out, BLOCK_COLOR);
        put_u32(&mut out, block.len() as u32);
        out.extend_from_slice(&block);
    }

    out
}

pub fn decode(bytes: &[u8]) -> Result<Palette> {
    let fail = |detail: &str| CodecError::decode(Format::Ase, detail);

    let mut reader = Reader::new(bytes);
    if reader.take(4) != Some(SIGNATURE.as_slice()) {
        return Err(fail("missing ASEF signature"));
    }
    let major = reader.u16().ok_or_else(|| fail("truncated header"))?;
    let minor = reader.u16().ok_or_else(|| fail("truncated header"))?;
    if (major, minor) != (1, 0) {
        return Err(fail(&format!("unsupported version {major}.{minor}")));
    }
    let block_count = reader.u32().ok_or_else(|| fail("truncated header"))?;

    let mut colors = Vec::new();
    for index in 0..block_count {
        let block_type = reader
            .u16()
            .ok_or_else(|| fail(&format!("truncated block {index}")))?;
        let block_len = reader
            .u32()
            .ok_or_else(|| fail(&format!("truncated block {index}")))?;
        let block = reader
            .take(block_len as usize)
            .ok_or_else(|| fail(&format!("block {index} overruns the buffer")))?;

        if block_type != BLOCK_COLOR {
            debug!("skipping ASE block {index} of type {block_type:#06x}");
            continue;
        }

        match decode_color_block(block) {
            Some(Some(color)) => colors.push(color),
            // Non-RGB color model, skipped by its declared length.
            Some(None) => {},
            None => return Err(fail(&format!("malformed color block {index}"))),
        }
    }

    finish_import(Format::Ase, None, colors)
}

fn decode_color_block(block: &[u8]) -> Option<Option<Color>> {
    let mut reader = Reader::new(block);
    let name_units = reader.u16()?;
    reader.skip(usize::from(name_units) * 2)?;

    let model = reader.take(4)?;
    if model != MODEL_RGB {
        debug!("skipping non-RGB ASE color model {model:?}");
        return Some(None);
    }

    let r = channel(reader.f32()?);
    let g = channel(reader.f32()?);
    let b = channel(reader.f32()?);
    reader.u16()?; // color type

    Some(Some(Color::new(r, g, b)))
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_triplet() -> Vec<Color> {
        vec![
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
        ]
    }

    #[test]
    fn header_layout_is_exact() {
        let bytes = encode(&rgb_triplet());
        assert_eq!(&bytes[0..4], b"ASEF");
        assert_eq!(&bytes[4..8], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(&bytes[8..12], &[0x00, 0x00, 0x00, 0x03]);
    }

    #[test]
    fn block_lengths_match_their_content() {
        let bytes = encode(&rgb_triplet());
        let mut reader = Reader::new(&bytes[12..]);
        for _ in 0..3 {
            assert_eq!(reader.u16(), Some(BLOCK_COLOR));
            let len = reader.u32().expect("block length");
            // name length (2) + "#RRGGBB" with terminator (16) +
            // model tag (4) + three f32 channels (12) + color type (2).
            assert_eq!(len, 36);
            assert!(reader.take(len as usize).is_some());
        }
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn round_trip_preserves_colors() {
        let colors = vec![Color::new(255, 85, 0), Color::new(18, 52, 86)];
        let palette = decode(&encode(&colors)).unwrap();
        assert_eq!(palette.colors(), colors.as_slice());
    }

    #[test]
    fn unknown_block_types_are_skipped_by_length() {
        // One group-start block (type 0xC001) ahead of a color block.
        let color_file = encode(&[Color::new(255, 0, 0)]);
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&color_file[..8]);
        bytes.extend_from_slice(&2u32.to_be_bytes());
        bytes.extend_from_slice(&0xC001u16.to_be_bytes());
        bytes.extend_from_slice(&4u32.to_be_bytes());
        bytes.extend_from_slice(&[0xAA; 4]);
        bytes.extend_from_slice(&color_file[12..]);

        let palette = decode(&bytes).unwrap();
        assert_eq!(palette.colors(), &[Color::new(255, 0, 0)]);
    }

    #[test]
    fn truncated_buffers_fail_closed() {
        let bytes = encode(&rgb_triplet());
        for cut in [3, 8, 13, bytes.len() - 1] {
            assert!(matches!(
                decode(&bytes[..cut]),
                Err(CodecError::Decode { .. })
            ));
        }
    }

    #[test]
    fn wrong_signature_is_rejected() {
        assert!(matches!(
            decode(b"NOPE\x00\x01\x00\x00\x00\x00\x00\x00"),
            Err(CodecError::Decode { .. })
        ));
    }

    #[test]
    fn zero_colors_is_a_decode_failure() {
        let empty = encode(&[]);
        assert!(matches!(decode(&empty), Err(CodecError::Decode { .. })));
    }
}
