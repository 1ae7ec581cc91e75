//! Big-endian wire helpers shared by the binary codecs.

pub(crate) fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub(crate) fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub(crate) fn put_f32(out: &mut Vec<u8>, value: f32) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// UTF-16BE code units without a terminator; callers append the null
/// where their format wants one.
pub(crate) fn put_utf16(out: &mut Vec<u8>, text: &str) {
    for unit in text.encode_utf16() {
        put_u16(out, unit);
    }
}

/// A bounds-checked cursor over a byte buffer. Every read returns
/// `None` on truncation so decoders can fail closed.
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.bytes.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    pub(crate) fn skip(&mut self, len: usize) -> Option<()> {
        self.take(len).map(|_| ())
    }

    pub(crate) fn u16(&mut self) -> Option<u16> {
        let bytes = self.take(2)?;
        Some(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn u32(&mut self) -> Option<u32> {
        let bytes = self.take(4)?;
        Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub(crate) fn f32(&mut self) -> Option<f32> {
        let bytes = self.take(4)?;
        Some(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_round_trips_writers() {
        let mut buffer = Vec::new();
        put_u16(&mut buffer, 0xBEEF);
        put_u32(&mut buffer, 0xDEAD_BEEF);
        put_f32(&mut buffer, 0.5);

        let mut reader = Reader::new(&buffer);
        assert_eq!(reader.u16(), Some(0xBEEF));
        assert_eq!(reader.u32(), Some(0xDEAD_BEEF));
        assert_eq!(reader.f32(), Some(0.5));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn truncated_reads_return_none() {
        let mut reader = Reader::new(&[0x00]);
        assert_eq!(reader.u16(), None);
        assert_eq!(reader.take(2), None);
        assert!(reader.skip(1).is_some());
        assert!(reader.skip(1).is_none());
    }
}
