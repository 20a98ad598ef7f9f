//! Input message: characters paired with their encoded bytes

use crate::charset::ByteEncoding;
use crate::error::{Error, Result};

/// A message split into characters, together with the bytes each character
/// encodes to under the selected encoding.
///
/// Characters without a representation are remembered instead of rejected:
/// text compaction does not need their bytes, so only byte compaction reports
/// them.
#[derive(Debug, Clone)]
pub struct Message {
    chars: Vec<char>,
    bytes: Vec<u8>,
    // bounds[i]..bounds[i + 1] is the byte span of chars[i]
    bounds: Vec<usize>,
    unmapped: Vec<usize>,
}

impl Message {
    pub fn new<E: ByteEncoding + ?Sized>(text: &str, encoding: &E) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut bytes = Vec::with_capacity(text.len());
        let mut bounds = Vec::with_capacity(text.len() + 1);
        let mut unmapped = Vec::new();

        bounds.push(0);
        for (i, ch) in text.chars().enumerate() {
            if !encoding.encode_char(ch, &mut bytes) {
                unmapped.push(i);
            }
            chars.push(ch);
            bounds.push(bytes.len());
        }

        Self { chars, bytes, bounds, unmapped }
    }

    #[inline]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Bytes of the `count` characters starting at character `start`.
    pub fn byte_span(&self, start: usize, count: usize) -> Result<&[u8]> {
        let end = start + count;
        assert!(end <= self.len(), "character range {start}..{end} out of bounds");

        let first = self.unmapped.partition_point(|&p| p < start);
        if let Some(&position) = self.unmapped.get(first).filter(|&&p| p < end) {
            return Err(Error::UnencodableCharacter { ch: self.chars[position], position });
        }
        Ok(&self.bytes[self.bounds[start]..self.bounds[end]])
    }
}
