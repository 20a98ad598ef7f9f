//! `url(data:...)` messages
//!
//! A message of the form `url(data:[<mediatype>][;base64],<data>)` is not
//! encoded as text: the payload of the data URL (RFC 2397) is decoded and
//! byte compacted as a whole.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::charset::ByteEncoding;
use crate::error::{Error, Result};

// padding is optional in data URLs
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A data URL extracted from a `url(...)` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    base64: bool,
    payload: &'a str,
    // character index of the payload in the message
    offset: usize,
}

impl<'a> DataUrl<'a> {
    /// Returns the data URL wrapped in `msg`, or `None` if `msg` is not a
    /// `url(data:...)` message. Quotes inside the parentheses are allowed.
    pub fn parse(msg: &'a str) -> Option<Self> {
        let inner = msg.trim().strip_prefix("url(")?.strip_suffix(')')?.trim();
        let inner = ['\'', '"']
            .iter()
            .find_map(|&q| inner.strip_prefix(q)?.strip_suffix(q))
            .map_or(inner, str::trim);
        let rest = inner.strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;

        let start = payload.as_ptr() as usize - msg.as_ptr() as usize;
        Some(Self {
            base64: header.ends_with(";base64"),
            payload,
            offset: msg[..start].chars().count(),
        })
    }

    pub(crate) fn is_base64(&self) -> bool {
        self.base64
    }

    /// Decodes the payload. Percent escapes are taken as raw bytes, other
    /// characters are encoded with `encoding`.
    pub fn decode<E: ByteEncoding + ?Sized>(&self, encoding: &E) -> Result<Vec<u8>> {
        if self.base64 {
            return BASE64
                .decode(self.payload.trim())
                .map_err(|e| Error::InvalidDataUrl(e.to_string()));
        }

        let mut out = Vec::with_capacity(self.payload.len());
        let mut chars = self.payload.chars().enumerate();
        while let Some((i, ch)) = chars.next() {
            if ch == '%' {
                let hex: String = chars.by_ref().take(2).map(|(_, c)| c).collect();
                let byte = (hex.len() == 2 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
                    .then(|| u8::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .ok_or_else(|| Error::InvalidDataUrl(format!("bad escape %{hex}")))?;
                out.push(byte);
            } else if !encoding.encode_char(ch, &mut out) {
                return Err(Error::UnencodableCharacter { ch, position: self.offset + i });
            }
        }
        Ok(out)
    }
}
