//! Character encodings used to turn characters into bytes for byte compaction
//!
//! The high level encoder never converts charsets by itself: it asks a
//! [`ByteEncoding`] for the bytes of every character and signals (through an
//! ECI designator) which encoding the decoder should apply. [`Charset`] covers
//! the common single byte code pages and UTF-8; callers with other needs can
//! implement the trait themselves.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Byte-encoding collaborator consulted by the encoder.
pub trait ByteEncoding {
    /// Human readable name of the encoding.
    fn name(&self) -> &str;

    /// ECI designator announcing this encoding, if the encoding has one.
    fn eci_designator(&self) -> Option<u32>;

    /// Whether this is the encoding decoders assume when no ECI is present.
    /// The default encoding is never signalled.
    fn is_default(&self) -> bool {
        false
    }

    /// Appends the bytes of `ch` to `out`. Returns false (and leaves `out`
    /// untouched) when `ch` has no representation.
    fn encode_char(&self, ch: char, out: &mut Vec<u8>) -> bool;
}

/// Built-in character encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    /// IBM code page 437, the PDF417 default interpretation.
    #[default]
    Cp437,
    Iso8859_1,
    Windows1252,
    Utf8,
    UsAscii,
}

impl Charset {
    /// Encoding assumed by readers when no ECI is present.
    pub const DEFAULT: Charset = Charset::Cp437;

    pub const fn name(self) -> &'static str {
        match self {
            Charset::Cp437 => "Cp437",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Windows1252 => "windows-1252",
            Charset::Utf8 => "UTF-8",
            Charset::UsAscii => "US-ASCII",
        }
    }

    /// Assigned AIM ECI designator.
    pub const fn eci(self) -> u32 {
        match self {
            Charset::Cp437 => 2,
            Charset::Iso8859_1 => 3,
            Charset::Windows1252 => 23,
            Charset::Utf8 => 26,
            Charset::UsAscii => 27,
        }
    }

    /// Encodes a whole string, failing on the first character without a
    /// representation.
    pub fn encode(self, s: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            if !self.encode_char(ch, &mut out) {
                return Err(Error::UnencodableCharacter { ch, position });
            }
        }
        Ok(out)
    }

    fn single_byte(self, ch: char) -> Option<u8> {
        let c = ch as u32;
        if c < 0x80 {
            return Some(c as u8);
        }
        match self {
            Charset::Cp437 => high_half_position(&CP437_HIGH, ch),
            Charset::Iso8859_1 => u8::try_from(c).ok(),
            Charset::Windows1252 => match c {
                0xA0..=0xFF => Some(c as u8),
                _ => high_half_position(&CP1252_HIGH, ch),
            },
            Charset::UsAscii | Charset::Utf8 => None,
        }
    }
}

fn high_half_position(table: &[char], ch: char) -> Option<u8> {
    table.iter().position(|&c| c == ch).map(|p| 0x80 + p as u8)
}

impl ByteEncoding for Charset {
    fn name(&self) -> &str {
        Charset::name(*self)
    }

    fn eci_designator(&self) -> Option<u32> {
        Some(self.eci())
    }

    fn is_default(&self) -> bool {
        *self == Charset::DEFAULT
    }

    fn encode_char(&self, ch: char, out: &mut Vec<u8>) -> bool {
        if *self == Charset::Utf8 {
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            return true;
        }
        match self.single_byte(ch) {
            Some(b) => {
                out.push(b);
                true
            }
            None => false,
        }
    }
}

impl<E: ByteEncoding + ?Sized> ByteEncoding for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn eci_designator(&self) -> Option<u32> {
        (**self).eci_designator()
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }

    fn encode_char(&self, ch: char, out: &mut Vec<u8>) -> bool {
        (**self).encode_char(ch, out)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = Error;

    /// Case insensitive, ignores `-`, `_` and spaces (`"iso_8859-1"`,
    /// `"Latin1"` and `"ISO-8859-1"` are the same encoding).
    fn from_str(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let charset = match key.as_str() {
            "cp437" | "ibm437" | "437" => Charset::Cp437,
            "iso88591" | "88591" | "latin1" | "l1" => Charset::Iso8859_1,
            "windows1252" | "cp1252" => Charset::Windows1252,
            "utf8" => Charset::Utf8,
            "usascii" | "ascii" | "iso646us" => Charset::UsAscii,
            _ => return Err(Error::UnsupportedEncoding { name: name.to_owned() }),
        };
        Ok(charset)
    }
}

/// Code page 437, bytes 0x80 to 0xFF.
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{A0}',
];

/// Windows-1252, bytes 0x80 to 0x9F (`'\0'` marks unassigned bytes).
const CP1252_HIGH: [char; 32] = [
    '€', '\0', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\0', 'Ž', '\0',
    '\0', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\0', 'ž', 'Ÿ',
];
