//! Byte compaction
//!
//! Six bytes are packed into five codewords (base 256 to base 900). A tail
//! shorter than six bytes is emitted one codeword per byte.

use crate::codewords::Codewords;
use crate::high_level::{Mode, M_LATCH_BYTE, M_LATCH_BYTE_M6, M_SHIFT_BYTE};

/// Byte compacts `bytes`. `mode` is the compaction mode active before the
/// call; the mode active after it is returned.
///
/// A single byte inside text compaction uses the byte shift, which leaves
/// text compaction (and its sub-mode) active. Anything else latches to byte
/// compaction, even from byte compaction.
///
/// # Panics
/// If `bytes` is empty.
pub fn encode_bytes(bytes: &[u8], mode: Mode, out: &mut Codewords) -> Mode {
    assert!(!bytes.is_empty(), "empty byte run");

    let next = if bytes.len() == 1 && mode == Mode::Text {
        out.push(M_SHIFT_BYTE);
        Mode::Text
    } else {
        out.push(if bytes.len() % 6 == 0 { M_LATCH_BYTE_M6 } else { M_LATCH_BYTE });
        Mode::Byte
    };

    let mut groups = bytes.chunks_exact(6);
    for group in &mut groups {
        // pack six bytes
        let mut s: u64 = 0;
        for &b in group {
            s = (s << 8) + b as u64;
        }
        // append five codewords
        let mut cws = [0u16; 5];
        for n in 0..5 {
            let (q, r) = (s / 900, s % 900);
            cws[4 - n] = r as u16;
            s = q;
        }
        out.extend_from_slice(&cws);
    }

    // remaining
    for &b in groups.remainder() {
        out.push(b as u16);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(bytes: &[u8], mode: Mode) -> (Vec<u16>, Mode) {
        let mut out = Codewords::new();
        let next = encode_bytes(bytes, mode, &mut out);
        (out.into_vec(), next)
    }

    #[test]
    fn test_encode_bytes_multiple() {
        assert_eq!(encode(b"alcool", Mode::Text).0, [924, 163, 238, 432, 766, 244]);
        // annex example
        assert_eq!(encode(&[231, 101, 11, 97, 205, 2], Mode::Text).0, [924, 387, 700, 208, 213, 302]);
    }

    #[test]
    fn test_encode_bytes_not_multiple() {
        assert_eq!(
            encode(b"encode bin", Mode::Numeric),
            (vec![901, 169, 883, 224, 680, 517, 32, 98, 105, 110], Mode::Byte)
        );
    }

    #[test]
    fn test_thirteen_bytes() {
        let annex = [231u8, 101, 11, 97, 205, 2];
        let bytes: Vec<u8> = annex.iter().chain(&annex).chain(&annex[..1]).copied().collect();
        assert_eq!(
            encode(&bytes, Mode::Text).0,
            [901, 387, 700, 208, 213, 302, 387, 700, 208, 213, 302, 231]
        );
    }

    #[test]
    fn test_single_byte_shift_or_latch() {
        assert_eq!(encode(&[0x1D], Mode::Text), (vec![913, 29], Mode::Text));
        assert_eq!(encode(b" ", Mode::Numeric), (vec![901, 32], Mode::Byte));
        assert_eq!(encode(b" ", Mode::Byte), (vec![901, 32], Mode::Byte));
    }
}
