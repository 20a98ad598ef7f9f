use pdf417_hl::{
    encode_high_level, encode_high_level_with, ByteEncoding, Charset, Encoder, EncoderOptions, Error,
};
use test_case::test_case;

fn visualize(msg: &str) -> String {
    encode_high_level(msg).unwrap().to_string()
}

#[test_case("000213298174000", "902 1 624 434 632 282 200"; "numeric with leading zeros")]
#[test_case("PDF417", "453 178 121 239"; "text with mixed latch")]
#[test_case("PDF PDF", "453 176 453 179"; "text with space")]
#[test_case("1234", "902 12 434"; "short message of digits")]
#[test_case("\u{e7}12345", "913 135 902 124 745"; "trailing digits after shift")]
#[test_case("\u{e7}123456789012", "913 135 902 1 641 83 621 112"; "twelve trailing digits")]
#[test_case("000213298174000PDF417", "902 1 624 434 632 282 200 900 453 178 121 239"; "numeric then text")]
#[test_case("A10200124040182000", "913 65 902 186 562 350 852 68 800"; "shifted byte then numeric")]
#[test_case("A10200124040 182000", "28 30 60 1 64 4 26 38 60 0"; "short digit runs stay text")]
#[test_case(
    "A1234567890123456789012 1365465465464",
    "913 65 902 23 439 739 333 729 883 621 112 901 32 902 17 290 438 761 564";
    "byte latch between numeric runs"
)]
fn test_encode_high_level(msg: &str, expected: &str) {
    assert_eq!(visualize(msg), expected);
}

#[test_case("417'<x>", "844 37 778 59 833 872"; "punctuation latch")]
#[test_case("417'417", "844 37 898 121 239"; "punctuation shift")]
#[test_case("417abc417", "844 37 810 32 844 37"; "mixed lower mixed")]
#[test_case("PDF@417", "453 179 118 121 239"; "punctuation shift from alpha")]
fn test_encode_text_latching(msg: &str, expected: &str) {
    assert_eq!(visualize(msg), expected);
}

#[test]
fn test_binary_runs_after_text() {
    let twelve = format!("TestTest{}", "ç".repeat(12));
    assert_eq!(
        visualize(&twelve),
        "597 138 597 574 559 924 227 111 673 12 135 227 111 673 12 135"
    );

    let ten = format!("TestTest{}", "ç".repeat(10));
    assert_eq!(
        visualize(&ten),
        "597 138 597 574 559 901 227 111 673 12 135 135 135 135 135"
    );
}

#[test]
fn test_binary_grouping() {
    assert_eq!(visualize(&"ç".repeat(12)), "924 227 111 673 12 135 227 111 673 12 135");
    assert_eq!(visualize(&"ç".repeat(10)), "901 227 111 673 12 135 135 135 135 135");
}

#[test]
fn test_return_from_punctuation() {
    // sub-mode switch from punctuation back to alpha right before "550"
    assert_eq!(
        visualize("<FIELDS><FIELD NAME=\"DEALER #\">550"),
        "871 158 131 108 872 871 158 131 116 390 364 863 890 843 120 334 536 855 770 89 845 150"
    );
}

#[test]
fn test_trailing_single_punctuation() {
    assert_eq!(visualize("UNT+11+123'"), "613 598 601 50 32 119 869");
}

#[test]
fn test_byte_latch_and_shift_keep_state() {
    // latch to byte (5 bytes), latch to text (9 chars), latch to byte (2 bytes)
    assert_eq!(
        visualize("5789\u{1d}B0KLT3215\u{1e}\u{4}"),
        "901 53 55 56 57 29 900 58 28 311 598 92 35 901 30 4"
    );
    // 5 chars of text, shift to byte, 9 chars of text in the same sub-mode,
    // latch to byte
    assert_eq!(
        visualize("45789\u{1d}B0KLT3215\u{1e}\u{4}"),
        "844 157 249 913 29 841 840 850 349 843 61 179 901 30 4"
    );
}

#[test]
fn test_data_url() {
    assert_eq!(visualize("url(data:;base64,flRlc3R+)"), "924 211 636 247 386 518");

    // empty payload, nothing to latch for
    assert_eq!(visualize("url(data:;base64,)"), "");
    assert_eq!(visualize("url(data:,)"), "");

    let literal = Encoder::<Charset>::default().data_urls(false).encode("url(data:;base64,flRlc3R+)").unwrap();
    assert_ne!(literal.first(), Some(&924));
}

#[test]
fn test_charsets() {
    // ä is 0x84 in code page 437 and 0xE4 in ISO-8859-1
    let msg = "Test\u{e4}\u{e4}\u{e4}\u{e4}\u{e4}\u{e4}";
    assert_eq!(visualize(msg), "901 141 390 364 673 320 132 132 132 132");

    let no_eci = encode_high_level_with(msg, "ISO-8859-1", false).unwrap();
    assert_eq!(no_eci.to_string(), "901 141 390 364 700 692 228 228 228 228");

    let eci = encode_high_level_with(msg, "ISO-8859-1", true).unwrap();
    assert_eq!(eci.to_string(), "927 3 901 141 390 364 700 692 228 228 228 228");
}

#[test]
fn test_default_encoding_never_signalled() {
    let msg = "Test\u{e4}";
    assert_eq!(
        encode_high_level_with(msg, "Cp437", true).unwrap(),
        encode_high_level(msg).unwrap()
    );
}

#[test]
fn test_utf8_multibyte_characters() {
    let encoder = Encoder::new(&EncoderOptions::default().encoding("UTF-8").eci(true)).unwrap();
    // a lone two-byte character cannot use the single byte shift
    assert_eq!(encoder.encode("\u{e4}").unwrap().to_string(), "927 26 901 195 164");
}

#[test]
fn test_unencodable_character() {
    assert_eq!(
        encode_high_level("Price: 5€"),
        Err(Error::UnencodableCharacter { ch: '€', position: 8 })
    );
    assert!(encode_high_level_with("Price: 5€", "UTF-8", false).is_ok());
}

#[test]
fn test_unsupported_encoding() {
    let opts = EncoderOptions::default().encoding("x-unknown");
    assert!(matches!(Encoder::new(&opts), Err(Error::UnsupportedEncoding { .. })));
}

/// Encoding without an ECI designator: accepted, never signalled.
struct Rot13Ascii;

impl ByteEncoding for Rot13Ascii {
    fn name(&self) -> &str {
        "x-rot13"
    }

    fn eci_designator(&self) -> Option<u32> {
        None
    }

    fn encode_char(&self, ch: char, out: &mut Vec<u8>) -> bool {
        let b = match ch {
            'a'..='z' => (ch as u8 - b'a' + 13) % 26 + b'a',
            'A'..='Z' => (ch as u8 - b'A' + 13) % 26 + b'A',
            c if c.is_ascii() => c as u8,
            _ => return false,
        };
        out.push(b);
        true
    }
}

#[test]
fn test_custom_byte_encoding() {
    let encoder = Encoder::with_encoding(Rot13Ascii).eci(true);
    // "Ab" is byte compacted (too short for text) through the caller's encoding
    assert_eq!(encoder.encode("Ab").unwrap().to_string(), "901 78 111");
    assert_eq!(encoder.encoding().name(), "x-rot13");
}

#[test]
fn test_deterministic() {
    let encoder = Encoder::new(&EncoderOptions::default().encoding("ISO-8859-1").eci(true)).unwrap();
    let msg = "Grüße 0123456789012345 <x> ççç";
    assert_eq!(encoder.encode(msg).unwrap(), encoder.encode(msg).unwrap());
}

#[test]
fn test_default_charset() {
    assert_eq!(Encoder::<Charset>::default().encoding(), &Charset::Cp437);
}
