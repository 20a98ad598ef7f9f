//! Numeric compaction
//!
//! Digits are grouped by 44, prefixed with a `1` and converted from base 10
//! to base 900.

use awint_core::{InlAwi, Bits};
// "1" followed by 44 digits is below 2^150
type U160 = InlAwi<160, { Bits::unstable_raw_digits(160) }>;

use crate::codewords::Codewords;
use crate::high_level::M_LATCH_NUMERIC;

/// Maximum number of digits converted at once.
pub const MAX_GROUP_DIGITS: usize = 44;
/// Number of codewords produced by a full group of 44 digits.
const MAX_GROUP_CODEWORDS: usize = MAX_GROUP_DIGITS / 3 + 1;

/// Emits the numeric latch followed by `digits` split into groups of at most
/// 44 digits.
///
/// # Panics
/// If `digits` is empty or contains anything but ASCII digits.
pub fn encode_numeric(digits: &[char], out: &mut Codewords) {
    assert!(!digits.is_empty(), "empty numeric run");
    out.push(M_LATCH_NUMERIC);
    for group in digits.chunks(MAX_GROUP_DIGITS) {
        encode_digit_group(group, out);
    }
}

/// Converts one group of at most 44 digits. No latch is emitted.
pub fn encode_digit_group(group: &[char], out: &mut Codewords) {
    assert!(
        (1..=MAX_GROUP_DIGITS).contains(&group.len()),
        "numeric group of {} digits", group.len()
    );

    // leading 1 keeps leading zeros
    let mut ascii = [0u8; MAX_GROUP_DIGITS + 1];
    ascii[0] = b'1';
    for (dst, &ch) in ascii[1..].iter_mut().zip(group) {
        assert!(ch.is_ascii_digit(), "{ch:?} is not a digit");
        *dst = ch as u8;
    }
    let ascii = &ascii[..=group.len()];

    let mut b = U160::zero();
    {
        let mut p0 = U160::zero();
        let mut p1 = U160::zero();
        b.bytes_radix_(None, ascii, 10, &mut p0, &mut p1)
            .expect("45 digits base 10 should fit in 160 bits");
    }

    let mut cws = [0u16; MAX_GROUP_CODEWORDS];
    let mut count = 0;
    while !b.is_zero() {
        let r = b.digit_udivide_inplace_(900).expect("900 > 0");
        cws[count] = r as u16;
        count += 1;
    }

    for &cw in cws[..count].iter().rev() {
        out.push(cw);
    }
}
