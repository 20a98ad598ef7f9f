//! Compaction mode selection
//!
//! At every cursor position the encoder measures the digit, text and binary
//! runs starting there and picks the mode for the next segment. Numeric
//! compaction always wins for runs of 13 digits or more, and for digits that
//! end the message.

use crate::text::is_text;

/// Minimum digit run that is numeric compacted.
pub const MIN_NUMERIC_RUN: usize = 13;
/// Minimum text run that is text compacted when reached from a binary scan.
pub const MIN_TEXT_RUN: usize = 5;

/// Next segment to encode, with its length in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    Numeric(usize),
    Text(usize),
    Byte(usize),
}

impl Run {
    /// Number of characters consumed.
    pub fn len(self) -> usize {
        match self {
            Run::Numeric(n) | Run::Text(n) | Run::Byte(n) => n,
        }
    }
}

/// Number of consecutive ASCII digits starting at `pos`.
pub fn consecutive_digit_run(msg: &[char], pos: usize) -> usize {
    msg[pos..].iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Number of consecutive text compactable characters starting at `pos`.
/// Digit runs shorter than 13 count as text; the scan stops in front of a
/// longer one.
pub fn consecutive_text_run(msg: &[char], pos: usize) -> usize {
    let mut idx = pos;
    while idx < msg.len() {
        let digits = digit_run_capped(msg, idx);
        if digits >= MIN_NUMERIC_RUN {
            break;
        }
        if digits > 0 {
            idx += digits;
            continue;
        }
        if !is_text(msg[idx]) {
            break;
        }
        idx += 1;
    }
    idx - pos
}

/// Number of consecutive characters starting at `pos` that are better byte
/// compacted. The scan stops in front of a run of 13 digits or in front of 5
/// text compactable characters.
pub fn consecutive_binary_run(msg: &[char], pos: usize) -> usize {
    let mut idx = pos;
    while idx < msg.len() {
        if digit_run_capped(msg, idx) >= MIN_NUMERIC_RUN {
            break;
        }
        let text = msg[idx..].iter().take(MIN_TEXT_RUN).take_while(|&&c| is_text(c)).count();
        if text >= MIN_TEXT_RUN {
            break;
        }
        idx += 1;
    }
    idx - pos
}

fn digit_run_capped(msg: &[char], pos: usize) -> usize {
    msg[pos..].iter().take(MIN_NUMERIC_RUN).take_while(|c| c.is_ascii_digit()).count()
}

/// Picks the mode and length of the segment starting at `pos`.
///
/// The returned run is never empty.
pub fn select(msg: &[char], pos: usize) -> Run {
    assert!(pos < msg.len(), "cursor {pos} past the end of the message");

    let digits = consecutive_digit_run(msg, pos);
    if digits >= MIN_NUMERIC_RUN || (digits > 0 && pos + digits == msg.len()) {
        return Run::Numeric(digits);
    }

    let text = consecutive_text_run(msg, pos);
    if text >= MIN_TEXT_RUN {
        return Run::Text(text);
    }

    Run::Byte(consecutive_binary_run(msg, pos).max(1))
}
