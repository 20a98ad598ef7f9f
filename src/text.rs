//! Text compaction
//!
//! Characters are mapped to 5-bit values (0-29) in one of four sub-modes and
//! two values are packed into each codeword (`first * 30 + second`).

use crate::codewords::Codewords;

/// Text compaction sub-mode (character table currently in use).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubMode {
    /// Uppercase letters and space. Initial sub-mode of every text segment.
    #[default]
    Alpha,
    /// Lowercase letters and space.
    Lower,
    /// Digits, space and the common symbols.
    Mixed,
    /// The remaining printable ASCII symbols, CR, HT and LF.
    Punctuation,
}

// Control values, named after their role in the source sub-mode
const LL: u8 = 27; // Alpha, Mixed -> Lower (latch)
const AS: u8 = 27; // Lower -> Alpha (shift)
const ML: u8 = 28; // Alpha, Lower -> Mixed (latch)
const AL: u8 = 28; // Mixed -> Alpha (latch)
const PL: u8 = 25; // Mixed -> Punctuation (latch)
const PS: u8 = 29; // Alpha, Lower, Mixed -> Punctuation (shift)
const PAL: u8 = 29; // Punctuation -> Alpha (latch)

/// Value appended to complete the last codeword of an odd-length run.
pub const PAD: u8 = PS;

const SPACE: u8 = 26;

const MIXED_CHAR_SET: [char; 15] = [
    '&', '\r', '\t', ',', ':', '#', '-', '.', '$', '/', '+', '%', '*', '=', '^'
];
const PUNC_CHAR_SET: [char; 29] = [
    ';', '<', '>', '@', '[', '\\', ']', '_', '`', '~', '!', '\r', '\t',
    ',', ':', '\n', '-', '.', '$', '/', '"', '|', '*', '(', ')', '?',
    '{', '}', '\''
];

/// Returns true if `ch` can be text compacted (HT, LF, CR and printable
/// ASCII).
#[inline]
pub fn is_text(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | ' '..='~')
}

impl SubMode {
    /// Value of `ch` in this sub-mode's table, if it has one.
    pub fn value_of(self, ch: char) -> Option<u8> {
        match self {
            SubMode::Alpha => match ch {
                'A'..='Z' => Some(ch as u8 - b'A'),
                ' ' => Some(SPACE),
                _ => None,
            },
            SubMode::Lower => match ch {
                'a'..='z' => Some(ch as u8 - b'a'),
                ' ' => Some(SPACE),
                _ => None,
            },
            SubMode::Mixed => match ch {
                '0'..='9' => Some(ch as u8 - b'0'),
                ' ' => Some(SPACE),
                _ => MIXED_CHAR_SET.iter().position(|&c| c == ch).map(|p| p as u8 + 10),
            },
            SubMode::Punctuation => PUNC_CHAR_SET.iter().position(|&c| c == ch).map(|p| p as u8),
        }
    }

    #[inline]
    fn contains(self, ch: char) -> bool {
        self.value_of(ch).is_some()
    }
}

/// What has to be emitted to encode one character from a given sub-mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The character is in the current table.
    Stay(u8),
    /// Switch table for this character only.
    Shift { code: u8, value: u8 },
    /// Switch table permanently. `codes` is the full latch path.
    Latch { codes: &'static [u8], to: SubMode, value: u8 },
}

/// Chooses how to encode `ch` from sub-mode `from`. `next` is the following
/// character of the same text run, if any. Returns `None` only for
/// characters that no sub-mode can represent.
pub(crate) fn resolve(from: SubMode, ch: char, next: Option<char>) -> Option<Step> {
    use SubMode::*;

    if let Some(value) = from.value_of(ch) {
        return Some(Step::Stay(value));
    }

    let latch = |codes: &'static [u8], to: SubMode| {
        to.value_of(ch).map(|value| Step::Latch { codes, to, value })
    };
    let shift = |code: u8, table: SubMode| table.value_of(ch).map(|value| Step::Shift { code, value });

    match from {
        Alpha if Lower.contains(ch) => latch(&[LL], Lower),
        Alpha if Mixed.contains(ch) => latch(&[ML], Mixed),
        Alpha => shift(PS, Punctuation),

        Lower if Alpha.contains(ch) => shift(AS, Alpha),
        Lower if Mixed.contains(ch) => latch(&[ML], Mixed),
        Lower => shift(PS, Punctuation),

        Mixed if Alpha.contains(ch) => latch(&[AL], Alpha),
        Mixed if Lower.contains(ch) => latch(&[LL], Lower),
        Mixed if next.is_some_and(|n| Punctuation.contains(n)) => latch(&[PL], Punctuation),
        Mixed => shift(PS, Punctuation),

        // only Alpha is reachable from Punctuation
        Punctuation if Alpha.contains(ch) => latch(&[PAL], Alpha),
        Punctuation if Lower.contains(ch) => latch(&[PAL, LL], Lower),
        Punctuation => latch(&[PAL, ML], Mixed),
    }
}

/// Packs 5-bit values two by two into codewords.
struct ValuePacker<'a> {
    out: &'a mut Codewords,
    high: Option<u8>,
}

impl<'a> ValuePacker<'a> {
    fn new(out: &'a mut Codewords) -> Self {
        Self { out, high: None }
    }

    #[inline]
    fn push(&mut self, value: u8) {
        debug_assert!(value < 30);
        match self.high.take() {
            Some(high) => self.out.push(high as u16 * 30 + value as u16),
            None => self.high = Some(value),
        }
    }

    fn finish(mut self) {
        if self.high.is_some() {
            self.push(PAD);
        }
    }
}

/// Text compacts `run` starting in sub-mode `submode` and returns the
/// sub-mode active at the end of the run. No mode latch is emitted: entering
/// text compaction is the caller's business.
///
/// # Panics
/// If `run` contains a character rejected by [`is_text`].
pub fn encode_text(run: &[char], mut submode: SubMode, out: &mut Codewords) -> SubMode {
    let mut packer = ValuePacker::new(out);

    for (k, &ch) in run.iter().enumerate() {
        let step = resolve(submode, ch, run.get(k + 1).copied())
            .unwrap_or_else(|| unreachable!("{ch:?} cannot be text compacted"));
        match step {
            Step::Stay(value) => packer.push(value),
            Step::Shift { code, value } => {
                packer.push(code);
                packer.push(value);
            }
            Step::Latch { codes, to, value } => {
                for &code in codes {
                    packer.push(code);
                }
                packer.push(value);
                submode = to;
            }
        }
    }

    packer.finish();
    submode
}
