//! High level encoding output

use core::fmt;
use core::ops::Deref;

/// Largest value a codeword can take (inclusive).
pub const MAX_CODEWORD: u16 = 929;

/// Ordered sequence of data codewords produced by the high level encoder,
/// ready to be handed to the error correction and layout stages.
///
/// Its [`Display`](fmt::Display) rendering is the decimal value of every
/// codeword separated by a single space, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Codewords(Vec<u16>);

impl Codewords {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends a codeword.
    ///
    /// # Panics
    /// If `codeword` is greater than [`MAX_CODEWORD`].
    #[inline]
    pub fn push(&mut self, codeword: u16) {
        assert!(codeword <= MAX_CODEWORD, "codeword {codeword} out of range");
        self.0.push(codeword);
    }

    pub fn extend_from_slice(&mut self, codewords: &[u16]) {
        for &cw in codewords {
            self.push(cw);
        }
    }

    /// Consumes the sequence and returns the raw codewords.
    pub fn into_vec(self) -> Vec<u16> {
        self.0
    }
}

impl Deref for Codewords {
    type Target = [u16];

    fn deref(&self) -> &[u16] {
        &self.0
    }
}

impl AsRef<[u16]> for Codewords {
    fn as_ref(&self) -> &[u16] {
        &self.0
    }
}

impl From<Codewords> for Vec<u16> {
    fn from(cws: Codewords) -> Self {
        cws.0
    }
}

impl fmt::Display for Codewords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for cw in iter {
                write!(f, " {cw}")?;
            }
        }
        Ok(())
    }
}
