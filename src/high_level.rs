//! User data to high level encoding conversion functions

use tracing::{debug, trace, warn};

use crate::byte::encode_bytes;
use crate::charset::{ByteEncoding, Charset};
use crate::codewords::Codewords;
use crate::config::EncoderOptions;
use crate::data_url::DataUrl;
use crate::error::{Error, Result};
use crate::message::Message;
use crate::numeric::encode_numeric;
use crate::selector::{self, Run};
use crate::text::{encode_text, SubMode};

/// Codeword used to latch to text mode
pub const M_LATCH_TEXT: u16 = 900;
/// Codeword used to latch to byte mode (if length is multiple of 6 use
/// M_LATCH_BYTE_M6).
pub const M_LATCH_BYTE: u16 = 901;
/// Codeword used to latch to numeric mode
pub const M_LATCH_NUMERIC: u16 = 902;

// 903 to 912: reserved for future use

/// Codeword used to switch to byte mode for next codedword (usable only if
/// the current mode is text).
pub const M_SHIFT_BYTE: u16 = 913;

// 914 to 920: reserved for future use
// 921: used for reader initialization or programming (barcode used to
// enable/disable specific features of the reader).
// 922 to 923: Macro PDF4l7

/// Codeword used to latch to byte mode when the number of bytes is a
/// multiple of 6.
pub const M_LATCH_BYTE_M6: u16 = 924;
/// Codeword used to specifiy a ECI (user) custom ID
pub const ECI_CUSTOM_ID: u16 = 925;
/// Codeword used to specifiy a ECI code
pub const ECI_GENERAL_ID: u16 = 926;
/// Codeword used to specifiy a ECI code page
pub const ECI_CODE_PAGE: u16 = 927;
// 928: Block start for PDF macro

/// Compaction mode of the upcoming codewords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Initial mode of every symbol.
    #[default]
    Text,
    Numeric,
    Byte,
}

/// Appends the ECI sequence announcing `designator`.
pub fn encode_eci(designator: u32, out: &mut Codewords) -> Result<()> {
    match designator {
        0..=899 => {
            out.push(ECI_CODE_PAGE);
            out.push(designator as u16);
        }
        900..=810_899 => {
            out.push(ECI_GENERAL_ID);
            out.push((designator / 900 - 1) as u16);
            out.push((designator % 900) as u16);
        }
        810_900..=811_799 => {
            out.push(ECI_CUSTOM_ID);
            out.push((designator - 810_900) as u16);
        }
        _ => return Err(Error::EciOutOfRange(designator)),
    }
    Ok(())
}

/// State of one encoding run. Each call to [`Encoder::encode`] owns a fresh
/// session.
#[derive(Debug)]
struct Session {
    out: Codewords,
    mode: Mode,
    submode: SubMode,
}

impl Session {
    fn new(capacity: usize) -> Self {
        Self { out: Codewords::with_capacity(capacity), mode: Mode::Text, submode: SubMode::Alpha }
    }

    fn append_text(&mut self, run: &[char]) {
        if self.mode != Mode::Text {
            self.out.push(M_LATCH_TEXT);
            self.mode = Mode::Text;
            self.submode = SubMode::Alpha;
        }
        self.submode = encode_text(run, self.submode, &mut self.out);
    }

    fn append_numeric(&mut self, digits: &[char]) {
        encode_numeric(digits, &mut self.out);
        self.mode = Mode::Numeric;
    }

    fn append_bytes(&mut self, bytes: &[u8]) {
        self.mode = encode_bytes(bytes, self.mode, &mut self.out);
        // the byte shift keeps the text sub-mode, latches do not
        if self.mode != Mode::Text {
            self.submode = SubMode::Alpha;
        }
    }
}

/// High level PDF417 encoder: converts messages to data codewords.
///
/// An encoder holds no per-message state and can be shared between threads
/// (provided its [`ByteEncoding`] can).
#[derive(Debug, Clone)]
pub struct Encoder<E = Charset> {
    encoding: E,
    eci: bool,
    data_urls: bool,
}

impl Encoder<Charset> {
    /// Creates an encoder from `options`. Fails if the encoding is unknown.
    pub fn new(options: &EncoderOptions) -> Result<Self> {
        let encoding: Charset = options.encoding.parse()?;
        Ok(Self { encoding, eci: options.eci, data_urls: options.data_urls })
    }
}

impl Default for Encoder<Charset> {
    fn default() -> Self {
        Self::with_encoding(Charset::DEFAULT)
    }
}

impl<E: ByteEncoding> Encoder<E> {
    /// Creates an encoder using a caller supplied byte encoding, without ECI.
    pub fn with_encoding(encoding: E) -> Self {
        Self { encoding, eci: false, data_urls: true }
    }

    /// Enables or disables ECI signalling of non default encodings.
    pub fn eci(mut self, enabled: bool) -> Self {
        self.eci = enabled;
        self
    }

    /// Enables or disables `url(data:...)` handling.
    pub fn data_urls(mut self, enabled: bool) -> Self {
        self.data_urls = enabled;
        self
    }

    pub fn encoding(&self) -> &E {
        &self.encoding
    }

    /// Encodes `msg` into data codewords.
    pub fn encode(&self, msg: &str) -> Result<Codewords> {
        let mut session = Session::new(msg.len());

        if self.eci && !self.encoding.is_default() {
            match self.encoding.eci_designator() {
                Some(designator) => {
                    trace!(designator, "eci");
                    encode_eci(designator, &mut session.out)?;
                }
                None => warn!(
                    encoding = self.encoding.name(),
                    "no ECI designator for encoding, not signalled"
                ),
            }
        }

        if let Some(url) = self.data_urls.then(|| DataUrl::parse(msg)).flatten() {
            let payload = url.decode(&self.encoding)?;
            trace!(len = payload.len(), base64 = url.is_base64(), "data url");
            // an empty payload leaves nothing to latch for
            if !payload.is_empty() {
                session.append_bytes(&payload);
            }
        } else {
            self.encode_message(&Message::new(msg, &self.encoding), &mut session)?;
        }

        debug!(
            chars = msg.chars().count(),
            encoding = self.encoding.name(),
            codewords = session.out.len(),
            "high level encoding done"
        );
        Ok(session.out)
    }

    fn encode_message(&self, msg: &Message, session: &mut Session) -> Result<()> {
        let chars = msg.chars();
        let mut p = 0;
        while p < chars.len() {
            let run = selector::select(chars, p);
            let len = run.len();
            assert!(len > 0, "empty run selected at {p}");
            trace!(?run, pos = p, "segment");

            match run {
                Run::Numeric(n) => session.append_numeric(&chars[p..p + n]),
                Run::Text(n) => session.append_text(&chars[p..p + n]),
                Run::Byte(n) => session.append_bytes(msg.byte_span(p, n)?),
            }
            p += len;
        }
        Ok(())
    }
}

/// Encodes `msg` with the default encoding (code page 437), without ECI.
pub fn encode_high_level(msg: &str) -> Result<Codewords> {
    Encoder::<Charset>::default().encode(msg)
}

/// Encodes `msg` with the named encoding, emitting an ECI designator if
/// `eci` is set and the encoding is not the default one.
pub fn encode_high_level_with(msg: &str, encoding: &str, eci: bool) -> Result<Codewords> {
    Encoder::new(&EncoderOptions::default().encoding(encoding).eci(eci))?.encode(msg)
}
