//! PDF417 high level encoder.
//!
//! Converts a message into the sequence of data codewords (0 to 929) of a
//! PDF417 symbol, choosing at every position between text, numeric and byte
//! compaction as described by ISO/IEC 15438. Error correction, symbol layout
//! and rendering are left to the caller.
//!
//! ```
//! use pdf417_hl::{encode_high_level, Encoder, EncoderOptions};
//!
//! let cws = encode_high_level("PDF417").unwrap();
//! assert_eq!(cws.to_string(), "453 178 121 239");
//!
//! let encoder = Encoder::new(&EncoderOptions::default().encoding("ISO-8859-1").eci(true)).unwrap();
//! assert_eq!(&encoder.encode("ä").unwrap()[..2], [927, 3]);
//! ```

pub mod byte;
pub mod charset;
pub mod codewords;
pub mod config;
pub mod data_url;
pub mod error;
pub mod high_level;
pub mod message;
pub mod numeric;
pub mod selector;
pub mod text;

pub use charset::{ByteEncoding, Charset};
pub use codewords::Codewords;
pub use config::EncoderOptions;
pub use error::{Error, Result};
pub use high_level::{encode_high_level, encode_high_level_with, Encoder, Mode};
pub use text::SubMode;
