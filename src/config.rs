//! Encoder configuration

use serde::{Deserialize, Serialize};

use crate::charset::Charset;

/// Options used to build an [`Encoder`](crate::Encoder).
///
/// Every field has a default, so a partial (or empty) document deserializes
/// into a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Name of the character encoding used for byte compaction.
    pub encoding: String,
    /// Emit an ECI designator when the encoding is not the implicit default.
    pub eci: bool,
    /// Treat `url(data:...)` messages as raw byte payloads.
    pub data_urls: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            encoding: Charset::DEFAULT.name().to_owned(),
            eci: false,
            data_urls: true,
        }
    }
}

impl EncoderOptions {
    pub fn encoding(mut self, name: impl Into<String>) -> Self {
        self.encoding = name.into();
        self
    }

    pub fn eci(mut self, enabled: bool) -> Self {
        self.eci = enabled;
        self
    }

    pub fn data_urls(mut self, enabled: bool) -> Self {
        self.data_urls = enabled;
        self
    }
}
