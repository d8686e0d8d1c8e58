//! Text Decoding
//!
//! Decodes response bodies by charset label through `encoding_rs`, so any
//! WHATWG label works. A byte order mark overrides the label. Unknown
//! labels fall back to UTF-8 with a warning.

pub use encoding_rs::Encoding;

/// TextDecoder - decode bytes to a string
#[derive(Debug, Clone)]
pub struct TextDecoder {
    label: String,
    encoding: Option<&'static Encoding>,
    fatal: bool,
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self::new("utf-8")
    }
}

impl TextDecoder {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.trim().to_ascii_lowercase(),
            encoding: Encoding::for_label(label.as_bytes()),
            fatal: false,
        }
    }

    /// Fail on malformed input instead of substituting U+FFFD
    pub fn fatal(mut self, fatal: bool) -> Self {
        self.fatal = fatal;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolved encoding, `None` for an unknown label
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    /// Decode bytes to string
    pub fn decode(&self, input: &[u8]) -> Result<String, DecodeError> {
        let encoding = self.encoding.unwrap_or_else(|| {
            tracing::warn!("Unsupported charset [{}], decoding as UTF-8", self.label);
            encoding_rs::UTF_8
        });

        let (text, used, had_errors) = encoding.decode(input);
        if had_errors && self.fatal {
            return Err(DecodeError {
                encoding: used.name(),
            });
        }
        Ok(text.into_owned())
    }
}

/// Decode with replacement characters; never fails
pub fn decode(input: &[u8], label: &str) -> String {
    TextDecoder::new(label)
        .decode(input)
        .unwrap_or_else(|_| String::from_utf8_lossy(input).into_owned())
}

/// Decode error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed {encoding} input")]
pub struct DecodeError {
    pub encoding: &'static str,
}
