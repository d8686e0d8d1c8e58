//! hpage Networking
//!
//! The transport contract pages fetch through, plus the response snapshot
//! and charset decoding shared by everything that reads a body.

mod encoding;
#[cfg(feature = "http")]
mod http;
mod response;

pub use encoding::{DecodeError, Encoding, TextDecoder, decode};
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use response::Response;
pub use url::Url;

/// Charset assumed when nothing better is known
pub const DEFAULT_CHARSET: &str = "ISO-8859-1";

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

/// Fetches resources on behalf of a page
pub trait Transport {
    /// Perform a request. Any status code is a successful fetch; only I/O
    /// level failures are errors.
    fn fetch(&self, url: &Url, method: Method, params: &[(String, String)]) -> Result<Response, NetError>;
}

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
