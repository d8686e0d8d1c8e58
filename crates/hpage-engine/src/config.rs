//! Engine configuration

use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run scripts at all
    pub enable_javascript: bool,
    /// Propagate script faults from lifecycle handlers instead of logging them
    pub raise_script_errors: bool,
    /// Charset assumed when neither the response nor the document names one
    pub default_charset: String,
    /// User agent for the HTTP transport
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_javascript: true,
            raise_script_errors: true,
            default_charset: hpage_net::DEFAULT_CHARSET.to_string(),
            user_agent: format!("hpage/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with scripting turned off
    pub fn without_javascript() -> Self {
        Self {
            enable_javascript: false,
            ..Self::default()
        }
    }
}
