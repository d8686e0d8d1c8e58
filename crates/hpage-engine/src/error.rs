//! Page errors

use hpage_dom::DomError;
use hpage_js::JsError;
use hpage_net::NetError;

/// Page error
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("No {kind} found with {attribute} [{value}]")]
    NotFound {
        kind: &'static str,
        attribute: &'static str,
        value: String,
    },

    #[error("Malformed URL [{reference}]: {source}")]
    MalformedReference {
        reference: String,
        source: url::ParseError,
    },

    #[error(transparent)]
    Transport(#[from] NetError),

    #[error(transparent)]
    Script(#[from] JsError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Multiple 'body' elements found ({0})")]
    MultipleBodies(usize),
}

impl PageError {
    pub(crate) fn not_found(kind: &'static str, attribute: &'static str, value: &str) -> Self {
        Self::NotFound {
            kind,
            attribute,
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed(reference: &str, source: url::ParseError) -> Self {
        Self::MalformedReference {
            reference: reference.to_string(),
            source,
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;
