//! Response snapshot

/// An HTTP response, captured whole
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Media type without parameters, lowercased ("" when unknown)
    pub content_type: String,
    /// `charset` parameter of the Content-Type header
    pub charset: Option<String>,
}

impl Response {
    /// Build a response, deriving content type and charset from the
    /// `Content-Type` header.
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        let (content_type, charset) = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| parse_content_type(value))
            .unwrap_or_default();
        Self {
            status,
            status_text: String::new(),
            headers,
            body,
            content_type,
            charset,
        }
    }

    /// 200 response with the given content type and body
    pub fn ok(content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self::new(
            200,
            vec![("Content-Type".to_string(), content_type.to_string())],
            body.into(),
        )
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        if name.eq_ignore_ascii_case("content-type") {
            let (content_type, charset) = parse_content_type(value);
            self.content_type = content_type;
            self.charset = charset;
        }
        self
    }

    pub fn with_status_text(mut self, text: &str) -> Self {
        self.status_text = text.to_string();
        self
    }

    /// First header value with this name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Split `text/html; charset=UTF-8` into (`text/html`, `Some("UTF-8")`)
fn parse_content_type(value: &str) -> (String, Option<String>) {
    let mut parts = value.split(';');
    let media = parts.next().unwrap_or("").trim().to_ascii_lowercase();
    let charset = parts.find_map(|param| {
        let (key, val) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| val.trim().trim_matches('"').to_string())
            .filter(|c| !c.is_empty())
    });
    (media, charset)
}
