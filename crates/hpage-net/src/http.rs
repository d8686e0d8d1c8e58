//! Blocking HTTP transport backed by reqwest

use crate::{Method, NetError, Response, Transport};
use url::Url;

/// HTTP client transport
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, NetError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| NetError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &Url, method: Method, params: &[(String, String)]) -> Result<Response, NetError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(NetError::InvalidUrl(format!("unsupported scheme in {url}")));
        }
        tracing::info!("HTTP {} {}", method.as_str(), url);

        let request = match method {
            Method::Get | Method::Head | Method::Delete => {
                let mut target = url.clone();
                if !params.is_empty() {
                    target.query_pairs_mut().extend_pairs(params);
                }
                let verb = match method {
                    Method::Head => reqwest::Method::HEAD,
                    Method::Delete => reqwest::Method::DELETE,
                    _ => reqwest::Method::GET,
                };
                self.client.request(verb, target)
            }
            Method::Post => self.client.post(url.clone()).form(params),
            Method::Put => self.client.put(url.clone()).form(params),
        };

        let response = request.send().map_err(|e| NetError::Network(e.to_string()))?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response.bytes().map_err(|e| NetError::Network(e.to_string()))?;

        Ok(Response::new(status.as_u16(), headers, body.to_vec())
            .with_status_text(status.canonical_reason().unwrap_or("")))
    }
}
