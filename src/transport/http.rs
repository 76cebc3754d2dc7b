//! The reqwest-backed production transport.

use tracing::{debug, warn};

use crate::transport::{QueryParams, Response, Transport, TransportError};
use async_trait::async_trait;

/// A [`Transport`] that issues real HTTP requests with [`reqwest`].
///
/// The base URL is fixed at construction; request paths are appended to it.
/// No timeout is set by default — callers that need one supply their own
/// configured [`reqwest::Client`] via [`HttpTransport::with_client`] or wrap
/// calls in `tokio::time::timeout`.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport for the given base URL (e.g. `https://api.example.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Creates a transport with a caller-configured client (timeouts, proxies, ...).
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client }
    }

    /// The full request URL for a path. Paths are expected to start with `/`.
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Response, TransportError> {
        let url = self.url_for(path);
        debug!(%url, params = params.len(), "GET");

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(&params.pairs());
        }

        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status, "GET failed");
            return Err(TransportError::Status { status, body });
        }

        let body = response
            .bytes()
            .await
            .map_err(map_reqwest_error)?
            .to_vec();
        debug!(%url, status, bytes = body.len(), "GET ok");
        Ok(Response { status, body })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidUrl(e.to_string())
    } else {
        TransportError::Connection(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let transport = HttpTransport::new("https://api.example.com");
        assert_eq!(transport.url_for("/pets"), "https://api.example.com/pets");
        assert_eq!(
            transport.url_for("/pets/42"),
            "https://api.example.com/pets/42"
        );
    }

    #[test]
    fn trailing_slashes_on_base_url_are_stripped() {
        let transport = HttpTransport::new("https://api.example.com/");
        assert_eq!(transport.url_for("/pets"), "https://api.example.com/pets");
    }
}
