//! Authenticated method dispatch against the FatSecret REST endpoint.

use std::collections::BTreeMap;
use std::future::Future;

use url::Url;

use crate::{auth::TokenSource, Config, TransportError};

/// Flat string parameters sent with an operation.
pub type Params = BTreeMap<String, String>;

/// Executes one named API operation and hands back the raw response body.
///
/// Implementations own authentication and HTTP concerns and must be safe to
/// call concurrently through a shared reference.
pub trait Transport {
    fn invoke(
        &self,
        method: &str,
        params: &Params,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;
}

/// [`Transport`] that POSTs form-encoded calls to the FatSecret
/// `server.api` endpoint with an OAuth 2.0 bearer token.
///
/// A single `reqwest::Client` is shared by every call so connections are
/// pooled; its timeout comes from [`Config::timeout`].
pub struct HttpTransport {
    http: reqwest::Client,
    api_url: Url,
    tokens: TokenSource,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let api_url = parse_url(&config.api_url)?;
        let token_url = parse_url(&config.token_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError::Network(e)
            })?;
        Ok(Self {
            http,
            api_url,
            tokens: TokenSource::new(config.credentials, token_url, config.scope),
        })
    }
}

impl Transport for HttpTransport {
    async fn invoke(&self, method: &str, params: &Params) -> Result<Vec<u8>, TransportError> {
        let token = self.tokens.bearer(&self.http).await?;

        let mut form: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        form.push(("method", method));
        form.push(("format", "json"));

        tracing::debug!("Invoking {} with {} parameter(s)", method, params.len());
        let resp = self
            .http
            .post(self.api_url.clone())
            .bearer_auth(token)
            .header("accept", "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to invoke {}: {}", method, e);
                TransportError::Network(e)
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            TransportError::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("{} failed with status {}: {}", method, status, snippet);
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body.to_vec())
    }
}

fn parse_url(raw: &str) -> Result<Url, TransportError> {
    Url::parse(raw).map_err(|e| {
        tracing::error!("Invalid URL configured: {} ({})", raw, e);
        TransportError::InvalidUrl(format!("{}: {}", raw, e))
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
