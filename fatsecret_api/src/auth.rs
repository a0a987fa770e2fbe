//! OAuth 2.0 client-credentials token acquisition.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;
use url::Url;

use crate::{config::Credentials, transport::truncate_body, TransportError};

/// Tokens are refreshed this long before the server-reported expiry.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Upper bound on how long a token is reused, whatever `expires_in` claims.
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Hands out bearer tokens, fetching a new one from the token endpoint
/// when the cached token is missing or about to expire.
///
/// The lock is held across the refresh so concurrent callers wait for one
/// token request instead of each issuing their own.
pub(crate) struct TokenSource {
    credentials: Credentials,
    token_url: Url,
    scope: String,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenSource {
    pub(crate) fn new(credentials: Credentials, token_url: Url, scope: String) -> Self {
        Self {
            credentials,
            token_url,
            scope,
            cached: Mutex::new(None),
        }
    }

    /// Returns a bearer token usable for the next API call.
    pub(crate) async fn bearer(&self, http: &reqwest::Client) -> Result<String, TransportError> {
        let (client_id, client_secret) = match &self.credentials {
            Credentials::AccessToken(token) => return Ok(token.clone()),
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } => (client_id, client_secret),
        };

        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.fetch(http, client_id, client_secret).await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    async fn fetch(
        &self,
        http: &reqwest::Client,
        client_id: &str,
        client_secret: &str,
    ) -> Result<CachedToken, TransportError> {
        tracing::debug!("Requesting access token from {}", self.token_url);
        let resp = http
            .post(self.token_url.clone())
            .basic_auth(client_id, Some(client_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", self.scope.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Token request failed with status {}: {}", status, snippet);
            return Err(TransportError::Auth(format!(
                "token endpoint returned {}: {}",
                status, snippet
            )));
        }

        let parsed: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse token response: {}", e);
            TransportError::Auth(format!("unreadable token response: {}", e))
        })?;

        if let Some(token_type) = parsed.token_type.as_deref() {
            if !token_type.eq_ignore_ascii_case("bearer") {
                return Err(TransportError::Auth(format!(
                    "unsupported token type {}",
                    token_type
                )));
            }
        }

        let value = parsed
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TransportError::Auth("token response carried no access_token".into()))?;

        Ok(CachedToken {
            value,
            expires_at: expiry_from(Instant::now(), parsed.expires_in.unwrap_or(0)),
        })
    }
}

fn expiry_from(now: Instant, expires_in: u64) -> Instant {
    let lifetime = Duration::from_secs(expires_in)
        .min(MAX_TOKEN_LIFETIME)
        .saturating_sub(REFRESH_MARGIN);
    now.checked_add(lifetime).unwrap_or(now)
}
