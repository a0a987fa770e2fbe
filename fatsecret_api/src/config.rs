//! Client configuration: endpoints, credentials, and timeouts.

use std::fmt;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://platform.fatsecret.com/rest/server.api";
const DEFAULT_TOKEN_URL: &str = "https://oauth.fatsecret.com/connect/token";
const DEFAULT_SCOPE: &str = "basic";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the transport authenticates its requests.
#[derive(Clone)]
pub enum Credentials {
    /// OAuth 2.0 client credentials, exchanged for an access token on demand.
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
    /// A pre-issued bearer token. Used as-is and never refreshed.
    AccessToken(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
            Self::AccessToken(_) => f.debug_tuple("AccessToken").field(&"<redacted>").finish(),
        }
    }
}

/// Settings owned by a [`crate::HttpTransport`].
///
/// Only the credentials are required; everything else defaults to the
/// production FatSecret platform.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) api_url: String,
    pub(crate) token_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) scope: String,
    pub(crate) timeout: Duration,
}

impl Config {
    /// Creates a configuration pointing at the production API.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            credentials,
            scope: DEFAULT_SCOPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the method-dispatch endpoint. Used for testing with wiremock.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    /// Overrides the OAuth token endpoint.
    pub fn with_token_url(mut self, token_url: &str) -> Self {
        self.token_url = token_url.to_string();
        self
    }

    /// Sets the OAuth scope requested with client credentials.
    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_string();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
