//! Builds the API client configuration from the environment.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use fatsecret_api::{Config, Credentials};

/// Reads `FATSECRET_*` variables from the process environment.
pub fn from_env() -> Result<Config> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Builds a [`Config`] from a variable lookup.
///
/// `FATSECRET_ACCESS_TOKEN` wins over the client id/secret pair.
pub fn from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let credentials = if let Some(token) = var("FATSECRET_ACCESS_TOKEN") {
        Credentials::AccessToken(token)
    } else {
        match (var("FATSECRET_CLIENT_ID"), var("FATSECRET_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Credentials::ClientCredentials {
                client_id,
                client_secret,
            },
            (Some(_), None) => bail!("FATSECRET_CLIENT_SECRET is not set"),
            (None, Some(_)) => bail!("FATSECRET_CLIENT_ID is not set"),
            (None, None) => bail!(
                "No FatSecret credentials found. Set FATSECRET_CLIENT_ID and \
                 FATSECRET_CLIENT_SECRET, or FATSECRET_ACCESS_TOKEN."
            ),
        }
    };

    let mut config = Config::new(credentials);
    if let Some(url) = var("FATSECRET_API_URL") {
        config = config.with_api_url(&url);
    }
    if let Some(url) = var("FATSECRET_TOKEN_URL") {
        config = config.with_token_url(&url);
    }
    if let Some(scope) = var("FATSECRET_SCOPE") {
        config = config.with_scope(&scope);
    }
    if let Some(secs) = var("FATSECRET_TIMEOUT_SECS") {
        let secs: u64 = secs.trim().parse().with_context(|| {
            format!("FATSECRET_TIMEOUT_SECS must be a whole number, got {:?}", secs)
        })?;
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}
