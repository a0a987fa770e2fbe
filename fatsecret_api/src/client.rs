//! Client for the FatSecret Platform REST API.

use serde::de::DeserializeOwned;

use crate::{
    transport::{HttpTransport, Params, Transport},
    types, Config, Error,
};

/// Client for the FatSecret Platform REST API.
///
/// Holds no state of its own beyond the transport, so one instance can be
/// shared between concurrent callers. Endpoint bindings live alongside the
/// resources they return (see `categories.rs`).
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client that talks to the endpoints named in `config`.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Invokes `method` and unwraps the payload stored under `field`.
    pub(crate) async fn call<P>(
        &self,
        method: &str,
        params: &Params,
        field: &str,
    ) -> Result<P, Error>
    where
        P: DeserializeOwned,
    {
        let body = self.transport.invoke(method, params).await?;
        types::decode::<P>(&body, field)?
            .into_result()
            .inspect_err(|e| {
                if let Error::Api { code, message } = e {
                    tracing::warn!("{} returned API error {:?}: {}", method, code, message);
                }
            })
    }
}
