mod auth;
mod categories;
mod client;
mod config;
mod errors;
pub mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::{Config, Credentials};
pub use self::errors::{Error, TransportError};
pub use self::transport::{HttpTransport, Params, Transport};
