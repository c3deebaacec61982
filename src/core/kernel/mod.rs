//! Fonbnk Kernel - signing, transport and response decoding
//!
//! Every call goes through the same pipeline:
//!
//! 1. [`RestClient::execute`] builds the final URL, including query parameters
//!    in the order they were given.
//! 2. [`ReqwestRest::authenticate`] reads the clock once and asks the
//!    [`Signer`] to sign `"{timestamp}:{path?query}"`, then adds the
//!    `x-client-id`, `x-timestamp`, `x-signature`, `User-Agent`, `Accept` and
//!    `Content-Type` headers.
//! 3. An [`HttpTransport`] sends the request. [`ReqwestTransport`] is the
//!    default; tests swap in their own.
//! 4. [`decode_response`] drains the body, maps statuses of 400 and above to
//!    [`FonbnkError::Service`](crate::core::errors::FonbnkError::Service), and
//!    decodes everything else as JSON.
//!
//! ## Example
//! ```rust,no_run
//! use fonbnk_client::core::config::FonbnkConfig;
//! use fonbnk_client::core::kernel::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FonbnkConfig::new("client_id".to_string(), "c2VjcmV0".to_string()).sandbox(true);
//! let rest = RestClientBuilder::new(RestClientConfig::new(config.endpoint().to_string()))
//!     .with_signer(Arc::new(HmacSigner::from_config(&config)))
//!     .build()?;
//!
//! let limits: serde_json::Value = rest
//!     .get_json(
//!         "/api/offramp/limits",
//!         &[("type", "mobile_money".to_string()), ("country", "KE".to_string())],
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
pub(crate) mod mock;
pub mod rest;
pub mod signer;
pub mod transport;

pub use rest::{
    decode_response, ReqwestRest, RestClient, RestClientBuilder, RestClientConfig, DEFAULT_TIMEOUT,
};
pub use signer::{generate_signature, HmacSigner, SignatureResult, Signer};
pub use transport::{
    AuthenticatedRequest, HttpTransport, RawResponse, ReqwestTransport, ResponseBody,
};
