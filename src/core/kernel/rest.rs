use crate::core::config::ConfigError;
use crate::core::errors::FonbnkError;
use crate::core::kernel::signer::Signer;
use crate::core::kernel::transport::{
    request_uri, AuthenticatedRequest, HttpTransport, RawResponse, ReqwestTransport,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{instrument, trace};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("fonbnk-rs/", env!("CARGO_PKG_VERSION"));
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// REST client trait for making signed HTTP requests
///
/// Every request is authenticated. Dropping a returned future cancels the
/// in-flight call and releases its connection.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Sign and send a request, returning the undecoded response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Path relative to the configured base URL
    /// * `query_params` - Query parameters, encoded in the given order
    /// * `body` - Raw JSON body, if any
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, FonbnkError>;

    /// Like [`RestClient::execute`], abandoning the call once `deadline` elapses.
    /// An expired deadline is reported as [`FonbnkError::Transport`].
    async fn execute_with_deadline(
        &self,
        deadline: Duration,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, FonbnkError> {
        tokio::time::timeout(deadline, self.execute(method, endpoint, query_params, body))
            .await
            .map_err(|_| FonbnkError::Transport(format!("deadline of {:?} exceeded", deadline)))?
    }

    /// Make a GET request with strongly-typed response
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        query_params: &[(&str, String)],
    ) -> Result<T, FonbnkError> {
        let response = self
            .execute(Method::GET, endpoint, query_params, None)
            .await?;
        decode_response(response).await
    }

    /// Make a POST request with a JSON body and strongly-typed response
    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, FonbnkError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let body = serde_json::to_vec(body)?;
        let response = self
            .execute(Method::POST, endpoint, &[], Some(body))
            .await?;
        decode_response(response).await
    }
}

/// Classify a response and decode its JSON body into `T`.
///
/// The body is consumed in full on every path. Statuses of 400 and above
/// become [`FonbnkError::Service`] with the untouched body bytes.
pub async fn decode_response<T: DeserializeOwned>(response: RawResponse) -> Result<T, FonbnkError> {
    let RawResponse { status, body } = response;
    let bytes = body.read_all().await?;

    trace!(status = %status, body_len = bytes.len(), "Response received");

    if status.as_u16() >= 400 {
        return Err(FonbnkError::Service {
            status: status.as_u16(),
            body: bytes,
        });
    }

    serde_json::from_slice(&bytes).map_err(|source| FonbnkError::Decode {
        shape: std::any::type_name::<T>(),
        source,
    })
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Overall per-request timeout
    pub timeout: Duration,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
            transport: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Use a caller-built `reqwest::Client`; its own timeout settings apply
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.transport = Some(Arc::new(ReqwestTransport::with_client(client)));
        self
    }

    /// Replace the transport entirely
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, FonbnkError> {
        let signer = self.signer.ok_or_else(|| {
            ConfigError::InvalidConfiguration("a signer is required".to_string())
        })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.config.timeout)?),
        };

        Ok(ReqwestRest {
            config: self.config,
            signer,
            transport,
        })
    }
}

/// Implementation of `RestClient` that signs requests and sends them
/// through an [`HttpTransport`]
#[derive(Clone)]
pub struct ReqwestRest {
    config: RestClientConfig,
    signer: Arc<dyn Signer>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Get the current timestamp in milliseconds
    fn get_timestamp() -> Result<u64, FonbnkError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| format!("system clock before UNIX epoch: {}", e))
            .and_then(|d| {
                u64::try_from(d.as_millis())
                    .map_err(|e| format!("timestamp does not fit in u64 milliseconds: {}", e))
            })
            .map_err(|msg| ConfigError::InvalidConfiguration(msg).into())
    }

    /// Build the full URL for an endpoint, appending query parameters in order
    fn build_url(&self, endpoint: &str, query_params: &[(&str, String)]) -> Result<Url, FonbnkError> {
        let raw = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut url = Url::parse(&raw)
            .map_err(|e| FonbnkError::InvalidParameters(format!("Invalid URL '{}': {}", raw, e)))?;

        if !query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query_params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Stamp a request with the auth and content-negotiation headers.
    ///
    /// The timestamp is read once and used both for the signature and the
    /// `x-timestamp` header. The signed path is taken from the final URL,
    /// so it matches the request line byte for byte.
    pub fn authenticate(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<AuthenticatedRequest, FonbnkError> {
        let url = self.build_url(endpoint, query_params)?;
        let timestamp = Self::get_timestamp()?;
        let signed = self.signer.sign_request(&request_uri(&url), timestamp)?;

        let mut headers = HeaderMap::new();
        for (name, value) in signed {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ConfigError::InvalidConfiguration(format!("invalid header name '{}': {}", name, e))
            })?;
            let value = HeaderValue::from_str(&value).map_err(|e| {
                ConfigError::InvalidConfiguration(format!("invalid value for '{}': {}", name.as_str(), e))
            })?;
            headers.insert(name, value);
        }

        let user_agent = HeaderValue::from_str(&self.config.user_agent).map_err(|e| {
            ConfigError::InvalidConfiguration(format!("invalid user agent: {}", e))
        })?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Ok(AuthenticatedRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, query_params, body), fields(method = %method, endpoint = %endpoint))]
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, FonbnkError> {
        let request = self.authenticate(method, endpoint, query_params, body)?;
        self.transport.send(request).await
    }
}
