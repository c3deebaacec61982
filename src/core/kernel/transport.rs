use crate::core::errors::FonbnkError;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};
use std::time::Duration;

/// A fully signed request, ready to hand to a transport
#[derive(Debug, Clone)]
pub struct AuthenticatedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl AuthenticatedRequest {
    /// Path and query exactly as they are written on the request line
    pub fn request_uri(&self) -> String {
        request_uri(&self.url)
    }
}

/// Path plus `?query` when the URL carries a query component
pub fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// A response body that can be read exactly once.
///
/// Reading takes ownership, so the underlying stream is released when the
/// read completes or fails; dropping an unread body releases it as well.
#[async_trait]
pub trait ResponseBody: Send {
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>, FonbnkError>;
}

/// Status plus an unread body
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Box<dyn ResponseBody>,
}

impl std::fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Sends signed requests. Must be safe to share between concurrent callers.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: AuthenticatedRequest) -> Result<RawResponse, FonbnkError>;
}

/// Transport backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the given overall request timeout
    pub fn new(timeout: Duration) -> Result<Self, FonbnkError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            FonbnkError::InvalidParameters(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    /// Wrap a caller-configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FonbnkError {
    if e.is_timeout() {
        FonbnkError::Transport(format!("request timed out: {}", e))
    } else {
        FonbnkError::Transport(format!("request failed: {}", e))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: AuthenticatedRequest) -> Result<RawResponse, FonbnkError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        Ok(RawResponse {
            status: response.status(),
            body: Box::new(ReqwestBody(response)),
        })
    }
}

struct ReqwestBody(reqwest::Response);

#[async_trait]
impl ResponseBody for ReqwestBody {
    async fn read_all(self: Box<Self>) -> Result<Vec<u8>, FonbnkError> {
        self.0
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| FonbnkError::Transport(format!("Failed to read response body: {}", e)))
    }
}
