use crate::core::config::{Environment, FonbnkConfig};
use crate::core::errors::FonbnkError;
use crate::core::kernel::{
    HmacSigner, HttpTransport, ReqwestRest, RestClientBuilder, RestClientConfig, DEFAULT_TIMEOUT,
};
use crate::fonbnk::connector::FonbnkConnector;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating Fonbnk connectors
///
/// ```rust,no_run
/// use fonbnk_client::core::config::FonbnkConfig;
/// use fonbnk_client::fonbnk::FonbnkBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), fonbnk_client::FonbnkError> {
/// let connector = FonbnkBuilder::new(FonbnkConfig::new(
///     "client_id".to_string(),
///     "c2VjcmV0".to_string(),
/// ))
/// .with_sandbox(true)
/// .with_timeout(Duration::from_secs(5))
/// .build()?;
/// # Ok(())
/// # }
/// ```
pub struct FonbnkBuilder {
    config: FonbnkConfig,
    timeout: Duration,
    user_agent: Option<String>,
    http_client: Option<Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl FonbnkBuilder {
    pub fn new(config: FonbnkConfig) -> Self {
        Self {
            config,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            http_client: None,
            transport: None,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: FonbnkConfig) -> Self {
        self.config = config;
        self
    }

    /// Choose sandbox or live
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.config = self.config.sandbox(sandbox);
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.config = self.config.environment(environment);
        self
    }

    /// Override the base URL (proxies, mock servers)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config = self.config.base_url(base_url);
        self
    }

    /// Set the per-request timeout of the default transport
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Send requests through a caller-configured `reqwest::Client`
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Send requests through a custom transport
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the connector.
    ///
    /// The secret is not decoded here; a malformed secret is reported by the
    /// first request, before anything is sent. Call
    /// [`FonbnkConfig::validate`] first to fail earlier.
    pub fn build(self) -> Result<FonbnkConnector<ReqwestRest>, FonbnkError> {
        let mut rest_config =
            RestClientConfig::new(self.config.endpoint().to_string()).with_timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent);
        }

        let mut rest_builder = RestClientBuilder::new(rest_config)
            .with_signer(Arc::new(HmacSigner::from_config(&self.config)));

        if let Some(transport) = self.transport {
            rest_builder = rest_builder.with_transport(transport);
        } else if let Some(client) = self.http_client {
            rest_builder = rest_builder.with_http_client(client);
        }

        let rest = rest_builder.build()?;

        Ok(FonbnkConnector::new(rest, self.config))
    }
}

/// Build a connector with default transport settings
pub fn build_connector(config: FonbnkConfig) -> Result<FonbnkConnector<ReqwestRest>, FonbnkError> {
    FonbnkBuilder::new(config).build()
}
