use crate::core::kernel::signer::decode_secret;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

pub const LIVE_BASE_URL: &str = "https://aten.fonbnk-services.com";
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.fonbnk.com";

/// Which Fonbnk deployment a client talks to. Chosen once per client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Live,
    Sandbox,
}

impl Environment {
    pub const fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox {
            Self::Sandbox
        } else {
            Self::Live
        }
    }

    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Live => LIVE_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }

    pub const fn is_sandbox(self) -> bool {
        matches!(self, Self::Sandbox)
    }
}

/// Client credentials and endpoint selection.
///
/// The secret is the base64 (unpadded) HMAC key issued by Fonbnk. It is kept
/// behind [`Secret`] and never serialized or printed.
#[derive(Debug, Clone)]
pub struct FonbnkConfig {
    client_id: String,
    client_secret: Secret<String>,
    environment: Environment,
    source_param: Option<String>,
    base_url: Option<String>,
}

// Custom Serialize implementation - never expose secrets in serialization
impl Serialize for FonbnkConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("FonbnkConfig", 5)?;
        state.serialize_field("client_id", &self.client_id)?;
        state.serialize_field("client_secret", "[REDACTED]")?;
        state.serialize_field("environment", &self.environment)?;
        state.serialize_field("source_param", &self.source_param)?;
        state.serialize_field("base_url", &self.base_url)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for FonbnkConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct FonbnkConfigHelper {
            client_id: String,
            client_secret: String,
            #[serde(default)]
            environment: Environment,
            #[serde(default)]
            source_param: Option<String>,
            #[serde(default)]
            base_url: Option<String>,
        }

        let helper = FonbnkConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            client_id: helper.client_id,
            client_secret: Secret::new(helper.client_secret),
            environment: helper.environment,
            source_param: helper.source_param,
            base_url: helper.base_url,
        })
    }
}

impl FonbnkConfig {
    /// Create a configuration targeting the live deployment
    #[must_use]
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret: Secret::new(client_secret),
            environment: Environment::Live,
            source_param: None,
            base_url: None,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_CLIENT_ID`
    /// - `{PREFIX}_CLIENT_SECRET`
    /// - `{PREFIX}_SANDBOX` (optional, defaults to false)
    /// - `{PREFIX}_SOURCE` (optional)
    /// - `{PREFIX}_BASE_URL` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let client_id_var = format!("{}_CLIENT_ID", prefix);
        let client_secret_var = format!("{}_CLIENT_SECRET", prefix);
        let sandbox_var = format!("{}_SANDBOX", prefix);
        let source_var = format!("{}_SOURCE", prefix);
        let base_url_var = format!("{}_BASE_URL", prefix);

        let client_id = env::var(&client_id_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(client_id_var))?;

        let client_secret = env::var(&client_secret_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(client_secret_var))?;

        let sandbox = match env::var(&sandbox_var) {
            Ok(raw) => raw.parse::<bool>().map_err(|_| {
                ConfigError::InvalidConfiguration(format!(
                    "{} must be 'true' or 'false', got '{}'",
                    sandbox_var, raw
                ))
            })?,
            Err(_) => false,
        };

        Ok(Self {
            client_id,
            client_secret: Secret::new(client_secret),
            environment: Environment::from_sandbox_flag(sandbox),
            source_param: env::var(&source_var).ok(),
            base_url: env::var(&base_url_var).ok(),
        })
    }

    /// Create configuration from a `.env` file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific `.env` file path
    ///
    /// A missing file is not an error; system environment variables are used.
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Select the deployment
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Shorthand for choosing sandbox or live
    #[must_use]
    pub const fn sandbox(self, sandbox: bool) -> Self {
        self.environment(Environment::from_sandbox_flag(sandbox))
    }

    /// Attach the partner `source` identifier
    #[must_use]
    pub fn source_param(mut self, source: String) -> Self {
        self.source_param = Some(source);
        self
    }

    /// Point the client at a custom base URL (proxies, local mocks)
    #[must_use]
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get the base64 client secret (use carefully - exposes secret)
    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }

    pub(crate) fn secret(&self) -> &Secret<String> {
        &self.client_secret
    }

    pub const fn selected_environment(&self) -> Environment {
        self.environment
    }

    pub fn source(&self) -> Option<&str> {
        self.source_param.as_deref()
    }

    /// Base URL every request path is appended to
    pub fn endpoint(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Check the credentials up front instead of at the first signed request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client_id.is_empty() {
            return Err(ConfigError::InvalidConfiguration(
                "client id must not be empty".to_string(),
            ));
        }
        decode_secret(self.client_secret.expose_secret())?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid client secret: {0}")]
    InvalidSecret(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_selection() {
        let live = FonbnkConfig::new("id".to_string(), "c2VjcmV0".to_string());
        assert_eq!(live.endpoint(), LIVE_BASE_URL);

        let sandbox = live.clone().sandbox(true);
        assert_eq!(sandbox.endpoint(), SANDBOX_BASE_URL);
        assert!(sandbox.selected_environment().is_sandbox());

        let custom = sandbox.base_url("http://127.0.0.1:9000".to_string());
        assert_eq!(custom.endpoint(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_serialization_redacts_secret() {
        let config = FonbnkConfig::new("client-1".to_string(), "c2VjcmV0".to_string());
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("client-1"));
        assert!(json.contains("[REDACTED]"));
        assert!(!json.contains("c2VjcmV0"));
        assert!(!format!("{:?}", config).contains("c2VjcmV0"));
    }

    #[test]
    fn test_deserialization_defaults_to_live() {
        let config: FonbnkConfig =
            serde_json::from_str(r#"{"client_id":"abc","client_secret":"c2VjcmV0"}"#).unwrap();

        assert_eq!(config.selected_environment(), Environment::Live);
        assert_eq!(config.client_secret(), "c2VjcmV0");
        assert!(config.source().is_none());
    }

    #[test]
    fn test_validate_rejects_malformed_secret() {
        let config = FonbnkConfig::new("id".to_string(), "not base64!!".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSecret(_))
        ));

        let config = FonbnkConfig::new(String::new(), "c2VjcmV0".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfiguration(_))
        ));

        let config = FonbnkConfig::new("id".to_string(), "c2VjcmV0".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env() {
        env::set_var("FONBNK_CFG_TEST_CLIENT_ID", "env-client");
        env::set_var("FONBNK_CFG_TEST_CLIENT_SECRET", "c2VjcmV0");
        env::set_var("FONBNK_CFG_TEST_SANDBOX", "true");
        env::set_var("FONBNK_CFG_TEST_SOURCE", "partner-app");

        let config = FonbnkConfig::from_env("fonbnk_cfg_test").unwrap();
        assert_eq!(config.client_id(), "env-client");
        assert_eq!(config.endpoint(), SANDBOX_BASE_URL);
        assert_eq!(config.source(), Some("partner-app"));
    }

    #[test]
    fn test_from_env_missing_variable() {
        let err = FonbnkConfig::from_env("FONBNK_CFG_ABSENT").unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingEnvironmentVariable(ref var) if var == "FONBNK_CFG_ABSENT_CLIENT_ID")
        );
    }
}
