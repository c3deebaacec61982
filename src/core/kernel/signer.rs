use crate::core::config::{ConfigError, FonbnkConfig};
use crate::core::errors::FonbnkError;
use base64::engine::general_purpose;
use base64::Engine;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use std::collections::HashMap;

type HmacSha256 = Hmac<Sha256>;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
pub const TIMESTAMP_HEADER: &str = "x-timestamp";
pub const SIGNATURE_HEADER: &str = "x-signature";

/// Result type for signing operations: authentication headers by name
pub type SignatureResult = Result<HashMap<String, String>, FonbnkError>;

/// Signer trait for request authentication
///
/// Implementations turn the exact path and query of an outgoing request,
/// plus the timestamp captured for that request, into authentication headers.
pub trait Signer: Send + Sync {
    /// Sign a request and return the headers to attach
    ///
    /// # Arguments
    /// * `request_uri` - Path plus query string, byte-identical to what goes on the wire
    /// * `timestamp` - Request timestamp in milliseconds since the UNIX epoch
    fn sign_request(&self, request_uri: &str, timestamp: u64) -> SignatureResult;
}

/// Decode the client secret into the raw HMAC key.
///
/// Fonbnk issues secrets in the unpadded standard alphabet; a trailing `=`
/// is rejected.
pub(crate) fn decode_secret(secret_b64: &str) -> Result<Vec<u8>, ConfigError> {
    general_purpose::STANDARD_NO_PAD
        .decode(secret_b64)
        .map_err(|e| ConfigError::InvalidSecret(format!("failed to decode client secret: {}", e)))
}

/// Compute the Fonbnk request signature.
///
/// The signed message is `"{timestamp}:{request_uri}"`. The key is decoded
/// from unpadded base64 while the digest is encoded with padded base64; the
/// remote verifier expects exactly this pairing.
pub fn generate_signature(
    secret_b64: &str,
    timestamp: &str,
    request_uri: &str,
) -> Result<String, FonbnkError> {
    let key = decode_secret(secret_b64)?;

    let mut mac = HmacSha256::new_from_slice(&key)
        .map_err(|e| ConfigError::InvalidSecret(format!("Invalid HMAC key: {}", e)))?;

    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(request_uri.as_bytes());

    Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// HMAC-SHA256 signer holding the client id and secret
pub struct HmacSigner {
    client_id: String,
    client_secret: Secret<String>,
}

impl HmacSigner {
    pub fn new(client_id: String, client_secret: Secret<String>) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    pub fn from_config(config: &FonbnkConfig) -> Self {
        Self::new(config.client_id().to_string(), config.secret().clone())
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl Signer for HmacSigner {
    fn sign_request(&self, request_uri: &str, timestamp: u64) -> SignatureResult {
        let timestamp = timestamp.to_string();
        let signature =
            generate_signature(self.client_secret.expose_secret(), &timestamp, request_uri)?;

        let mut headers = HashMap::new();
        headers.insert(CLIENT_ID_HEADER.to_string(), self.client_id.clone());
        headers.insert(TIMESTAMP_HEADER.to_string(), timestamp);
        headers.insert(SIGNATURE_HEADER.to_string(), signature);

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // HMAC-SHA256("1000:/x", key = "secret"), computed outside this crate
    const SCENARIO_SIGNATURE: &str = "wr8DkzaDOT6XfhFnCpDwAvs3TT2cqqVZKi5sPCMWo7c=";

    const GOLDEN_TIMESTAMP: &str = "1726048611284";
    const GOLDEN_PATH: &str = "/api/offramp/limits?type=mobile_money&country=KE";
    // HMAC-SHA256 over "1726048611284:{GOLDEN_PATH}" with key "secret", base64 padded
    const GOLDEN_SIGNATURE: &str = "IizABb6YwBJopceAyk8F+Gvj7YKzcvoxpYNlvqiTEkk=";

    #[test]
    fn test_scenario_signature() {
        let signature = generate_signature("c2VjcmV0", "1000", "/x").unwrap();
        assert_eq!(signature, SCENARIO_SIGNATURE);
    }

    #[test]
    fn test_signature_is_deterministic() {
        let first = generate_signature("c2VjcmV0", GOLDEN_TIMESTAMP, GOLDEN_PATH).unwrap();
        let second = generate_signature("c2VjcmV0", GOLDEN_TIMESTAMP, GOLDEN_PATH).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, GOLDEN_SIGNATURE);
    }

    #[test]
    fn test_query_order_changes_signature() {
        let ordered = generate_signature("c2VjcmV0", "1000", "/x?a=1&b=2").unwrap();
        let swapped = generate_signature("c2VjcmV0", "1000", "/x?b=2&a=1").unwrap();
        assert_ne!(ordered, swapped);
    }

    #[test]
    fn test_secret_uses_unpadded_alphabet() {
        // "secret1" needs padding in the standard alphabet
        let unpadded = generate_signature("c2VjcmV0MQ", GOLDEN_TIMESTAMP, GOLDEN_PATH).unwrap();
        assert_eq!(unpadded, "RYWCDxrv217ItRJTxtBVRajEz2+1Q6r1xPUtXpIbRRU=");

        let padded = generate_signature("c2VjcmV0MQ==", GOLDEN_TIMESTAMP, GOLDEN_PATH);
        assert!(matches!(
            padded,
            Err(FonbnkError::Config(ConfigError::InvalidSecret(_)))
        ));
    }

    #[test]
    fn test_signature_output_is_padded() {
        let signature = generate_signature("c2VjcmV0", "1000", "/x").unwrap();
        assert_eq!(signature.len(), 44);
        assert!(signature.ends_with('='));
    }

    #[test]
    fn test_malformed_secret_is_config_error() {
        let result = generate_signature("not base64!!", "1000", "/x");
        assert!(matches!(
            result,
            Err(FonbnkError::Config(ConfigError::InvalidSecret(_)))
        ));
    }

    #[test]
    fn test_reference_service_vector() {
        // Needs the sandbox secret the reference vector was produced with
        let Ok(secret) = env::var("FONBNK_CLIENT_SECRET") else {
            println!("FONBNK_CLIENT_SECRET not set, skipping reference vector");
            return;
        };

        let signature = generate_signature(&secret, GOLDEN_TIMESTAMP, GOLDEN_PATH).unwrap();
        assert_eq!(signature, "pesqxOs0AVLg4CJV/zfA0nsNF4TkfCUAo8yQ+T8eRLg=");
    }

    #[test]
    fn test_hmac_signer_headers() {
        let signer = HmacSigner::new("client-42".to_string(), Secret::new("c2VjcmV0".to_string()));
        let headers = signer.sign_request("/x", 1000).unwrap();

        assert_eq!(headers[CLIENT_ID_HEADER], "client-42");
        assert_eq!(headers[TIMESTAMP_HEADER], "1000");
        assert_eq!(headers[SIGNATURE_HEADER], SCENARIO_SIGNATURE);
        assert!(!format!("{:?}", signer).contains("c2VjcmV0"));
    }

    #[test]
    fn test_hmac_signer_propagates_bad_secret() {
        let signer = HmacSigner::new("client".to_string(), Secret::new("%%%".to_string()));
        assert!(signer.sign_request("/x", 1000).is_err());
    }
}
