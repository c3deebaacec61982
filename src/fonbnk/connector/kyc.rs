use crate::core::errors::FonbnkError;
use crate::core::kernel::RestClient;
use crate::core::traits::KycProvider;
use crate::fonbnk::rest::FonbnkRest;
use crate::fonbnk::types::{KycStateResponse, KycSubmitBody, KycSubmitResponse};
use async_trait::async_trait;

/// Fonbnk KYC implementation
pub struct Kyc<R: RestClient> {
    rest: FonbnkRest<R>,
}

impl<R: RestClient + Clone> Kyc<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: FonbnkRest::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient + Send + Sync> KycProvider for Kyc<R> {
    async fn kyc_state(&self, phone_number: &str) -> Result<KycStateResponse, FonbnkError> {
        if phone_number.trim().is_empty() {
            return Err(FonbnkError::InvalidParameters(
                "phone number must not be empty".to_string(),
            ));
        }

        self.rest.kyc_state(phone_number).await
    }

    async fn submit_kyc(&self, body: KycSubmitBody) -> Result<KycSubmitResponse, FonbnkError> {
        self.rest.kyc_submit(&body).await
    }
}
