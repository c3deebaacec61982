use crate::core::errors::FonbnkError;
use crate::core::traits::{FonbnkApi, KycProvider, OffRampProvider};
use crate::core::{config::FonbnkConfig, kernel::RestClient};
use crate::fonbnk::types::{
    BestOfferQuery, BestOfferResponse, ConfirmOrderBody, CreateOrderBody, KycStateResponse,
    KycSubmitBody, KycSubmitResponse, OrderLimitsQuery, OrderLimitsResponse, OrderResponse,
    RequiredFields, ValidateResponse,
};
use async_trait::async_trait;

pub mod kyc;
pub mod offramp;

pub use kyc::Kyc;
pub use offramp::OffRamp;

/// Fonbnk connector that composes the KYC and off-ramp implementations
pub struct FonbnkConnector<R: RestClient> {
    pub kyc: Kyc<R>,
    pub offramp: OffRamp<R>,
    config: FonbnkConfig,
}

impl<R: RestClient + Clone + Send + Sync> FonbnkConnector<R> {
    pub fn new(rest: R, config: FonbnkConfig) -> Self {
        Self {
            kyc: Kyc::new(&rest),
            offramp: OffRamp::new(&rest),
            config,
        }
    }

    pub fn config(&self) -> &FonbnkConfig {
        &self.config
    }

    /// The partner `source` identifier configured for this client, if any
    pub fn source(&self) -> Option<&str> {
        self.config.source()
    }
}

#[async_trait]
impl<R: RestClient + Clone + Send + Sync> KycProvider for FonbnkConnector<R> {
    async fn kyc_state(&self, phone_number: &str) -> Result<KycStateResponse, FonbnkError> {
        self.kyc.kyc_state(phone_number).await
    }

    async fn submit_kyc(&self, body: KycSubmitBody) -> Result<KycSubmitResponse, FonbnkError> {
        self.kyc.submit_kyc(body).await
    }
}

#[async_trait]
impl<R: RestClient + Clone + Send + Sync> OffRampProvider for FonbnkConnector<R> {
    async fn order_limits(
        &self,
        query: OrderLimitsQuery,
    ) -> Result<OrderLimitsResponse, FonbnkError> {
        self.offramp.order_limits(query).await
    }

    async fn best_offer(&self, query: BestOfferQuery) -> Result<BestOfferResponse, FonbnkError> {
        self.offramp.best_offer(query).await
    }

    async fn validate_fields(
        &self,
        offer_id: &str,
        required_fields: RequiredFields,
    ) -> Result<ValidateResponse, FonbnkError> {
        self.offramp.validate_fields(offer_id, required_fields).await
    }

    async fn create_order(
        &self,
        order: CreateOrderBody,
        required_fields: RequiredFields,
    ) -> Result<OrderResponse, FonbnkError> {
        self.offramp.create_order(order, required_fields).await
    }

    async fn confirm_order(&self, body: ConfirmOrderBody) -> Result<OrderResponse, FonbnkError> {
        self.offramp.confirm_order(body).await
    }
}

impl<R: RestClient + Clone + Send + Sync> FonbnkApi for FonbnkConnector<R> {}
