use crate::core::errors::FonbnkError;
use crate::fonbnk::types::{
    BestOfferQuery, BestOfferResponse, ConfirmOrderBody, CreateOrderBody, KycStateResponse,
    KycSubmitBody, KycSubmitResponse, OrderLimitsQuery, OrderLimitsResponse, OrderResponse,
    RequiredFields, ValidateResponse,
};
use async_trait::async_trait;

#[async_trait]
pub trait KycProvider {
    /// Look up the KYC state of a phone number
    async fn kyc_state(&self, phone_number: &str) -> Result<KycStateResponse, FonbnkError>;

    /// Submit identity details for review
    async fn submit_kyc(&self, body: KycSubmitBody) -> Result<KycSubmitResponse, FonbnkError>;
}

#[async_trait]
pub trait OffRampProvider {
    async fn order_limits(&self, query: OrderLimitsQuery)
        -> Result<OrderLimitsResponse, FonbnkError>;

    async fn best_offer(&self, query: BestOfferQuery) -> Result<BestOfferResponse, FonbnkError>;

    /// Check recipient details against an offer before ordering
    async fn validate_fields(
        &self,
        offer_id: &str,
        required_fields: RequiredFields,
    ) -> Result<ValidateResponse, FonbnkError>;

    /// Create an order; `required_fields` replaces whatever the body carries
    async fn create_order(
        &self,
        order: CreateOrderBody,
        required_fields: RequiredFields,
    ) -> Result<OrderResponse, FonbnkError>;

    /// Confirm an order once the on-chain transfer has been sent
    async fn confirm_order(&self, body: ConfirmOrderBody) -> Result<OrderResponse, FonbnkError>;
}

/// Composite trait for callers that need the whole API
pub trait FonbnkApi: KycProvider + OffRampProvider {}
