use crate::core::errors::FonbnkError;
use crate::core::kernel::RestClient;
use crate::fonbnk::types::{
    BestOfferQuery, BestOfferResponse, ConfirmOrderBody, CreateOrderBody, KycStateResponse,
    KycSubmitBody, KycSubmitResponse, OrderLimitsQuery, OrderLimitsResponse, OrderResponse,
    ValidateBody, ValidateResponse,
};
use tracing::instrument;

const KYC_PATH: &str = "/api/kyc";
const OFFRAMP_PATH: &str = "/api/offramp";

/// Fonbnk REST endpoints. Paths and shapes only; signing and decoding
/// happen in the kernel.
#[derive(Debug, Clone)]
pub struct FonbnkRest<R: RestClient> {
    rest_client: R,
}

impl<R: RestClient> FonbnkRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    #[instrument(skip(self, phone_number))]
    pub async fn kyc_state(&self, phone_number: &str) -> Result<KycStateResponse, FonbnkError> {
        let endpoint = format!("{}/state", KYC_PATH);
        let query_params = [("phoneNumber", phone_number.to_string())];

        self.rest_client.get_json(&endpoint, &query_params).await
    }

    #[instrument(skip(self, body))]
    pub async fn kyc_submit(&self, body: &KycSubmitBody) -> Result<KycSubmitResponse, FonbnkError> {
        let endpoint = format!("{}/submit", KYC_PATH);
        self.rest_client.post_json(&endpoint, body).await
    }

    #[instrument(skip(self), fields(offramp_type = %query.offramp_type, country = %query.country))]
    pub async fn order_limits(
        &self,
        query: &OrderLimitsQuery,
    ) -> Result<OrderLimitsResponse, FonbnkError> {
        let endpoint = format!("{}/limits", OFFRAMP_PATH);
        self.rest_client
            .get_json(&endpoint, &query.query_params())
            .await
    }

    #[instrument(skip(self), fields(offramp_type = %query.offramp_type, country = %query.country))]
    pub async fn best_offer(&self, query: &BestOfferQuery) -> Result<BestOfferResponse, FonbnkError> {
        let endpoint = format!("{}/best-offer", OFFRAMP_PATH);
        self.rest_client
            .get_json(&endpoint, &query.query_params())
            .await
    }

    #[instrument(skip(self, body), fields(offer_id = %body.offer_id))]
    pub async fn validate_fields(&self, body: &ValidateBody) -> Result<ValidateResponse, FonbnkError> {
        let endpoint = format!("{}/validate-fields", OFFRAMP_PATH);
        self.rest_client.post_json(&endpoint, body).await
    }

    #[instrument(skip(self, body), fields(offer_id = %body.offer_id))]
    pub async fn create_order(&self, body: &CreateOrderBody) -> Result<OrderResponse, FonbnkError> {
        let endpoint = format!("{}/create-order", OFFRAMP_PATH);
        self.rest_client.post_json(&endpoint, body).await
    }

    #[instrument(skip(self, body), fields(order_id = %body.order_id))]
    pub async fn confirm_order(&self, body: &ConfirmOrderBody) -> Result<OrderResponse, FonbnkError> {
        let endpoint = format!("{}/confirm-order", OFFRAMP_PATH);
        self.rest_client.post_json(&endpoint, body).await
    }
}
