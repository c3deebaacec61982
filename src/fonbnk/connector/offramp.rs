use crate::core::errors::FonbnkError;
use crate::core::kernel::RestClient;
use crate::core::traits::OffRampProvider;
use crate::fonbnk::rest::FonbnkRest;
use crate::fonbnk::types::{
    BestOfferQuery, BestOfferResponse, ConfirmOrderBody, CreateOrderBody, OrderLimitsQuery,
    OrderLimitsResponse, OrderResponse, RequiredFields, ValidateBody, ValidateResponse,
};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Fonbnk off-ramp implementation
pub struct OffRamp<R: RestClient> {
    rest: FonbnkRest<R>,
}

impl<R: RestClient + Clone> OffRamp<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: FonbnkRest::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient + Send + Sync> OffRampProvider for OffRamp<R> {
    async fn order_limits(
        &self,
        query: OrderLimitsQuery,
    ) -> Result<OrderLimitsResponse, FonbnkError> {
        self.rest.order_limits(&query).await
    }

    async fn best_offer(&self, query: BestOfferQuery) -> Result<BestOfferResponse, FonbnkError> {
        if query.amount <= Decimal::ZERO {
            return Err(FonbnkError::InvalidParameters(format!(
                "amount must be positive, got {}",
                query.amount
            )));
        }

        self.rest.best_offer(&query).await
    }

    async fn validate_fields(
        &self,
        offer_id: &str,
        required_fields: RequiredFields,
    ) -> Result<ValidateResponse, FonbnkError> {
        let body = ValidateBody::new(offer_id, required_fields);
        self.rest.validate_fields(&body).await
    }

    async fn create_order(
        &self,
        mut order: CreateOrderBody,
        required_fields: RequiredFields,
    ) -> Result<OrderResponse, FonbnkError> {
        order.required_fields = required_fields.into_map();
        self.rest.create_order(&order).await
    }

    async fn confirm_order(&self, body: ConfirmOrderBody) -> Result<OrderResponse, FonbnkError> {
        self.rest.confirm_order(&body).await
    }
}
