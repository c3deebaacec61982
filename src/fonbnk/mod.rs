pub mod builder;
pub mod connector;
pub mod rest;
pub mod types;

// Re-export main components
pub use builder::{build_connector, FonbnkBuilder};
pub use connector::{FonbnkConnector, Kyc, OffRamp};
pub use rest::FonbnkRest;
pub use types::{
    BestOfferQuery, BestOfferResponse, Cashout, ConfirmOrderBody, CreateOrderBody,
    KycStateResponse, KycSubmitBody, KycSubmitResponse, KycUserFields, Offer, OrderLimitsQuery,
    OrderLimitsResponse, OrderResponse, RequiredFields, ValidateBody, ValidateResponse,
    ValidationDetail,
};
