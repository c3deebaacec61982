use crate::core::types::{
    Country, KycIdType, KycStatus, Network, OffRampAsset, OffRampCurrency, OffRampPaymentType,
    OffRampType,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// KYC state of a phone number
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycStateResponse {
    #[serde(default)]
    pub kyc_url: String,
    pub offramp_kyc_required: bool,
    pub onramp_kyc_required: bool,
    pub passed_kyc: bool,
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub kyc_status_description: String,
    pub reached_kyc_limit: bool,
}

/// Personal details sent with a KYC submission. The service expects these
/// keys in snake case.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KycUserFields {
    pub first_name: String,
    pub last_name: String,
    pub dob: DateTime<Utc>,
    pub email: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmitBody {
    pub phone_number: String,
    pub id_type: KycIdType,
    pub user_fields: KycUserFields,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KycSubmitResponse {
    pub success: bool,
}

/// Recipient details a payout rail needs before an order can be created.
///
/// Each variant lists exactly the fields the service recognizes for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredFields {
    PhoneNumber {
        phone_number: String,
    },
    PayBill {
        short_code: String,
        account_number: String,
    },
}

impl RequiredFields {
    pub fn phone_number(phone_number: impl Into<String>) -> Self {
        Self::PhoneNumber {
            phone_number: phone_number.into(),
        }
    }

    pub fn pay_bill(short_code: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self::PayBill {
            short_code: short_code.into(),
            account_number: account_number.into(),
        }
    }

    /// The `requiredFields` object as sent on the wire
    pub fn into_map(self) -> BTreeMap<String, String> {
        match self {
            Self::PhoneNumber { phone_number } => {
                BTreeMap::from([("phoneNumber".to_string(), phone_number)])
            }
            Self::PayBill {
                short_code,
                account_number,
            } => BTreeMap::from([
                ("shortCode".to_string(), short_code),
                ("accountNumber".to_string(), account_number),
            ]),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateBody {
    pub offer_id: String,
    pub required_fields: BTreeMap<String, String>,
}

impl ValidateBody {
    pub fn new(offer_id: impl Into<String>, required_fields: RequiredFields) -> Self {
        Self {
            offer_id: offer_id.into(),
            required_fields: required_fields.into_map(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    pub offer_id: String,
    /// Overwritten from the [`RequiredFields`] passed to `create_order`
    #[serde(default)]
    pub required_fields: BTreeMap<String, String>,
    pub payment_type: OffRampPaymentType,
    pub network: Network,
    pub asset: OffRampAsset,
    pub address: String,
    pub currency: OffRampCurrency,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub ip: String,
    #[serde(default)]
    pub order_params: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmOrderBody {
    pub order_id: String,
    pub hash: String,
}

/// Query for `GET /api/offramp/limits`
#[derive(Debug, Clone, Copy)]
pub struct OrderLimitsQuery {
    pub offramp_type: OffRampType,
    pub country: Country,
}

impl OrderLimitsQuery {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type", self.offramp_type.to_string()),
            ("country", self.country.to_string()),
        ]
    }
}

/// Query for `GET /api/offramp/best-offer`
#[derive(Debug, Clone, Copy)]
pub struct BestOfferQuery {
    pub amount: Decimal,
    pub currency: OffRampCurrency,
    pub offramp_type: OffRampType,
    pub country: Country,
}

impl BestOfferQuery {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("amount", self.amount.normalize().to_string()),
            ("currency", self.currency.to_string()),
            ("type", self.offramp_type.to_string()),
            ("country", self.country.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLimitsResponse {
    pub min_usd: Decimal,
    pub max_usd: Decimal,
    pub min_local_currency: Decimal,
    pub max_local_currency: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: String,
    pub exchange_rate: Decimal,
}

/// Amounts and fees of a payout, in USD and local currency
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cashout {
    pub local_currency_amount: Decimal,
    pub usd_amount: Decimal,
    pub fee_amount_usd: Decimal,
    pub fee_amount_usd_fonbnk: Decimal,
    pub fee_amount_usd_partner: Decimal,
    pub fee_amount_local_currency: Decimal,
    pub fee_amount_local_currency_fonbnk: Decimal,
    pub fee_amount_local_currency_partner: Decimal,
}

/// Reduced best-offer response: enough to proceed with an off-ramp
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BestOfferResponse {
    pub offer: Offer,
    pub cashout: Cashout,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidateResponse {
    #[serde(default)]
    pub details: Vec<ValidationDetail>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub offer_id: String,
    pub payment_type: OffRampPaymentType,
    pub network: Network,
    pub asset: OffRampAsset,
    pub exchange_rate: Decimal,
    pub from_address: String,
    pub to_address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub order_params: String,
    pub cashout: Cashout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_required_fields_wire_shape() {
        let body = ValidateBody::new("offer-1", RequiredFields::pay_bill("888880", "ACC-12"));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["offerId"], "offer-1");
        assert_eq!(json["requiredFields"]["shortCode"], "888880");
        assert_eq!(json["requiredFields"]["accountNumber"], "ACC-12");
        assert_eq!(json["requiredFields"].as_object().unwrap().len(), 2);

        let phone = RequiredFields::phone_number("+254700000000").into_map();
        assert_eq!(phone.len(), 1);
        assert_eq!(phone["phoneNumber"], "+254700000000");
    }

    #[test]
    fn test_limits_query_order() {
        let query = OrderLimitsQuery {
            offramp_type: OffRampType::MobileMoney,
            country: Country::Kenya,
        };
        assert_eq!(
            query.query_params(),
            vec![
                ("type", "mobile_money".to_string()),
                ("country", "KE".to_string())
            ]
        );
    }

    #[test]
    fn test_best_offer_amount_formatting() {
        let query = BestOfferQuery {
            amount: Decimal::from_str("25.50").unwrap(),
            currency: OffRampCurrency::Usd,
            offramp_type: OffRampType::Bank,
            country: Country::Uganda,
        };
        assert_eq!(
            query.query_params(),
            vec![
                ("amount", "25.5".to_string()),
                ("currency", "usd".to_string()),
                ("type", "bank".to_string()),
                ("country", "UG".to_string()),
            ]
        );
    }

    #[test]
    fn test_create_order_amount_is_a_json_number() {
        let body = CreateOrderBody {
            offer_id: "offer-1".to_string(),
            required_fields: BTreeMap::new(),
            payment_type: OffRampPaymentType::CryptoWallet,
            network: Network::Celo,
            asset: OffRampAsset::Cusd,
            address: "0xabc".to_string(),
            currency: OffRampCurrency::Usd,
            amount: Decimal::from_str("12.5").unwrap(),
            ip: "127.0.0.1".to_string(),
            order_params: String::new(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["amount"], serde_json::json!(12.5));
        assert_eq!(json["paymentType"], "CRYPTO_WALLET");
        assert_eq!(json["network"], "CELO");
    }

    #[test]
    fn test_order_response_decodes() {
        let raw = r#"{
            "_id": "ord-1",
            "offerId": "offer-1",
            "paymentType": "CRYPTO_WALLET",
            "network": "CELO",
            "asset": "USDC",
            "exchangeRate": 129.4,
            "fromAddress": "0xfrom",
            "toAddress": "0xto",
            "status": "pending",
            "createdAt": "2024-09-11T10:00:00.000Z",
            "expiresAt": "2024-09-11T10:30:00.000Z",
            "cashout": {
                "localCurrencyAmount": 1294,
                "usdAmount": 10,
                "feeAmountUsd": 0.2,
                "feeAmountUsdFonbnk": 0.1,
                "feeAmountUsdPartner": 0.1,
                "feeAmountLocalCurrency": 25.88,
                "feeAmountLocalCurrencyFonbnk": 12.94,
                "feeAmountLocalCurrencyPartner": 12.94
            },
            "addedLater": {"ignored": true}
        }"#;

        let order: OrderResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id, "ord-1");
        assert_eq!(order.asset, OffRampAsset::Usdc);
        assert_eq!(order.cashout.usd_amount, Decimal::from(10));
        assert!(order.hash.is_empty());
        assert!(order.expires_at > order.created_at);
    }

    #[test]
    fn test_kyc_submit_body_field_names() {
        let body = KycSubmitBody {
            phone_number: "+254700000000".to_string(),
            id_type: KycIdType::NationalId,
            user_fields: KycUserFields {
                first_name: "Wanjiru".to_string(),
                last_name: "Kamau".to_string(),
                dob: Utc.with_ymd_and_hms(1990, 1, 31, 0, 0, 0).unwrap(),
                email: "w.kamau@example.com".to_string(),
                id_number: "12345678".to_string(),
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["phoneNumber"], "+254700000000");
        assert_eq!(json["idType"], "NATIONAL_ID");
        assert_eq!(json["userFields"]["first_name"], "Wanjiru");
        assert!(json["userFields"]["dob"]
            .as_str()
            .unwrap()
            .starts_with("1990-01-31T00:00:00"));
    }
}
