use serde::{Deserialize, Serialize};
use std::fmt;

/// Payout country (ISO 3166-1 alpha-2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "KE")]
    Kenya,
    #[serde(rename = "UG")]
    Uganda,
}

impl Country {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kenya => "KE",
            Self::Uganda => "UG",
        }
    }
}

/// Blockchain the crypto leg settles on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Celo,
}

impl Network {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Celo => "CELO",
        }
    }
}

/// Payout rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffRampType {
    Bank,
    Airtime,
    MobileMoney,
    Paybill,
}

impl OffRampType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Airtime => "airtime",
            Self::MobileMoney => "mobile_money",
            Self::Paybill => "paybill",
        }
    }
}

/// Currency an amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffRampCurrency {
    Local,
    Usd,
}

impl OffRampCurrency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Usd => "usd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OffRampAsset {
    Cusd,
    Usdt,
    Usdc,
}

impl OffRampAsset {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cusd => "CUSD",
            Self::Usdt => "USDT",
            Self::Usdc => "USDC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OffRampPaymentType {
    #[serde(rename = "CRYPTO_WALLET")]
    CryptoWallet,
}

impl OffRampPaymentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CryptoWallet => "CRYPTO_WALLET",
        }
    }
}

/// KYC review state reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Initiated,
    Approved,
    Rejected,
    Invalid,
    /// A state this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl KycStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initiated => "initiated",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// Identity document accepted for KYC (Kenya)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycIdType {
    NationalId,
    Passport,
    AlienCard,
}

impl KycIdType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NationalId => "NATIONAL_ID",
            Self::Passport => "PASSPORT",
            Self::AlienCard => "ALIEN_CARD",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    Country,
    Network,
    OffRampType,
    OffRampCurrency,
    OffRampAsset,
    OffRampPaymentType,
    KycStatus,
    KycIdType,
);
