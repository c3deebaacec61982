pub mod core;
pub mod fonbnk;

pub use crate::core::{
    config::{Environment, FonbnkConfig},
    errors::FonbnkError,
    traits::{FonbnkApi, KycProvider, OffRampProvider},
    types::*,
};
pub use fonbnk::{build_connector, FonbnkBuilder, FonbnkConnector};
