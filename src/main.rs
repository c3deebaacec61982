use fonbnk_client::core::config::FonbnkConfig;
use fonbnk_client::fonbnk::OrderLimitsQuery;
use fonbnk_client::{Country, FonbnkBuilder, FonbnkError, OffRampProvider, OffRampType};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Reads FONBNK_CLIENT_ID / FONBNK_CLIENT_SECRET, from .env when present
    #[cfg(feature = "env-file")]
    let config = FonbnkConfig::from_env_file("FONBNK")?;
    #[cfg(not(feature = "env-file"))]
    let config = FonbnkConfig::from_env("FONBNK")?;

    // Fail fast on a malformed secret instead of at the first request
    config.validate()?;

    let fonbnk = FonbnkBuilder::new(config).build()?;
    info!(endpoint = %fonbnk.config().endpoint(), "Fetching Kenyan mobile money limits");

    let query = OrderLimitsQuery {
        offramp_type: OffRampType::MobileMoney,
        country: Country::Kenya,
    };

    match fonbnk.order_limits(query).await {
        Ok(limits) => {
            println!(
                "USD limits: {} - {}, local currency limits: {} - {}",
                limits.min_usd, limits.max_usd, limits.min_local_currency, limits.max_local_currency
            );
        }
        Err(FonbnkError::Service { status, body }) => {
            error!(status, body = %String::from_utf8_lossy(&body), "Fonbnk rejected the request");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
