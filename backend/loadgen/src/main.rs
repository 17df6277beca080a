/// Load generator for the social API
///
/// Drives the HTTP surface with sequential load, phased stress, and
/// concurrent request scenarios against a running server.
mod client;
mod report;
mod scenarios;

use anyhow::{bail, Result};

use crate::client::ApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let scenario = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    let base_url =
        std::env::var("TARGET_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    tracing::info!("Running scenario '{}' against {}", scenario, base_url);

    let client = ApiClient::new(base_url)?;
    client.wait_until_healthy().await?;

    match scenario.as_str() {
        "load" => scenarios::load::run(&client).await?,
        "stress" => scenarios::stress::run(&client).await?,
        "concurrent" => scenarios::concurrent::run(&client).await?,
        "all" => {
            scenarios::load::run(&client).await?;
            scenarios::stress::run(&client).await?;
            scenarios::concurrent::run(&client).await?;
        }
        other => bail!("unknown scenario '{other}' (expected load | stress | concurrent | all)"),
    }

    Ok(())
}
