//! fhir-client: demo driver binary entrypoint

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fhir_client::{Config, FhirClient};
use fhir_model::{FhirVersion, JsonCodec};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        base_url = %config.base_url,
        time_zone = %config.time_zone,
        "Starting FHIR client demo"
    );

    let client = match FhirClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build client");
            std::process::exit(1);
        }
    };
    let codec = JsonCodec::new(FhirVersion::R4, config.time_zone.as_str());

    if let Err(e) = fhir_client::demo::run(&client, &codec, &config).await {
        tracing::error!(error = %e, retryable = e.is_retryable(), "Demo sequence failed");
        std::process::exit(1);
    }

    tracing::info!("Demo sequence complete");
}
