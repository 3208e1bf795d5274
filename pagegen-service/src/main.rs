use pagegen_service::config::PagegenConfig;
use pagegen_service::services::metrics::init_metrics;
use pagegen_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Missing credentials abort here, before anything is served.
    let config = PagegenConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("pagegen-service", "info", config.otlp_endpoint.as_deref());
    init_metrics();

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
