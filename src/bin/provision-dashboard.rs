// Creates the operations dashboard from config/dashboard.toml
use std::process::ExitCode;
use std::sync::Arc;

use datadog_provisioner::application::asset_client::AssetClient;
use datadog_provisioner::domain::credentials::Credentials;
use datadog_provisioner::infrastructure::config::{load_credentials, load_dashboard_definition};
use datadog_provisioner::infrastructure::datadog_client::DatadogClient;
use datadog_provisioner::infrastructure::logging::init_tracing;
use datadog_provisioner::presentation::runner::run_dashboard;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let code = run_dashboard(
        load_credentials(),
        load_dashboard_definition,
        |credentials: &Credentials| -> Arc<dyn AssetClient> {
            Arc::new(DatadogClient::new(credentials))
        },
    )
    .await?;

    Ok(ExitCode::from(code))
}
