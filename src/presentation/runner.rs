// Command runners: credential gate, definition loading and client wiring
use crate::application::asset_client::AssetClient;
use crate::application::dashboard_provisioner::DashboardProvisioner;
use crate::application::monitor_provisioner::MonitorProvisioner;
use crate::application::report::MISSING_CREDENTIALS;
use crate::domain::credentials::Credentials;
use crate::domain::dashboard::DashboardDefinition;
use crate::domain::monitor::MonitorDefinition;
use crate::infrastructure::config::CredentialsError;
use std::sync::Arc;

pub const EXIT_OK: u8 = 0;
pub const EXIT_MISSING_CREDENTIALS: u8 = 1;

/// Stop before anything else happens unless both keys are present
pub fn require_credentials(
    loaded: Result<Credentials, CredentialsError>,
) -> Result<Credentials, u8> {
    loaded.map_err(|e| {
        tracing::debug!("{}", e);
        println!("{}", MISSING_CREDENTIALS);
        EXIT_MISSING_CREDENTIALS
    })
}

/// Create the dashboard. Exit status is 0 whether or not the platform accepted it.
pub async fn run_dashboard<L, C>(
    credentials: Result<Credentials, CredentialsError>,
    load: L,
    connect: C,
) -> anyhow::Result<u8>
where
    L: FnOnce() -> anyhow::Result<DashboardDefinition>,
    C: FnOnce(&Credentials) -> Arc<dyn AssetClient>,
{
    let credentials = match require_credentials(credentials) {
        Ok(credentials) => credentials,
        Err(code) => return Ok(code),
    };

    let dashboard = load()?;
    let provisioner = DashboardProvisioner::new(connect(&credentials), credentials.app_base_url());
    provisioner.provision(&dashboard).await;

    Ok(EXIT_OK)
}

/// Create every monitor. Partial or total failure still exits 0.
pub async fn run_monitors<L, C>(
    credentials: Result<Credentials, CredentialsError>,
    load: L,
    connect: C,
) -> anyhow::Result<u8>
where
    L: FnOnce() -> anyhow::Result<Vec<MonitorDefinition>>,
    C: FnOnce(&Credentials) -> Arc<dyn AssetClient>,
{
    let credentials = match require_credentials(credentials) {
        Ok(credentials) => credentials,
        Err(code) => return Ok(code),
    };

    let monitors = load()?;
    tracing::debug!("Loaded {} monitor definitions", monitors.len());

    let provisioner = MonitorProvisioner::new(connect(&credentials));
    provisioner.provision_all(&monitors).await;

    Ok(EXIT_OK)
}
