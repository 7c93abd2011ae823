use crate::domain::credentials::{Credentials, DEFAULT_SITE};
use crate::domain::dashboard::DashboardDefinition;
use crate::domain::monitor::MonitorDefinition;
use anyhow::Context;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const DASHBOARD_CONFIG: &str = "config/dashboard";
pub const MONITORS_CONFIG: &str = "config/monitors";

const ENV_PREFIX: &str = "DD";

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize)]
struct CredentialSettings {
    api_key: Option<String>,
    app_key: Option<String>,
    site: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorCatalog {
    #[serde(default)]
    pub monitors: Vec<MonitorDefinition>,
}

/// Read `DD_API_KEY`, `DD_APP_KEY` and `DD_SITE` from the process environment
pub fn load_credentials() -> Result<Credentials, CredentialsError> {
    credentials_from(config::Environment::with_prefix(ENV_PREFIX))
}

fn credentials_from(environment: config::Environment) -> Result<Credentials, CredentialsError> {
    let settings = config::Config::builder()
        .add_source(environment)
        .build()?;
    let raw: CredentialSettings = settings.try_deserialize()?;

    let api_key = raw.api_key.filter(|v| !v.is_empty());
    let app_key = raw.app_key.filter(|v| !v.is_empty());

    match (api_key, app_key) {
        (Some(api_key), Some(app_key)) => {
            let site = raw
                .site
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SITE.to_string());
            Ok(Credentials::new(api_key, app_key, site))
        }
        (api_key, app_key) => {
            let mut missing = Vec::new();
            if api_key.is_none() {
                missing.push("DD_API_KEY");
            }
            if app_key.is_none() {
                missing.push("DD_APP_KEY");
            }
            Err(CredentialsError::Missing(missing))
        }
    }
}

pub fn load_dashboard_definition() -> anyhow::Result<DashboardDefinition> {
    load_definition(DASHBOARD_CONFIG)
}

pub fn load_monitor_definitions() -> anyhow::Result<Vec<MonitorDefinition>> {
    let catalog: MonitorCatalog = load_definition(MONITORS_CONFIG)?;
    Ok(catalog.monitors)
}

fn load_definition<T: DeserializeOwned>(name: &str) -> anyhow::Result<T> {
    definitions_from(config::File::with_name(name), name)
}

fn definitions_from<T, S>(source: S, origin: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(source)
        .build()
        .with_context(|| format!("Failed to read {}", origin))?;

    settings
        .try_deserialize()
        .with_context(|| format!("Invalid definitions in {}", origin))
}
