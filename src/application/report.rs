// User-facing outcome lines printed to stdout
use crate::application::asset_client::SubmitError;
use crate::domain::asset::AssetId;

pub const MISSING_CREDENTIALS: &str =
    "❌ Please set DD_API_KEY and DD_APP_KEY environment variables";

pub fn dashboard_url(app_base_url: &str, id: &AssetId) -> String {
    format!("{}/dashboard/{}", app_base_url.trim_end_matches('/'), id)
}

pub fn dashboard_created(url: &str) -> String {
    format!("✅ Dashboard created successfully!\nDashboard URL: {}", url)
}

pub fn dashboard_failed(err: &SubmitError) -> String {
    format!("❌ Failed to create dashboard: {}", err)
}

pub fn monitor_created(name: &str) -> String {
    format!("✅ Monitor created: {}", name)
}

pub fn monitor_failed(name: &str, err: &SubmitError) -> String {
    format!("❌ Failed to create monitor '{}': {}", name, err)
}

pub fn monitors_summary(created: usize) -> String {
    format!("\n✅ Created {} monitors successfully!", created)
}
