// Dashboard provisioner - Use case for creating the operations dashboard
use crate::application::asset_client::{submit, AssetClient};
use crate::application::report;
use crate::domain::asset::{AssetId, AssetKind};
use crate::domain::dashboard::DashboardDefinition;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardProvisioner {
    client: Arc<dyn AssetClient>,
    app_base_url: String,
}

impl DashboardProvisioner {
    pub fn new(client: Arc<dyn AssetClient>, app_base_url: String) -> Self {
        Self {
            client,
            app_base_url,
        }
    }

    /// Submit the dashboard once. Returns the new id, or `None` if creation failed.
    pub async fn provision(&self, dashboard: &DashboardDefinition) -> Option<AssetId> {
        let duplicates = dashboard.duplicate_widget_ids();
        if !duplicates.is_empty() {
            tracing::warn!(
                "Dashboard '{}' reuses widget ids {:?}",
                dashboard.title,
                duplicates
            );
        }

        tracing::debug!(
            "Submitting dashboard '{}' with {} widgets",
            dashboard.title,
            dashboard.widgets.len()
        );
        for widget in &dashboard.widgets {
            tracing::debug!(
                "  widget {}: {} '{}'",
                widget.id,
                widget.kind().unwrap_or("<untyped>"),
                widget.title().unwrap_or_default()
            );
        }

        match submit(self.client.as_ref(), AssetKind::Dashboard, dashboard).await {
            Ok(id) => {
                let url = report::dashboard_url(&self.app_base_url, &id);
                tracing::info!("Created dashboard {}", id);
                println!("{}", report::dashboard_created(&url));
                Some(id)
            }
            Err(e) => {
                tracing::warn!("Dashboard '{}' was not created: {}", dashboard.title, e);
                println!("{}", report::dashboard_failed(&e));
                None
            }
        }
    }
}
