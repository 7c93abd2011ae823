// Monitor provisioner - Use case for creating a batch of alert rules
use crate::application::asset_client::{submit, AssetClient};
use crate::application::report;
use crate::domain::asset::{AssetId, AssetKind};
use crate::domain::monitor::MonitorDefinition;
use std::sync::Arc;

#[derive(Clone)]
pub struct MonitorProvisioner {
    client: Arc<dyn AssetClient>,
}

impl MonitorProvisioner {
    pub fn new(client: Arc<dyn AssetClient>) -> Self {
        Self { client }
    }

    /// Submit every monitor in order and collect the ids of those that were created.
    ///
    /// A failed monitor is reported and skipped; it never stops the rest of the batch.
    pub async fn provision_all(&self, monitors: &[MonitorDefinition]) -> Vec<AssetId> {
        let mut created = Vec::new();

        for monitor in monitors {
            if let Some(id) = self.provision(monitor).await {
                created.push(id);
            }
        }

        tracing::debug!("{} of {} monitors created", created.len(), monitors.len());
        println!("{}", report::monitors_summary(created.len()));
        created
    }

    async fn provision(&self, monitor: &MonitorDefinition) -> Option<AssetId> {
        if monitor.options.thresholds.is_inverted() {
            tracing::warn!(
                "Monitor '{}' has a warning threshold above its critical threshold",
                monitor.name
            );
        }

        match submit(self.client.as_ref(), AssetKind::Monitor, monitor).await {
            Ok(id) => {
                tracing::info!("Created monitor {} ({})", id, monitor.name);
                println!("{}", report::monitor_created(&monitor.name));
                Some(id)
            }
            Err(e) => {
                tracing::warn!("Monitor '{}' was not created: {}", monitor.name, e);
                println!("{}", report::monitor_failed(&monitor.name, &e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::asset_client::testing::{rejected, ScriptedClient};
    use crate::domain::dashboard::ExtraFields;
    use crate::domain::monitor::{MonitorOptions, MonitorType, Thresholds};

    fn monitor(name: &str) -> MonitorDefinition {
        MonitorDefinition {
            name: name.to_string(),
            kind: MonitorType::MetricAlert,
            query: "avg(last_5m):avg:drone_mission.telemetry.latency{*} > 500".to_string(),
            message: "Latency is {{value}}ms @slack-drone-alerts".to_string(),
            tags: vec!["service:drone-mission-backend".to_string()],
            options: MonitorOptions {
                thresholds: Thresholds {
                    critical: 500.into(),
                    warning: Some(300.into()),
                    extra: ExtraFields::new(),
                },
                notify_audit: None,
                require_full_window: None,
                notify_no_data: None,
                no_data_timeframe: None,
                extra: ExtraFields::new(),
            },
            extra: ExtraFields::new(),
        }
    }

    fn batch(len: usize) -> Vec<MonitorDefinition> {
        (0..len).map(|i| monitor(&format!("monitor-{}", i))).collect()
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_the_batch() {
        let client = Arc::new(ScriptedClient::new(vec![
            Ok(AssetId::new("100")),
            rejected(400, "Bad Request"),
            Ok(AssetId::new("102")),
            rejected(403, "Forbidden"),
            Ok(AssetId::new("104")),
        ]));
        let provisioner = MonitorProvisioner::new(client.clone());

        let created = provisioner.provision_all(&batch(5)).await;

        assert_eq!(
            created,
            vec![AssetId::new("100"), AssetId::new("102"), AssetId::new("104")]
        );

        let calls = client.calls();
        assert_eq!(calls.len(), 5);
        let names: Vec<_> = calls
            .iter()
            .map(|(_, body)| body["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["monitor-0", "monitor-1", "monitor-2", "monitor-3", "monitor-4"]
        );
        assert!(calls.iter().all(|(kind, _)| *kind == AssetKind::Monitor));
    }

    #[tokio::test]
    async fn test_every_submission_rejected() {
        let client = Arc::new(ScriptedClient::new(vec![
            rejected(403, "Forbidden"),
            rejected(403, "Forbidden"),
        ]));
        let provisioner = MonitorProvisioner::new(client.clone());

        let created = provisioner.provision_all(&batch(2)).await;

        assert!(created.is_empty());
        assert_eq!(client.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_calls() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let provisioner = MonitorProvisioner::new(client.clone());

        assert!(provisioner.provision_all(&[]).await.is_empty());
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_inverted_thresholds_are_still_submitted() {
        let mut inverted = monitor("inverted");
        inverted.options.thresholds.warning = Some(900.into());
        let client = Arc::new(ScriptedClient::new(vec![Ok(AssetId::new("7"))]));
        let provisioner = MonitorProvisioner::new(client.clone());

        let created = provisioner.provision_all(&[inverted]).await;

        assert_eq!(created, vec![AssetId::new("7")]);
        assert_eq!(client.calls()[0].1["options"]["thresholds"]["warning"], 900);
    }
}
