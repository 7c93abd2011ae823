// Application layer - Use cases for provisioning dashboards and monitors
pub mod asset_client;
pub mod dashboard_provisioner;
pub mod monitor_provisioner;
pub mod report;
