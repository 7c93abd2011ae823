// Domain layer - Credentials and the asset definitions sent to the platform
pub mod asset;
pub mod credentials;
pub mod dashboard;
pub mod monitor;
