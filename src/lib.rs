// Provisioning of Datadog dashboards and monitors from declarative definitions
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
