// Monitor (alert rule) domain model
use crate::domain::dashboard::ExtraFields;
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MonitorType,
    pub query: String,
    pub message: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub options: MonitorOptions,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Monitor type tag. Types without a named variant are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MonitorType {
    MetricAlert,
    QueryAlert,
    ServiceCheck,
    EventAlert,
    LogAlert,
    Other(String),
}

impl MonitorType {
    pub fn as_str(&self) -> &str {
        match self {
            MonitorType::MetricAlert => "metric alert",
            MonitorType::QueryAlert => "query alert",
            MonitorType::ServiceCheck => "service check",
            MonitorType::EventAlert => "event alert",
            MonitorType::LogAlert => "log alert",
            MonitorType::Other(tag) => tag,
        }
    }
}

impl From<String> for MonitorType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "metric alert" => MonitorType::MetricAlert,
            "query alert" => MonitorType::QueryAlert,
            "service check" => MonitorType::ServiceCheck,
            "event alert" => MonitorType::EventAlert,
            "log alert" => MonitorType::LogAlert,
            _ => MonitorType::Other(tag),
        }
    }
}

impl From<MonitorType> for String {
    fn from(kind: MonitorType) -> Self {
        match kind {
            MonitorType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorOptions {
    pub thresholds: Thresholds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_audit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_full_window: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_no_data: Option<bool>,
    /// Minutes without data before a no-data alert fires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_data_timeframe: Option<u32>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Threshold values keep the number form they were written in (`500` stays `500`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub critical: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<Number>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Thresholds {
    /// Warning should trip before critical; the platform is left to reject it if not
    pub fn is_inverted(&self) -> bool {
        match (self.warning.as_ref().and_then(Number::as_f64), self.critical.as_f64()) {
            (Some(warning), Some(critical)) => warning > critical,
            _ => false,
        }
    }
}
