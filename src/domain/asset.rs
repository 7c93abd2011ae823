// Asset identity: which API resource an asset lives under and the id it was given
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Dashboard,
    Monitor,
}

impl AssetKind {
    /// Path segment under `/api/v1/`
    pub fn resource(&self) -> &'static str {
        match self {
            AssetKind::Dashboard => "dashboard",
            AssetKind::Monitor => "monitor",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

/// Identifier assigned by the platform to a created asset.
///
/// Dashboards come back with string ids (`abc-def-ghi`), monitors with
/// integers; both are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Extract the id from a creation response's `id` field
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            serde_json::Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
