// Credential set domain model
use std::fmt;

pub const DEFAULT_SITE: &str = "datadoghq.com";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub app_key: String,
    pub site: String,
}

impl Credentials {
    pub fn new(api_key: String, app_key: String, site: String) -> Self {
        Self {
            api_key,
            app_key,
            site,
        }
    }

    /// Base URL of the HTTP API, e.g. `https://api.datadoghq.com`
    pub fn api_base_url(&self) -> String {
        format!("https://api.{}", self.site)
    }

    /// Base URL of the web application, used to build viewer links
    pub fn app_base_url(&self) -> String {
        format!("https://app.{}", self.site)
    }
}

// Keys never end up in logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("app_key", &"<redacted>")
            .field("site", &self.site)
            .finish()
    }
}
