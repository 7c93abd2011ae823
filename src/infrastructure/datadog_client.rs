// Datadog HTTP API client implementation
use crate::application::asset_client::{AssetClient, SubmitError};
use crate::domain::asset::{AssetId, AssetKind};
use crate::domain::credentials::Credentials;
use async_trait::async_trait;
use reqwest::StatusCode;

const API_KEY_HEADER: &str = "DD-API-KEY";
const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

// Holds the keys; no Debug
#[derive(Clone)]
pub struct DatadogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    app_key: String,
}

impl DatadogClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self::with_base_url(credentials.api_base_url(), credentials)
    }

    pub fn with_base_url(base_url: String, credentials: &Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: credentials.api_key.clone(),
            app_key: credentials.app_key.clone(),
        }
    }

    fn endpoint(&self, kind: AssetKind) -> String {
        format!("{}/api/v1/{}", self.base_url, kind.resource())
    }
}

#[async_trait]
impl AssetClient for DatadogClient {
    async fn create(
        &self,
        kind: AssetKind,
        payload: &serde_json::Value,
    ) -> Result<AssetId, SubmitError> {
        let url = self.endpoint(kind);
        tracing::debug!("Creating {} via POST {}", kind, url);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .header(APP_KEY_HEADER, &self.app_key)
            .json(payload)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        // Only 200 counts as created; 201/202 are treated like any other rejection
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(SubmitError::Decode)?;

        body.get("id")
            .and_then(AssetId::from_json)
            .ok_or_else(|| SubmitError::MissingId {
                body: body.to_string(),
            })
    }
}
