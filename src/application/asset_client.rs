// Client trait for creating assets on the monitoring platform
use crate::domain::asset::{AssetId, AssetKind};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The platform answered with anything but 200
    #[error("{status}\n{body}")]
    Rejected { status: u16, body: String },

    /// Connection, DNS, TLS or timeout failure before a response arrived
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unreadable response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("response carried no id: {body}")]
    MissingId { body: String },

    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait AssetClient: Send + Sync {
    /// POST `payload` to the resource for `kind` and return the id of the created asset
    async fn create(
        &self,
        kind: AssetKind,
        payload: &serde_json::Value,
    ) -> Result<AssetId, SubmitError>;
}

/// Encode a definition into the JSON body sent to the platform
pub fn encode<T: Serialize>(definition: &T) -> Result<serde_json::Value, SubmitError> {
    Ok(serde_json::to_value(definition)?)
}

/// Encode `definition` and create it as an asset of `kind`
pub async fn submit<T: Serialize + Sync>(
    client: &dyn AssetClient,
    kind: AssetKind,
    definition: &T,
) -> Result<AssetId, SubmitError> {
    let payload = encode(definition)?;
    client.create(kind, &payload).await
}
