use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::ExternalServiceError;

/// A user record from the external directory, kept as opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalUser(pub serde_json::Value);

/// Service port for the remote user listing endpoint.
#[async_trait]
pub trait ExternalUserService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<ExternalUser>, ExternalServiceError>;
}
