use async_trait::async_trait;

use crate::domain::product::services::ExternalUser;

/// Best-effort listing of users from the external directory.
///
/// Infallible by signature: every failure of the remote call yields an empty list.
#[async_trait]
pub trait GetExternalUsersUseCase: Send + Sync {
    async fn execute(&self) -> Vec<ExternalUser>;
}
