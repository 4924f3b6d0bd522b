use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ExternalServiceError;
use crate::domain::product::services::{ExternalUser, ExternalUserService};
use crate::domain::product::use_cases::get_external_users::GetExternalUsersUseCase;

pub struct GetExternalUsersUseCaseImpl {
    pub service: Arc<dyn ExternalUserService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExternalUsersUseCase for GetExternalUsersUseCaseImpl {
    async fn execute(&self) -> Vec<ExternalUser> {
        self.logger.info("Calling external service to fetch users");

        match self.service.list_users().await {
            Ok(users) => {
                self.logger
                    .info(&format!("Fetched {} external users", users.len()));
                users
            }
            Err(err) => {
                let message = match &err {
                    ExternalServiceError::ClientError(status) => format!(
                        "Client error when calling external service, HTTP status: {}",
                        status
                    ),
                    ExternalServiceError::ServerError(status) => format!(
                        "Server error when calling external service, HTTP status: {}",
                        status
                    ),
                    ExternalServiceError::ConnectionFailed => {
                        "Failed to connect to external service".to_string()
                    }
                    ExternalServiceError::MalformedResponse => {
                        "External service returned a malformed response".to_string()
                    }
                };
                self.logger.error(&format!("{} ({})", message, err));
                Vec::new()
            }
        }
    }
}
