use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let response = match &self {
            ProductError::NotFound(key) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    detail: Some(key.to_string()),
                    ..ErrorResponse::new("NotFound", "product.not_found")
                },
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalError", "repository.persistence"),
            ),
        };

        (response.0, Json(response.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_not_found_to_404_with_lookup_key() {
        let (status, json) = ProductError::not_found_by_id(3).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
        assert_eq!(json.0.detail.as_deref(), Some("id=3"));
    }

    #[test]
    fn should_map_repository_failure_to_500() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
        assert!(json.0.detail.is_none());
    }
}
