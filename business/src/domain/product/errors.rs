use super::model::ProductId;

/// Key a missing product was looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKey {
    Id(ProductId),
    Name(String),
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductKey::Id(id) => write!(f, "id={}", id),
            ProductKey::Name(name) => write!(f, "name={}", name),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound(ProductKey),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    pub fn not_found_by_id(id: ProductId) -> Self {
        ProductError::NotFound(ProductKey::Id(id))
    }
    pub fn not_found_by_name(name: impl Into<String>) -> Self {
        ProductError::NotFound(ProductKey::Name(name.into()))
    }
}

/// Failure categories of the external user listing call.
#[derive(Debug, thiserror::Error)]
pub enum ExternalServiceError {
    #[error("external.client_error")]
    ClientError(u16),
    #[error("external.server_error")]
    ServerError(u16),
    #[error("external.connection_failed")]
    ConnectionFailed,
    #[error("external.malformed_response")]
    MalformedResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_key_by_kind() {
        assert_eq!(ProductKey::Id(7).to_string(), "id=7");
        assert_eq!(ProductKey::Name("TV".into()).to_string(), "name=TV");
    }

    #[test]
    fn should_keep_code_style_message_for_not_found() {
        let err = ProductError::not_found_by_name("TV");
        assert_eq!(err.to_string(), "product.not_found");
        assert!(matches!(err, ProductError::NotFound(ProductKey::Name(ref n)) if n == "TV"));
    }
}
