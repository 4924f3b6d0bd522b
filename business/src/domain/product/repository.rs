use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductId};

/// Durable keyed storage of products.
///
/// `save` inserts when the product has no id and replaces the stored record
/// otherwise. `delete_by_id` is a no-op for unknown ids; callers that need to
/// report absence must check `exists_by_id` first.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Returns the lowest-id match when several products share a name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError>;
    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError>;
}
