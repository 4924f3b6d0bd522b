use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ProductId, Product>,
    last_id: ProductId,
}

/// In-memory product store for development and tests.
///
/// Ids are handed out like a database sequence: increasing, never reused.
#[derive(Debug, Default, Clone)]
pub struct ProductRepositoryInMemory {
    table: Arc<RwLock<Table>>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;

        let id = match product.id {
            Some(id) => {
                table.last_id = table.last_id.max(id);
                id
            }
            None => {
                table.last_id = table
                    .last_id
                    .checked_add(1)
                    .ok_or(RepositoryError::Persistence)?;
                table.last_id
            }
        };

        let stored = product.clone().with_id(id);
        table.rows.insert(id, stored.clone());
        tracing::debug!(product_id = id, "stored product");
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|p| p.name == name).cloned())
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_some() {
            tracing::debug!(product_id = id, "deleted product");
        }
        Ok(())
    }
}
