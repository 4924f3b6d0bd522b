use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

pub struct UpdateProductParams {
    pub id: ProductId,
    /// Full replacement record. Its own id, if any, is ignored.
    pub product: Product,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
