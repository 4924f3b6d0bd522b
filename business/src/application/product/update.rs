use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product with id: {}", params.id));

        if !self.repository.exists_by_id(params.id).await? {
            self.logger.warn(&format!(
                "Product with id {} not found for update",
                params.id
            ));
            return Err(ProductError::not_found_by_id(params.id));
        }

        // Wholesale replacement keyed by the path id, never the payload id.
        let replacement = params.product.with_id(params.id);
        let saved = self.repository.save(&replacement).await?;

        self.logger
            .info(&format!("Product with id {} successfully updated", params.id));
        Ok(saved)
    }
}
