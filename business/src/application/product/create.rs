use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Adding new product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            category: params.category,
        });

        let saved = self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Product created with id: {}",
            saved
                .id
                .map_or_else(|| "unassigned".to_string(), |id| id.to_string())
        ));
        Ok(saved)
    }
}
