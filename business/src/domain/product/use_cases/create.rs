use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Category, Product};

pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub category: Option<Category>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
