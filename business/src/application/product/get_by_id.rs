use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let Some(product) = self.repository.find_by_id(params.id).await? else {
            self.logger
                .warn(&format!("Product with id {} not found", params.id));
            return Err(ProductError::not_found_by_id(params.id));
        };

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::errors::ProductKey;
    use crate::domain::product::model::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
            async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError>;
            async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| {
                Ok(Some(Product::from_repository(
                    id,
                    "Wax".to_string(),
                    44.0,
                    3,
                    None,
                )))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 1 }).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, Some(1));
        assert_eq!(product.name, "Wax");
        assert_eq!(product.price, 44.0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 999 }).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ProductError::NotFound(ProductKey::Id(999))
        ));
    }

    #[tokio::test]
    async fn should_treat_negative_id_as_absent_when_looked_up() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: -1 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::NotFound(ProductKey::Id(-1))
        ));
    }
}
