use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_name::{
    GetProductByNameParams, GetProductByNameUseCase,
};

pub struct GetProductByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByNameUseCase for GetProductByNameUseCaseImpl {
    async fn execute(&self, params: GetProductByNameParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by name: {}", params.name));

        // Names are not unique; the store decides which duplicate wins.
        match self.repository.find_by_name(&params.name).await? {
            Some(product) => Ok(product),
            None => {
                self.logger
                    .warn(&format!("Product with name {} not found", params.name));
                Err(ProductError::not_found_by_name(params.name))
            }
        }
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
    async fn should_return_product_when_name_matches() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "TV")
            .times(1)
            .returning(|_| {
                Ok(Some(Product::from_repository(
                    1,
                    "TV".to_string(),
                    500.0,
                    10,
                    None,
                )))
            });

        let use_case = GetProductByNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByNameParams {
                name: "TV".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.quantity, 10);
    }

    #[tokio::test]
    async fn should_return_not_found_with_name_key_when_no_match() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let use_case = GetProductByNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByNameParams {
                name: "Radio".to_string(),
            })
            .await;

        match result {
            Err(ProductError::NotFound(ProductKey::Name(name))) => assert_eq!(name, "Radio"),
            other => panic!("expected not found by name, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_return_store_choice_when_names_are_duplicated() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_name().returning(|_| {
            Ok(Some(Product::from_repository(
                3,
                "Cable".to_string(),
                5.0,
                100,
                None,
            )))
        });

        let use_case = GetProductByNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByNameParams {
                name: "Cable".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, Some(3));
    }
}
