use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductId};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const SELECT_COLUMNS: &str = "SELECT id, name, price, quantity, category FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "product query failed");
    match err {
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => RepositoryError::persistence(),
        _ => RepositoryError::database_error(),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let category = product.category.clone().map(Json);

        let entity = match product.id {
            None => {
                sqlx::query_as::<_, ProductEntity>(
                    r#"INSERT INTO products (name, price, quantity, category)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, price, quantity, category"#,
                )
                .bind(&product.name)
                .bind(product.price)
                .bind(product.quantity)
                .bind(category)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as::<_, ProductEntity>(
                    r#"INSERT INTO products (id, name, price, quantity, category)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        price = EXCLUDED.price,
                        quantity = EXCLUDED.quantity,
                        category = EXCLUDED.category
                    RETURNING id, name, price, quantity, category"#,
                )
                .bind(id)
                .bind(&product.name)
                .bind(product.price)
                .bind(product.quantity)
                .bind(category)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_COLUMNS} WHERE name = $1 ORDER BY id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
