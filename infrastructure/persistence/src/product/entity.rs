use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::product::model::{Category, Product};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub category: Option<Json<Category>>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.quantity,
            self.category.map(|c| c.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_unwrap_json_category_when_mapping_to_domain() {
        let entity = ProductEntity {
            id: 1,
            name: "TV".to_string(),
            price: 500.0,
            quantity: 10,
            category: Some(Json(Category {
                id: Some(1),
                name: "Electronics".to_string(),
                description: None,
            })),
        };

        let product = entity.into_domain();

        assert_eq!(product.id, Some(1));
        assert_eq!(
            product.category.map(|c| c.name),
            Some("Electronics".to_string())
        );
    }
}
