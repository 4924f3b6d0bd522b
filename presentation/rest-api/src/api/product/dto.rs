use poem_openapi::Object;

use business::domain::product::model::{Category, Product};
use business::domain::product::services::ExternalUser;

#[derive(Debug, Clone, Object)]
pub struct CategoryDto {
    /// Category identifier
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Category name
    pub name: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (2 to 30 characters)
    #[oai(validator(min_length = 2, max_length = 30))]
    pub name: String,
    /// Unit price (cannot be negative)
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
    /// Units in stock (defaults to 0)
    #[oai(default)]
    pub quantity: i32,
    /// Optional category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
}

/// Full replacement of a stored product. Omitted optional fields are cleared.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Ignored; the id in the path always wins
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name (2 to 30 characters)
    #[oai(validator(min_length = 2, max_length = 30))]
    pub name: String,
    /// Unit price (cannot be negative)
    #[oai(validator(minimum(value = "0")))]
    pub price: f64,
    /// Units in stock (defaults to 0)
    #[oai(default)]
    pub quantity: i32,
    /// Optional category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
}

impl From<UpdateProductRequest> for Product {
    fn from(request: UpdateProductRequest) -> Self {
        Product {
            id: request.id,
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            category: request.category.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub quantity: i32,
    /// Optional category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            // Every product handed out by the store carries an id.
            id: product.id.unwrap_or_default(),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            category: product.category.map(Into::into),
        }
    }
}

/// Opaque user object relayed from the external directory.
pub fn external_user_to_json(user: ExternalUser) -> serde_json::Value {
    user.0
}
