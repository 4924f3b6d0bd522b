use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
pub type ProductId = i64;

/// Optional grouping attached to a product. Carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// `None` until the store has persisted the record.
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub category: Option<Category>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub category: Option<Category>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: None,
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            category: props.category,
        }
    }

    /// Constructor for data already persisted in the repository.
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        quantity: i32,
        category: Option<Category>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            price,
            quantity,
            category,
        }
    }

    /// Retargets the record at `id`, discarding whatever id it carried.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_without_id_when_created() {
        let product = Product::new(NewProductProps {
            name: "Wax".to_string(),
            price: 44.0,
            quantity: 3,
            category: None,
        });

        assert_eq!(product.id, None);
        assert_eq!(product.name, "Wax");
    }

    #[test]
    fn should_overwrite_id_when_retargeted() {
        let product = Product::from_repository(99, "Oil".to_string(), 10.0, 1, None);

        let retargeted = product.with_id(1);

        assert_eq!(retargeted.id, Some(1));
        assert_eq!(retargeted.name, "Oil");
        assert_eq!(retargeted.price, 10.0);
        assert_eq!(retargeted.quantity, 1);
    }
}
