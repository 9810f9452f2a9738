use serde::{Deserialize, Serialize};

use models::product;

/// Full product projection returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: i32,
}

impl From<product::Model> for ProductDto {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            price: m.price,
            stock: m.stock,
            category_id: m.category_id,
        }
    }
}

/// Fields required to construct a new product; the id is server-generated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProductDto {
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: i32,
}

/// Partial update: absent fields keep their persisted values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
}
