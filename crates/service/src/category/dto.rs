use serde::{Deserialize, Serialize};

use models::category;

/// Full category projection returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

impl From<category::Model> for CategoryDto {
    fn from(m: category::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// Fields required to construct a new category; the id is server-generated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    pub name: String,
}

/// Partial update: an absent name keeps the persisted value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateCategoryDto {
    pub name: Option<String>,
}
