use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::category::{CategoryService, SeaOrmCategoryRepository};
use service::product::{ProductService, SeaOrmProductRepository};

/// Shared handler state: one service per entity over the pooled connection.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService<SeaOrmProductRepository>>,
    pub categories: Arc<CategoryService<SeaOrmCategoryRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let products = ProductService::new(Arc::new(SeaOrmProductRepository { db: db.clone() }));
        let categories = CategoryService::new(Arc::new(SeaOrmCategoryRepository { db }));
        Self {
            products: Arc::new(products),
            categories: Arc::new(categories),
        }
    }
}
