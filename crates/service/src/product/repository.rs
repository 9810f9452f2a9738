use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use models::product;

use crate::errors::ServiceError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn add(&self, name: &str, price: f64, stock: i32, category_id: i32) -> Result<i32, ServiceError>;
    async fn update(&self, product: &product::Model) -> Result<bool, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn add(&self, name: &str, price: f64, stock: i32, category_id: i32) -> Result<i32, ServiceError> {
        let created = product::create(&self.db, name, price, stock, category_id)
            .await
            .map_err(ServiceError::from)?;
        Ok(created.id)
    }

    async fn update(&self, product: &product::Model) -> Result<bool, ServiceError> {
        // Overwrite every column of the row matching the model's id; the
        // affected-row count distinguishes a missing id from a real write.
        let am = product::ActiveModel {
            name: Set(product.name.clone()),
            price: Set(product.price),
            stock: Set(product.stock),
            category_id: Set(product.category_id),
            ..Default::default()
        };
        let res = product::Entity::update_many()
            .set(am)
            .filter(product::Column::Id.eq(product.id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
