use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use models::category;

use crate::errors::ServiceError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn add(&self, name: &str) -> Result<i32, ServiceError>;
    async fn update(&self, category: &category::Model) -> Result<bool, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        category::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn add(&self, name: &str) -> Result<i32, ServiceError> {
        let created = category::create(&self.db, name).await.map_err(ServiceError::from)?;
        Ok(created.id)
    }

    async fn update(&self, category: &category::Model) -> Result<bool, ServiceError> {
        let am = category::ActiveModel {
            name: Set(category.name.clone()),
            ..Default::default()
        };
        let res = category::Entity::update_many()
            .set(am)
            .filter(category::Column::Id.eq(category.id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = category::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    #[tokio::test]
    async fn category_repository_crud() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let repo = SeaOrmCategoryRepository { db };

        let name = format!("repo_category_{}", Uuid::new_v4());
        let id = repo.add(&name).await?;
        assert!(id > 0);

        let found = repo.get_by_id(id).await?.unwrap();
        assert_eq!(found.name, name);

        let renamed = category::Model { id, name: format!("renamed_{}", Uuid::new_v4()) };
        assert!(repo.update(&renamed).await?);
        assert_eq!(repo.get_by_id(id).await?.unwrap().name, renamed.name);

        assert!(repo.delete(id).await?);
        assert!(!repo.delete(id).await?);
        assert!(repo.get_by_id(id).await?.is_none());
        Ok(())
    }
}
