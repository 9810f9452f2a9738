use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::category::dto::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};
use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;

/// Application service encapsulating category business rules.
/// Mirrors the product service: DTO mapping, partial-update merge,
/// logging around every repository call.
pub struct CategoryService<R: CategoryRepository> {
    repo: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// An absent category is a valid outcome, not an error.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<CategoryDto>, ServiceError> {
        match self.repo.get_by_id(id).await {
            Ok(Some(found)) => Ok(Some(found.into())),
            Ok(None) => {
                warn!(id, "category not found");
                Ok(None)
            }
            Err(e) => {
                error!(id, error = %e, "failed to fetch category");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CategoryDto>, ServiceError> {
        match self.repo.get_all().await {
            Ok(all) => Ok(all.into_iter().map(CategoryDto::from).collect()),
            Err(e) => {
                error!(error = %e, "failed to fetch categories");
                Err(e)
            }
        }
    }

    #[instrument(skip(self, dto), fields(name = %dto.name))]
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryDto, ServiceError> {
        let id = match self.repo.add(&dto.name).await {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "failed to create category");
                return Err(e);
            }
        };
        info!(id, "category created");
        Ok(CategoryDto { id, name: dto.name })
    }

    /// Partial update: a blank or absent name keeps the persisted value.
    /// Returns false when the id does not exist; storage is left untouched.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i32, dto: UpdateCategoryDto) -> Result<bool, ServiceError> {
        let mut merged = match self.repo.get_by_id(id).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                warn!(id, "attempted to update a non-existent category");
                return Ok(false);
            }
            Err(e) => {
                error!(id, error = %e, "failed to load category for update");
                return Err(e);
            }
        };

        if let Some(name) = dto.name {
            if !name.trim().is_empty() {
                merged.name = name;
            }
        }

        match self.repo.update(&merged).await {
            Ok(true) => {
                info!(id, "category updated");
                Ok(true)
            }
            Ok(false) => {
                warn!(id, "category update affected no rows");
                Ok(false)
            }
            Err(e) => {
                error!(id, error = %e, "failed to update category");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        match self.repo.delete(id).await {
            Ok(true) => {
                info!(id, "category deleted");
                Ok(true)
            }
            Ok(false) => {
                warn!(id, "delete affected no rows; category may not exist");
                Ok(false)
            }
            Err(e) => {
                error!(id, error = %e, "failed to delete category");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use models::category;

    use super::*;

    #[derive(Default)]
    struct MemState {
        rows: HashMap<i32, category::Model>,
        next_id: i32,
    }

    #[derive(Default)]
    struct MemCategoryRepository {
        state: Mutex<MemState>,
    }

    #[async_trait]
    impl CategoryRepository for MemCategoryRepository {
        async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
            Ok(self.state.lock().unwrap().rows.get(&id).cloned())
        }

        async fn get_all(&self) -> Result<Vec<category::Model>, ServiceError> {
            Ok(self.state.lock().unwrap().rows.values().cloned().collect())
        }

        async fn add(&self, name: &str) -> Result<i32, ServiceError> {
            category::validate_name(name)?;
            let mut state = self.state.lock().unwrap();
            state.next_id += 1;
            let id = state.next_id;
            state.rows.insert(id, category::Model { id, name: name.to_string() });
            Ok(id)
        }

        async fn update(&self, c: &category::Model) -> Result<bool, ServiceError> {
            let mut state = self.state.lock().unwrap();
            match state.rows.get_mut(&c.id) {
                Some(row) => {
                    *row = c.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.state.lock().unwrap().rows.remove(&id).is_some())
        }
    }

    fn service() -> CategoryService<MemCategoryRepository> {
        CategoryService::new(Arc::new(MemCategoryRepository::default()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let created = svc.create(CreateCategoryDto { name: "Tools".into() }).await.unwrap();
        assert!(created.id > 0);
        let fetched = svc.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let svc = service();
        let res = svc.create(CreateCategoryDto { name: "  ".into() }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn update_renames_existing_category() {
        let svc = service();
        let created = svc.create(CreateCategoryDto { name: "Tools".into() }).await.unwrap();
        assert!(svc
            .update(created.id, UpdateCategoryDto { name: Some("Hardware".into()) })
            .await
            .unwrap());
        assert_eq!(svc.get(created.id).await.unwrap().unwrap().name, "Hardware");
    }

    #[tokio::test]
    async fn blank_name_update_counts_as_not_provided() {
        let svc = service();
        let created = svc.create(CreateCategoryDto { name: "Tools".into() }).await.unwrap();
        assert!(svc
            .update(created.id, UpdateCategoryDto { name: Some("   ".into()) })
            .await
            .unwrap());
        assert_eq!(svc.get(created.id).await.unwrap().unwrap().name, "Tools");
    }

    #[tokio::test]
    async fn update_missing_returns_false() {
        let svc = service();
        assert!(!svc
            .update(99, UpdateCategoryDto { name: Some("Hardware".into()) })
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found_second_time() {
        let svc = service();
        let created = svc.create(CreateCategoryDto { name: "Tools".into() }).await.unwrap();
        assert!(svc.delete(created.id).await.unwrap());
        assert!(!svc.delete(created.id).await.unwrap());
    }
}
