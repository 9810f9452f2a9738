use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::errors::ServiceError;
use crate::product::dto::{CreateProductDto, ProductDto, UpdateProductDto};
use crate::product::repository::ProductRepository;

/// Application service encapsulating product business rules: DTO mapping,
/// partial-update merge, and logging around every repository call.
/// Repository errors are logged and forwarded, never swallowed.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// An absent product is a valid outcome, not an error.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<ProductDto>, ServiceError> {
        match self.repo.get_by_id(id).await {
            Ok(Some(found)) => Ok(Some(found.into())),
            Ok(None) => {
                warn!(id, "product not found");
                Ok(None)
            }
            Err(e) => {
                error!(id, error = %e, "failed to fetch product");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductDto>, ServiceError> {
        match self.repo.get_all().await {
            Ok(all) => Ok(all.into_iter().map(ProductDto::from).collect()),
            Err(e) => {
                error!(error = %e, "failed to fetch products");
                Err(e)
            }
        }
    }

    #[instrument(skip(self, dto), fields(name = %dto.name))]
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductDto, ServiceError> {
        let id = match self
            .repo
            .add(&dto.name, dto.price, dto.stock, dto.category_id)
            .await
        {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, "failed to create product");
                return Err(e);
            }
        };
        info!(id, "product created");
        Ok(ProductDto {
            id,
            name: dto.name,
            price: dto.price,
            stock: dto.stock,
            category_id: dto.category_id,
        })
    }

    /// Partial update: fields absent from the DTO keep their persisted
    /// values. A blank or whitespace-only name counts as "not provided".
    /// Returns false when the id does not exist; storage is left untouched.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i32, dto: UpdateProductDto) -> Result<bool, ServiceError> {
        let mut merged = match self.repo.get_by_id(id).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                warn!(id, "attempted to update a non-existent product");
                return Ok(false);
            }
            Err(e) => {
                error!(id, error = %e, "failed to load product for update");
                return Err(e);
            }
        };

        if let Some(name) = dto.name {
            if !name.trim().is_empty() {
                merged.name = name;
            }
        }
        if let Some(price) = dto.price {
            merged.price = price;
        }
        if let Some(stock) = dto.stock {
            merged.stock = stock;
        }
        if let Some(category_id) = dto.category_id {
            merged.category_id = category_id;
        }

        match self.repo.update(&merged).await {
            Ok(true) => {
                info!(id, "product updated");
                Ok(true)
            }
            Ok(false) => {
                warn!(id, "product update affected no rows");
                Ok(false)
            }
            Err(e) => {
                error!(id, error = %e, "failed to update product");
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        match self.repo.delete(id).await {
            Ok(true) => {
                info!(id, "product deleted");
                Ok(true)
            }
            Ok(false) => {
                warn!(id, "delete affected no rows; product may not exist");
                Ok(false)
            }
            Err(e) => {
                error!(id, error = %e, "failed to delete product");
                Err(e)
            }
        }
    }
}
