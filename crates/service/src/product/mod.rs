pub mod dto;
pub mod repository;
pub mod service;

pub use dto::{CreateProductDto, ProductDto, UpdateProductDto};
pub use repository::{ProductRepository, SeaOrmProductRepository};
pub use service::ProductService;
