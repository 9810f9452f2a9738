pub mod dto;
pub mod repository;
pub mod service;

pub use dto::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};
pub use repository::{CategoryRepository, SeaOrmCategoryRepository};
pub use service::CategoryService;
