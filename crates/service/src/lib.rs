//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and logs every repository outcome.

pub mod category;
pub mod errors;
pub mod product;

#[cfg(test)]
pub mod test_support;
