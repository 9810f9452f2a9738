use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: i32,
}

#[derive(ToSchema)]
pub struct CreateProductDoc {
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub category_id: i32,
}

#[derive(ToSchema)]
pub struct UpdateProductDoc {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct CategoryDoc {
    pub id: i32,
    pub name: String,
}

#[derive(ToSchema)]
pub struct CreateCategoryDoc {
    pub name: String,
}

#[derive(ToSchema)]
pub struct UpdateCategoryDoc {
    pub name: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list_products,
        crate::routes::products::get_product,
        crate::routes::products::create_product,
        crate::routes::products::update_product,
        crate::routes::products::delete_product,
        crate::routes::categories::list_categories,
        crate::routes::categories::get_category,
        crate::routes::categories::create_category,
        crate::routes::categories::update_category,
        crate::routes::categories::delete_category,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            CreateProductDoc,
            UpdateProductDoc,
            CategoryDoc,
            CreateCategoryDoc,
            UpdateCategoryDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "categories")
    )
)]
pub struct ApiDoc;
