pub mod catalog;
pub mod category;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod search;
pub mod state;

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Service API",
        version = "1.0.0",
        description = "Create, fetch, search and delete products. New products are accepted only for categories confirmed by the category service."
    ),
    tags(
        (name = "Products", description = "Product storage and search"),
        (name = "System", description = "Health checks"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::product_routes())
        .merge(routes::system_routes())
        .split_for_parts();

    router
        .method_not_allowed_fallback(handlers::system::method_not_allowed)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(TraceLayer::new_for_http())
}
