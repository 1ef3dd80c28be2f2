use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

/// Product routes. Paths are flat query-string endpoints so existing callers
/// of the service keep working.
pub fn product_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::product::add_product))
        .routes(routes!(handlers::product::get_product))
        .routes(routes!(handlers::product::get_products))
        .routes(routes!(handlers::product::get_product_by_name))
        .routes(routes!(handlers::product::search_products))
        .routes(routes!(handlers::product::delete_product))
        .routes(routes!(handlers::product::delete_products_by_category))
}

pub fn system_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::system::health))
}
