use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use tracing::{info, instrument, warn};

use crate::catalog::{AddOutcome, ProductCatalog};
use crate::entity::product;
use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::extractors::query::AppQuery;
use crate::models::product::*;
use crate::models::shared::json_response;
use crate::repository::{Page, ProductRepository};
use crate::search::SearchCriteria;
use crate::state::AppState;

fn list_response(state: &AppState, products: Vec<product::Model>) -> Result<Response, AppError> {
    json_response(
        StatusCode::OK,
        &ProductListEnvelope {
            products: products.into_iter().map(ProductResponse::from).collect(),
            instance: state.instance_id().to_owned(),
        },
    )
}

fn delete_response(state: &AppState, deleted: u64) -> Result<Response, AppError> {
    json_response(
        StatusCode::OK,
        &DeleteEnvelope {
            deleted,
            instance: state.instance_id().to_owned(),
        },
    )
}

#[utoipa::path(
    post,
    path = "/addProduct",
    tag = "Products",
    operation_id = "addProduct",
    summary = "Add a product",
    description = "Checks the category with the category service, then stores the product. When the category is not confirmed the outcome depends on `category.on_unknown`: `reject` answers 422, `ignore` answers 200 without a `product` field and writes nothing.",
    request_body = AddProductRequest,
    responses(
        (status = 200, description = "Product stored, or skipped under the `ignore` policy", body = ProductEnvelope),
        (status = 400, description = "Malformed body or invalid product", body = String, content_type = "text/plain"),
        (status = 422, description = "Category does not exist", body = String, content_type = "text/plain"),
        (status = 502, description = "Category service unreachable", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain"),
    ),
)]
#[instrument(skip(state, payload), fields(category_id = payload.category_id))]
pub async fn add_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddProductRequest>,
) -> Result<Response, AppError> {
    let candidate = NewProduct::try_from(payload)?;

    let catalog = ProductCatalog::new(
        &state.db,
        state.categories.as_ref(),
        state.config.category.on_unknown,
    );
    let product = match catalog.add_product(candidate).await? {
        AddOutcome::Inserted(model) => Some(ProductResponse::from(model)),
        AddOutcome::Skipped => None,
    };

    json_response(
        StatusCode::OK,
        &ProductEnvelope {
            product,
            instance: state.instance_id().to_owned(),
        },
    )
}

#[utoipa::path(
    get,
    path = "/getProduct",
    tag = "Products",
    operation_id = "getProduct",
    summary = "Get a product by ID",
    params(IdQuery),
    responses(
        (status = 200, description = "Product details", body = ProductEnvelope),
        (status = 400, description = "Missing, malformed or negative ID", body = String, content_type = "text/plain"),
        (status = 404, description = "No product with this ID", body = String, content_type = "text/plain"),
    ),
)]
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Response, AppError> {
    let id = parse_identifier(query.id.as_deref())?;

    let model = ProductRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    json_response(
        StatusCode::OK,
        &ProductEnvelope {
            product: Some(model.into()),
            instance: state.instance_id().to_owned(),
        },
    )
}

#[utoipa::path(
    get,
    path = "/getProducts",
    tag = "Products",
    operation_id = "getProducts",
    summary = "List all products",
    description = "Returns every stored product. There is no pagination.",
    responses(
        (status = 200, description = "All products", body = ProductListEnvelope),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain"),
    ),
)]
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Response, AppError> {
    let products = ProductRepository::new(&state.db).find_all(Page::ALL).await?;
    list_response(&state, products)
}

#[utoipa::path(
    get,
    path = "/getProductByName",
    tag = "Products",
    operation_id = "getProductByName",
    summary = "Find products by exact name",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching products, possibly none", body = ProductListEnvelope),
        (status = 400, description = "Name missing", body = String, content_type = "text/plain"),
    ),
)]
#[instrument(skip(state))]
pub async fn get_product_by_name(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<NameQuery>,
) -> Result<Response, AppError> {
    let name = match query.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::NameMissing),
    };

    let products = ProductRepository::new(&state.db)
        .find_by_name(name, Page::ALL)
        .await?;
    list_response(&state, products)
}

#[utoipa::path(
    get,
    path = "/getProductsBySearchValues",
    tag = "Products",
    operation_id = "getProductsBySearchValues",
    summary = "Search products by price range and details",
    description = "All given filters must hold. Price bounds are inclusive; `details` is a substring match. At least one filter is required. Result order is unspecified.",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products, possibly none", body = ProductListEnvelope),
        (status = 400, description = "No filter, malformed number or negative price", body = String, content_type = "text/plain"),
    ),
)]
#[instrument(skip(state))]
pub async fn search_products(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Response, AppError> {
    let criteria = SearchCriteria::compile(
        query.min_price.as_deref(),
        query.max_price.as_deref(),
        query.details.as_deref(),
    )
    .inspect_err(|e| warn!(error = %e, "Rejected search filters"))?;

    let products = ProductRepository::new(&state.db)
        .find_by_criteria(&criteria, Page::ALL)
        .await?;
    list_response(&state, products)
}

#[utoipa::path(
    delete,
    path = "/delProductById",
    tag = "Products",
    operation_id = "delProductById",
    summary = "Delete a product by ID",
    description = "Deleting an ID that does not exist succeeds with `deleted: 0`.",
    params(IdQuery),
    responses(
        (status = 200, description = "Delete executed", body = DeleteEnvelope),
        (status = 400, description = "Missing, malformed or negative ID", body = String, content_type = "text/plain"),
        (status = 405, description = "Not a DELETE request", body = String, content_type = "text/plain"),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Response, AppError> {
    let id = parse_identifier(query.id.as_deref())?;

    let deleted = ProductRepository::new(&state.db).delete_by_id(id).await?;
    info!(id, deleted, "Delete by id executed");
    delete_response(&state, deleted)
}

#[utoipa::path(
    delete,
    path = "/delProductsByCategoryId",
    tag = "Products",
    operation_id = "delProductsByCategoryId",
    summary = "Delete all products of a category",
    params(IdQuery),
    responses(
        (status = 200, description = "Delete executed", body = DeleteEnvelope),
        (status = 400, description = "Missing, malformed or negative ID", body = String, content_type = "text/plain"),
        (status = 405, description = "Not a DELETE request", body = String, content_type = "text/plain"),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_products_by_category(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<IdQuery>,
) -> Result<Response, AppError> {
    let category_id = parse_identifier(query.id.as_deref())?;

    let deleted = ProductRepository::new(&state.db)
        .delete_by_category(category_id)
        .await?;
    info!(category_id, deleted, "Delete by category executed");
    delete_response(&state, deleted)
}
