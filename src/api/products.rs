use std::sync::Arc;

use super::{
    AppState,
    error::ApiResult,
    extract::{AppJson, AppQuery},
};
use crate::core::catalog::{NewVisaProduct, Page, ProductQuery, VisaProduct, VisaProductUpdate};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

async fn list_products(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<ProductQuery>,
) -> ApiResult<Json<Page<VisaProduct>>> {
    let page = state.catalog.find_all(&query).await?;
    Ok(Json(page))
}

async fn get_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<VisaProduct>> {
    let product = state.catalog.find_one(&id).await?;
    Ok(Json(product))
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    AppJson(product): AppJson<NewVisaProduct>,
) -> ApiResult<(StatusCode, Json<VisaProduct>)> {
    let created = state.catalog.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    AppJson(update): AppJson<VisaProductUpdate>,
) -> ApiResult<Json<VisaProduct>> {
    let updated = state.catalog.update(&id, update).await?;
    Ok(Json(updated))
}

async fn delete_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.catalog.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/visa-products", get(list_products).post(create_product))
        .route(
            "/visa-products/{id}",
            get(get_product)
                .patch(update_product)
                .delete(delete_product),
        )
}
