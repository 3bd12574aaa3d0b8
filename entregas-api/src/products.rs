use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use entregas_catalog::{NewProduct, Product, ProductPatch};
use serde_json::{json, Value};

use crate::error::{json_body, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/produtos", post(create_product))
        // GET takes a seller id, PUT/DELETE a product id
        .route(
            "/api/produtos/{id}",
            get(list_seller_products).put(update_product).delete(delete_product),
        )
}

/// GET /api/produtos/{vendedor_id}
pub async fn list_seller_products(
    State(state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.list_for_seller(&seller_id).await?;
    Ok(Json(products))
}

/// POST /api/produtos
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = NewProduct::from_json(&json_body(&body)?)?;
    let created = state.products.create_product(&product).await?;

    tracing::info!(product_id = %created.id, seller_id = %product.seller_id, "product created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/produtos/{produto_id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, AppError> {
    let patch = ProductPatch::from_json(&json_body(&body)?)?;
    let updated = state
        .products
        .update_product(&product_id, &patch)
        .await?
        .ok_or_else(product_not_found)?;

    tracing::info!(product_id = %product_id, "product updated");
    Ok(Json(updated))
}

/// DELETE /api/produtos/{produto_id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.products.delete_product(&product_id).await? {
        return Err(product_not_found());
    }

    tracing::info!(product_id = %product_id, "product deleted");
    Ok(Json(json!({ "message": "Produto excluído com sucesso" })))
}

fn product_not_found() -> AppError {
    AppError::NotFoundError("Produto não encontrado".to_string())
}
