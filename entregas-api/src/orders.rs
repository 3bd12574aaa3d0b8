use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/pedidos/{id}", get(list_seller_orders))
}

/// GET /api/pedidos/{vendedor_id}
pub async fn list_seller_orders(
    State(state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let orders = state.orders.list_for_seller(&seller_id).await?;
    Ok(Json(orders))
}
