use axum::{extract::State, routing::get, Json, Router};
use entregas_catalog::Courier;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/entregadores", get(list_active_couriers))
}

/// GET /api/entregadores
pub async fn list_active_couriers(State(state): State<AppState>) -> Result<Json<Vec<Courier>>, AppError> {
    let couriers = state.couriers.list_active().await?;
    Ok(Json(couriers))
}
