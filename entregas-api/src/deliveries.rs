use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use entregas_order::DeliveryStatus;
use entregas_shared::window::FILTER_FORMAT;
use serde_json::Value;

use crate::error::{json_body, AppError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/entregas/{id}", get(list_courier_deliveries))
        .route("/api/entregas/{id}/status", put(update_delivery_status))
}

/// GET /api/entregas/{entregador_id}
/// Courier's deliveries with order, product and customer, newest first
pub async fn list_courier_deliveries(
    State(state): State<AppState>,
    Path(courier_id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let deliveries = state.deliveries.list_for_courier(&courier_id).await?;
    Ok(Json(deliveries))
}

/// PUT /api/entregas/{entrega_id}/status
/// Move a delivery along its lifecycle
pub async fn update_delivery_status(
    State(state): State<AppState>,
    Path(delivery_id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let body = json_body(&body)?;
    let target = requested_status(&body)?;

    let delivery = state
        .deliveries
        .get_delivery(&delivery_id)
        .await?
        .ok_or_else(|| AppError::NotFoundError("Entrega não encontrada".to_string()))?;

    let current: DeliveryStatus = delivery.status.parse().map_err(|_| {
        AppError::ConflictError(format!("Entrega com status desconhecido: {}", delivery.status))
    })?;
    // Repeating the current status is a retry: accepted, completion time kept
    let repeated = current == target;
    if !repeated {
        current.transition_to(target)?;
    }

    let delivered_at = (target.stamps_completion() && !repeated)
        .then(|| (state.clock)().format(FILTER_FORMAT).to_string());

    let updated = state
        .deliveries
        .update_status(&delivery_id, target, delivered_at)
        .await?
        .ok_or_else(|| AppError::NotFoundError("Entrega não encontrada".to_string()))?;

    tracing::info!(delivery_id = %delivery_id, from = %current, to = %target, "delivery status updated");
    Ok(Json(updated))
}

fn requested_status(body: &Value) -> Result<DeliveryStatus, AppError> {
    let raw = body
        .get("status")
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::ValidationError("Campo status é obrigatório".to_string()))?;

    raw.as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::ValidationError("Status inválido".to_string()))
}
