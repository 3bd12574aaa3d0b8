use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Extension, Json, Router,
};
use entregas_core::{AuthUser, DashboardStats};
use entregas_order::{compute_courier_stats, compute_seller_stats, CourierStats, DeliveryStatus, SellerStats};
use entregas_shared::TimeWindow;

use crate::error::AppError;
use crate::middleware::require_user;
use crate::state::AppState;

/// Length of the seller's "week" window, today included.
const WEEK_DAYS: u64 = 7;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/estatisticas", get(dashboard_stats))
        .route_layer(middleware::from_fn_with_state(state, require_user));

    Router::new()
        .route("/api/estatisticas/entregador/{id}", get(courier_stats))
        .route("/api/estatisticas/vendedor/{id}", get(seller_stats))
        .merge(protected)
}

/// GET /api/estatisticas/entregador/{id}
pub async fn courier_stats(
    State(state): State<AppState>,
    Path(courier_id): Path<String>,
) -> Result<Json<CourierStats>, AppError> {
    let today = TimeWindow::day((state.clock)().date());

    let deliveries = state
        .deliveries
        .list_for_courier_between(&courier_id, &today)
        .await?;

    Ok(Json(compute_courier_stats(&deliveries)))
}

/// GET /api/estatisticas/vendedor/{id}
pub async fn seller_stats(
    State(state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<SellerStats>, AppError> {
    let date = (state.clock)().date();
    let today = TimeWindow::day(date);
    let week = TimeWindow::trailing_days(date, WEEK_DAYS);

    let (today_orders, week_orders, all_orders) = tokio::try_join!(
        state.orders.list_for_seller_between(&seller_id, &today),
        state.orders.list_for_seller_between(&seller_id, &week),
        state.orders.list_all_for_seller(&seller_id),
    )?;

    Ok(Json(compute_seller_stats(&today_orders, &week_orders, &all_orders)))
}

/// GET /api/estatisticas
/// Marketplace-wide delivery counters, bearer token required
pub async fn dashboard_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardStats>, AppError> {
    tracing::debug!(user_id = %user.id, "dashboard requested");
    let today = TimeWindow::day((state.clock)().date());

    let (created_today, pending, completed) = tokio::try_join!(
        state.deliveries.count_created_between(&today),
        state.deliveries.count_with_status(DeliveryStatus::Pendente),
        state.deliveries.count_with_status(DeliveryStatus::Entregue),
    )?;

    Ok(Json(DashboardStats {
        today: created_today,
        pending,
        completed,
    }))
}
