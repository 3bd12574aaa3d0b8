use crate::models::{Delivery, Order};
use crate::status::OrderStatus;
use serde::{Deserialize, Serialize};

/// Flat payout per completed delivery.
pub const VALOR_ENTREGA: f64 = 5.0;

/// Daily summary for one courier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourierStats {
    #[serde(rename = "total_entregas")]
    pub total: u64,
    #[serde(rename = "entregas_concluidas")]
    pub completed: u64,
    /// Everything not delivered, cancelled deliveries included.
    #[serde(rename = "entregas_pendentes")]
    pub pending: u64,
    #[serde(rename = "ganhos_hoje")]
    pub earnings_today: f64,
}

/// Order volume and revenue for one seller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerStats {
    #[serde(rename = "pedidos_hoje")]
    pub orders_today: u64,
    #[serde(rename = "pedidos_semana")]
    pub orders_week: u64,
    #[serde(rename = "pedidos_total")]
    pub orders_total: u64,
    #[serde(rename = "faturamento_hoje")]
    pub revenue_today: f64,
    #[serde(rename = "faturamento_semana")]
    pub revenue_week: f64,
    #[serde(rename = "faturamento_total")]
    pub revenue_total: f64,
    #[serde(rename = "pedidos_pendentes")]
    pub pending: u64,
    #[serde(rename = "pedidos_entregues")]
    pub delivered: u64,
    #[serde(rename = "pedidos_cancelados")]
    pub cancelled: u64,
}

/// Summarise a courier's deliveries for the day.
///
/// The caller is responsible for restricting `records` to the courier and
/// the day window.
pub fn compute_courier_stats(records: &[Delivery]) -> CourierStats {
    let total = records.len() as u64;
    let completed = records.iter().filter(|d| d.is_delivered()).count() as u64;

    CourierStats {
        total,
        completed,
        pending: total - completed,
        earnings_today: completed as f64 * VALOR_ENTREGA,
    }
}

/// Summarise a seller's orders over today, the trailing week and all time.
///
/// The three sets are counted independently; containment between them is
/// not checked. Status buckets are computed over `all` only.
pub fn compute_seller_stats(today: &[Order], week: &[Order], all: &[Order]) -> SellerStats {
    let mut stats = SellerStats {
        orders_today: today.len() as u64,
        orders_week: week.len() as u64,
        orders_total: all.len() as u64,
        revenue_today: revenue(today),
        revenue_week: revenue(week),
        revenue_total: revenue(all),
        ..SellerStats::default()
    };

    for order in all {
        let status = order.status.as_str();
        if status == OrderStatus::Pendente.as_str() {
            stats.pending += 1;
        } else if status == OrderStatus::Entregue.as_str() {
            stats.delivered += 1;
        } else if status == OrderStatus::Cancelado.as_str() {
            stats.cancelled += 1;
        }
    }

    stats
}

fn revenue(orders: &[Order]) -> f64 {
    orders.iter().map(Order::value).sum()
}
