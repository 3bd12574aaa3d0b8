use std::sync::Arc;

use chrono::NaiveDateTime;
use entregas_core::repository::{CourierRepository, DeliveryRepository, OrderRepository, ProductRepository};
use entregas_core::TokenVerifier;
use entregas_store::{
    StoreCourierRepository, StoreDeliveryRepository, StoreOrderRepository, StoreProductRepository, StoreTokenVerifier,
    SupabaseClient,
};

/// Shared application state for all handlers.
///
/// Repositories are trait objects so tests can swap in doubles.
#[derive(Clone)]
pub struct AppState {
    pub deliveries: Arc<dyn DeliveryRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub couriers: Arc<dyn CourierRepository>,
    pub identity: Arc<dyn TokenVerifier>,
    /// Wall clock, read once per request.
    pub clock: fn() -> NaiveDateTime,
}

impl AppState {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            deliveries: Arc::new(StoreDeliveryRepository::new(client.clone())),
            orders: Arc::new(StoreOrderRepository::new(client.clone())),
            products: Arc::new(StoreProductRepository::new(client.clone())),
            couriers: Arc::new(StoreCourierRepository::new(client.clone())),
            identity: Arc::new(StoreTokenVerifier::new(client)),
            clock: local_now,
        }
    }
}

pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
