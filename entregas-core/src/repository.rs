use async_trait::async_trait;
use entregas_catalog::{Courier, NewProduct, Product, ProductPatch};
use entregas_order::{Delivery, DeliveryStatus, Order};
use entregas_shared::TimeWindow;
use serde_json::Value;

use crate::CoreResult;

/// Repository trait for delivery data access
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Courier's deliveries joined with order, product and customer, newest first.
    async fn list_for_courier(&self, courier_id: &str) -> CoreResult<Vec<Value>>;

    async fn get_delivery(&self, id: &str) -> CoreResult<Option<Delivery>>;

    /// Writes `status`, plus `data_entrega` when `delivered_at` is given.
    /// Returns `None` when no row matched.
    async fn update_status(
        &self,
        id: &str,
        status: DeliveryStatus,
        delivered_at: Option<String>,
    ) -> CoreResult<Option<Value>>;

    async fn list_for_courier_between(
        &self,
        courier_id: &str,
        window: &TimeWindow,
    ) -> CoreResult<Vec<Delivery>>;

    async fn count_created_between(&self, window: &TimeWindow) -> CoreResult<u64>;

    async fn count_with_status(&self, status: DeliveryStatus) -> CoreResult<u64>;
}

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Seller's orders joined with product and customer, newest first.
    async fn list_for_seller(&self, seller_id: &str) -> CoreResult<Vec<Value>>;

    async fn list_for_seller_between(
        &self,
        seller_id: &str,
        window: &TimeWindow,
    ) -> CoreResult<Vec<Order>>;

    async fn list_all_for_seller(&self, seller_id: &str) -> CoreResult<Vec<Order>>;
}

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Seller's products ordered by name.
    async fn list_for_seller(&self, seller_id: &str) -> CoreResult<Vec<Product>>;

    async fn create_product(&self, product: &NewProduct) -> CoreResult<Product>;

    async fn update_product(&self, id: &str, patch: &ProductPatch) -> CoreResult<Option<Product>>;

    /// `false` when no product had this id.
    async fn delete_product(&self, id: &str) -> CoreResult<bool>;
}

#[async_trait]
pub trait CourierRepository: Send + Sync {
    async fn list_active(&self) -> CoreResult<Vec<Courier>>;
}
