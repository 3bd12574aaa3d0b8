use async_trait::async_trait;
use entregas_core::repository::OrderRepository;
use entregas_core::CoreResult;
use entregas_order::Order;
use entregas_shared::TimeWindow;
use serde_json::Value;

use crate::database::SupabaseClient;

const TABLE: &str = "pedidos";

pub struct StoreOrderRepository {
    client: SupabaseClient,
}

impl StoreOrderRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    async fn list_for_seller(&self, seller_id: &str) -> CoreResult<Vec<Value>> {
        let rows = self
            .client
            .from(TABLE)
            .select("*, produtos(*), clientes(*)")
            .eq("vendedor_id", seller_id)
            .order("data_criacao", true)
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn list_for_seller_between(
        &self,
        seller_id: &str,
        window: &TimeWindow,
    ) -> CoreResult<Vec<Order>> {
        let rows = self
            .client
            .from(TABLE)
            .select("*")
            .eq("vendedor_id", seller_id)
            .gte("data_criacao", window.start_filter())
            .lte("data_criacao", window.end_filter())
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn list_all_for_seller(&self, seller_id: &str) -> CoreResult<Vec<Order>> {
        let rows = self
            .client
            .from(TABLE)
            .select("*")
            .eq("vendedor_id", seller_id)
            .fetch()
            .await?;
        Ok(rows)
    }
}
