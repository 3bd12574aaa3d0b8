use async_trait::async_trait;
use entregas_core::repository::DeliveryRepository;
use entregas_core::CoreResult;
use entregas_order::{Delivery, DeliveryStatus};
use entregas_shared::TimeWindow;
use serde_json::{json, Value};

use crate::database::SupabaseClient;

const TABLE: &str = "entregas";

pub struct StoreDeliveryRepository {
    client: SupabaseClient,
}

impl StoreDeliveryRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeliveryRepository for StoreDeliveryRepository {
    async fn list_for_courier(&self, courier_id: &str) -> CoreResult<Vec<Value>> {
        let rows = self
            .client
            .from(TABLE)
            .select("*, pedidos(*, produtos(*), clientes(*))")
            .eq("entregador_id", courier_id)
            .order("data_criacao", true)
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn get_delivery(&self, id: &str) -> CoreResult<Option<Delivery>> {
        let rows: Vec<Delivery> = self
            .client
            .from(TABLE)
            .select("*")
            .eq("id", id)
            .limit(1)
            .fetch()
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn update_status(
        &self,
        id: &str,
        status: DeliveryStatus,
        delivered_at: Option<String>,
    ) -> CoreResult<Option<Value>> {
        let mut changes = json!({ "status": status.as_str() });
        if let Some(ts) = delivered_at {
            changes["data_entrega"] = Value::String(ts);
        }

        let rows: Vec<Value> = self.client.from(TABLE).eq("id", id).update(&changes).await?;
        Ok(rows.into_iter().next())
    }

    async fn list_for_courier_between(
        &self,
        courier_id: &str,
        window: &TimeWindow,
    ) -> CoreResult<Vec<Delivery>> {
        let rows = self
            .client
            .from(TABLE)
            .select("*")
            .eq("entregador_id", courier_id)
            .gte("data_criacao", window.start_filter())
            .lte("data_criacao", window.end_filter())
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn count_created_between(&self, window: &TimeWindow) -> CoreResult<u64> {
        let count = self
            .client
            .from(TABLE)
            .select("id")
            .gte("data_criacao", window.start_filter())
            .lte("data_criacao", window.end_filter())
            .count()
            .await?;
        Ok(count)
    }

    async fn count_with_status(&self, status: DeliveryStatus) -> CoreResult<u64> {
        let count = self
            .client
            .from(TABLE)
            .select("id")
            .eq("status", status.as_str())
            .count()
            .await?;
        Ok(count)
    }
}
