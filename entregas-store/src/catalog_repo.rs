use async_trait::async_trait;
use entregas_catalog::{Courier, CourierStatus, NewProduct, Product, ProductPatch};
use entregas_core::repository::{CourierRepository, ProductRepository};
use entregas_core::{CoreError, CoreResult};

use crate::database::SupabaseClient;

pub struct StoreProductRepository {
    client: SupabaseClient,
}

impl StoreProductRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    async fn list_for_seller(&self, seller_id: &str) -> CoreResult<Vec<Product>> {
        let rows = self
            .client
            .from("produtos")
            .select("*")
            .eq("vendedor_id", seller_id)
            .order("nome", false)
            .fetch()
            .await?;
        Ok(rows)
    }

    async fn create_product(&self, product: &NewProduct) -> CoreResult<Product> {
        let rows: Vec<Product> = self.client.from("produtos").insert(product).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| CoreError::BackendError("insert returned no representation".to_string()))
    }

    async fn update_product(&self, id: &str, patch: &ProductPatch) -> CoreResult<Option<Product>> {
        let rows: Vec<Product> = self.client.from("produtos").eq("id", id).update(patch).await?;
        Ok(rows.into_iter().next())
    }

    async fn delete_product(&self, id: &str) -> CoreResult<bool> {
        let rows: Vec<Product> = self.client.from("produtos").eq("id", id).delete().await?;
        Ok(!rows.is_empty())
    }
}

pub struct StoreCourierRepository {
    client: SupabaseClient,
}

impl StoreCourierRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CourierRepository for StoreCourierRepository {
    async fn list_active(&self) -> CoreResult<Vec<Courier>> {
        let rows = self
            .client
            .from("entregadores")
            .select("*")
            .eq("status", CourierStatus::Ativo.as_str())
            .fetch()
            .await?;
        Ok(rows)
    }
}
