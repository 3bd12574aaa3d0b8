use entregas_shared::de::null_as_default;
use entregas_shared::RecordId;
use serde::{Deserialize, Serialize};

/// A tracked fulfillment record linked to one order (`entregas` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub id: RecordId,
    #[serde(rename = "pedido_id", default)]
    pub order_id: Option<RecordId>,
    #[serde(rename = "entregador_id", default)]
    pub courier_id: Option<RecordId>,
    #[serde(rename = "endereco_entrega", default)]
    pub address: Option<String>,
    /// Raw status; values outside the known set are kept as-is.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "data_criacao", default)]
    pub created_at: Option<String>,
    #[serde(rename = "data_entrega", default)]
    pub delivered_at: Option<String>,
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        self.status == crate::DeliveryStatus::Entregue.as_str()
    }
}

/// A purchase record linked to a seller, a product and a customer (`pedidos` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    #[serde(rename = "vendedor_id", default)]
    pub seller_id: Option<RecordId>,
    #[serde(rename = "cliente_id", default)]
    pub customer_id: Option<RecordId>,
    #[serde(rename = "produto_id", default)]
    pub product_id: Option<RecordId>,
    #[serde(rename = "quantidade", default)]
    pub quantity: Option<i64>,
    #[serde(rename = "valor_total", default)]
    pub total_value: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "data_criacao", default)]
    pub created_at: Option<String>,
    #[serde(rename = "data_entrega_prevista", default)]
    pub expected_delivery: Option<String>,
}

impl Order {
    /// Monetary value of the order; an absent or null `valor_total` counts as zero.
    pub fn value(&self) -> f64 {
        self.total_value.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_without_value_counts_as_zero() {
        let order: Order = serde_json::from_value(json!({
            "id": 1,
            "vendedor_id": 3,
            "status": "pendente"
        }))
        .unwrap();
        assert_eq!(order.value(), 0.0);

        let order: Order = serde_json::from_value(json!({
            "id": 2,
            "valor_total": null,
            "status": "pendente"
        }))
        .unwrap();
        assert_eq!(order.value(), 0.0);
    }

    #[test]
    fn test_delivery_keeps_unknown_status() {
        let delivery: Delivery = serde_json::from_value(json!({
            "id": "a9",
            "entregador_id": 4,
            "status": "extraviado",
            "data_criacao": "2024-03-15T10:00:00",
            "data_entrega": null
        }))
        .unwrap();
        assert_eq!(delivery.status, "extraviado");
        assert!(!delivery.is_delivered());
        assert_eq!(delivery.courier_id, Some(RecordId::Int(4)));
    }

    #[test]
    fn test_null_status_reads_as_empty() {
        let delivery: Delivery = serde_json::from_value(json!({"id": 1, "status": null})).unwrap();
        assert_eq!(delivery.status, "");
        assert!(!delivery.is_delivered());
    }
}
