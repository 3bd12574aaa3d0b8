use entregas_shared::de::null_as_default;
use entregas_shared::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields a create request must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 3] = ["vendedor_id", "nome", "preco"];

/// A product listed by a seller (`produtos` table).
///
/// Only the columns the API reads are typed. Everything else the backend
/// returns (`descricao`, `peso`, `estoque`, timestamps, newer columns)
/// is carried in `extra` and written back untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    #[serde(rename = "vendedor_id", default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<RecordId>,
    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "preco", default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Insert payload for a new product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    #[serde(rename = "vendedor_id")]
    pub seller_id: RecordId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "estoque")]
    pub stock: i64,
}

impl NewProduct {
    /// Validate a raw create request.
    ///
    /// `descricao`, `peso` and `estoque` default to empty/zero when absent.
    pub fn from_json(body: &Value) -> Result<Self, CatalogError> {
        let obj = body.as_object().ok_or(CatalogError::NotAnObject)?;

        for field in REQUIRED_FIELDS {
            if obj.get(field).map_or(true, Value::is_null) {
                return Err(CatalogError::MissingField(field));
            }
        }

        let seller_id = serde_json::from_value::<RecordId>(obj["vendedor_id"].clone())
            .map_err(|_| CatalogError::invalid("vendedor_id", "deve ser número ou texto"))?;

        Ok(Self {
            seller_id,
            name: name_field(obj)?.unwrap_or_default(),
            description: text_field(obj, "descricao")?.unwrap_or_default(),
            price: amount_field(obj, "preco")?.unwrap_or_default(),
            weight: amount_field(obj, "peso")?.unwrap_or(0.0),
            stock: stock_field(obj)?.unwrap_or(0),
        })
    }
}

/// Partial update for an existing product. Only catalog fields are writable;
/// ownership and identity columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "preco", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "peso", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(rename = "estoque", skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl ProductPatch {
    pub fn from_json(body: &Value) -> Result<Self, CatalogError> {
        let obj = body.as_object().ok_or(CatalogError::NotAnObject)?;

        let patch = Self {
            name: name_field(obj)?,
            description: text_field(obj, "descricao")?,
            price: amount_field(obj, "preco")?,
            weight: amount_field(obj, "peso")?,
            stock: stock_field(obj)?,
        };

        if patch.is_empty() {
            return Err(CatalogError::EmptyUpdate);
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.weight.is_none()
            && self.stock.is_none()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Campo {0} é obrigatório")]
    MissingField(&'static str),

    #[error("Campo {field} inválido: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Nenhum campo para atualizar")]
    EmptyUpdate,

    #[error("Corpo da requisição deve ser um objeto JSON")]
    NotAnObject,
}

impl CatalogError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        CatalogError::InvalidField { field, reason }
    }
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn text_field(obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>, CatalogError> {
    present(obj, field)
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| CatalogError::invalid(field, "deve ser texto"))
        })
        .transpose()
}

fn name_field(obj: &Map<String, Value>) -> Result<Option<String>, CatalogError> {
    match text_field(obj, "nome")? {
        Some(name) if name.trim().is_empty() => Err(CatalogError::invalid("nome", "não pode ser vazio")),
        other => Ok(other),
    }
}

fn amount_field(obj: &Map<String, Value>, field: &'static str) -> Result<Option<f64>, CatalogError> {
    present(obj, field)
        .map(|v| match v.as_f64() {
            Some(n) if n >= 0.0 => Ok(n),
            Some(_) => Err(CatalogError::invalid(field, "não pode ser negativo")),
            None => Err(CatalogError::invalid(field, "deve ser numérico")),
        })
        .transpose()
}

fn stock_field(obj: &Map<String, Value>) -> Result<Option<i64>, CatalogError> {
    present(obj, "estoque")
        .map(|v| match v.as_i64() {
            Some(n) if n >= 0 => Ok(n),
            Some(_) => Err(CatalogError::invalid("estoque", "não pode ser negativo")),
            None => Err(CatalogError::invalid("estoque", "deve ser inteiro")),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_product_defaults() {
        let product = NewProduct::from_json(&json!({
            "vendedor_id": 3,
            "nome": "Caneca",
            "preco": 24.9
        }))
        .unwrap();

        assert_eq!(
            product,
            NewProduct {
                seller_id: RecordId::Int(3),
                name: "Caneca".to_string(),
                description: String::new(),
                price: 24.9,
                weight: 0.0,
                stock: 0,
            }
        );

        let payload = serde_json::to_value(&product).unwrap();
        assert_eq!(payload["descricao"], "");
        assert_eq!(payload["estoque"], 0);
    }

    #[test]
    fn test_required_fields_checked_in_order() {
        let err = NewProduct::from_json(&json!({"preco": 1.0})).unwrap_err();
        assert_eq!(err, CatalogError::MissingField("vendedor_id"));

        let err = NewProduct::from_json(&json!({"vendedor_id": 1, "nome": "X"})).unwrap_err();
        assert_eq!(err, CatalogError::MissingField("preco"));
        assert_eq!(err.to_string(), "Campo preco é obrigatório");

        let err = NewProduct::from_json(&json!({"vendedor_id": 1, "nome": "X", "preco": null})).unwrap_err();
        assert_eq!(err, CatalogError::MissingField("preco"));
    }

    #[test]
    fn test_rejects_bad_types() {
        let err = NewProduct::from_json(&json!({"vendedor_id": 1, "nome": "X", "preco": "10"})).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { field: "preco", .. }));

        let err = NewProduct::from_json(&json!({"vendedor_id": 1, "nome": "X", "preco": 1, "estoque": -2}))
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { field: "estoque", .. }));

        let err = NewProduct::from_json(&json!({"vendedor_id": 1, "nome": "  ", "preco": 1})).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { field: "nome", .. }));

        assert_eq!(NewProduct::from_json(&json!([1, 2])).unwrap_err(), CatalogError::NotAnObject);
    }

    #[test]
    fn test_product_row_round_trips_unknown_columns() {
        let row = json!({
            "id": 1,
            "nome": "Caneca",
            "preco": 2.0,
            "descricao": null,
            "imagem_url": "x.png",
            "categoria": "casa"
        });
        let product: Product = serde_json::from_value(row.clone()).unwrap();
        assert_eq!(product.name, "Caneca");
        assert_eq!(product.seller_id, None);
        assert_eq!(serde_json::to_value(&product).unwrap(), row);
    }

    #[test]
    fn test_product_row_tolerates_null_name_and_price() {
        let product: Product = serde_json::from_value(json!({"id": 2, "nome": null, "preco": null})).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_patch_ignores_identity_columns() {
        let patch = ProductPatch::from_json(&json!({
            "id": 99,
            "vendedor_id": 7,
            "estoque": 15
        }))
        .unwrap();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"estoque": 15}));
    }

    #[test]
    fn test_empty_patch_rejected() {
        assert_eq!(ProductPatch::from_json(&json!({})).unwrap_err(), CatalogError::EmptyUpdate);
        assert_eq!(
            ProductPatch::from_json(&json!({"vendedor_id": 2})).unwrap_err(),
            CatalogError::EmptyUpdate
        );
    }
}
