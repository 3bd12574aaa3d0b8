use entregas_shared::de::{null_as_default, present};
use entregas_shared::{Masked, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourierStatus {
    Ativo,
    Inativo,
}

impl CourierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourierStatus::Ativo => "ativo",
            CourierStatus::Inativo => "inativo",
        }
    }
}

/// A courier registered with the marketplace (`entregadores` table).
///
/// Contact fields are masked in Debug output so request logs never carry them.
/// Remaining columns (`user_id`, `veiculo`, `status`, timestamps) pass
/// through `extra` as the backend sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    pub id: RecordId,
    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Masked<Value>>,
    #[serde(
        rename = "telefone",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<Masked<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
