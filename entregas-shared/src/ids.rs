use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary or foreign key as returned by the backend.
///
/// Tables created through the dashboard use `bigint` identities while
/// auth-linked tables use `uuid`, so both shapes show up on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(v) => write!(f, "{}", v),
            RecordId::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numeric_and_text_ids() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "b1c2"]"#).unwrap();
        assert_eq!(ids[0], RecordId::Int(7));
        assert_eq!(ids[1], RecordId::Text("b1c2".to_string()));
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "b1c2");
    }
}
