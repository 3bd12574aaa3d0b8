use serde::{Deserialize, Serialize};

/// Marketplace-wide delivery counters, all counted by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Deliveries created today.
    #[serde(rename = "hoje")]
    pub today: u64,
    #[serde(rename = "pendentes")]
    pub pending: u64,
    #[serde(rename = "concluidas")]
    pub completed: u64,
}
