use async_trait::async_trait;
use entregas_shared::Masked;
use serde::{Deserialize, Serialize};

use crate::CoreResult;

/// The backend user a bearer token belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<Masked<String>>,
}

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Resolve `token` with the backend's auth service.
    /// `None` when the token is rejected (invalid or expired).
    async fn verify_token(&self, token: &str) -> CoreResult<Option<AuthUser>>;
}
