use async_trait::async_trait;
use entregas_core::{AuthUser, CoreResult, TokenVerifier};

use crate::database::SupabaseClient;

/// Verifies end-user access tokens against the backend's auth service.
pub struct StoreTokenVerifier {
    client: SupabaseClient,
}

impl StoreTokenVerifier {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TokenVerifier for StoreTokenVerifier {
    async fn verify_token(&self, token: &str) -> CoreResult<Option<AuthUser>> {
        Ok(self.client.get_user(token).await?)
    }
}
