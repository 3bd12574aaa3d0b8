use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Bearer token guard
// ============================================================================

/// Requires `Authorization: Bearer <token>` accepted by the backend's auth
/// service. The resolved `AuthUser` is put into the request extensions.
pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&req)
        .ok_or_else(|| AppError::AuthenticationError("Token de autenticação ausente".to_string()))?
        .to_string();

    let user = match state.identity.verify_token(&token).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Err(AppError::AuthenticationError("Token inválido ou expirado".to_string()));
        }
        Err(e) => {
            tracing::warn!("Token verification failed: {}", e);
            return Err(AppError::AuthenticationError(
                "Não foi possível validar as credenciais".to_string(),
            ));
        }
    };

    tracing::debug!(user_id = %user.id, "request authenticated");
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
