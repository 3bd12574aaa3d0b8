pub mod dashboard;
pub mod identity;
pub mod repository;

use entregas_catalog::CatalogError;
use entregas_order::OrderError;

pub use dashboard::DashboardStats;
pub use identity::{AuthUser, TokenVerifier};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Backend error: {0}")]
    BackendError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        CoreError::ValidationError(err.to_string())
    }
}

impl From<OrderError> for CoreError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidStatus(_) => CoreError::ValidationError(err.to_string()),
            OrderError::InvalidTransition { .. } => CoreError::Conflict(err.to_string()),
        }
    }
}
