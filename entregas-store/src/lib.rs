pub mod app_config;
pub mod catalog_repo;
pub mod database;
pub mod delivery_repo;
pub mod error;
pub mod identity_repo;
pub mod order_repo;

pub use catalog_repo::{StoreCourierRepository, StoreProductRepository};
pub use database::SupabaseClient;
pub use delivery_repo::StoreDeliveryRepository;
pub use error::StoreError;
pub use identity_repo::StoreTokenVerifier;
pub use order_repo::StoreOrderRepository;
