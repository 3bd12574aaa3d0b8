pub mod models;
pub mod status;
pub mod stats;

pub use models::{Delivery, Order};
pub use status::{DeliveryStatus, OrderError, OrderStatus};
pub use stats::{compute_courier_stats, compute_seller_stats, CourierStats, SellerStats, VALOR_ENTREGA};
