pub mod de;
pub mod ids;
pub mod pii;
pub mod window;

pub use ids::RecordId;
pub use pii::Masked;
pub use window::TimeWindow;
