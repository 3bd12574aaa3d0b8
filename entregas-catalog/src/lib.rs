pub mod courier;
pub mod product;

pub use courier::{Courier, CourierStatus};
pub use product::{CatalogError, NewProduct, Product, ProductPatch};
