//! Business services over the domain: membership, catalog, and ordering.

pub mod member_service;
pub mod order_service;
pub mod product_service;

pub use member_service::*;
pub use order_service::*;
pub use product_service::*;
