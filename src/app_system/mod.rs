//! System assembly: wiring stores, services, and the active policy.

pub mod order_system;
pub mod tracing;

pub use self::order_system::*;
pub use self::tracing::*;
