pub mod member;
pub mod order;
pub mod product;

pub use member::*;
pub use order::*;
pub use product::*;
