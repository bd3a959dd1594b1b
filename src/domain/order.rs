use super::{Member, Product};

/// A completed order.
///
/// Holds read-only views of the buyer and the ordered product; their
/// lifetime is managed by the caller. `payment_amount` is derived once,
/// when the order is created, and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    pub buyer: &'a Member,
    pub product: &'a Product,
    pub payment_amount: u64,
}

impl<'a> Order<'a> {
    pub fn new(buyer: &'a Member, product: &'a Product, payment_amount: u64) -> Self {
        Self {
            buyer,
            product,
            payment_amount,
        }
    }
}
