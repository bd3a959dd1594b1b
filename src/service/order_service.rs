use tracing::{info, instrument};

use crate::discount::DiscountPolicy;
use crate::domain::{Member, Order, Product};

/// Creates orders, applying the active discount policy.
///
/// The policy is fixed at construction time. [`OrderService::order_item`]
/// and [`OrderService::payment_amount_on_discount_policy`] funnel through
/// the same computation, so an order's payment amount always equals what
/// the query reports for the same inputs.
pub struct OrderService {
    discount_policy: DiscountPolicy,
}

impl OrderService {
    pub fn new(discount_policy: DiscountPolicy) -> Self {
        Self { discount_policy }
    }

    /// Places an order for `product` by `member`.
    ///
    /// The payment amount is the product price minus whatever discount the
    /// active policy grants for the member's grade. Stateless: each call is
    /// independent and the inputs are not mutated.
    #[instrument(skip_all, fields(buyer = %member.name, product = %product.name))]
    pub fn order_item<'a>(&self, member: &'a Member, product: &'a Product) -> Order<'a> {
        let payment_amount = self.compute_payment_amount(member, product);
        info!(price = product.price, payment_amount, "Order created");
        Order::new(member, product, payment_amount)
    }

    /// What an order for `product` by `member` would cost under the active
    /// policy, without creating an order.
    pub fn payment_amount_on_discount_policy(&self, member: &Member, product: &Product) -> u64 {
        self.compute_payment_amount(member, product)
    }

    fn compute_payment_amount(&self, member: &Member, product: &Product) -> u64 {
        let discount = self
            .discount_policy
            .discount_amount(member.grade, product.price);
        product.price - discount
    }
}
