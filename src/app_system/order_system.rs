use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use crate::discount::DiscountPolicy;
use crate::domain::{Member, Product};
use crate::service::{MemberService, OrderService, ProductService};
use crate::store::MemoryStore;

/// The assembled application.
///
/// Responsible for constructing the stores and services and wiring the
/// configured discount policy into the order service.
pub struct OrderSystem {
    pub member_service: MemberService,
    pub product_service: ProductService,
    pub order_service: OrderService,
}

impl OrderSystem {
    pub fn new(discount_policy: DiscountPolicy) -> Self {
        // Each store runs its own id sequence.
        let member_seq = AtomicU64::new(1);
        let next_member_id = move || member_seq.fetch_add(1, Ordering::SeqCst);
        let member_service = MemberService::new(MemoryStore::<Member>::new(next_member_id));

        let product_seq = AtomicU64::new(1);
        let next_product_id = move || product_seq.fetch_add(1, Ordering::SeqCst);
        let product_service = ProductService::new(MemoryStore::<Product>::new(next_product_id));

        let order_service = OrderService::new(discount_policy);

        info!(policy = ?discount_policy, "Order system ready");

        Self {
            member_service,
            product_service,
            order_service,
        }
    }
}
