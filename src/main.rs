mod app_system;
mod discount;
mod domain;
mod error;
mod service;
mod store;

#[cfg(test)]
mod integration_tests;

use std::str::FromStr;

use tracing::info;

use crate::app_system::{setup_tracing, OrderSystem};
use crate::discount::DiscountPolicy;
use crate::domain::{Grade, MemberCreate, ProductCreate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    // Pick the active discount policy from the environment, defaulting to
    // the fixed policy. DISCOUNT_POLICY=rate switches to the rate policy.
    let policy = match std::env::var("DISCOUNT_POLICY") {
        Ok(name) => DiscountPolicy::from_str(&name)?,
        Err(_) => DiscountPolicy::Fixed,
    };

    info!(policy = ?policy, "Starting order system demo");

    let mut system = OrderSystem::new(policy);

    let basic_id = system.member_service.join(MemberCreate {
        name: "member basic".into(),
        grade: Grade::Basic,
    })?;
    let vip_id = system.member_service.join(MemberCreate {
        name: "member vip".into(),
        grade: Grade::Vip,
    })?;

    let keyboard_id = system.product_service.register(ProductCreate {
        name: "keyboard".into(),
        price: 12_000,
    });
    let mouse_id = system.product_service.register(ProductCreate {
        name: "mouse".into(),
        price: 9_000,
    });

    for member_id in [basic_id, vip_id] {
        for product_id in [keyboard_id, mouse_id] {
            let member = system.member_service.find_member(member_id)?;
            let product = system.product_service.find_product(product_id)?;

            let order = system.order_service.order_item(member, product);
            info!(
                buyer = %order.buyer.name,
                product = %order.product.name,
                price = order.product.price,
                payment_amount = order.payment_amount,
                "Order placed"
            );
        }
    }

    info!("Demo completed successfully");
    Ok(())
}
