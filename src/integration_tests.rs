#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::app_system::OrderSystem;
    use crate::discount::DiscountPolicy;
    use crate::domain::{Grade, MemberCreate, ProductCreate};
    use crate::error::MemberError;

    /// Seeds a system with the two members and two products every scenario
    /// uses: one basic and one VIP member, one product above and one below
    /// the discount threshold.
    fn seeded_system(policy: DiscountPolicy) -> (OrderSystem, u64, u64, u64, u64) {
        let mut system = OrderSystem::new(policy);

        let basic_id = system
            .member_service
            .join(MemberCreate {
                name: "member basic".into(),
                grade: Grade::Basic,
            })
            .unwrap();
        let vip_id = system
            .member_service
            .join(MemberCreate {
                name: "member vip".into(),
                grade: Grade::Vip,
            })
            .unwrap();

        let higher_id = system.product_service.register(ProductCreate {
            name: "productHigher".into(),
            price: 12_000,
        });
        let lower_id = system.product_service.register(ProductCreate {
            name: "productLower".into(),
            price: 9_000,
        });

        (system, basic_id, vip_id, higher_id, lower_id)
    }

    #[test]
    fn create_order_references_inputs() {
        let (system, basic_id, _, higher_id, _) = seeded_system(DiscountPolicy::Fixed);

        let member = system.member_service.find_member(basic_id).unwrap();
        let product = system.product_service.find_product(higher_id).unwrap();
        let order = system.order_service.order_item(member, product);

        assert_eq!(order.buyer.name, member.name);
        assert_eq!(order.product.name, product.name);
    }

    #[test]
    fn order_amount_matches_policy_query() {
        let (system, _, vip_id, higher_id, _) = seeded_system(DiscountPolicy::Fixed);

        let member = system.member_service.find_member(vip_id).unwrap();
        let product = system.product_service.find_product(higher_id).unwrap();
        let order = system.order_service.order_item(member, product);

        assert_eq!(
            order.payment_amount,
            system
                .order_service
                .payment_amount_on_discount_policy(member, product)
        );
    }

    #[test]
    fn discount_applies_only_to_eligible_orders() {
        let (system, basic_id, vip_id, higher_id, lower_id) =
            seeded_system(DiscountPolicy::Fixed);

        let basic = system.member_service.find_member(basic_id).unwrap();
        let vip = system.member_service.find_member(vip_id).unwrap();
        let higher = system.product_service.find_product(higher_id).unwrap();
        let lower = system.product_service.find_product(lower_id).unwrap();

        // No discount: wrong grade, or price below the threshold.
        assert_eq!(system.order_service.order_item(basic, lower).payment_amount, 9_000);
        assert_eq!(system.order_service.order_item(basic, higher).payment_amount, 12_000);
        assert_eq!(system.order_service.order_item(vip, lower).payment_amount, 9_000);

        // VIP at or above the threshold gets the fixed discount.
        assert_eq!(system.order_service.order_item(vip, higher).payment_amount, 11_000);
    }

    #[test]
    fn rate_policy_takes_ten_percent_off() {
        let (system, _, vip_id, higher_id, _) = seeded_system(DiscountPolicy::Rate);

        let vip = system.member_service.find_member(vip_id).unwrap();
        let higher = system.product_service.find_product(higher_id).unwrap();

        assert_eq!(system.order_service.order_item(vip, higher).payment_amount, 10_800);
    }

    #[test]
    fn joining_twice_with_same_name_fails() {
        let (mut system, _, _, _, _) = seeded_system(DiscountPolicy::Fixed);

        let err = system
            .member_service
            .join(MemberCreate {
                name: "member vip".into(),
                grade: Grade::Vip,
            })
            .unwrap_err();
        assert_eq!(err, MemberError::AlreadyExists("member vip".into()));
    }

    #[test]
    fn system_policy_can_come_from_configuration() {
        let policy = DiscountPolicy::from_str("rate").unwrap();
        let (system, _, vip_id, higher_id, _) = seeded_system(policy);

        let vip = system.member_service.find_member(vip_id).unwrap();
        let higher = system.product_service.find_product(higher_id).unwrap();

        assert_eq!(system.order_service.order_item(vip, higher).payment_amount, 10_800);
    }
}
