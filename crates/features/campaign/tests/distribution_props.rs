use proptest::prelude::*;
use rhub_campaign::compute_distribution;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn shares_add_up_to_price(price in 0.0f64..1e12, rate in 0.0f64..=1.0) {
        let d = compute_distribution(price, rate);
        prop_assert!(close(d.cost + d.reward_fund + d.company_gross, price));
        prop_assert!(close(d.company_net + d.partner_fee, d.company_gross));
    }

    #[test]
    fn rewards_follow_target(price in 0.0f64..1e12, rate in 0.0f64..=1.0) {
        let d = compute_distribution(price, rate);
        prop_assert!(close(d.customer_target, 1.3 * price));
        prop_assert!(close(d.instant_reward, rate * price));
        prop_assert!(close(d.reserved_reward, (1.3 * price - rate * price).max(0.0)));
        prop_assert!(d.reserved_reward >= 0.0);
    }

    #[test]
    fn deterministic(price in any::<f64>(), rate in any::<f64>()) {
        let a = compute_distribution(price, rate);
        let b = compute_distribution(price, rate);
        prop_assert_eq!(a, b);
        prop_assert!(a.price.is_finite());
    }
}
