use serde::{Deserialize, Serialize};

/// Instant share used when the caller does not choose one.
pub const DEFAULT_INSTANT_RATE: f64 = 0.1;

pub const COST_RATIO: f64 = 0.20;
pub const REWARD_FUND_RATIO: f64 = 0.60;
pub const COMPANY_GROSS_RATIO: f64 = 0.20;
/// Carved out of the company's gross share.
pub const PARTNER_FEE_RATIO: f64 = 0.05;
pub const COMPANY_NET_RATIO: f64 = 0.15;
/// Customers are promised 130% of what they paid.
pub const CUSTOMER_TARGET_RATIO: f64 = 1.3;

/// Reward breakdown for a single price point.
///
/// `cost + reward_fund + company_gross == price` and
/// `company_net + partner_fee == company_gross`, up to float rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    pub price: f64,
    pub cost: f64,
    pub reward_fund: f64,
    pub company_gross: f64,
    pub partner_fee: f64,
    pub company_net: f64,
    pub customer_target: f64,
    pub instant_reward: f64,
    /// Remainder of the target paid later, never negative.
    pub reserved_reward: f64,
}

impl DistributionResult {
    /// Breakdown at [`DEFAULT_INSTANT_RATE`].
    #[must_use]
    pub fn from_price(price: f64) -> Self {
        compute_distribution(price, DEFAULT_INSTANT_RATE)
    }
}

/// Computes the breakdown. Non-finite inputs count as zero.
#[must_use]
pub fn compute_distribution(price: f64, instant_rate: f64) -> DistributionResult {
    let price = finite_or_zero(price);
    let rate = finite_or_zero(instant_rate);

    let customer_target = CUSTOMER_TARGET_RATIO * price;
    let instant_reward = rate * price;

    DistributionResult {
        price,
        cost: COST_RATIO * price,
        reward_fund: REWARD_FUND_RATIO * price,
        company_gross: COMPANY_GROSS_RATIO * price,
        partner_fee: PARTNER_FEE_RATIO * price,
        company_net: COMPANY_NET_RATIO * price,
        customer_target,
        instant_reward,
        reserved_reward: (customer_target - instant_reward).max(0.0),
    }
}

/// Reads a numeric input field. Blank, malformed or non-finite text is zero.
///
/// Thousands separators (`,`) and a leading `₩` are tolerated.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    let cleaned: String =
        text.trim().trim_start_matches('₩').chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse::<f64>().map_or(0.0, finite_or_zero)
}

const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn hundred_thousand_at_ten_percent() {
        let d = compute_distribution(100_000.0, 0.1);
        assert!(close(d.cost, 20_000.0));
        assert!(close(d.reward_fund, 60_000.0));
        assert!(close(d.company_gross, 20_000.0));
        assert!(close(d.partner_fee, 5_000.0));
        assert!(close(d.company_net, 15_000.0));
        assert!(close(d.customer_target, 130_000.0));
        assert!(close(d.instant_reward, 10_000.0));
        assert!(close(d.reserved_reward, 120_000.0));
    }

    #[test]
    fn five_hundred_thousand_at_twenty_percent() {
        let d = compute_distribution(500_000.0, 0.2);
        assert!(close(d.cost, 100_000.0));
        assert!(close(d.partner_fee, 25_000.0));
        assert!(close(d.company_net, 75_000.0));
        assert!(close(d.customer_target, 650_000.0));
        assert!(close(d.instant_reward, 100_000.0));
        assert!(close(d.reserved_reward, 550_000.0));
    }

    #[test]
    fn zero_price_zeroes_everything() {
        assert_eq!(compute_distribution(0.0, 0.15), DistributionResult::default());
    }

    #[test]
    fn non_finite_inputs_are_zero() {
        assert_eq!(compute_distribution(f64::NAN, 0.1), DistributionResult::default());
        let d = compute_distribution(100_000.0, f64::INFINITY);
        assert!(close(d.instant_reward, 0.0));
        assert!(close(d.reserved_reward, 130_000.0));
    }

    #[test]
    fn reserved_reward_floors_at_zero() {
        let d = compute_distribution(100_000.0, 2.0);
        assert!(close(d.reserved_reward, 0.0));
    }

    #[test]
    fn from_price_uses_default_rate() {
        assert_eq!(DistributionResult::from_price(110_000.0), compute_distribution(110_000.0, 0.1));
    }

    #[test]
    fn parse_amount_is_permissive() {
        assert!(close(parse_amount(" 110000 "), 110_000.0));
        assert!(close(parse_amount("₩1,234,567"), 1_234_567.0));
        assert!(close(parse_amount("12.5"), 12.5));
        assert!(close(parse_amount(""), 0.0));
        assert!(close(parse_amount("abc"), 0.0));
        assert!(close(parse_amount("NaN"), 0.0));
        assert!(close(parse_amount("inf"), 0.0));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(DistributionResult::from_price(100_000.0)).unwrap();
        assert!(json.get("rewardFund").is_some());
        assert!(json.get("reservedReward").is_some());
        assert!(json.get("reward_fund").is_none());
    }
}
