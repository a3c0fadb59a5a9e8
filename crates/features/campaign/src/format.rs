/// Placeholder shown for amounts that are not numbers.
pub const MISSING_AMOUNT: &str = "-";

/// Renders `amount` as Korean won: `₩`, comma-grouped, whole units.
///
/// Halves round up (`2.5 -> 3`, `-2.5 -> -2`). Non-finite amounts render as
/// [`MISSING_AMOUNT`].
#[must_use]
pub fn format_krw(amount: f64) -> String {
    if !amount.is_finite() {
        return MISSING_AMOUNT.to_owned();
    }

    let rounded = (amount + 0.5).floor();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("{sign}₩{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_rounds() {
        assert_eq!(format_krw(1_234_567.5), "₩1,234,568");
        assert_eq!(format_krw(110_000.0), "₩110,000");
        assert_eq!(format_krw(999.49), "₩999");
        assert_eq!(format_krw(0.0), "₩0");
        assert_eq!(format_krw(-0.2), "₩0");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_krw(-1_500.0), "-₩1,500");
        assert_eq!(format_krw(-2.5), "-₩2");
    }

    #[test]
    fn non_finite_is_placeholder() {
        assert_eq!(format_krw(f64::NAN), "-");
        assert_eq!(format_krw(f64::INFINITY), "-");
    }
}
