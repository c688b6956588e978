//! Unit tests for the Money module
//!
//! Covers creation, rounding, rates and serialization of the amounts that
//! flow through claim intake.

use core_kernel::{Money, Currency, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_usd_shortcut() {
        assert_eq!(Money::usd(dec!(1)), Money::new(dec!(1), Currency::USD));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_multiply_by_zero() {
        let m = Money::usd(dec!(1000)).multiply(Decimal::ZERO);
        assert_eq!(m.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::usd(dec!(10.4567));
        assert_eq!(m.round_to_currency().amount(), dec!(10.46));
    }
}

mod rate {
    use super::*;

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(0.20)).to_string(), "20%");
        assert_eq!(Rate::new(dec!(0.125)).to_string(), "12.5%");
    }

    #[test]
    fn test_rate_apply_on_fractional_amount() {
        let rate = Rate::new(dec!(0.60));
        let share = rate.apply(&Money::usd(dec!(250.50)));
        assert_eq!(share.amount(), dec!(150.30));
    }

    #[test]
    fn test_zero_rate_yields_zero() {
        let rate = Rate::new(Decimal::ZERO);
        assert_eq!(rate.apply(&Money::usd(dec!(999.99))).amount(), Decimal::ZERO);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_json_shape() {
        let json = serde_json::to_value(Money::usd(dec!(600.00))).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["amount"], "600.00");
    }

    #[test]
    fn test_money_json_roundtrip() {
        let m = Money::usd(dec!(250.50));
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
