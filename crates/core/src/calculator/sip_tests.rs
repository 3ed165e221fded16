#[cfg(test)]
mod tests {
    use crate::calculator::{calculate_sip, try_calculate_sip, SipInput};
    use crate::errors::CalculatorError;
    use proptest::prelude::*;

    fn input(m: f64, r: f64, y: f64) -> SipInput {
        SipInput {
            monthly_investment: m,
            annual_rate_pct: r,
            years: y,
        }
    }

    #[test]
    fn test_reference_projection() {
        let projection = calculate_sip(&input(10000.0, 12.0, 5.0)).rounded();
        assert_eq!(projection.total_invested, 600000.0);
        assert_eq!(projection.future_value, 824864.0);
        assert_eq!(projection.returns, 224864.0);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let projection = calculate_sip(&input(5000.0, 0.0, 10.0));
        assert_eq!(projection.future_value, 600000.0);
        assert_eq!(projection.returns, 0.0);
    }

    #[test]
    fn test_zero_duration() {
        let projection = calculate_sip(&input(5000.0, 12.0, 0.0));
        assert_eq!(projection.total_invested, 0.0);
        assert!(projection.future_value.abs() < 1e-9);
    }

    #[test]
    fn test_try_rejects_bad_input() {
        assert!(matches!(
            try_calculate_sip(&input(-1.0, 12.0, 5.0)),
            Err(CalculatorError::InvalidInput(_))
        ));
        assert!(try_calculate_sip(&input(1000.0, f64::NAN, 5.0)).is_err());
        assert!(try_calculate_sip(&input(1000.0, 12.0, f64::INFINITY)).is_err());
        assert!(try_calculate_sip(&input(1000.0, 12.0, 5.0)).is_ok());
    }

    proptest! {
        #[test]
        fn prop_positive_rate_grows_principal(
            m in 1.0f64..1_000_000.0,
            r in 0.1f64..30.0,
            y in 0.5f64..40.0
        ) {
            let p = calculate_sip(&input(m, r, y));
            prop_assert!(p.future_value.is_finite());
            prop_assert!(p.returns > 0.0);
            prop_assert!(p.future_value > p.total_invested);
        }
    }
}
