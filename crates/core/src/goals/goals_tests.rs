#[cfg(test)]
mod tests {
    use crate::goals::{
        goal_progress_pct, months_to_goal, Goal, GoalCategory, GoalProgress, NewGoal, TimeToGoal,
    };
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn goal(current: Decimal, target: Decimal, monthly: Decimal) -> Goal {
        let mut goal = NewGoal {
            name: "Emergency Fund".to_string(),
            target_amount: target,
            target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            category: GoalCategory::Emergency,
            monthly_contribution: monthly,
        }
        .into_goal("goal-1".to_string());
        goal.current_amount = current;
        goal
    }

    #[test]
    fn test_new_goal_starts_empty() {
        let g = goal(Decimal::ZERO, dec!(1000), dec!(100));
        assert_eq!(g.current_amount, Decimal::ZERO);
        assert!(!g.is_achieved());
    }

    #[test]
    fn test_fund_clamps_at_target() {
        let mut g = goal(dec!(900), dec!(1000), dec!(100));
        let credited = g.fund(dec!(250));
        assert_eq!(credited, dec!(100));
        assert_eq!(g.current_amount, dec!(1000));
        assert!(g.is_achieved());
    }

    #[test]
    fn test_fund_near_decimal_max_clamps_at_target() {
        let mut g = goal(Decimal::MAX, Decimal::MAX, Decimal::ZERO);
        assert_eq!(g.fund(Decimal::MAX), Decimal::ZERO);
        assert_eq!(g.current_amount, Decimal::MAX);

        let mut g = goal(Decimal::ZERO, Decimal::MAX, Decimal::ZERO);
        g.fund(Decimal::MAX);
        g.fund(Decimal::MAX);
        assert!(g.is_achieved());
    }

    #[test]
    fn test_extreme_ratios_do_not_panic() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(goal_progress_pct(dec!(1000000000000000), tiny), dec!(100));
        assert_eq!(
            months_to_goal(Decimal::ZERO, dec!(1000000000000000), tiny),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_tiny_contribution_still_counts_as_set() {
        let progress = GoalProgress::of(&goal(Decimal::ZERO, dec!(1000000), dec!(0.0001)));
        assert_eq!(progress.months_to_goal, Some(u32::MAX));
        assert_ne!(progress.time_to_goal, "Set monthly contribution");
    }

    #[test]
    fn test_progress_pct() {
        assert_eq!(goal_progress_pct(dec!(420000), dec!(600000)), dec!(70));
        assert_eq!(goal_progress_pct(dec!(1500), dec!(1000)), dec!(100));
        assert_eq!(goal_progress_pct(Decimal::ZERO, Decimal::ZERO), dec!(100));
        assert_eq!(goal_progress_pct(dec!(-1), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_months_to_goal_rounds_up() {
        assert_eq!(months_to_goal(dec!(420000), dec!(600000), dec!(25000)), Some(8));
        assert_eq!(months_to_goal(dec!(850000), dec!(2000000), dec!(40000)), Some(29));
        assert_eq!(months_to_goal(dec!(1000), dec!(1000), dec!(10)), Some(0));
        assert_eq!(months_to_goal(dec!(0), dec!(1000), Decimal::ZERO), None);
    }

    #[test]
    fn test_time_to_goal_describe() {
        assert_eq!(TimeToGoal::Months(1).describe(), "1 month");
        assert_eq!(TimeToGoal::Months(8).describe(), "8 months");
        assert_eq!(TimeToGoal::Months(12).describe(), "1 year");
        assert_eq!(TimeToGoal::Months(13).describe(), "1 year 1 month");
        assert_eq!(TimeToGoal::Months(29).describe(), "2 years 5 months");
        assert_eq!(
            TimeToGoal::NoContribution.describe(),
            "Set monthly contribution"
        );
    }

    #[test]
    fn test_goal_progress_view() {
        let progress = GoalProgress::of(&goal(dec!(850000), dec!(2000000), dec!(40000)));
        assert_eq!(progress.progress_pct, dec!(42.5));
        assert_eq!(progress.remaining, dec!(1150000));
        assert_eq!(progress.months_to_goal, Some(29));
        assert_eq!(progress.time_to_goal, "2 years 5 months");
    }

    #[test]
    fn test_goal_category_serde_labels() {
        let json = serde_json::to_string(&GoalCategory::MajorPurchase).unwrap();
        assert_eq!(json, "\"Major Purchase\"");
        assert_eq!(
            "major purchase".parse::<GoalCategory>().unwrap(),
            GoalCategory::MajorPurchase
        );
        assert!("Yacht".parse::<GoalCategory>().is_err());
    }

    proptest! {
        #[test]
        fn prop_funding_never_exceeds_target(
            target in 1u64..10_000_000,
            deposits in proptest::collection::vec(1u64..2_000_000, 1..20)
        ) {
            let mut g = goal(Decimal::ZERO, Decimal::from(target), Decimal::ZERO);
            for amount in deposits {
                let before = g.current_amount;
                g.fund(Decimal::from(amount));
                prop_assert!(g.current_amount >= before);
                prop_assert!(g.current_amount <= g.target_amount);
            }
            prop_assert!(goal_progress_pct(g.current_amount, g.target_amount) <= dec!(100));
        }
    }
}
