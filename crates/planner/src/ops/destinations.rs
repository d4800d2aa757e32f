use catalog::Catalog;
use trip::{Destination, TripState};

use crate::format::money;
use crate::tools::{Report, ToolError};

/// Recommend destinations that fit a budget.
///
/// The budget picks a tier; `destination_type` picks one of the tier's
/// categories, or all of them for `"any"`. Only destinations whose estimated
/// cost fits the budget are kept. On success the budget and the destinations
/// replace whatever the state held before.
pub fn get_destination_recommendations(
    catalog: &Catalog,
    state: &mut TripState,
    budget: i64,
    destination_type: &str,
) -> Result<Report, ToolError> {
    let budget = u64::try_from(budget)
        .ok()
        .filter(|b| *b > 0)
        .ok_or_else(|| ToolError::InvalidArgument("Budget must be a positive number.".into()))?;

    let affordable: Vec<Destination> = catalog
        .tier_for(budget)
        .map(|tier| tier.candidates(destination_type))
        .unwrap_or_default()
        .into_iter()
        .filter(|d| d.estimated_cost <= budget)
        .cloned()
        .collect();

    if affordable.is_empty() {
        return Err(ToolError::BudgetExceeded(format!(
            "No destinations found within budget of {}. Consider increasing your budget or choosing a different destination type.",
            money(&catalog.currency, budget)
        )));
    }

    let lines: Vec<String> = affordable
        .iter()
        .map(|d| {
            format!(
                "• **{}** - {} (Est. Cost: {})",
                d.name,
                d.description,
                money(&catalog.currency, d.estimated_cost)
            )
        })
        .collect();
    let report = format!(
        "Based on your budget of {}, here are the recommended destinations:\n\n{}",
        money(&catalog.currency, budget),
        lines.join("\n")
    );

    tracing::debug!(budget, count = affordable.len(), "chose destinations");
    state.choose_destinations(budget, affordable);
    Ok(Report::new(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::catalog;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn names(state: &TripState) -> Vec<&str> {
        state.destinations().iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn rejects_non_positive_budget() {
        let catalog = catalog();
        let mut state = TripState::new();
        for budget in [0, -1, i64::MIN] {
            let err = get_destination_recommendations(&catalog, &mut state, budget, "any")
                .unwrap_err();
            assert_eq!(err, ToolError::InvalidArgument("Budget must be a positive number.".into()));
        }
        assert_eq!(state, TripState::new());
    }

    #[test]
    fn beach_filter_keeps_table_order() {
        let catalog = catalog();
        let mut state = TripState::new();
        let err =
            get_destination_recommendations(&catalog, &mut state, 20000, "beach").unwrap_err();
        // Both medium-tier beaches cost more than 20000.
        assert!(matches!(err, ToolError::BudgetExceeded(_)));
        assert!(!state.has_destinations());

        get_destination_recommendations(&catalog, &mut state, 28000, "Beach").unwrap();
        assert_eq!(names(&state), vec!["Goa", "Andaman Islands"]);
    }

    #[test]
    fn beach_filter_keeps_only_affordable_entries() {
        let catalog = Catalog::parse(
            r#"
[[tier]]
name = "low"
below = 15000

[[tier]]
name = "medium"
below = 30000

[[tier.category]]
name = "beach"
destinations = [
    { name = "Gokarna", description = "Quiet beaches", estimated_cost = 18000 },
    { name = "Goa", description = "Busy beaches", estimated_cost = 25000 },
    { name = "Alibaug", description = "Weekend beaches", estimated_cost = 20000 },
]

[[tier]]
name = "high"
"#,
        )
        .unwrap();
        let mut state = TripState::new();
        let report =
            get_destination_recommendations(&catalog, &mut state, 20000, "beach").unwrap();

        assert_eq!(names(&state), vec!["Gokarna", "Alibaug"]);
        assert_eq!(state.budget(), 20000);
        assert!(report.text.contains("**Alibaug**"));
        assert!(!report.text.contains("**Goa**"));
    }

    #[test]
    fn any_unions_tier_in_declared_order() {
        let catalog = catalog();
        let mut state = TripState::new();
        get_destination_recommendations(&catalog, &mut state, 10000, "any").unwrap();
        assert_eq!(
            names(&state),
            vec![
                "Varkala, Kerala",
                "Varanasi, Uttar Pradesh",
                "Hampi, Karnataka",
                "Rishikesh, Uttarakhand",
                "Amritsar, Punjab",
                "Pushkar, Rajasthan",
            ]
        );
        assert_eq!(state.budget(), 10000);
    }

    #[test]
    fn tier_boundaries() {
        let catalog = catalog();

        let mut state = TripState::new();
        get_destination_recommendations(&catalog, &mut state, 14999, "any").unwrap();
        assert!(names(&state).contains(&"Pondicherry"));

        // Every medium-tier entry costs more than 15000, and low-tier entries
        // are no longer offered.
        let mut state = TripState::new();
        let err = get_destination_recommendations(&catalog, &mut state, 15000, "any").unwrap_err();
        assert!(matches!(err, ToolError::BudgetExceeded(_)));

        let mut state = TripState::new();
        get_destination_recommendations(&catalog, &mut state, 29999, "any").unwrap();
        assert!(names(&state).contains(&"Andaman Islands"));
        assert!(!names(&state).contains(&"Leh-Ladakh"));
        assert!(!names(&state).contains(&"Pondicherry"));

        // 30000 is high tier, which starts at 35000.
        let mut state = TripState::new();
        let err = get_destination_recommendations(&catalog, &mut state, 30000, "any").unwrap_err();
        assert!(matches!(err, ToolError::BudgetExceeded(_)));
        assert!(!state.has_destinations());
    }

    #[test]
    fn high_tier_needs_matching_entries() {
        let catalog = catalog();
        let mut state = TripState::new();
        get_destination_recommendations(&catalog, &mut state, 40000, "any").unwrap();
        assert_eq!(
            names(&state),
            vec!["Kashmir Valley", "Darjeeling, West Bengal", "Spiti Valley"]
        );
    }

    #[test]
    fn unknown_category_reports_budget() {
        let catalog = catalog();
        let mut state = TripState::new();
        let err = get_destination_recommendations(&catalog, &mut state, 12000, "desert")
            .unwrap_err();
        assert!(matches!(err, ToolError::BudgetExceeded(_)));
        assert!(err.to_string().contains("₹12000"));
        assert!(err.to_string().contains("destination type"));
        assert_eq!(state, TripState::new());
    }

    #[test]
    fn failure_keeps_previous_choice() {
        let catalog = catalog();
        let mut state = TripState::new();
        get_destination_recommendations(&catalog, &mut state, 9000, "any").unwrap();
        let before = state.clone();
        get_destination_recommendations(&catalog, &mut state, 5000, "any").unwrap_err();
        assert_eq!(state, before);
    }

    #[test]
    fn report_lists_each_destination() {
        let catalog = catalog();
        let mut state = TripState::new();
        let report =
            get_destination_recommendations(&catalog, &mut state, 8000, "spiritual").unwrap();
        assert_eq!(
            report.text,
            "Based on your budget of ₹8000, here are the recommended destinations:\n\n\
             • **Pushkar, Rajasthan** - Sacred lake and camel fair (Est. Cost: ₹8000)"
        );
    }

    proptest! {
        #[test]
        fn non_positive_budget_never_mutates(budget in i64::MIN..=0) {
            let catalog = catalog();
            let mut state = TripState::new();
            let result = get_destination_recommendations(&catalog, &mut state, budget, "any");
            prop_assert!(matches!(result, Err(ToolError::InvalidArgument(_))));
            prop_assert_eq!(state, TripState::new());
        }

        #[test]
        fn chosen_destinations_fit_budget(budget in 1i64..60000, kind in "(any|beach|historical|hill_station|spiritual|adventure)") {
            let catalog = catalog();
            let mut state = TripState::new();
            if get_destination_recommendations(&catalog, &mut state, budget, &kind).is_ok() {
                prop_assert!(state.has_destinations());
                prop_assert_eq!(state.budget(), budget as u64);
                for d in state.destinations() {
                    prop_assert!(d.estimated_cost <= budget as u64);
                }
            } else {
                prop_assert_eq!(state, TripState::new());
            }
        }
    }
}
