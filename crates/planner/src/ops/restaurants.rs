use catalog::Catalog;
use trip::{DestinationKey, TripState};

use crate::tools::{Report, ToolError};

/// Look up affordable restaurants for a destination.
pub fn get_restaurant_recommendations(
    catalog: &Catalog,
    state: &mut TripState,
    destination: &str,
) -> Result<Report, ToolError> {
    let key = DestinationKey::new(destination);
    let listings = catalog.restaurants(key.as_str()).ok_or_else(|| {
        ToolError::NotFound(format!(
            "Restaurant recommendations not available for {destination}."
        ))
    })?;

    let entries: Vec<String> = listings
        .iter()
        .map(|r| {
            format!(
                "• {} - {} ({})\n  Specialty: {}",
                r.name, r.cuisine, r.price_range, r.specialty
            )
        })
        .collect();
    let report = format!(
        "Recommended affordable restaurants in {destination}:\n\n{}",
        entries.join("\n\n")
    );

    tracing::debug!(key = %key, count = listings.len(), "recorded restaurants");
    state.record_restaurants(key, listings.to_vec());
    Ok(Report::new(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn listings_are_separated_by_blank_lines() {
        let catalog = catalog();
        let mut state = TripState::new();
        let report = get_restaurant_recommendations(&catalog, &mut state, "Leh").unwrap();
        let blocks: Vec<_> = report.text.split("\n\n").collect();
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0], "Recommended affordable restaurants in Leh:");
        assert_eq!(
            blocks[1],
            "• The Tibetan Kitchen - Tibetan (₹300-600)\n  Specialty: Momos and Thukpa"
        );
    }

    #[test]
    fn repeated_lookup_overwrites() {
        let catalog = catalog();
        let mut state = TripState::new();
        get_restaurant_recommendations(&catalog, &mut state, "Varanasi, Uttar Pradesh").unwrap();
        get_restaurant_recommendations(&catalog, &mut state, "varanasi").unwrap();

        assert_eq!(state.restaurants().len(), 1);
        let stored = &state.restaurants()[&DestinationKey::new("varanasi")];
        assert_eq!(stored.as_slice(), catalog.restaurants("varanasi").unwrap());
    }

    #[test]
    fn unknown_destination_leaves_state() {
        let catalog = catalog();
        let mut state = TripState::new();
        let err = get_restaurant_recommendations(&catalog, &mut state, "Udaipur").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert!(state.restaurants().is_empty());
    }
}
