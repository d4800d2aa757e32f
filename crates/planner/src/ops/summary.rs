use catalog::Catalog;
use trip::TripState;

use crate::format::money;
use crate::tools::{Report, ToolError};

pub(crate) const NO_TRIP: &str =
    "No trip details available. Please search for destinations first.";

/// Summarize the trip so far. Sections with nothing recorded are left out.
pub fn get_trip_summary(catalog: &Catalog, state: &TripState) -> Result<Report, ToolError> {
    if !state.has_destinations() {
        return Err(ToolError::PreconditionFailed(NO_TRIP.into()));
    }

    let currency = catalog.currency.as_str();
    let mut parts = vec![format!("**Budget:** {}", money(currency, state.budget()))];

    parts.push(format!("\n**Destinations ({}):**", state.destinations().len()));
    for d in state.destinations() {
        parts.push(format!("• {} - {}", d.name, money(currency, d.estimated_cost)));
    }

    if !state.flights().is_empty() {
        parts.push("\n**Flights:**".into());
        for (key, flight) in state.flights() {
            parts.push(format!(
                "• To {}: {} (round trip)",
                key.title(),
                money(currency, flight.round_trip_price())
            ));
        }
    }

    if !state.itinerary().is_empty() {
        parts.push(format!(
            "\n**Itineraries:** {} destinations planned",
            state.itinerary().len()
        ));
    }

    if !state.restaurants().is_empty() {
        parts.push(format!(
            "\n**Restaurants:** {} destinations covered",
            state.restaurants().len()
        ));
    }

    Ok(Report::new(parts.join("\n")))
}
