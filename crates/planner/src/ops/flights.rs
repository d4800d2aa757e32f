use catalog::Catalog;
use trip::{DestinationKey, TripState};

use crate::format::{join_or, money};
use crate::tools::{Report, ToolError};

/// Find a direct flight and check the round trip against the stored budget.
///
/// The check uses the budget from the last destination search, not the
/// destination's own estimated cost. The flight is stored only when it fits.
pub fn get_flight_recommendations(
    catalog: &Catalog,
    state: &mut TripState,
    destination: &str,
    departure_city: Option<&str>,
) -> Result<Report, ToolError> {
    let departure_city = departure_city.unwrap_or(catalog.default_departure.as_str());

    let departure = catalog.departure(departure_city).ok_or_else(|| {
        ToolError::NotFound(format!(
            "Flight data not available from {departure_city}. Try {} as departure cities.",
            join_or(&catalog.departure_cities())
        ))
    })?;

    let key = DestinationKey::new(destination);
    let flight = departure
        .route(key.as_str())
        .map(|route| route.flight())
        .ok_or_else(|| {
            ToolError::NotFound(format!(
                "No direct flights found from {departure_city} to {destination}. Consider alternative routes or transportation."
            ))
        })?;

    let round_trip = flight.round_trip_price();
    let remaining = state.budget().checked_sub(round_trip).ok_or_else(|| {
        ToolError::BudgetExceeded(format!(
            "Flight costs ({} round trip) exceed your budget. Consider train or bus travel.",
            money(&catalog.currency, round_trip)
        ))
    })?;

    let report = format!(
        "Flight options from {departure_city} to {destination}:\n\n\
         • Price: {} (one way), {} (round trip)\n\
         • Duration: {}\n\
         • Airlines: {}\n\
         • Remaining budget after flights: {}",
        money(&catalog.currency, flight.price),
        money(&catalog.currency, round_trip),
        flight.duration,
        flight.airlines.join(", "),
        money(&catalog.currency, remaining),
    );

    tracing::debug!(key = %key, price = flight.price, "recorded flight");
    state.record_flight(key, flight);
    Ok(Report::new(report))
}
