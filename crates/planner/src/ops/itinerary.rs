use catalog::Catalog;
use trip::{DestinationKey, TripState};

use crate::format::bullets;
use crate::tools::{Report, ToolError};

/// Look up the suggested attractions and activities for a destination.
pub fn get_itinerary_recommendations(
    catalog: &Catalog,
    state: &mut TripState,
    destination: &str,
) -> Result<Report, ToolError> {
    let key = DestinationKey::new(destination);
    let plan = catalog.itinerary(key.as_str()).cloned().ok_or_else(|| {
        ToolError::NotFound(format!(
            "Itinerary not available for {destination}. Please contact support for custom itinerary."
        ))
    })?;

    let report = format!(
        "Recommended itinerary for {destination} ({}):\n\n\
         **Top Attractions:**\n{}\n\n\
         **Recommended Activities:**\n{}",
        plan.duration,
        bullets(&plan.attractions),
        bullets(&plan.activities),
    );

    tracing::debug!(key = %key, "recorded itinerary");
    state.record_itinerary(key, plan);
    Ok(Report::new(report))
}
