use serde_json::Value;
use trip::{Section, TripState};

use crate::tools::{Report, ToolError};

/// Replace one section of the trip state wholesale.
///
/// Only the section name is checked. The payload is stored whatever its
/// shape; see [`TripState::replace_section`].
pub fn update_trip_details(
    state: &mut TripState,
    section: &str,
    data: Value,
) -> Result<Report, ToolError> {
    let section: Section = section.parse()?;
    let structured = state.replace_section(section, data);

    tracing::debug!(%section, structured, "replaced section");
    Ok(Report::new(format!("Successfully updated {section} with new data.")))
}
