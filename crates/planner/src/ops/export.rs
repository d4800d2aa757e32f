use catalog::Catalog;
use chrono::Utc;
use trip::TripState;

use super::summary::NO_TRIP;
use crate::render::{DocumentRenderer, TripDocument};
use crate::tools::{Report, ToolError};

/// File name used when the caller gives none.
pub const DEFAULT_EXPORT_FILENAME: &str = "trip_plan.txt";

/// Render the whole trip through a document renderer.
///
/// The state is only read. Renderer failures come back as
/// [`ToolError::External`].
pub fn export_trip_plan(
    catalog: &Catalog,
    state: &TripState,
    renderer: &dyn DocumentRenderer,
    filename: &str,
) -> Result<Report, ToolError> {
    if !state.has_destinations() {
        return Err(ToolError::PreconditionFailed(NO_TRIP.into()));
    }

    let document = TripDocument::from_snapshot(&state.snapshot(), &catalog.currency, Utc::now());
    let path = renderer
        .render(&document, filename)
        .map_err(|e| ToolError::External(format!("Failed to generate trip plan: {e}")))?;

    tracing::info!(path = %path.display(), "exported trip plan");
    Ok(
        Report::new(format!("Trip plan generated successfully: {filename}"))
            .with_field("filename", filename)
            .with_field("path", path.display().to_string()),
    )
}
