use catalog::Catalog;
use trip::title_case;

use crate::tools::{Report, ToolError};

/// Look up hotels for a destination. Does not touch the trip state.
///
/// Unlike the other lookups the destination is only lowercased, so compound
/// keys such as `leh-ladakh` match while "Jaipur, Rajasthan" does not.
pub fn get_hotel_recommendations(catalog: &Catalog, destination: &str) -> Result<Report, ToolError> {
    let key = destination.to_lowercase();
    let hotels = catalog.hotels(&key).ok_or_else(|| {
        ToolError::NotFound(format!(
            "Sorry, hotel recommendations for '{key}' are not available."
        ))
    })?;

    Ok(Report::new(format!(
        "Recommended hotels in {}:\n{}",
        title_case(&key),
        hotels.join("\n")
    )))
}
