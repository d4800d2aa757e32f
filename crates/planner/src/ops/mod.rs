//! The planning tools.
//!
//! Each tool is a plain function over the reference [`catalog::Catalog`] and
//! the session's [`trip::TripState`]. A tool either returns a [`Report`]
//! or a [`ToolError`]; on error the state is left exactly as it was.
//!
//! [`Report`]: crate::tools::Report
//! [`ToolError`]: crate::tools::ToolError

mod destinations;
mod export;
mod flights;
mod hotels;
mod itinerary;
mod restaurants;
mod summary;
mod update;

pub use destinations::get_destination_recommendations;
pub use export::{DEFAULT_EXPORT_FILENAME, export_trip_plan};
pub use flights::get_flight_recommendations;
pub use hotels::get_hotel_recommendations;
pub use itinerary::get_itinerary_recommendations;
pub use restaurants::get_restaurant_recommendations;
pub use summary::get_trip_summary;
pub use update::update_trip_details;

#[cfg(test)]
pub(crate) mod fixtures {
    use catalog::Catalog;
    use trip::TripState;

    pub fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    /// A state after a successful `"any"` destination search.
    pub fn state_with_budget(catalog: &Catalog, budget: i64) -> TripState {
        let mut state = TripState::new();
        super::get_destination_recommendations(catalog, &mut state, budget, "any").unwrap();
        state
    }
}
