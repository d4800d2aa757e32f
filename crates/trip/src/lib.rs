//! In-memory trip state for a planning session.
//!
//! This crate holds everything a planning session accumulates: the budget,
//! the destinations picked by the last destination search, and the flights,
//! itineraries and restaurants looked up per destination.
//!
//! # Core Concepts
//!
//! ## TripState
//!
//! The [`TripState`] is owned by whoever drives the session and passed by
//! reference to each operation. It has no global instance and no persistence;
//! a new state starts empty with a zero budget.
//!
//! ## DestinationKey
//!
//! Per-destination results are keyed by a [`DestinationKey`]: the text before
//! the first comma of the caller's destination, lowercased and trimmed.
//!
//! ## Section
//!
//! A [`Section`] names one of the five replaceable parts of the state, used by
//! [`TripState::replace_section`].
//!
//! # Example
//!
//! ```
//! use trip::{DestinationKey, FlightOption, TripState};
//!
//! let mut state = TripState::new();
//! state.record_flight(
//!     DestinationKey::new("Goa"),
//!     FlightOption { price: 8000, duration: "2h 30m".into(), airlines: vec!["IndiGo".into()] },
//! );
//!
//! let snapshot = state.snapshot();
//! assert_eq!(snapshot.flights.len(), 1);
//! ```

mod error;
mod key;
mod record;
mod state;

pub use error::{Error, Result};
pub use key::{DestinationKey, title_case};
pub use record::{Destination, FlightOption, ItineraryPlan, RestaurantListing};
pub use state::{Section, TripSnapshot, TripState};
