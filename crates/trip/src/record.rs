//! Records stored in the trip state.
//!
//! Missing fields decode to their defaults, so partial records supplied by a
//! caller are still accepted.

use serde::{Deserialize, Serialize};

/// A destination chosen by a destination search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destination {
    /// Display name, e.g. "Jaipur, Rajasthan".
    pub name: String,
    pub description: String,
    /// Estimated trip cost, in the same unit as the budget.
    pub estimated_cost: u64,
}

/// A one-way flight between a departure city and a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightOption {
    /// One-way price.
    pub price: u64,
    /// Display string, e.g. "1h 15m".
    pub duration: String,
    pub airlines: Vec<String>,
}

impl FlightOption {
    /// Price of the outbound and return legs together.
    pub fn round_trip_price(&self) -> u64 {
        self.price.saturating_mul(2)
    }
}

/// Suggested plan for a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItineraryPlan {
    /// Display string, e.g. "3-4 days".
    pub duration: String,
    pub attractions: Vec<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantListing {
    pub name: String,
    pub cuisine: String,
    pub price_range: String,
    pub specialty: String,
}
