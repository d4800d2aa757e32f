//! The trip state store.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    Destination, DestinationKey, Error, FlightOption, ItineraryPlan, RestaurantListing, Result,
};

/// A replaceable section of the trip state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Destinations,
    Flights,
    Itinerary,
    Restaurants,
    UserPreferences,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Destinations,
        Section::Flights,
        Section::Itinerary,
        Section::Restaurants,
        Section::UserPreferences,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Destinations => "destinations",
            Section::Flights => "flights",
            Section::Itinerary => "itinerary",
            Section::Restaurants => "restaurants",
            Section::UserPreferences => "user_preferences",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated planning results for one session.
///
/// Per-destination maps keep first-insertion order; recording the same key
/// again replaces the value in place.
///
/// A section replaced with data that does not fit its record shape holds that
/// data verbatim in `unstructured`, and its typed view is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripState {
    budget: u64,
    destinations: Vec<Destination>,
    flights: IndexMap<DestinationKey, FlightOption>,
    itinerary: IndexMap<DestinationKey, ItineraryPlan>,
    restaurants: IndexMap<DestinationKey, Vec<RestaurantListing>>,
    user_preferences: Map<String, Value>,
    unstructured: IndexMap<Section, Value>,
}

impl TripState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Whether a destination search has succeeded.
    pub fn has_destinations(&self) -> bool {
        !self.destinations.is_empty()
    }

    pub fn flights(&self) -> &IndexMap<DestinationKey, FlightOption> {
        &self.flights
    }

    pub fn itinerary(&self) -> &IndexMap<DestinationKey, ItineraryPlan> {
        &self.itinerary
    }

    pub fn restaurants(&self) -> &IndexMap<DestinationKey, Vec<RestaurantListing>> {
        &self.restaurants
    }

    pub fn user_preferences(&self) -> &Map<String, Value> {
        &self.user_preferences
    }

    /// Sections whose last replacement did not fit the record shape.
    pub fn unstructured(&self) -> &IndexMap<Section, Value> {
        &self.unstructured
    }

    /// Store the budget and the destinations that fit it, replacing any
    /// previous choice.
    pub fn choose_destinations(&mut self, budget: u64, destinations: Vec<Destination>) {
        self.budget = budget;
        self.destinations = destinations;
        self.unstructured.shift_remove(&Section::Destinations);
    }

    /// Returns the flight previously stored under the key, if any.
    pub fn record_flight(
        &mut self,
        key: DestinationKey,
        flight: FlightOption,
    ) -> Option<FlightOption> {
        self.unstructured.shift_remove(&Section::Flights);
        self.flights.insert(key, flight)
    }

    pub fn record_itinerary(
        &mut self,
        key: DestinationKey,
        plan: ItineraryPlan,
    ) -> Option<ItineraryPlan> {
        self.unstructured.shift_remove(&Section::Itinerary);
        self.itinerary.insert(key, plan)
    }

    pub fn record_restaurants(
        &mut self,
        key: DestinationKey,
        listings: Vec<RestaurantListing>,
    ) -> Option<Vec<RestaurantListing>> {
        self.unstructured.shift_remove(&Section::Restaurants);
        self.restaurants.insert(key, listings)
    }

    /// Replace a whole section with caller-supplied data. Any payload is
    /// accepted.
    ///
    /// Data that fits the section's record shape becomes its typed content,
    /// with missing record fields defaulted. Anything else is kept verbatim
    /// as unstructured content and the typed view is cleared. Returns whether
    /// the data was structured.
    pub fn replace_section(&mut self, section: Section, data: Value) -> bool {
        let raw = &mut self.unstructured;
        match section {
            Section::Destinations => replace(&mut self.destinations, raw, section, data),
            Section::Flights => replace(&mut self.flights, raw, section, data),
            Section::Itinerary => replace(&mut self.itinerary, raw, section, data),
            Section::Restaurants => replace(&mut self.restaurants, raw, section, data),
            Section::UserPreferences => replace(&mut self.user_preferences, raw, section, data),
        }
    }

    /// A read-only copy of every section.
    pub fn snapshot(&self) -> TripSnapshot {
        TripSnapshot {
            budget: self.budget,
            destinations: self.destinations.clone(),
            flights: self.flights.clone(),
            itinerary: self.itinerary.clone(),
            restaurants: self.restaurants.clone(),
            user_preferences: self.user_preferences.clone(),
            unstructured: self.unstructured.clone(),
        }
    }
}

fn replace<T: DeserializeOwned + Default>(
    slot: &mut T,
    unstructured: &mut IndexMap<Section, Value>,
    section: Section,
    data: Value,
) -> bool {
    match T::deserialize(&data) {
        Ok(value) => {
            *slot = value;
            unstructured.shift_remove(&section);
            true
        }
        Err(_) => {
            *slot = T::default();
            unstructured.insert(section, data);
            false
        }
    }
}

/// Point-in-time copy of a [`TripState`], for renderers and serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripSnapshot {
    pub budget: u64,
    pub destinations: Vec<Destination>,
    pub flights: IndexMap<DestinationKey, FlightOption>,
    pub itinerary: IndexMap<DestinationKey, ItineraryPlan>,
    pub restaurants: IndexMap<DestinationKey, Vec<RestaurantListing>>,
    pub user_preferences: Map<String, Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub unstructured: IndexMap<Section, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn listing(name: &str) -> RestaurantListing {
        RestaurantListing {
            name: name.into(),
            cuisine: "Goan".into(),
            price_range: "₹300-600".into(),
            specialty: "Thali".into(),
        }
    }

    fn flight(price: u64) -> FlightOption {
        FlightOption {
            price,
            duration: "1h".into(),
            airlines: vec!["IndiGo".into()],
        }
    }

    #[test]
    fn new_state_is_empty() {
        let state = TripState::new();
        assert_eq!(state.budget(), 0);
        assert!(!state.has_destinations());
        assert!(state.flights().is_empty());
        assert!(state.user_preferences().is_empty());
    }

    #[test]
    fn section_names_parse() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
        let err = "bogus".parse::<Section>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid section. Valid sections: destinations, flights, itinerary, restaurants, user_preferences"
        );
    }

    #[test]
    fn recording_same_key_overwrites_in_place() {
        let mut state = TripState::new();
        state.record_restaurants("goa".into(), vec![listing("A"), listing("B")]);
        state.record_restaurants("jaipur".into(), vec![listing("C")]);
        let previous = state.record_restaurants("Goa".into(), vec![listing("D")]);

        assert_eq!(previous.map(|l| l.len()), Some(2));
        assert_eq!(state.restaurants().len(), 2);
        let keys: Vec<_> = state.restaurants().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["goa", "jaipur"]);
        assert_eq!(state.restaurants()[&DestinationKey::new("goa")], vec![listing("D")]);
    }

    #[test]
    fn flights_accumulate_per_key() {
        let mut state = TripState::new();
        state.record_flight("goa".into(), flight(8000));
        state.record_flight("jaipur".into(), flight(3500));
        assert_eq!(state.flights().len(), 2);
        assert_eq!(state.flights()[&DestinationKey::new("jaipur")].price, 3500);
    }

    #[test]
    fn replace_section_decodes_payload() {
        let mut state = TripState::new();
        let structured = state.replace_section(
            Section::Flights,
            json!({"Goa, India": {"price": 100, "duration": "1h", "airlines": ["X"]}}),
        );
        assert!(structured);
        assert_eq!(state.flights()[&DestinationKey::new("goa")].price, 100);

        assert!(state.replace_section(Section::UserPreferences, json!({"diet": "vegetarian"})));
        assert_eq!(state.user_preferences()["diet"], "vegetarian");
        assert!(state.unstructured().is_empty());
    }

    #[test]
    fn partial_records_are_accepted() {
        let mut state = TripState::new();
        assert!(state.replace_section(Section::Destinations, json!([{"name": "Ooty"}])));
        assert_eq!(
            state.destinations(),
            &[Destination {
                name: "Ooty".into(),
                description: String::new(),
                estimated_cost: 0,
            }]
        );
        assert!(state.has_destinations());
    }

    #[test]
    fn mismatched_shape_is_kept_verbatim() {
        let mut state = TripState::new();
        state.choose_destinations(
            5000,
            vec![Destination {
                name: "Pushkar".into(),
                description: "Sacred lake".into(),
                estimated_cost: 4000,
            }],
        );

        assert!(!state.replace_section(Section::Destinations, json!("not a list")));
        assert!(!state.has_destinations());
        assert_eq!(state.unstructured()[&Section::Destinations], json!("not a list"));
        assert_eq!(state.budget(), 5000);

        assert!(!state.replace_section(Section::UserPreferences, json!(["window seat"])));
        assert!(state.user_preferences().is_empty());
        assert_eq!(state.unstructured()[&Section::UserPreferences], json!(["window seat"]));
    }

    #[test]
    fn structured_data_clears_unstructured_section() {
        let mut state = TripState::new();
        state.replace_section(Section::Restaurants, json!(42));
        state.record_restaurants("goa".into(), vec![listing("A")]);
        assert!(state.unstructured().is_empty());

        state.replace_section(Section::Flights, json!("tbd"));
        assert!(state.replace_section(Section::Flights, json!({})));
        assert!(!state.unstructured().contains_key(&Section::Flights));
    }

    #[test]
    fn snapshot_serializes_every_section() {
        let mut state = TripState::new();
        state.record_flight("goa".into(), flight(8000));
        let value = serde_json::to_value(state.snapshot()).unwrap();
        for key in ["budget", "destinations", "flights", "itinerary", "restaurants", "user_preferences"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["flights"]["goa"]["price"], 8000);
        assert!(value.get("unstructured").is_none());

        state.replace_section(Section::Itinerary, json!("ask later"));
        let value = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(value["unstructured"]["itinerary"], "ask later");
    }
}
