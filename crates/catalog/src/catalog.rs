//! Catalog loading, validation and lookups.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use trip::{FlightOption, ItineraryPlan, RestaurantListing};

use crate::{Error, Result, Tier};

const BUILTIN: &str = include_str!("../data/catalog.toml");

/// Reference tables loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Symbol printed before amounts.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Departure city used when a flight search names none.
    #[serde(default = "default_departure")]
    pub default_departure: String,

    /// Budget tiers, lowest first.
    #[serde(default, rename = "tier")]
    pub tiers: Vec<Tier>,

    /// Flight routes grouped by departure city.
    #[serde(default, rename = "departure")]
    pub departures: Vec<Departure>,

    /// Itineraries keyed by destination.
    #[serde(default)]
    pub itineraries: HashMap<String, ItineraryPlan>,

    /// Restaurant listings keyed by destination.
    #[serde(default)]
    pub restaurants: HashMap<String, Vec<RestaurantListing>>,

    /// Free-text hotel descriptions keyed by destination.
    #[serde(default)]
    pub hotels: HashMap<String, Vec<String>>,
}

/// Flights offered from one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Departure {
    /// Display name, e.g. "Delhi".
    pub city: String,

    #[serde(default)]
    pub routes: Vec<Route>,
}

/// A direct flight from a departure city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub destination: String,
    pub price: u64,
    pub duration: String,
    pub airlines: Vec<String>,
}

impl Route {
    pub fn flight(&self) -> FlightOption {
        FlightOption {
            price: self.price,
            duration: self.duration.clone(),
            airlines: self.airlines.clone(),
        }
    }
}

impl Departure {
    /// Find the route to a destination key (already lowercased).
    pub fn route(&self, destination: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.destination == destination)
    }
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_departure() -> String {
    "Delhi".to_string()
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::parse(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string.
    ///
    /// Lookup keys are lowercased and the tables are validated.
    pub fn parse(toml: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))?;
        let catalog = catalog.normalized()?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN)
    }

    /// The tier a budget falls into.
    pub fn tier_for(&self, budget: u64) -> Option<&Tier> {
        self.tiers
            .iter()
            .find(|t| t.admits(budget))
            .or_else(|| self.tiers.last())
    }

    /// Find a departure city, ignoring case.
    pub fn departure(&self, city: &str) -> Option<&Departure> {
        let key = city.to_lowercase();
        self.departures
            .iter()
            .find(|d| d.city.to_lowercase() == key)
    }

    /// Display names of every departure city, in declared order.
    pub fn departure_cities(&self) -> Vec<&str> {
        self.departures.iter().map(|d| d.city.as_str()).collect()
    }

    pub fn itinerary(&self, key: &str) -> Option<&ItineraryPlan> {
        self.itineraries.get(key)
    }

    pub fn restaurants(&self, key: &str) -> Option<&[RestaurantListing]> {
        self.restaurants.get(key).map(Vec::as_slice)
    }

    pub fn hotels(&self, key: &str) -> Option<&[String]> {
        self.hotels.get(key).map(Vec::as_slice)
    }

    fn normalized(mut self) -> Result<Self> {
        for tier in &mut self.tiers {
            for category in &mut tier.categories {
                category.name = category.name.to_lowercase();
            }
        }
        for departure in &mut self.departures {
            departure.city = departure.city.trim().to_string();
            for route in &mut departure.routes {
                route.destination = route.destination.trim().to_lowercase();
            }
        }
        self.itineraries = lowercase_keys(self.itineraries, "itinerary")?;
        self.restaurants = lowercase_keys(self.restaurants, "restaurant")?;
        self.hotels = lowercase_keys(self.hotels, "hotel")?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let Some((last, bounded)) = self.tiers.split_last() else {
            return Err(Error::Invalid("at least one tier is required".into()));
        };
        if last.below.is_some() {
            return Err(Error::Invalid(format!(
                "last tier '{}' must not have an upper bound",
                last.name
            )));
        }

        let mut floor = 0;
        for tier in bounded {
            let Some(below) = tier.below else {
                return Err(Error::Invalid(format!(
                    "tier '{}' needs an upper bound",
                    tier.name
                )));
            };
            if below <= floor {
                return Err(Error::Invalid(format!(
                    "tier bounds must be ascending (tier '{}')",
                    tier.name
                )));
            }
            floor = below;
        }

        for tier in &self.tiers {
            let mut seen = HashSet::new();
            for category in &tier.categories {
                if !seen.insert(category.name.as_str()) {
                    return Err(Error::Invalid(format!(
                        "duplicate category '{}' in tier '{}'",
                        category.name, tier.name
                    )));
                }
                if let Some(d) = category.destinations.iter().find(|d| d.estimated_cost == 0) {
                    return Err(Error::Invalid(format!(
                        "destination '{}' has no estimated cost",
                        d.name
                    )));
                }
            }
        }

        let mut cities = HashSet::new();
        for departure in &self.departures {
            if !cities.insert(departure.city.to_lowercase()) {
                return Err(Error::Invalid(format!(
                    "duplicate departure city '{}'",
                    departure.city
                )));
            }
            let mut destinations = HashSet::new();
            for route in &departure.routes {
                if !destinations.insert(route.destination.as_str()) {
                    return Err(Error::Invalid(format!(
                        "duplicate route {} -> {}",
                        departure.city, route.destination
                    )));
                }
                if route.price == 0 {
                    return Err(Error::Invalid(format!(
                        "route {} -> {} has no price",
                        departure.city, route.destination
                    )));
                }
                if route.airlines.is_empty() {
                    return Err(Error::Invalid(format!(
                        "route {} -> {} lists no airlines",
                        departure.city, route.destination
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Lowercase every key. Two keys that differ only in case are an error.
fn lowercase_keys<V>(map: HashMap<String, V>, table: &str) -> Result<HashMap<String, V>> {
    let mut out = HashMap::with_capacity(map.len());
    for (key, value) in map {
        let key = key.to_lowercase();
        if out.contains_key(&key) {
            return Err(Error::Invalid(format!("duplicate {table} key '{key}'")));
        }
        out.insert(key, value);
    }
    Ok(out)
}
