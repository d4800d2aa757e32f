use serde::{Deserialize, Serialize};
use trip::Destination;

/// Category name that selects every category in a tier.
pub const ANY_CATEGORY: &str = "any";

/// A budget band and the destinations offered within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,

    /// Exclusive upper bound. Only the last tier is unbounded.
    #[serde(default)]
    pub below: Option<u64>,

    #[serde(default, rename = "category")]
    pub categories: Vec<Category>,
}

/// Destinations of one type (beach, historical, ...) within a tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,

    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl Tier {
    /// Whether a budget falls under this tier's bound.
    pub fn admits(&self, budget: u64) -> bool {
        self.below.is_none_or(|below| budget < below)
    }

    /// Destinations of the requested type, in declared order.
    ///
    /// `"any"` (in any case) selects every category. An unknown type selects
    /// nothing.
    pub fn candidates(&self, destination_type: &str) -> Vec<&Destination> {
        let wanted = destination_type.to_lowercase();
        if wanted == ANY_CATEGORY {
            return self
                .categories
                .iter()
                .flat_map(|c| c.destinations.iter())
                .collect();
        }

        self.categories
            .iter()
            .find(|c| c.name == wanted)
            .map(|c| c.destinations.iter().collect())
            .unwrap_or_default()
    }
}
