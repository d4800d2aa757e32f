//! Destination key normalization.

use serde::{Deserialize, Serialize};

/// Key under which per-destination results are stored.
///
/// Built from the caller's destination string by taking the text before the
/// first comma, lowercasing it, and trimming whitespace. "Jaipur, Rajasthan"
/// and " jaipur" both map to `jaipur`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DestinationKey(String);

impl DestinationKey {
    pub fn new(destination: &str) -> Self {
        let head = destination.split(',').next().unwrap_or_default();
        Self(head.to_lowercase().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key with each word capitalized, for display.
    pub fn title(&self) -> String {
        title_case(&self.0)
    }
}

impl From<String> for DestinationKey {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for DestinationKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<DestinationKey> for String {
    fn from(key: DestinationKey) -> Self {
        key.0
    }
}

impl AsRef<str> for DestinationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capitalize the first letter of every alphabetic run and lowercase the rest.
///
/// "leh-ladakh" becomes "Leh-Ladakh", "new delhi" becomes "New Delhi".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_region_after_comma() {
        assert_eq!(DestinationKey::new("Jaipur, Rajasthan").as_str(), "jaipur");
        assert_eq!(DestinationKey::new("jaipur"), DestinationKey::new("Jaipur, Rajasthan"));
    }

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(DestinationKey::new("  GOA ").as_str(), "goa");
        assert_eq!(DestinationKey::new("").as_str(), "");
        assert_eq!(DestinationKey::new(", Kerala").as_str(), "");
    }

    #[test]
    fn deserialized_keys_are_normalized() {
        let key: DestinationKey = serde_json::from_str(r#""Varkala, Kerala""#).unwrap();
        assert_eq!(key.as_str(), "varkala");
    }

    #[test]
    fn title_case_handles_separators() {
        assert_eq!(title_case("leh-ladakh"), "Leh-Ladakh");
        assert_eq!(title_case("new delhi"), "New Delhi");
        assert_eq!(title_case("GOA"), "Goa");
    }
}
