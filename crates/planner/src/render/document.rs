use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use trip::TripSnapshot;

use crate::format::money;

/// One element of a trip document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Block {
    Title(String),
    Heading(String),
    Subheading(String),
    Label(String),
    Paragraph(String),
    Bullet(String),
    Spacer,
}

/// A trip plan laid out for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct TripDocument {
    pub generated_at: DateTime<Utc>,
    pub blocks: Vec<Block>,
}

impl TripDocument {
    /// Lay out a snapshot: budget, destinations, flights, itineraries,
    /// restaurants, preferences, then any unstructured sections. Empty
    /// sections get no heading.
    pub fn from_snapshot(snapshot: &TripSnapshot, currency: &str, generated_at: DateTime<Utc>) -> Self {
        let mut blocks = vec![
            Block::Title("Budget Trip Plan".into()),
            Block::Paragraph(format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC"))),
            Block::Spacer,
            Block::Heading(format!("Total Budget: {}", money(currency, snapshot.budget))),
            Block::Heading("Recommended Destinations".into()),
        ];

        for d in &snapshot.destinations {
            blocks.push(Block::Bullet(format!(
                "{} - {} (Est. Cost: {})",
                d.name,
                d.description,
                money(currency, d.estimated_cost)
            )));
        }
        blocks.push(Block::Spacer);

        if !snapshot.flights.is_empty() {
            blocks.push(Block::Heading("Flight Information".into()));
            for (key, flight) in &snapshot.flights {
                blocks.push(Block::Paragraph(format!(
                    "To {}: {} (one way), Duration: {}",
                    key.title(),
                    money(currency, flight.price),
                    flight.duration
                )));
            }
            blocks.push(Block::Spacer);
        }

        if !snapshot.itinerary.is_empty() {
            blocks.push(Block::Heading("Detailed Itinerary".into()));
            for (key, plan) in &snapshot.itinerary {
                blocks.push(Block::Subheading(format!("{} ({})", key.title(), plan.duration)));
                blocks.push(Block::Label("Top Attractions:".into()));
                blocks.extend(plan.attractions.iter().cloned().map(Block::Bullet));
                blocks.push(Block::Spacer);
            }
        }

        if !snapshot.restaurants.is_empty() {
            blocks.push(Block::Heading("Restaurant Recommendations".into()));
            for (key, listings) in &snapshot.restaurants {
                blocks.push(Block::Subheading(key.title()));
                for r in listings {
                    blocks.push(Block::Bullet(format!("{} - {} ({})", r.name, r.cuisine, r.price_range)));
                }
                blocks.push(Block::Spacer);
            }
        }

        if !snapshot.user_preferences.is_empty() {
            blocks.push(Block::Heading("Preferences".into()));
            for (key, value) in &snapshot.user_preferences {
                blocks.push(Block::Paragraph(format!("{key}: {}", plain(value))));
            }
        }

        if !snapshot.unstructured.is_empty() {
            blocks.push(Block::Spacer);
            blocks.push(Block::Heading("Other Details".into()));
            for (section, value) in &snapshot.unstructured {
                blocks.push(Block::Paragraph(format!("{section}: {}", plain(value))));
            }
        }

        Self { generated_at, blocks }
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures::{catalog, state_with_budget};
    use crate::ops::{get_flight_recommendations, get_restaurant_recommendations};

    fn headings(doc: &TripDocument) -> Vec<&str> {
        doc.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading(h) => Some(h.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sections_follow_summary_order() {
        let catalog = catalog();
        let mut state = state_with_budget(&catalog, 20000);
        get_restaurant_recommendations(&catalog, &mut state, "Goa").unwrap();
        get_flight_recommendations(&catalog, &mut state, "Goa", None).unwrap();

        let doc = TripDocument::from_snapshot(&state.snapshot(), "₹", Utc::now());
        assert_eq!(
            headings(&doc),
            vec![
                "Total Budget: ₹20000",
                "Recommended Destinations",
                "Flight Information",
                "Restaurant Recommendations",
            ]
        );
        assert!(doc
            .blocks
            .contains(&Block::Paragraph("To Goa: ₹8000 (one way), Duration: 2h 30m".into())));
        assert!(doc.blocks.contains(&Block::Subheading("Goa".into())));
    }

    #[test]
    fn preferences_render_plain_strings() {
        let catalog = catalog();
        let mut state = state_with_budget(&catalog, 9000);
        state.replace_section(
            trip::Section::UserPreferences,
            serde_json::json!({"diet": "vegetarian", "travelers": 2}),
        );

        let doc = TripDocument::from_snapshot(&state.snapshot(), "₹", Utc::now());
        assert!(doc.blocks.contains(&Block::Paragraph("diet: vegetarian".into())));
        assert!(doc.blocks.contains(&Block::Paragraph("travelers: 2".into())));
    }

    #[test]
    fn unstructured_sections_render_last() {
        let catalog = catalog();
        let mut state = state_with_budget(&catalog, 9000);
        state.replace_section(trip::Section::Itinerary, serde_json::json!("decide on arrival"));

        let doc = TripDocument::from_snapshot(&state.snapshot(), "₹", Utc::now());
        assert_eq!(headings(&doc).last(), Some(&"Other Details"));
        assert_eq!(
            doc.blocks.last(),
            Some(&Block::Paragraph("itinerary: decide on arrival".into()))
        );
    }
}
