//! Tool names and JSON schemas.

use serde_json::json;

use crate::tools::ToolSpec;

pub const DESTINATIONS: &str = "get_destination_recommendations";
pub const FLIGHTS: &str = "get_flight_recommendations";
pub const HOTELS: &str = "get_hotel_recommendations";
pub const ITINERARY: &str = "get_itinerary_recommendations";
pub const RESTAURANTS: &str = "get_restaurant_recommendations";
pub const SUMMARY: &str = "get_trip_summary";
pub const UPDATE: &str = "update_trip_details";
pub const EXPORT: &str = "export_trip_plan";

fn destination_only(name: &str, description: &str) -> ToolSpec {
    ToolSpec {
        name: name.into(),
        description: description.into(),
        schema: json!({
            "type": "object",
            "required": ["destination"],
            "properties": {
                "destination": {
                    "type": "string",
                    "description": "Destination city, optionally followed by a region (e.g. \"Jaipur, Rajasthan\")"
                }
            }
        }),
    }
}

/// Specs for every planning tool, with `default_departure` as the flight
/// search default.
pub fn all(default_departure: &str) -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: DESTINATIONS.into(),
            description: "Recommend destinations that fit a trip budget. Stores the budget and the recommended destinations in the trip plan.".into(),
            schema: json!({
                "type": "object",
                "required": ["budget"],
                "properties": {
                    "budget": {
                        "type": "integer",
                        "description": "Total trip budget in whole currency units"
                    },
                    "destination_type": {
                        "type": "string",
                        "description": "Category such as beach, historical, hill_station, spiritual or adventure; \"any\" for all",
                        "default": "any"
                    }
                }
            }),
        },
        ToolSpec {
            name: FLIGHTS.into(),
            description: "Find a direct flight and check the round trip against the trip budget.".into(),
            schema: json!({
                "type": "object",
                "required": ["destination"],
                "properties": {
                    "destination": { "type": "string", "description": "Destination city" },
                    "departure_city": {
                        "type": "string",
                        "description": "City to fly from",
                        "default": default_departure
                    }
                }
            }),
        },
        destination_only(HOTELS, "Recommend hotels for a destination."),
        destination_only(ITINERARY, "Suggest attractions and activities for a destination."),
        destination_only(RESTAURANTS, "Recommend affordable restaurants at a destination."),
        ToolSpec {
            name: SUMMARY.into(),
            description: "Summarize the trip plan built so far.".into(),
            schema: json!({ "type": "object", "properties": {} }),
        },
        ToolSpec {
            name: UPDATE.into(),
            description: "Replace one section of the trip plan.".into(),
            schema: json!({
                "type": "object",
                "required": ["section", "data"],
                "properties": {
                    "section": {
                        "type": "string",
                        "enum": trip::Section::names()
                    },
                    "data": { "description": "New content for the section" }
                }
            }),
        },
        ToolSpec {
            name: EXPORT.into(),
            description: "Write the full trip plan to a paginated document.".into(),
            schema: json!({
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "Output file name",
                        "default": crate::ops::DEFAULT_EXPORT_FILENAME
                    }
                }
            }),
        },
    ]
}
