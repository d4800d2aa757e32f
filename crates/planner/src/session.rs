//! Planning session and tool dispatch.

use std::future::Future;

use catalog::Catalog;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use trip::{TripSnapshot, TripState};
use uuid::Uuid;

use crate::Result;
use crate::ops;
use crate::render::{DocumentRenderer, TextRenderer};
use crate::specs;
use crate::tools::{Report, ToolCall, ToolError, ToolHost, ToolOutcome, ToolResult, ToolSpec};

/// A unique identifier for a planning session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
struct DestinationsArgs {
    budget: i64,
    #[serde(default = "any_type")]
    destination_type: String,
}

fn any_type() -> String {
    catalog::ANY_CATEGORY.to_string()
}

#[derive(Deserialize)]
struct FlightArgs {
    destination: String,
    departure_city: Option<String>,
}

#[derive(Deserialize)]
struct DestinationArg {
    destination: String,
}

#[derive(Deserialize)]
struct UpdateArgs {
    section: String,
    data: Value,
}

#[derive(Deserialize)]
struct ExportArgs {
    filename: Option<String>,
}

#[derive(Deserialize)]
struct NoArgs {}

/// One planning session: a catalog, the trip state built so far, and the
/// renderer used for exports.
///
/// All tools run under the session's lock, so a session can be shared
/// between tasks without interleaving two mutations.
pub struct PlannerSession {
    pub id: SessionId,
    catalog: Catalog,
    state: Mutex<TripState>,
    renderer: Box<dyn DocumentRenderer>,
    specs: Vec<ToolSpec>,
}

impl PlannerSession {
    /// Create a session that exports into the working directory.
    pub fn new(catalog: Catalog) -> Self {
        let specs = specs::all(&catalog.default_departure);
        Self {
            id: SessionId::new(),
            catalog,
            state: Mutex::new(TripState::new()),
            renderer: Box::new(TextRenderer::new(".")),
            specs,
        }
    }

    /// Create a session over the bundled catalog.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Catalog::builtin()?))
    }

    /// Set the renderer used by `export_trip_plan`.
    pub fn with_renderer(mut self, renderer: impl DocumentRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A copy of the current trip state.
    pub fn snapshot(&self) -> TripSnapshot {
        self.state.lock().snapshot()
    }

    /// Run one tool by name. Failures come back in the outcome.
    pub fn call(&self, name: &str, input: Value) -> ToolOutcome {
        let span = tracing::info_span!("tool", session = %self.id, tool = name);
        let _guard = span.enter();

        let outcome = ToolOutcome::from(self.dispatch(name, input));
        match outcome.error() {
            Some(err) => tracing::warn!(kind = err.kind(), error = %err, "tool failed"),
            None => tracing::debug!("tool succeeded"),
        }
        outcome
    }

    fn dispatch(&self, name: &str, input: Value) -> std::result::Result<Report, ToolError> {
        let catalog = &self.catalog;
        match name {
            specs::DESTINATIONS => {
                let args: DestinationsArgs = decode(name, input)?;
                let mut state = self.state.lock();
                ops::get_destination_recommendations(
                    catalog,
                    &mut state,
                    args.budget,
                    &args.destination_type,
                )
            }
            specs::FLIGHTS => {
                let args: FlightArgs = decode(name, input)?;
                let mut state = self.state.lock();
                ops::get_flight_recommendations(
                    catalog,
                    &mut state,
                    &args.destination,
                    args.departure_city.as_deref(),
                )
            }
            specs::ITINERARY => {
                let args: DestinationArg = decode(name, input)?;
                ops::get_itinerary_recommendations(catalog, &mut self.state.lock(), &args.destination)
            }
            specs::RESTAURANTS => {
                let args: DestinationArg = decode(name, input)?;
                ops::get_restaurant_recommendations(catalog, &mut self.state.lock(), &args.destination)
            }
            specs::HOTELS => {
                let args: DestinationArg = decode(name, input)?;
                ops::get_hotel_recommendations(catalog, &args.destination)
            }
            specs::SUMMARY => {
                let _: NoArgs = decode(name, input)?;
                ops::get_trip_summary(catalog, &self.state.lock())
            }
            specs::UPDATE => {
                let args: UpdateArgs = decode(name, input)?;
                ops::update_trip_details(&mut self.state.lock(), &args.section, args.data)
            }
            specs::EXPORT => {
                let args: ExportArgs = decode(name, input)?;
                let filename = args
                    .filename
                    .as_deref()
                    .unwrap_or(ops::DEFAULT_EXPORT_FILENAME);
                ops::export_trip_plan(catalog, &self.state.lock(), self.renderer.as_ref(), filename)
            }
            other => Err(ToolError::NotFound(format!("Unknown tool: {other}"))),
        }
    }
}

impl ToolHost for PlannerSession {
    fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    fn execute(&self, call: &ToolCall) -> impl Future<Output = ToolResult> + Send {
        let _span = tracing::info_span!("call", id = %call.id).entered();
        let outcome = self.call(&call.name, call.input.clone());
        std::future::ready(ToolResult {
            tool_call_id: call.id.clone(),
            outcome,
        })
    }
}

/// Decode tool arguments. A missing input counts as an empty object.
fn decode<T: DeserializeOwned>(tool: &str, input: Value) -> std::result::Result<T, ToolError> {
    let input = match input {
        Value::Null => Value::Object(Map::new()),
        other => other,
    };
    serde_json::from_value(input)
        .map_err(|e| ToolError::InvalidArgument(format!("Invalid arguments for {tool}: {e}")))
}
