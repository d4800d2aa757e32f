//! Trip planning tools over a per-session trip state.
//!
//! This crate exposes the planning tools a conversational assistant calls
//! while building a budget trip: destination, flight, itinerary, restaurant
//! and hotel lookups, a trip summary, a generic section update and a
//! document export.
//!
//! # Overview
//!
//! - **ops**: the tools themselves, plain functions over a
//!   [`catalog::Catalog`] and a [`trip::TripState`].
//! - **PlannerSession**: owns one trip state behind a lock and dispatches
//!   JSON tool calls to the ops. Implements [`ToolHost`].
//! - **render**: the [`DocumentRenderer`] boundary used by exports, with a
//!   paginated plain-text renderer.
//!
//! # Example
//!
//! ```
//! use planner::PlannerSession;
//! use serde_json::json;
//!
//! let session = PlannerSession::builtin().unwrap();
//! let outcome = session.call(
//!     "get_destination_recommendations",
//!     json!({"budget": 12000, "destination_type": "beach"}),
//! );
//! assert!(outcome.report().unwrap().contains("Pondicherry"));
//! ```

mod error;
mod format;
pub mod ops;
pub mod render;
mod session;
pub mod specs;
pub mod tools;

pub use error::{Error, Result};
pub use render::{DocumentRenderer, RenderError, TextRenderer, TripDocument};
pub use session::{PlannerSession, SessionId};
pub use tools::{Report, ToolCall, ToolError, ToolHost, ToolOutcome, ToolResult, ToolSpec};
