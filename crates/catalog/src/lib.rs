//! Reference tables for trip planning.
//!
//! Destinations by budget tier and category, flight routes, itineraries,
//! restaurants and hotels. The tables are plain data: load them from a TOML
//! file with [`Catalog::load`], or use the bundled set with
//! [`Catalog::builtin`].

mod catalog;
mod error;
mod tier;

pub use catalog::{Catalog, Departure, Route};
pub use error::{Error, Result};
pub use tier::{ANY_CATEGORY, Category, Tier};
