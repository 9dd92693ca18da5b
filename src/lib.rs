//! # dealhound
//!
//! A concurrent, budget-aware flight deal discovery engine. Given an
//! opaque upstream [`source::FlightPriceSource`], [`orchestrator::Orchestrator`]
//! dispatches a baseline fare lookup, fans out a handful of heuristic
//! discovery strategies against a shared call budget, and curates the
//! combined results into a single price-sorted deal list.

pub mod analyzer;
pub mod booking_link;
pub mod budget;
pub mod config;
pub mod curator;
pub mod error;
pub mod geo;
pub mod orchestrator;
pub mod selectors;
pub mod source;
pub mod strategies;
pub mod types;

pub use config::SearchConfig;
pub use error::{DealHoundError, Result};
pub use orchestrator::Orchestrator;
pub use source::{FlightPriceSource, HttpFlightPriceSource, MockFlightPriceSource};
pub use types::{Cabin, Deal, Itinerary, Layover, Leg, Query, SearchOutput, Strategy};
