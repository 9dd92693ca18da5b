//! Crate-wide error taxonomy.

use thiserror::Error;

/// Errors surfaced by the deal discovery core.
///
/// Upstream failures, budget exhaustion, and strategy-task panics are all
/// absorbed internally and never reach this type -- see the Budgeted Caller
/// and Orchestrator for how each is contained.
#[derive(Error, Debug)]
pub enum DealHoundError {
    /// A query field failed validation before any upstream call was issued.
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// The configured per-search call budget is less than 1.
    #[error("search budget must be at least 1 call, got {max}")]
    BudgetZero { max: u32 },

    /// The underlying HTTP transport failed while contacting the price
    /// source. Only ever returned from [`crate::source::HttpFlightPriceSource`]
    /// construction; runtime call failures are absorbed by the Budgeted
    /// Caller and never escape as this variant.
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DealHoundError {
    pub fn invalid_input(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: field.map(str::to_string),
        }
    }
}

pub type Result<T> = std::result::Result<T, DealHoundError>;
