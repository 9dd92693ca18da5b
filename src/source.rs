//! The upstream flight-price provider contract (C2): an opaque
//! [`FlightPriceSource`], an `reqwest`-backed implementation, and a
//! deterministic mock used throughout this crate's own test suite.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::{Cabin, Itinerary};

/// Opaque upstream flight-price provider.
///
/// Implementations must be safe for concurrent invocation: many strategy
/// tasks may call `search` on the same shared instance at once. A failing or
/// rate-limited call must return an empty `Vec`, never a partial error --
/// error surfacing is the Budgeted Caller's job, not the source's.
#[async_trait]
pub trait FlightPriceSource: Send + Sync {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        return_date: Option<NaiveDate>,
        cabin: Cabin,
    ) -> Vec<Itinerary>;
}

/// Wire request body sent to the upstream JSON price API.
#[derive(Debug, Serialize)]
struct PriceRequest<'a> {
    origin: &'a str,
    destination: &'a str,
    departure: NaiveDate,
    return_date: Option<NaiveDate>,
    cabin: Cabin,
}

#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    itineraries: Vec<Itinerary>,
}

/// A `reqwest`-based [`FlightPriceSource`] that POSTs a JSON search request
/// to a configurable provider endpoint: build a request, dispatch via
/// `reqwest`, parse the response -- a JSON price API rather than scraped
/// HTML, since the upstream is modelled as opaque.
pub struct HttpFlightPriceSource {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpFlightPriceSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, crate::error::DealHoundError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl FlightPriceSource for HttpFlightPriceSource {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        return_date: Option<NaiveDate>,
        cabin: Cabin,
    ) -> Vec<Itinerary> {
        let request = PriceRequest {
            origin,
            destination,
            departure,
            return_date,
            cabin,
        };

        let url = format!("{}/v1/search", self.base_url.trim_end_matches('/'));
        let response = match self.http_client.post(&url).json(&request).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, origin, destination, "upstream request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), origin, destination, "upstream returned non-success status");
            return Vec::new();
        }

        match response.json::<PriceResponse>().await {
            Ok(body) => body.itineraries,
            Err(e) => {
                tracing::warn!(error = %e, "failed to decode upstream response");
                Vec::new()
            }
        }
    }
}

/// A deterministic, in-memory [`FlightPriceSource`] keyed by
/// `(origin, destination, departure)`, grounded on
/// `vaya_gds::traits::mock::MockGdsProvider`. Used by the scenario tests and
/// by any caller exercising the orchestrator without network access.
#[derive(Default)]
pub struct MockFlightPriceSource {
    responses: Mutex<HashMap<(String, String, NaiveDate), Vec<Itinerary>>>,
    calls: Mutex<Vec<(String, String, NaiveDate)>>,
}

impl MockFlightPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the itinerary list returned for a given `(origin,
    /// destination, departure)` triple. Any query not registered returns an
    /// empty list, matching the real source's "empty on any failure" contract.
    pub fn set_response(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        itineraries: Vec<Itinerary>,
    ) {
        self.responses.lock().unwrap().insert(
            (origin.to_uppercase(), destination.to_uppercase(), departure),
            itineraries,
        );
    }

    /// All queries this mock has observed, in call order -- used to assert
    /// on `calls_issued` in the budget-exhaustion scenario tests.
    pub fn calls_observed(&self) -> Vec<(String, String, NaiveDate)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FlightPriceSource for MockFlightPriceSource {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        _return_date: Option<NaiveDate>,
        _cabin: Cabin,
    ) -> Vec<Itinerary> {
        let key = (origin.to_uppercase(), destination.to_uppercase(), departure);
        self.calls.lock().unwrap().push(key.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }
}
