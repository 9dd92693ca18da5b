//! The Budgeted Caller (C3): wraps a [`FlightPriceSource`] with a shared,
//! per-search maximum-call count enforced with a lock-free fetch-and-add.

use chrono::NaiveDate;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::source::FlightPriceSource;
use crate::types::{Cabin, Itinerary};

/// Per-search call budget, shared across every concurrently-running
/// strategy task via `Arc`.
pub struct BudgetedCaller {
    source: Arc<dyn FlightPriceSource>,
    max: u32,
    used: AtomicU32,
}

impl BudgetedCaller {
    pub fn new(source: Arc<dyn FlightPriceSource>, max: u32) -> Self {
        Self {
            source,
            max,
            used: AtomicU32::new(0),
        }
    }

    /// Calls to the upstream source issued so far. Monotonically
    /// non-decreasing; always `<= max`.
    pub fn used(&self) -> u32 {
        self.used.load(Ordering::SeqCst)
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Issues one upstream call if budget remains, else returns an empty
    /// list immediately without touching the network.
    ///
    /// The fetch-and-increment is the only coordination needed: if the
    /// post-increment value exceeds `max`, the call is skipped. A transient
    /// over-issue of up to `(concurrent callers - 1)` attempted increments is
    /// expected and harmless since only the winners under `max` ever reach
    /// the underlying source.
    #[allow(clippy::too_many_arguments)]
    pub async fn call(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        return_date: Option<NaiveDate>,
        cabin: Cabin,
        reason: &str,
    ) -> Vec<Itinerary> {
        let slot = self.used.fetch_add(1, Ordering::SeqCst) + 1;
        if slot > self.max {
            tracing::debug!(reason, origin, destination, "budget exhausted, skipping call");
            return Vec::new();
        }

        tracing::debug!(reason, origin, destination, slot, max = self.max, "issuing upstream call");
        self.source
            .search(origin, destination, departure, return_date, cabin)
            .await
    }
}
