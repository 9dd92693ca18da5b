//! The Orchestrator (C7): the crate's single public entry point. Validates
//! a query, issues the baseline call, dispatches the strategy engines
//! concurrently against a shared budget, runs the analyser inline, and hands
//! everything to the Curator.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::oneshot;

use crate::analyzer;
use crate::budget::BudgetedCaller;
use crate::config::SearchConfig;
use crate::curator;
use crate::error::{DealHoundError, Result};
use crate::selectors::{should_check_hidden_city, should_check_positioning};
use crate::source::FlightPriceSource;
use crate::strategies::{budget_airline, connecting, hidden_city, nearby, positioning, split_ticket};
use crate::types::{Deal, Query, SearchOutput, Strategy};

/// Top-level coordinator over one search. Cheap to construct; holds only an
/// `Arc`-shared provider and a config snapshot, the way `FlightClient` wraps
/// a `reqwest::Client` behind a thin facade.
pub struct Orchestrator {
    source: Arc<dyn FlightPriceSource>,
    config: SearchConfig,
}

impl Orchestrator {
    pub fn new(source: Arc<dyn FlightPriceSource>, config: SearchConfig) -> Self {
        Self { source, config }
    }

    fn validate_iata(code: &str, field: &'static str) -> Result<()> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DealHoundError::invalid_input(
                format!("{field} must be a 3-letter IATA code"),
                Some(field),
            ));
        }
        Ok(())
    }

    fn validate(query: &Query) -> Result<()> {
        Self::validate_iata(&query.origin, "origin")?;
        Self::validate_iata(&query.destination, "destination")?;
        if query.origin.eq_ignore_ascii_case(&query.destination) {
            return Err(DealHoundError::invalid_input(
                "origin and destination must differ",
                Some("destination"),
            ));
        }
        if query.adults < 1 {
            return Err(DealHoundError::invalid_input(
                "at least one adult passenger is required",
                Some("adults"),
            ));
        }
        if query.departure < chrono::Utc::now().date_naive() {
            return Err(DealHoundError::invalid_input(
                "departure date must not be in the past",
                Some("departure"),
            ));
        }
        if let Some(return_date) = query.return_date {
            if return_date < query.departure {
                return Err(DealHoundError::invalid_input(
                    "return date must not precede departure",
                    Some("return_date"),
                ));
            }
        }
        Ok(())
    }

    /// Runs a full search with no cancellation signal.
    pub async fn search(&self, query: Query) -> Result<SearchOutput> {
        let (_tx, rx) = oneshot::channel::<()>();
        self.search_with_cancellation(query, rx).await
    }

    /// Runs a full search, abandoning in-flight strategy work as soon as
    /// `cancel` resolves. Whatever has been gathered so far is still curated
    /// and returned -- cancellation is not a failure path.
    pub async fn search_with_cancellation(
        &self,
        query: Query,
        cancel: oneshot::Receiver<()>,
    ) -> Result<SearchOutput> {
        if self.config.max_calls_per_search < 1 {
            return Err(DealHoundError::BudgetZero {
                max: self.config.max_calls_per_search,
            });
        }

        let query = query.normalized();
        Self::validate(&query)?;

        let caller = Arc::new(BudgetedCaller::new(
            self.source.clone(),
            self.config.max_calls_per_search,
        ));

        let started = Instant::now();
        let baseline = caller
            .call(
                &query.origin,
                &query.destination,
                query.departure,
                query.return_date,
                query.cabin,
                "baseline",
            )
            .await;

        if baseline.is_empty() {
            return Ok(SearchOutput { deals: Vec::new() });
        }

        let base_price = baseline[0].price_usd;
        tracing::info!(
            origin = %query.origin,
            destination = %query.destination,
            base_price,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "baseline search complete"
        );

        let mut handles = Vec::new();

        if base_price >= self.config.nearby_min_base_price {
            let query = query.clone();
            let caller = caller.clone();
            let config = self.config.clone();
            handles.push(tokio::spawn(async move {
                nearby::run(&query, base_price, &caller, &config).await
            }));
        }

        if base_price >= self.config.split_ticket_min_base_price {
            let query = query.clone();
            let caller = caller.clone();
            let config = self.config.clone();
            handles.push(tokio::spawn(async move {
                split_ticket::run(&query, base_price, &caller, &config).await
            }));
        }

        if should_check_positioning(base_price) {
            let query = query.clone();
            let caller = caller.clone();
            let config = self.config.clone();
            handles.push(tokio::spawn(async move {
                positioning::run(&query, base_price, &caller, &config).await
            }));
        }

        if should_check_hidden_city(base_price) {
            let query = query.clone();
            let caller = caller.clone();
            let config = self.config.clone();
            handles.push(tokio::spawn(async move {
                hidden_city::run(&query, base_price, &caller, &config).await
            }));
        }

        let cheapest_direct = baseline
            .iter()
            .filter(|it| it.is_direct())
            .map(|it| it.price_usd)
            .fold(None, |acc, p| Some(acc.map_or(p, |a: f64| a.min(p))))
            .unwrap_or(base_price);

        let analyzer_deals = analyzer::run(&baseline, base_price);
        let connecting_deals = connecting::run(&baseline, cheapest_direct, &self.config);
        let budget_deals = budget_airline::run(&baseline);

        let mut all_deals = Vec::new();
        all_deals.push(Deal {
            price_usd: base_price,
            strategy: Strategy::Standard,
            risk_score: 0,
            booking_link: crate::booking_link::build_booking_link(&baseline[0]),
            explanation: format!("Cheapest baseline fare at ${base_price:.0}"),
            legs: vec![baseline[0].clone()],
        });
        all_deals.extend(analyzer_deals);
        all_deals.extend(connecting_deals);
        all_deals.extend(budget_deals);

        let mut cancel = cancel;
        for handle in handles {
            tokio::select! {
                biased;
                _ = &mut cancel => {
                    tracing::debug!("search cancelled, abandoning remaining strategy tasks");
                    handle.abort();
                }
                result = handle => {
                    match result {
                        Ok(deals) => all_deals.extend(deals),
                        Err(join_error) => {
                            tracing::warn!(error = %join_error, "strategy task failed, contributing no deals");
                        }
                    }
                }
            }
        }

        Ok(SearchOutput {
            deals: curator::curate(all_deals),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockFlightPriceSource;
    use crate::types::{Cabin, Itinerary, Layover, Leg};
    use chrono::{DateTime, NaiveDate, Utc};

    fn direct_itinerary(origin: &str, destination: &str, price: f64) -> Itinerary {
        Itinerary {
            legs: vec![Leg {
                origin: origin.into(),
                destination: destination.into(),
                depart_at: DateTime::parse_from_rfc3339("2026-08-15T10:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
                arrive_at: DateTime::parse_from_rfc3339("2026-08-15T13:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
                airline: "Delta".into(),
                flight_number: "DL1".into(),
                duration_min: 330,
                layovers: vec![],
            }],
            price_usd: price,
            booking_token: None,
        }
    }

    fn query(origin: &str, destination: &str) -> Query {
        Query {
            origin: origin.into(),
            destination: destination.into(),
            departure: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
            return_date: None,
            cabin: Cabin::Economy,
            adults: 1,
            children: 0,
            infants: 0,
        }
    }

    #[tokio::test]
    async fn baseline_only_scenario() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("JFK", "LAX", date, vec![direct_itinerary("JFK", "LAX", 200.0)]);

        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let output = orchestrator.search(query("JFK", "LAX")).await.unwrap();

        assert_eq!(output.deals.len(), 1);
        assert_eq!(output.deals[0].price_usd, 200.0);
        assert_eq!(output.deals[0].strategy, Strategy::Standard);
    }

    #[tokio::test]
    async fn empty_baseline_yields_empty_output() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let output = orchestrator.search(query("AAA", "BBB")).await.unwrap();
        assert!(output.deals.is_empty());
    }

    #[tokio::test]
    async fn nearby_origin_scenario() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("JFK", "LAX", date, vec![direct_itinerary("JFK", "LAX", 300.0)]);
        mock.set_response("EWR", "LAX", date, vec![direct_itinerary("EWR", "LAX", 240.0)]);

        let orchestrator = Orchestrator::new(mock.clone(), SearchConfig::default());
        let output = orchestrator.search(query("JFK", "LAX")).await.unwrap();

        assert!(output.deals.iter().any(|d| d.price_usd == 240.0));
        assert!(output
            .deals
            .iter()
            .any(|d| d.explanation.contains("EWR") && d.explanation.contains("JFK")));
        assert!(mock.calls_observed().len() <= 5);
    }

    #[tokio::test]
    async fn split_ticket_scenario() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("JFK", "LAX", date, vec![direct_itinerary("JFK", "LAX", 400.0)]);
        mock.set_response("JFK", "DEN", date, vec![direct_itinerary("JFK", "DEN", 150.0)]);
        mock.set_response("DEN", "LAX", date, vec![direct_itinerary("DEN", "LAX", 180.0)]);

        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let output = orchestrator.search(query("JFK", "LAX")).await.unwrap();

        let split_deal = output.deals.iter().find(|d| d.price_usd == 330.0);
        assert!(split_deal.is_some());
    }

    #[tokio::test]
    async fn hidden_city_scenario() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("JFK", "LAX", date, vec![direct_itinerary("JFK", "LAX", 350.0)]);
        let mut through = direct_itinerary("JFK", "SFO", 220.0);
        through.legs[0].destination = "SFO".into();
        through.legs[0].layovers.push(Layover {
            airport: "LAX".into(),
            duration_min: 90,
        });
        mock.set_response("JFK", "SFO", date, vec![through]);

        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let output = orchestrator.search(query("JFK", "LAX")).await.unwrap();

        let hidden = output
            .deals
            .iter()
            .find(|d| d.strategy == Strategy::HiddenCity)
            .expect("hidden-city deal expected");
        assert!(hidden.risk_score >= 60);
        assert_eq!(hidden.legs[0].final_destination(), Some("SFO"));
    }

    #[tokio::test]
    async fn rejects_invalid_iata_code() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let result = orchestrator.search(query("J", "LAX")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_non_alphabetic_iata_code() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let result = orchestrator.search(query("123", "LAX")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_past_departure_date() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let mut past = query("JFK", "LAX");
        past.departure = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let result = orchestrator.search(past).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn rejects_zero_budget() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let orchestrator =
            Orchestrator::new(mock, SearchConfig::default().with_max_calls_per_search(0));
        let result = orchestrator.search(query("JFK", "LAX")).await;
        assert!(matches!(result, Err(DealHoundError::BudgetZero { max: 0 })));
    }

    #[tokio::test]
    async fn cancellation_preserves_baseline_deal() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("JFK", "LAX", date, vec![direct_itinerary("JFK", "LAX", 300.0)]);

        let orchestrator = Orchestrator::new(mock, SearchConfig::default());
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        let output = orchestrator
            .search_with_cancellation(query("JFK", "LAX"), rx)
            .await
            .unwrap();

        assert!(output.deals.iter().any(|d| d.price_usd == 300.0));
    }
}
