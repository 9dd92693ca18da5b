//! Nearby-airport strategy: swaps origin or destination for a
//! geographically close alternative and keeps direct flights priced well
//! below the baseline.

use crate::booking_link::build_booking_link;
use crate::budget::BudgetedCaller;
use crate::config::SearchConfig;
use crate::selectors::nearby_alternatives;
use crate::types::{Deal, Itinerary, Query, Strategy};

fn make_deal(
    base_price: f64,
    alt_itinerary: Itinerary,
    substituted_airport: &str,
    original_airport: &str,
    config: &SearchConfig,
) -> Option<Deal> {
    if !alt_itinerary.is_direct() {
        return None;
    }
    if alt_itinerary.price_usd >= base_price * config.nearby_discount_ratio {
        return None;
    }

    let savings = base_price - alt_itinerary.price_usd;
    let savings_percent = (savings / base_price * 100.0).round();
    let booking_link = build_booking_link(&alt_itinerary);
    let explanation = format!(
        "Fly via {substituted_airport} instead of {original_airport}: saves ${savings:.0} ({savings_percent:.0}%)"
    );

    Some(Deal {
        price_usd: alt_itinerary.price_usd,
        strategy: Strategy::Standard,
        risk_score: 10,
        booking_link,
        explanation,
        legs: vec![alt_itinerary],
    })
}

pub async fn run(
    query: &Query,
    base_price: f64,
    caller: &BudgetedCaller,
    config: &SearchConfig,
) -> Vec<Deal> {
    if base_price < config.nearby_min_base_price {
        return Vec::new();
    }

    let mut deals = Vec::new();

    for alt_origin in nearby_alternatives(&query.origin, base_price) {
        let results = caller
            .call(
                alt_origin,
                &query.destination,
                query.departure,
                query.return_date,
                query.cabin,
                "nearby-origin",
            )
            .await;
        if let Some(top) = results.into_iter().next() {
            if let Some(deal) = make_deal(base_price, top, alt_origin, &query.origin, config) {
                deals.push(deal);
            }
        }
    }

    for alt_destination in nearby_alternatives(&query.destination, base_price) {
        let results = caller
            .call(
                &query.origin,
                alt_destination,
                query.departure,
                query.return_date,
                query.cabin,
                "nearby-destination",
            )
            .await;
        if let Some(top) = results.into_iter().next() {
            if let Some(deal) =
                make_deal(base_price, top, alt_destination, &query.destination, config)
            {
                deals.push(deal);
            }
        }
    }

    deals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockFlightPriceSource;
    use crate::types::{Cabin, Leg};
    use chrono::{DateTime, NaiveDate, Utc};
    use std::sync::Arc;

    fn direct_itinerary(origin: &str, destination: &str, price: f64) -> Itinerary {
        Itinerary {
            legs: vec![Leg {
                origin: origin.into(),
                destination: destination.into(),
                depart_at: DateTime::parse_from_rfc3339("2026-08-15T10:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
                arrive_at: DateTime::parse_from_rfc3339("2026-08-15T16:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
                airline: "JetBlue".into(),
                flight_number: "B6100".into(),
                duration_min: 360,
                layovers: vec![],
            }],
            price_usd: price,
            booking_token: None,
        }
    }

    fn query() -> Query {
        Query {
            origin: "JFK".into(),
            destination: "LAX".into(),
            departure: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
            return_date: None,
            cabin: Cabin::Economy,
            adults: 1,
            children: 0,
            infants: 0,
        }
    }

    #[tokio::test]
    async fn skips_below_threshold() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let caller = BudgetedCaller::new(mock, 15);
        let deals = run(&query(), 50.0, &caller, &SearchConfig::default()).await;
        assert!(deals.is_empty());
        assert_eq!(caller.used(), 0);
    }

    #[tokio::test]
    async fn finds_cheaper_direct_alternative() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("EWR", "LAX", date, vec![direct_itinerary("EWR", "LAX", 240.0)]);
        let caller = BudgetedCaller::new(mock, 15);

        let deals = run(&query(), 300.0, &caller, &SearchConfig::default()).await;
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].price_usd, 240.0);
        assert!(deals[0].explanation.contains("EWR"));
        assert!(deals[0].explanation.contains("JFK"));
    }

    #[tokio::test]
    async fn rejects_alternative_with_layover() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let mut with_layover = direct_itinerary("EWR", "LAX", 150.0);
        with_layover.legs[0].layovers.push(crate::types::Layover {
            airport: "ORD".into(),
            duration_min: 60,
        });
        mock.set_response("EWR", "LAX", date, vec![with_layover]);
        let caller = BudgetedCaller::new(mock, 15);

        let deals = run(&query(), 300.0, &caller, &SearchConfig::default()).await;
        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn rejects_insufficient_discount() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        // 290 is not < 85% of 300 (255)
        mock.set_response("EWR", "LAX", date, vec![direct_itinerary("EWR", "LAX", 290.0)]);
        let caller = BudgetedCaller::new(mock, 15);

        let deals = run(&query(), 300.0, &caller, &SearchConfig::default()).await;
        assert!(deals.is_empty());
    }
}
