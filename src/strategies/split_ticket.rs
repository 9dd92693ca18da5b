//! Split-ticket strategy: books two independent itineraries through a hub
//! instead of one through-fare, issuing both legs concurrently.

use crate::booking_link::build_booking_link;
use crate::budget::BudgetedCaller;
use crate::config::SearchConfig;
use crate::selectors::smart_hubs;
use crate::types::{Deal, Query, Strategy};

pub async fn run(
    query: &Query,
    base_price: f64,
    caller: &BudgetedCaller,
    config: &SearchConfig,
) -> Vec<Deal> {
    if base_price < config.split_ticket_min_base_price {
        return Vec::new();
    }

    let mut deals = Vec::new();

    for hub in smart_hubs(&query.origin, &query.destination, base_price, config) {
        let (leg1, leg2) = tokio::join!(
            caller.call(
                &query.origin,
                hub,
                query.departure,
                None,
                query.cabin,
                "split-ticket-leg1",
            ),
            caller.call(
                hub,
                &query.destination,
                query.departure,
                None,
                query.cabin,
                "split-ticket-leg2",
            ),
        );

        let (Some(leg1_best), Some(leg2_best)) = (leg1.into_iter().next(), leg2.into_iter().next())
        else {
            continue;
        };

        let combined = leg1_best.price_usd + leg2_best.price_usd;
        if combined >= base_price * config.split_ticket_discount_ratio {
            continue;
        }

        let savings = base_price - combined;
        let explanation = format!(
            "Book {origin}→{hub} and {hub}→{destination} separately: ${combined:.0} total, saves ${savings:.0}",
            origin = query.origin,
            destination = query.destination,
        );
        let booking_link = build_booking_link(&leg1_best);

        deals.push(Deal {
            price_usd: combined,
            strategy: Strategy::Standard,
            risk_score: 40,
            booking_link,
            explanation,
            legs: vec![leg1_best, leg2_best],
        });
    }

    deals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockFlightPriceSource;
    use crate::types::{Cabin, Itinerary, Leg};
    use chrono::{DateTime, NaiveDate, Utc};
    use std::sync::Arc;

    fn itinerary(origin: &str, destination: &str, price: f64) -> Itinerary {
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
                airline: "United".into(),
                flight_number: "UA1".into(),
                duration_min: 180,
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
        let deals = run(&query(), 80.0, &caller, &SearchConfig::default()).await;
        assert!(deals.is_empty());
    }

    #[tokio::test]
    async fn finds_cheaper_split_route() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("JFK", "DEN", date, vec![itinerary("JFK", "DEN", 150.0)]);
        mock.set_response("DEN", "LAX", date, vec![itinerary("DEN", "LAX", 180.0)]);
        let caller = BudgetedCaller::new(mock, 15);

        let deals = run(&query(), 400.0, &caller, &SearchConfig::default()).await;
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].price_usd, 330.0);
        assert_eq!(deals[0].legs.len(), 2);
    }

    #[tokio::test]
    async fn rejects_when_one_leg_missing() {
        let mock = Arc::new(MockFlightPriceSource::new());
        let date = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        mock.set_response("JFK", "DEN", date, vec![itinerary("JFK", "DEN", 150.0)]);
        // DEN->LAX left unregistered -> empty
        let caller = BudgetedCaller::new(mock, 15);

        let deals = run(&query(), 400.0, &caller, &SearchConfig::default()).await;
        assert!(deals.is_empty());
    }
}
