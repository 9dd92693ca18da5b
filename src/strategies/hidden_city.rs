//! Hidden-city strategy: books a through-itinerary to a "beyond" city and
//! disembarks at the real destination, which is a layover on paper.
//!
//! Violates most carriers' contracts of carriage (no checked bags, one-way
//! only in practice) — every deal this strategy emits carries a high risk
//! score and an explicit warning in its explanation.

use crate::booking_link::build_booking_link;
use crate::budget::BudgetedCaller;
use crate::config::SearchConfig;
use crate::selectors::smart_beyond_cities;
use crate::types::{Deal, Query, Strategy};

const MAX_BEYOND_CITIES: usize = 5;

pub async fn run(
    query: &Query,
    base_price: f64,
    caller: &BudgetedCaller,
    config: &SearchConfig,
) -> Vec<Deal> {
    if base_price < config.hidden_city_min_base_price {
        return Vec::new();
    }

    let mut deals = Vec::new();

    for beyond in smart_beyond_cities(&query.origin, &query.destination)
        .into_iter()
        .take(MAX_BEYOND_CITIES)
    {
        let results = caller
            .call(
                &query.origin,
                beyond,
                query.departure,
                query.return_date,
                query.cabin,
                "hidden-city",
            )
            .await;

        for candidate in results {
            let lays_over_at_destination = candidate
                .layovers()
                .any(|l| l.airport == query.destination);
            if !lays_over_at_destination {
                continue;
            }

            let savings = base_price - candidate.price_usd;
            if savings <= 0.0 {
                continue;
            }

            let explanation = format!(
                "Book {origin}→{beyond} and disembark at {destination}: ${price:.0}, saves ${savings:.0}. \
                 Airline contract of carriage violation — no checked bags, one-way only.",
                origin = query.origin,
                destination = query.destination,
                price = candidate.price_usd,
            );
            let booking_link = build_booking_link(&candidate);

            deals.push(Deal {
                price_usd: candidate.price_usd,
                strategy: Strategy::HiddenCity,
                risk_score: 60,
                booking_link,
                explanation,
                legs: vec![candidate],
            });
        }
    }

    deals
}
