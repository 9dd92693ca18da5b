//! Connecting-flight extractor: a zero-call pass that pulls a deal out of
//! itineraries the baseline search already returned, when a connection
//! undercuts the cheapest direct fare enough to be worth the layover.

use crate::booking_link::build_booking_link;
use crate::config::SearchConfig;
use crate::types::{Deal, Itinerary, Strategy};

/// `itineraries` is the full baseline result set; `cheapest_direct` is the
/// lowest price among its direct itineraries (the caller falls back to the
/// overall base price when none are direct).
pub fn run(itineraries: &[Itinerary], cheapest_direct: f64, config: &SearchConfig) -> Vec<Deal> {
    itineraries
        .iter()
        .filter(|it| it.legs.len() > 1 || it.has_layover())
        .filter(|it| it.price_usd < cheapest_direct * config.connecting_discount_ratio)
        .map(|it| {
            let savings = cheapest_direct - it.price_usd;
            let stops = it.layovers().count();
            let explanation = format!(
                "Connecting itinerary with {stops} stop(s) at ${price:.0}, saves ${savings:.0} over the cheapest direct fare",
                price = it.price_usd,
            );
            Deal {
                price_usd: it.price_usd,
                strategy: Strategy::Standard,
                risk_score: 15,
                booking_link: build_booking_link(it),
                explanation,
                legs: vec![it.clone()],
            }
        })
        .collect()
}
