//! Budget-airline filter: a zero-cost pass flagging itineraries already in
//! hand that are operated by a known low-cost carrier, which often price
//! below what the baseline search's "best" sort surfaces first.

use super::is_budget_carrier;
use crate::booking_link::build_booking_link;
use crate::types::{Deal, Itinerary, Strategy};

pub fn run(itineraries: &[Itinerary]) -> Vec<Deal> {
    itineraries
        .iter()
        .filter(|it| {
            it.legs
                .iter()
                .any(|leg| is_budget_carrier(&leg.airline))
        })
        .map(|it| {
            let airline = it
                .legs
                .first()
                .map(|l| l.airline.as_str())
                .unwrap_or("a budget carrier");
            let explanation = format!(
                "{airline} budget fare at ${price:.0}",
                price = it.price_usd
            );
            Deal {
                price_usd: it.price_usd,
                strategy: Strategy::Standard,
                risk_score: 20,
                booking_link: build_booking_link(it),
                explanation,
                legs: vec![it.clone()],
            }
        })
        .collect()
}
