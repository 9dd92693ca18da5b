//! The Data Analyser (C6): a single O(n), no-upstream-call pass over the
//! baseline itinerary list, surfacing deals that were already in hand —
//! red-eyes, early birds, connections with a worthwhile layover, and budget
//! carriers — without spending any of the search's call budget.

use crate::booking_link::build_booking_link;
use crate::strategies::is_budget_carrier;
use crate::types::{Deal, Itinerary, Strategy};
use chrono::Timelike;
use std::collections::HashSet;

fn dedup_key(it: &Itinerary) -> Option<(String, String, chrono::NaiveDate)> {
    let leg = it.legs.first()?;
    Some((
        leg.airline.to_uppercase(),
        leg.flight_number.to_uppercase(),
        leg.depart_at.date_naive(),
    ))
}

fn cheapest_direct(itineraries: &[Itinerary], base_price: f64) -> f64 {
    itineraries
        .iter()
        .filter(|it| it.is_direct())
        .map(|it| it.price_usd)
        .fold(None, |acc, p| Some(acc.map_or(p, |a: f64| a.min(p))))
        .unwrap_or(base_price)
}

fn avg_of_top5_by_price(itineraries: &[Itinerary]) -> f64 {
    let mut prices: Vec<f64> = itineraries.iter().map(|it| it.price_usd).collect();
    prices.sort_by(|a, b| b.partial_cmp(a).unwrap());
    prices.truncate(5);
    if prices.is_empty() {
        return 0.0;
    }
    prices.iter().sum::<f64>() / prices.len() as f64
}

fn make_deal(it: &Itinerary, strategy: Strategy, risk_score: u8, explanation: String) -> Deal {
    Deal {
        price_usd: it.price_usd,
        strategy,
        risk_score,
        booking_link: build_booking_link(it),
        explanation,
        legs: vec![it.clone()],
    }
}

/// Runs all five analyser categories over `itineraries` and returns their
/// concatenation, each category internally sorted ascending by price.
pub fn run(itineraries: &[Itinerary], base_price: f64) -> Vec<Deal> {
    let avg_price = avg_of_top5_by_price(itineraries);
    let cheapest_direct_price = cheapest_direct(itineraries, base_price);

    let mut seen = HashSet::new();
    let mut deduped = Vec::new();
    for it in itineraries {
        if let Some(key) = dedup_key(it) {
            if !seen.insert(key) {
                continue;
            }
        }
        deduped.push(it);
    }

    let mut red_eyes = Vec::new();
    let mut early_birds = Vec::new();
    let mut layovers = Vec::new();
    let mut budget_carriers = Vec::new();
    let mut connecting = Vec::new();

    for it in &deduped {
        let Some(first_leg) = it.legs.first() else {
            continue;
        };
        let hour = first_leg.depart_at.hour();

        if (22..=23).contains(&hour) || (0..=5).contains(&hour) {
            let explanation = if avg_price - it.price_usd > 5.0 {
                format!(
                    "Red-eye departure at {hour:02}:00, ${price:.0} — ${savings:.0} below the average top fare",
                    price = it.price_usd,
                    savings = avg_price - it.price_usd
                )
            } else {
                format!("Red-eye departure at {hour:02}:00, ${price:.0}", price = it.price_usd)
            };
            red_eyes.push(make_deal(it, Strategy::Standard, 5, explanation));
        }

        if (6..=8).contains(&hour) {
            let explanation = format!(
                "Early-bird departure at {hour:02}:00, ${price:.0}",
                price = it.price_usd
            );
            early_birds.push(make_deal(it, Strategy::Standard, 5, explanation));
        }

        if let Some(layover) = it.layovers().next() {
            let worth_it =
                cheapest_direct_price - it.price_usd > 30.0 && layover.duration_min < 240;
            let explanation = format!(
                "Layover at {airport} ({duration} min){worth}",
                airport = layover.airport,
                duration = layover.duration_min,
                worth = if worth_it { " — worth it over a direct flight" } else { "" },
            );
            layovers.push(make_deal(it, Strategy::Standard, 10, explanation));
        }

        if it.legs.iter().any(|l| is_budget_carrier(&l.airline)) {
            let explanation = format!(
                "Budget carrier fare at ${price:.0} — check baggage fees before booking",
                price = it.price_usd
            );
            budget_carriers.push(make_deal(it, Strategy::Standard, 15, explanation));
        }

        if it.has_layover() && cheapest_direct_price - it.price_usd > 20.0 {
            let savings_percent =
                ((cheapest_direct_price - it.price_usd) / cheapest_direct_price * 100.0).round();
            let explanation = format!(
                "Connecting itinerary at ${price:.0}, {savings_percent:.0}% below the cheapest direct fare",
                price = it.price_usd,
            );
            connecting.push(make_deal(it, Strategy::Standard, 10, explanation));
        }
    }

    let by_price = |deals: &mut Vec<Deal>| {
        deals.sort_by(|a, b| a.price_usd.partial_cmp(&b.price_usd).unwrap());
    };
    by_price(&mut red_eyes);
    by_price(&mut early_birds);
    by_price(&mut layovers);
    by_price(&mut budget_carriers);
    by_price(&mut connecting);

    let mut all = Vec::new();
    all.append(&mut red_eyes);
    all.append(&mut early_birds);
    all.append(&mut layovers);
    all.append(&mut budget_carriers);
    all.append(&mut connecting);
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Layover, Leg};
    use chrono::{DateTime, Utc};

    fn itinerary(hour: u32, price: f64, airline: &str, layover: Option<&str>) -> Itinerary {
        let layovers = layover
            .map(|airport| {
                vec![Layover {
                    airport: airport.into(),
                    duration_min: 90,
                }]
            })
            .unwrap_or_default();
        Itinerary {
            legs: vec![Leg {
                origin: "JFK".into(),
                destination: "LAX".into(),
                depart_at: DateTime::parse_from_rfc3339(&format!("2026-08-15T{hour:02}:00:00Z"))
                    .unwrap()
                    .with_timezone(&Utc),
                arrive_at: DateTime::parse_from_rfc3339(&format!("2026-08-15T{hour:02}:30:00Z"))
                    .unwrap()
                    .with_timezone(&Utc),
                airline: airline.into(),
                flight_number: format!("{airline}1"),
                duration_min: 330,
                layovers,
            }],
            price_usd: price,
            booking_token: None,
        }
    }

    #[test]
    fn flags_red_eye_departure() {
        let itineraries = vec![itinerary(23, 200.0, "Delta", None)];
        let deals = run(&itineraries, 200.0);
        assert!(deals.iter().any(|d| d.explanation.contains("Red-eye")));
    }

    #[test]
    fn flags_early_bird_departure() {
        let itineraries = vec![itinerary(7, 200.0, "Delta", None)];
        let deals = run(&itineraries, 200.0);
        assert!(deals.iter().any(|d| d.explanation.contains("Early-bird")));
    }

    #[test]
    fn flags_worthwhile_layover() {
        let itineraries = vec![
            itinerary(12, 100.0, "Delta", None),
            itinerary(13, 60.0, "Delta", Some("ORD")),
        ];
        let deals = run(&itineraries, 100.0);
        let layover_deal = deals
            .iter()
            .find(|d| d.explanation.contains("Layover"))
            .unwrap();
        assert!(layover_deal.explanation.contains("worth it"));
    }

    #[test]
    fn flags_budget_carrier() {
        let itineraries = vec![itinerary(12, 150.0, "Spirit Airlines", None)];
        let deals = run(&itineraries, 150.0);
        assert!(deals.iter().any(|d| d.explanation.contains("Budget carrier")));
    }

    #[test]
    fn deduplicates_identical_flight_numbers() {
        let itineraries = vec![itinerary(23, 200.0, "Delta", None), itinerary(23, 200.0, "Delta", None)];
        let deals = run(&itineraries, 200.0);
        assert_eq!(deals.iter().filter(|d| d.explanation.contains("Red-eye")).count(), 1);
    }
}
