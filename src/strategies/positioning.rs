//! Positioning-flight strategy: a day-early hop to a cheap-departure city
//! followed by the main flight from there, issued concurrently.

use crate::booking_link::build_booking_link;
use crate::budget::BudgetedCaller;
use crate::config::SearchConfig;
use crate::types::{Deal, Query, Strategy};
use chrono::Days;

const POSITIONING_CITIES: &[&str] = &["FLL", "MIA"];

pub async fn run(
    query: &Query,
    base_price: f64,
    caller: &BudgetedCaller,
    config: &SearchConfig,
) -> Vec<Deal> {
    if base_price < config.positioning_min_base_price {
        return Vec::new();
    }

    let Some(positioning_date) = query.departure.checked_sub_days(Days::new(1)) else {
        return Vec::new();
    };

    let mut deals = Vec::new();

    for &city in POSITIONING_CITIES {
        if city == query.origin || city == query.destination {
            continue;
        }

        let (positioning_leg, main_leg) = tokio::join!(
            caller.call(
                &query.origin,
                city,
                positioning_date,
                None,
                query.cabin,
                "positioning-leg",
            ),
            caller.call(
                city,
                &query.destination,
                query.departure,
                query.return_date,
                query.cabin,
                "positioning-main",
            ),
        );

        let (Some(positioning_best), Some(main_best)) = (
            positioning_leg.into_iter().next(),
            main_leg.into_iter().next(),
        ) else {
            continue;
        };

        let total = positioning_best.price_usd + main_best.price_usd;
        if total >= base_price * config.positioning_discount_ratio {
            continue;
        }

        let savings = base_price - total;
        let explanation = format!(
            "Position to {city} the day before, then fly {city}→{destination}: ${total:.0} total, saves ${savings:.0}",
            destination = query.destination,
        );
        let booking_link = build_booking_link(&positioning_best);

        deals.push(Deal {
            price_usd: total,
            strategy: Strategy::Standard,
            risk_score: 50,
            booking_link,
            explanation,
            legs: vec![positioning_best, main_best],
        });
    }

    deals
}
