//! The Curator (C8): deduplicates, groups, and selects a final, price-sorted
//! deal list capped at 35 entries.

use crate::types::{Deal, Strategy};
use std::collections::{HashMap, HashSet};

const MAX_DEALS: usize = 35;
const SPECIAL_DEALS_CEILING: usize = 30;
const GROUPED_CEILING: usize = 40;
const PRICE_BAND_CEILING: usize = 35;
const PER_BUCKET_CAP: usize = 2;
const PER_AIRLINE_CAP: usize = 2;

fn time_bucket(hour: u32) -> &'static str {
    match hour {
        6..=11 => "morning",
        12..=17 => "afternoon",
        18..=23 => "evening",
        _ => "overnight",
    }
}

type DedupKey = (String, String, chrono::NaiveDate);

fn try_add(deal: Deal, selected: &mut Vec<Deal>, seen_keys: &mut HashSet<DedupKey>) -> bool {
    match deal.dedup_key() {
        Some(key) if !seen_keys.insert(key) => false,
        _ => {
            selected.push(deal);
            true
        }
    }
}

/// Runs the full selection pipeline over `deals` and returns up to
/// [`MAX_DEALS`] entries, sorted ascending by price.
pub fn curate(deals: Vec<Deal>) -> Vec<Deal> {
    let mut by_price = deals;
    by_price.sort_by(|a, b| a.price_usd.partial_cmp(&b.price_usd).unwrap());

    let mut seen_keys: HashSet<DedupKey> = HashSet::new();
    let mut selected = Vec::new();

    // 1. the globally cheapest deal.
    let mut remaining: Vec<Deal> = Vec::new();
    let mut iter = by_price.into_iter();
    if let Some(cheapest) = iter.next() {
        try_add(cheapest, &mut selected, &mut seen_keys);
    }
    remaining.extend(iter);

    // 2. special deals (strategy != standard) until total >= 30.
    let mut still_remaining = Vec::new();
    for deal in remaining {
        if selected.len() < SPECIAL_DEALS_CEILING && deal.strategy != Strategy::Standard {
            try_add(deal, &mut selected, &mut seen_keys);
        } else {
            still_remaining.push(deal);
        }
    }
    let remaining = still_remaining;

    // 3. up to 2 per time bucket until total >= 40.
    let mut bucket_counts: HashMap<&'static str, usize> = HashMap::new();
    let mut still_remaining = Vec::new();
    for deal in remaining {
        if selected.len() >= GROUPED_CEILING {
            still_remaining.push(deal);
            continue;
        }
        let bucket = deal.departure_hour().map(time_bucket).unwrap_or("overnight");
        let count = bucket_counts.entry(bucket).or_insert(0);
        if *count < PER_BUCKET_CAP {
            if try_add(deal, &mut selected, &mut seen_keys) {
                *count += 1;
            }
        } else {
            still_remaining.push(deal);
        }
    }
    let remaining = still_remaining;

    // 4. up to 2 per airline until total >= 40.
    let mut airline_counts: HashMap<String, usize> = HashMap::new();
    let mut still_remaining = Vec::new();
    for deal in remaining {
        if selected.len() >= GROUPED_CEILING {
            still_remaining.push(deal);
            continue;
        }
        let airline = deal.primary_airline().unwrap_or("unknown").to_string();
        let count = airline_counts.entry(airline).or_insert(0);
        if *count < PER_AIRLINE_CAP {
            if try_add(deal, &mut selected, &mut seen_keys) {
                *count += 1;
            }
        } else {
            still_remaining.push(deal);
        }
    }
    let remaining = still_remaining;

    // 5. deals in previously-unseen $10 price bands until total >= 35.
    let mut seen_bands = HashSet::new();
    for deal in remaining {
        if selected.len() >= PRICE_BAND_CEILING {
            break;
        }
        let band = (deal.price_usd / 10.0).floor() as i64 * 10;
        if seen_bands.insert(band) {
            try_add(deal, &mut selected, &mut seen_keys);
        }
    }

    selected.truncate(MAX_DEALS);
    selected.sort_by(|a, b| a.price_usd.partial_cmp(&b.price_usd).unwrap());
    selected
}
