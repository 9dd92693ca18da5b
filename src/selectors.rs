//! Pure heuristic selectors (C4): no I/O, parameterised by base price and
//! route geography, choosing which alternatives a strategy engine should
//! probe.

use crate::config::SearchConfig;

const EAST_COAST: &[&str] = &["JFK", "EWR", "LGA", "BOS", "DCA", "PHL"];
const WEST_COAST: &[&str] = &["LAX", "SFO", "SEA", "PDX", "SAN"];

fn nearby_table(code: &str) -> &'static [&'static str] {
    match code {
        "JFK" => &["EWR", "LGA"],
        "LAX" => &["BUR", "ONT", "LGB", "SNA"],
        "SFO" => &["OAK", "SJC"],
        "ORD" => &["MDW"],
        "IAD" => &["DCA", "BWI"],
        "MIA" => &["FLL", "PBI"],
        _ => &[],
    }
}

/// Alternative airports near `code`, truncated by how price-sensitive the
/// search is: 1 if cheap, 2 if mid-range, all if already expensive.
pub fn nearby_alternatives(code: &str, base_price: f64) -> Vec<&'static str> {
    let all = nearby_table(code);
    let take = if base_price < 100.0 {
        1
    } else if base_price < 200.0 {
        2
    } else {
        all.len()
    };
    all.iter().copied().take(take).collect()
}

fn beyond_table(destination: &str) -> &'static [&'static str] {
    match destination {
        "LAX" | "SFO" | "SEA" | "PDX" | "SAN" => &["ORD", "ATL", "DFW"],
        "MIA" | "JFK" | "EWR" | "BOS" => &["LAX", "SFO"],
        _ => &["ORD", "ATL"],
    }
}

/// Candidate hub airports worth routing a split ticket through, or empty
/// when the base price doesn't justify the risk/complexity.
pub fn smart_hubs(
    origin: &str,
    destination: &str,
    base_price: f64,
    config: &SearchConfig,
) -> Vec<&'static str> {
    if base_price < config.smart_hub_min_base_price {
        return Vec::new();
    }

    let origin_east = EAST_COAST.contains(&origin);
    let origin_west = WEST_COAST.contains(&origin);
    let dest_east = EAST_COAST.contains(&destination);
    let dest_west = WEST_COAST.contains(&destination);

    if origin_east && dest_west {
        return vec!["DEN"];
    }
    if origin_west && dest_east {
        return vec!["ORD"];
    }

    const FALLBACK: &[&str] = &["ORD", "ATL", "DFW", "DEN", "LAX", "SFO", "JFK", "MIA"];
    FALLBACK
        .iter()
        .copied()
        .find(|&hub| hub != origin && hub != destination)
        .into_iter()
        .collect()
}

/// Candidate "beyond" cities for the hidden-city strategy: cities whose
/// through-itinerary is plausible to lay over at `destination`.
pub fn smart_beyond_cities(origin: &str, destination: &str) -> Vec<&'static str> {
    let origin_east = EAST_COAST.contains(&origin);
    let dest_west = WEST_COAST.contains(&destination);

    if origin_east && dest_west {
        return ["DEN", "ORD", "DFW"]
            .into_iter()
            .filter(|&c| c != origin && c != destination)
            .take(2)
            .collect();
    }

    beyond_table(destination)
        .iter()
        .copied()
        .filter(|&c| c != origin && c != destination)
        .take(2)
        .collect()
}

pub fn should_check_positioning(base_price: f64) -> bool {
    base_price > 300.0
}

pub fn should_check_hidden_city(base_price: f64) -> bool {
    base_price > 100.0
}
