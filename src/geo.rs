//! Static airport table, great-circle distance, route classification, and
//! hub ranking (C1).

use crate::types::{Airport, RouteType};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Raw row shape emitted by `build.rs` from `data/airports.csv`.
#[derive(Debug, Clone, Copy)]
pub struct RawAirport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub timezone: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/airports_generated.rs"));

const EARTH_RADIUS_MI: f64 = 3959.0;

/// Conservative default distance used when either airport is unknown.
const UNKNOWN_DISTANCE_MI: f64 = 1000.0;

const MAJOR_HUBS: &[&str] = &["ORD", "ATL", "DFW", "DEN", "IAH", "SFO", "LAX", "JFK", "EWR"];

static AIRPORTS: OnceLock<HashMap<&'static str, Airport>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, Airport> {
    AIRPORTS.get_or_init(|| {
        RAW_AIRPORTS
            .iter()
            .map(|(code, raw)| {
                (
                    *code,
                    Airport {
                        code: raw.code,
                        name: raw.name,
                        city: raw.city,
                        country: raw.country,
                        lat: raw.lat,
                        lon: raw.lon,
                        timezone: raw.timezone,
                    },
                )
            })
            .collect()
    })
}

/// Looks up a static airport row by IATA code. Returns `None` for unknown
/// codes -- callers must degrade silently, never panic.
pub fn lookup(code: &str) -> Option<Airport> {
    table().get(code).copied()
}

/// Haversine great-circle distance in miles. Degrades to the conservative
/// `1000` mile default when either airport is unknown.
pub fn distance(a: &str, b: &str) -> f64 {
    let (Some(ap_a), Some(ap_b)) = (lookup(a), lookup(b)) else {
        return UNKNOWN_DISTANCE_MI;
    };

    let lat1 = ap_a.lat.to_radians();
    let lat2 = ap_b.lat.to_radians();
    let dlat = (ap_b.lat - ap_a.lat).to_radians();
    let dlon = (ap_b.lon - ap_a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();
    EARTH_RADIUS_MI * c
}

/// Classifies a route as domestic or international. Unknown codes default
/// to domestic.
pub fn route_type(a: &str, b: &str) -> RouteType {
    match (lookup(a), lookup(b)) {
        (Some(ap_a), Some(ap_b)) if ap_a.country == ap_b.country => RouteType::Domestic,
        (Some(_), Some(_)) => RouteType::International,
        _ => RouteType::Domestic,
    }
}

/// Ranks the fixed set of major hubs by detour cost
/// (`distance(a,hub) + distance(hub,b) - distance(a,b)`) ascending, returning
/// the top 3 excluding `a` and `b` themselves.
pub fn optimal_hubs(a: &str, b: &str) -> Vec<&'static str> {
    let direct = distance(a, b);
    let mut ranked: Vec<(&'static str, f64)> = MAJOR_HUBS
        .iter()
        .filter(|&&hub| hub != a && hub != b)
        .map(|&hub| {
            let detour = distance(a, hub) + distance(hub, b) - direct;
            (hub, detour)
        })
        .collect();

    ranked.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap());
    ranked.into_iter().take(3).map(|(hub, _)| hub).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_airport_distance_is_reasonable() {
        let d = distance("JFK", "LAX");
        assert!(d > 2000.0 && d < 2900.0, "got {d}");
    }

    #[test]
    fn unknown_airport_defaults() {
        assert_eq!(distance("ZZZ", "JFK"), UNKNOWN_DISTANCE_MI);
        assert_eq!(distance("JFK", "ZZZ"), UNKNOWN_DISTANCE_MI);
    }

    #[test]
    fn domestic_route_same_country() {
        assert_eq!(route_type("JFK", "LAX"), RouteType::Domestic);
    }

    #[test]
    fn international_route_different_country() {
        assert_eq!(route_type("JFK", "LHR"), RouteType::International);
    }

    #[test]
    fn unknown_route_defaults_domestic() {
        assert_eq!(route_type("ZZZ", "YYY"), RouteType::Domestic);
    }

    #[test]
    fn optimal_hubs_excludes_endpoints() {
        let hubs = optimal_hubs("JFK", "LAX");
        assert!(!hubs.contains(&"JFK"));
        assert!(!hubs.contains(&"LAX"));
        assert!(hubs.len() <= 3);
    }

    #[test]
    fn zero_distance_for_identical_airport() {
        assert!(distance("JFK", "JFK") < 1.0);
    }
}
