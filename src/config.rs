//! Centralised, overridable configuration: the call budget, per-strategy
//! price thresholds, and discount ratios called out as "first-class
//! constants" in the design notes.

use std::time::Duration;

/// Tunable parameters for one search. Constructed via [`Default`] and
/// overridden with the builder-style setters below, the way
/// `vaya::SearchService` exposes `with_timeout`/`with_max_results`.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum upstream calls issued per search (C3).
    pub max_calls_per_search: u32,
    /// Advisory TTL for caching delegated to the collaborator layer; the
    /// core does not cache itself.
    pub cache_ttl: Duration,

    /// Nearby-airport strategy: skip below this base price.
    pub nearby_min_base_price: f64,
    /// Nearby-airport strategy: accept alternative if price < this ratio of base.
    pub nearby_discount_ratio: f64,

    /// Split-ticket strategy: skip below this base price.
    pub split_ticket_min_base_price: f64,
    /// Split-ticket strategy: accept combined price < this ratio of base.
    pub split_ticket_discount_ratio: f64,

    /// Positioning-flight strategy: skip below this base price.
    pub positioning_min_base_price: f64,
    /// Positioning-flight strategy: accept total < this ratio of base.
    pub positioning_discount_ratio: f64,

    /// Hidden-city strategy: skip below this base price.
    pub hidden_city_min_base_price: f64,

    /// Smart-hub selector: return no hubs below this base price.
    pub smart_hub_min_base_price: f64,

    /// Connecting-flight extractor: retain itineraries priced below this
    /// ratio of the cheapest direct price.
    pub connecting_discount_ratio: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_calls_per_search: 15,
            cache_ttl: Duration::from_secs(5 * 60),
            nearby_min_base_price: 70.0,
            nearby_discount_ratio: 0.85,
            split_ticket_min_base_price: 90.0,
            split_ticket_discount_ratio: 0.85,
            positioning_min_base_price: 300.0,
            positioning_discount_ratio: 0.75,
            hidden_city_min_base_price: 100.0,
            smart_hub_min_base_price: 120.0,
            connecting_discount_ratio: 0.90,
        }
    }
}

impl SearchConfig {
    pub fn with_max_calls_per_search(mut self, max: u32) -> Self {
        self.max_calls_per_search = max;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_smart_hub_min_base_price(mut self, min_base_price: f64) -> Self {
        self.smart_hub_min_base_price = min_base_price;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_constants() {
        let c = SearchConfig::default();
        assert_eq!(c.max_calls_per_search, 15);
        assert_eq!(c.nearby_min_base_price, 70.0);
        assert_eq!(c.split_ticket_min_base_price, 90.0);
        assert_eq!(c.positioning_min_base_price, 300.0);
        assert_eq!(c.hidden_city_min_base_price, 100.0);
        assert_eq!(c.smart_hub_min_base_price, 120.0);
    }

    #[test]
    fn builder_overrides_budget() {
        let c = SearchConfig::default().with_max_calls_per_search(5);
        assert_eq!(c.max_calls_per_search, 5);
    }
}
