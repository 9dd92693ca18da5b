//! Core data model: queries, itineraries, legs, and the internal `Deal`
//! representation produced by every strategy and analyser pass.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A three-letter uppercase airport identifier, e.g. `JFK`.
pub type Iata = String;

/// Cabin class for a search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cabin {
    #[default]
    Economy,
    Premium,
    Business,
    First,
}

/// A deal-discovery search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub origin: Iata,
    pub destination: Iata,
    pub departure: NaiveDate,
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub cabin: Cabin,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub infants: u32,
}

impl Query {
    /// Uppercases and trims the origin/destination codes in place, the
    /// normalisation the dedup and grouping keys throughout the crate rely on.
    pub fn normalized(mut self) -> Self {
        self.origin = self.origin.trim().to_uppercase();
        self.destination = self.destination.trim().to_uppercase();
        self
    }
}

/// A single stopover within an itinerary leg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layover {
    pub airport: Iata,
    pub duration_min: u32,
}

/// One flight segment, operated by a single airline under a single flight
/// number, between two airports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    pub origin: Iata,
    pub destination: Iata,
    pub depart_at: DateTime<Utc>,
    pub arrive_at: DateTime<Utc>,
    pub airline: String,
    pub flight_number: String,
    pub duration_min: u32,
    #[serde(default)]
    pub layovers: Vec<Layover>,
}

impl Leg {
    /// A leg is direct when it has no layovers.
    pub fn is_direct(&self) -> bool {
        self.layovers.is_empty()
    }
}

/// A complete, separately-bookable itinerary as returned by a
/// [`crate::source::FlightPriceSource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
    pub price_usd: f64,
    pub booking_token: Option<String>,
}

impl Itinerary {
    /// An itinerary is a direct flight when it has exactly one leg and that
    /// leg has no layovers.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1 && self.legs[0].is_direct()
    }

    pub fn total_duration_min(&self) -> u32 {
        self.legs.iter().map(|l| l.duration_min).sum()
    }

    /// All layovers across every leg, in leg order.
    pub fn layovers(&self) -> impl Iterator<Item = &Layover> {
        self.legs.iter().flat_map(|l| l.layovers.iter())
    }

    pub fn has_layover(&self) -> bool {
        self.legs.iter().any(|l| !l.layovers.is_empty())
    }

    /// The final arrival airport of the itinerary (last leg's destination).
    pub fn final_destination(&self) -> Option<&str> {
        self.legs.last().map(|l| l.destination.as_str())
    }
}

/// The discovery heuristic (or analyser pass) that produced a [`Deal`].
///
/// `Award`, `Error`, `Currency`, and `Throwaway` are carried on the enum for
/// forward compatibility per the original design notes' open questions, but
/// no engine in this crate emits them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Standard,
    HiddenCity,
    Award,
    Error,
    Currency,
    Throwaway,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::HiddenCity => "hidden-city",
            Strategy::Award => "award",
            Strategy::Error => "error",
            Strategy::Currency => "currency",
            Strategy::Throwaway => "throwaway",
        }
    }
}

/// A candidate discovered by a strategy engine or the data analyser.
///
/// `split-ticket` and `positioning-flight` deals carry exactly two
/// itineraries; every other strategy carries exactly one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub price_usd: f64,
    pub strategy: Strategy,
    pub risk_score: u8,
    pub booking_link: String,
    pub explanation: String,
    pub legs: Vec<Itinerary>,
}

impl Deal {
    /// Dedup key: `(airline, flight_number, departure_date)` of the first
    /// leg of the first itinerary, normalized.
    pub fn dedup_key(&self) -> Option<(String, String, NaiveDate)> {
        let first_leg = self.legs.first()?.legs.first()?;
        Some((
            first_leg.airline.to_uppercase(),
            first_leg.flight_number.to_uppercase(),
            first_leg.depart_at.date_naive(),
        ))
    }

    /// Hour-of-day of the first leg's departure, used for time-of-day
    /// bucketing by the Curator.
    pub fn departure_hour(&self) -> Option<u32> {
        use chrono::Timelike;
        self.legs
            .first()?
            .legs
            .first()
            .map(|l| l.depart_at.hour())
    }

    pub fn primary_airline(&self) -> Option<&str> {
        self.legs
            .first()
            .and_then(|it| it.legs.first())
            .map(|l| l.airline.as_str())
    }
}

/// A static airport row: code, display name, city, country, coordinates,
/// and IANA timezone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub timezone: &'static str,
}

/// Domestic/international classification of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteType {
    Domestic,
    International,
}

/// The final output of a search: up to 35 deals, sorted ascending by price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput {
    pub deals: Vec<Deal>,
}
