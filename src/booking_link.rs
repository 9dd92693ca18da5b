//! Booking-link generation (§6): provider token URL, then a per-carrier deep
//! link template, then a universal fallback. Generalises the `deep_link` /
//! `booking_url` fields on `fgp_travel::models::flight::Flight`/`RoundTrip`
//! into an explicit priority chain.

use crate::types::Itinerary;
use chrono::NaiveDate;

fn encode(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => c.to_string(),
            other => format!("%{:02X}", other as u32),
        })
        .collect()
}

fn carrier_template(airline: &str) -> Option<&'static str> {
    let normalized = airline.to_lowercase();
    if normalized.contains("united") {
        Some("https://www.united.com/ual/en/us/flight-search/book-a-flight?f={origin}&t={destination}&d={date}")
    } else if normalized.contains("american") {
        Some("https://www.aa.com/booking/search?origin={origin}&destination={destination}&date={date}")
    } else if normalized.contains("delta") {
        Some("https://www.delta.com/flight-search/book-a-flight?originCity={origin}&destinationCity={destination}&departureDate={date}")
    } else if normalized.contains("southwest") {
        Some("https://www.southwest.com/air/booking/select.html?originationAirportCode={origin}&destinationAirportCode={destination}&departureDate={date}")
    } else if normalized.contains("jetblue") {
        Some("https://www.jetblue.com/booking/flights?from={origin}&to={destination}&depart={date}")
    } else if normalized.contains("alaska") {
        Some("https://www.alaskaair.com/search/results?A1=&origin={origin}&destination={destination}&departureDate={date}")
    } else if normalized.contains("spirit") {
        Some("https://www.spirit.com/book/flights?origin={origin}&destination={destination}&date={date}")
    } else if normalized.contains("frontier") {
        Some("https://www.flyfrontier.com/booking/flights?origin={origin}&destination={destination}&date={date}")
    } else {
        None
    }
}

fn fill_template(template: &str, origin: &str, destination: &str, date: NaiveDate) -> String {
    template
        .replace("{origin}", &encode(origin))
        .replace("{destination}", &encode(destination))
        .replace("{date}", &encode(&date.format("%Y-%m-%d").to_string()))
}

/// Universal fallback when no provider token or carrier template applies.
fn universal_fallback(origin: &str, destination: &str, date: NaiveDate) -> String {
    format!(
        "https://www.google.com/travel/flights?q=flights%20from%20{}%20to%20{}%20on%20{}",
        encode(origin),
        encode(destination),
        encode(&date.format("%Y-%m-%d").to_string())
    )
}

/// Builds a booking link for the first leg of `itinerary`'s first itinerary,
/// following the priority order: provider token, carrier deep link,
/// universal fallback.
pub fn build_booking_link(itinerary: &Itinerary) -> String {
    if let Some(token) = &itinerary.booking_token {
        return format!(
            "https://booking.example.com/confirm?token={}",
            encode(token)
        );
    }

    let Some(first_leg) = itinerary.legs.first() else {
        return "https://www.google.com/travel/flights".to_string();
    };

    let date = first_leg.depart_at.date_naive();
    if let Some(template) = carrier_template(&first_leg.airline) {
        return fill_template(template, &first_leg.origin, &first_leg.destination, date);
    }

    universal_fallback(&first_leg.origin, &first_leg.destination, date)
}
