//! Benchmarks the concurrent strategy dispatch in [`Orchestrator::search`]
//! across a batch of routes, reporting wall-clock time and calls issued.

use dealhound::{Cabin, MockFlightPriceSource, Orchestrator, Query, SearchConfig};
use std::sync::Arc;
use std::time::Instant;

const ROUTES: &[(&str, &str)] = &[
    ("JFK", "LAX"),
    ("SFO", "ORD"),
    ("MIA", "SEA"),
    ("BOS", "DEN"),
    ("IAD", "SAN"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Benchmarking concurrent strategy dispatch over {} routes", ROUTES.len());
    println!("{}", "=".repeat(50));

    let mock = Arc::new(MockFlightPriceSource::new());
    let departure = chrono::NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
    for &(origin, destination) in ROUTES {
        mock.set_response(
            origin,
            destination,
            departure,
            vec![dealhound::Itinerary {
                legs: vec![dealhound::Leg {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    depart_at: chrono::DateTime::parse_from_rfc3339("2026-08-15T10:00:00Z")
                        .unwrap()
                        .with_timezone(&chrono::Utc),
                    arrive_at: chrono::DateTime::parse_from_rfc3339("2026-08-15T16:00:00Z")
                        .unwrap()
                        .with_timezone(&chrono::Utc),
                    airline: "Delta".to_string(),
                    flight_number: "DL1".to_string(),
                    duration_min: 360,
                    layovers: vec![],
                }],
                price_usd: 320.0,
                booking_token: None,
            }],
        );
    }

    let orchestrator = Orchestrator::new(mock.clone(), SearchConfig::default());
    let start = Instant::now();
    let mut total_deals = 0;

    for &(origin, destination) in ROUTES {
        let query = Query {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure,
            return_date: None,
            cabin: Cabin::Economy,
            adults: 1,
            children: 0,
            infants: 0,
        };
        let output = orchestrator.search(query).await?;
        total_deals += output.deals.len();
    }

    let duration = start.elapsed();
    println!("\nPerformance summary:");
    println!("  Routes searched:   {}", ROUTES.len());
    println!("  Total deals found: {total_deals}");
    println!("  Calls issued:      {}", mock.calls_observed().len());
    println!("  Total time:        {duration:?}");
    println!(
        "  Avg per route:     {:?}",
        duration / ROUTES.len() as u32
    );

    Ok(())
}
