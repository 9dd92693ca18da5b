//! Cabin-class and round-trip search example: demonstrates varying
//! `Query` fields across a handful of searches against the same provider.

use dealhound::{Cabin, HttpFlightPriceSource, Orchestrator, Query, SearchConfig};
use std::sync::Arc;

async fn run_and_report(
    orchestrator: &Orchestrator,
    label: &str,
    query: Query,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{label}");
    match orchestrator.search(query).await {
        Ok(output) => println!(
            "  {} deals, cheapest ${:.0}\n",
            output.deals.len(),
            output.deals.first().map(|d| d.price_usd).unwrap_or(0.0)
        ),
        Err(e) => println!("  error: {e}\n"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Cabin-class and round-trip search examples");
    println!("============================================\n");

    let provider_url =
        std::env::var("DEALHOUND_PROVIDER_URL").unwrap_or_else(|_| "https://example.com".into());
    let source = Arc::new(HttpFlightPriceSource::new(provider_url)?);
    let orchestrator = Orchestrator::new(source, SearchConfig::default());

    let departure = chrono::NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
    let return_date = chrono::NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();

    run_and_report(
        &orchestrator,
        "Example 1: one-way economy",
        Query {
            origin: "LAX".to_string(),
            destination: "JFK".to_string(),
            departure,
            return_date: None,
            cabin: Cabin::Economy,
            adults: 1,
            children: 0,
            infants: 0,
        },
    )
    .await?;

    run_and_report(
        &orchestrator,
        "Example 2: round trip, business cabin",
        Query {
            origin: "LAX".to_string(),
            destination: "JFK".to_string(),
            departure,
            return_date: Some(return_date),
            cabin: Cabin::Business,
            adults: 2,
            children: 1,
            infants: 0,
        },
    )
    .await?;

    Ok(())
}
