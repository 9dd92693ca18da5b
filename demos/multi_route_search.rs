//! Multi-route flight deal search demo: runs several origin/destination
//! pairs concurrently against the same provider and budget.

use dealhound::{Cabin, HttpFlightPriceSource, Orchestrator, Query, SearchConfig};
use std::sync::Arc;

const ROUTES: &[(&str, &str)] = &[("JFK", "LAX"), ("SFO", "ORD"), ("MIA", "SEA")];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Multi-route flight deal search demo");
    println!("====================================\n");

    let provider_url =
        std::env::var("DEALHOUND_PROVIDER_URL").unwrap_or_else(|_| "https://example.com".into());
    let source = Arc::new(HttpFlightPriceSource::new(provider_url)?);
    let orchestrator = Arc::new(Orchestrator::new(source, SearchConfig::default()));

    let departure = chrono::NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
    let mut handles = Vec::new();

    for &(origin, destination) in ROUTES {
        let orchestrator = orchestrator.clone();
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
        handles.push(tokio::spawn(async move {
            let result = orchestrator.search(query).await;
            (origin, destination, result)
        }));
    }

    for handle in handles {
        let (origin, destination, result) = handle.await?;
        match result {
            Ok(output) => {
                println!(
                    "{origin} -> {destination}: {} deals, cheapest ${:.0}",
                    output.deals.len(),
                    output.deals.first().map(|d| d.price_usd).unwrap_or(0.0)
                );
            }
            Err(e) => println!("{origin} -> {destination}: error: {e}"),
        }
    }

    Ok(())
}
