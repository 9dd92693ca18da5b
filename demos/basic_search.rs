//! Basic flight deal search example.

use dealhound::{Cabin, HttpFlightPriceSource, Orchestrator, Query, SearchConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider_url =
        std::env::var("DEALHOUND_PROVIDER_URL").unwrap_or_else(|_| "https://example.com".into());
    let source = Arc::new(HttpFlightPriceSource::new(provider_url)?);
    let orchestrator = Orchestrator::new(source, SearchConfig::default());

    let query = Query {
        origin: "LAX".to_string(),
        destination: "JFK".to_string(),
        departure: chrono::NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
        return_date: None,
        cabin: Cabin::Economy,
        adults: 1,
        children: 0,
        infants: 0,
    };

    println!("Searching for flight deals from LAX to JFK on 2026-08-15...");
    match orchestrator.search(query).await {
        Ok(output) => {
            println!("Found {} deals", output.deals.len());
            for (i, deal) in output.deals.iter().take(3).enumerate() {
                println!("\n--- Deal {} ---", i + 1);
                println!("Strategy: {}", deal.strategy.as_str());
                println!("Price: ${:.0}", deal.price_usd);
                println!("Risk score: {}", deal.risk_score);
                println!("{}", deal.explanation);
            }
        }
        Err(e) => {
            eprintln!("Error searching for flights: {e}");
            eprintln!("This is expected without a reachable provider endpoint.");
        }
    }

    Ok(())
}
