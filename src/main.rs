//! CLI interface for dealhound.

use clap::{Parser, Subcommand};
use dealhound::{Cabin, HttpFlightPriceSource, Orchestrator, Query, SearchConfig};
use std::fs;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "dealhound")]
#[command(about = "Concurrent, budget-aware flight deal discovery")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for flight deals between two airports
    Search {
        /// Origin airport code
        #[arg(short, long)]
        from: String,
        /// Destination airport code
        #[arg(short, long)]
        to: String,
        /// Departure date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Return date for round trips (YYYY-MM-DD)
        #[arg(short, long)]
        return_date: Option<String>,
        /// Number of adults
        #[arg(long, default_value = "1")]
        adults: u32,
        /// Number of children
        #[arg(long, default_value = "0")]
        children: u32,
        /// Number of infants
        #[arg(long, default_value = "0")]
        infants: u32,
        /// Cabin class (economy, premium, business, first)
        #[arg(long, default_value = "economy")]
        cabin: String,
        /// Maximum upstream calls issued per search
        #[arg(long, default_value = "15")]
        max_calls: u32,
        /// Upstream price-provider base URL
        #[arg(long, env = "DEALHOUND_PROVIDER_URL")]
        provider_url: String,
        /// Output file for JSON results
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_cabin(s: &str) -> Cabin {
    match s.to_lowercase().as_str() {
        "premium" | "premium-economy" => Cabin::Premium,
        "business" => Cabin::Business,
        "first" => Cabin::First,
        _ => Cabin::Economy,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();

    let cli = Cli::parse();

    let Commands::Search {
        from,
        to,
        date,
        return_date,
        adults,
        children,
        infants,
        cabin,
        max_calls,
        provider_url,
        output,
    } = cli.command;

    let departure = chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
    let return_date = return_date
        .as_deref()
        .map(|d| chrono::NaiveDate::parse_from_str(d, "%Y-%m-%d"))
        .transpose()?;

    let query = Query {
        origin: from,
        destination: to,
        departure,
        return_date,
        cabin: parse_cabin(&cabin),
        adults,
        children,
        infants,
    };

    let source = Arc::new(HttpFlightPriceSource::new(provider_url)?);
    let config = SearchConfig::default().with_max_calls_per_search(max_calls);
    let orchestrator = Orchestrator::new(source, config);

    println!("Searching for flight deals...");
    let search_output = orchestrator.search(query).await?;
    let json = serde_json::to_string_pretty(&search_output)?;

    if let Some(output_file) = output {
        fs::write(&output_file, &json)?;
        println!("Results saved to {}", output_file);
    } else {
        println!("{}", json);
    }

    println!("\nFound {} deals", search_output.deals.len());
    if let Some(cheapest) = search_output.deals.first() {
        println!("Cheapest: ${:.0} ({})", cheapest.price_usd, cheapest.strategy.as_str());
    }

    Ok(())
}
