mod error;
mod estimator;
mod fetch;
mod parser;

use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::estimator::{Estimator, DEFAULT_UNIT_AREA_SQ_IN};
use crate::fetch::RainforestClient;

#[derive(Parser)]
#[command(name = "areacalc", about = "Surface-area estimator for Amazon product listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate surface area and reference-unit count for a product URL
    Estimate {
        /// Product listing URL
        url: String,
        /// Area of one reference unit, in square inches
        #[arg(long, default_value_t = DEFAULT_UNIT_AREA_SQ_IN)]
        unit_area: f64,
        /// Amazon marketplace to query
        #[arg(long, default_value = "amazon.ca")]
        domain: String,
    },
    /// Extract the product identifier (ASIN) from a URL
    Asin {
        url: String,
    },
    /// Parse a raw dimensions string into inches
    Parse {
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            url,
            unit_area,
            domain,
        } => {
            let client = RainforestClient::from_env(domain)?;
            let estimator = Estimator::new(client, unit_area);

            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            pb.set_message("Looking up product metadata...");
            pb.enable_steady_tick(Duration::from_millis(100));

            let result = estimator.estimate(&url).await;
            pb.finish_and_clear();

            let estimate = result?;
            let name = estimate.product_name.as_deref().unwrap_or("product");
            println!("Estimated surface area: {:.1} sq in.", estimate.surface_area);
            println!(
                "It would take approximately {} reference units ({} sq in each) to cover your {}.",
                estimate.unit_count, unit_area, name
            );
        }
        Commands::Asin { url } => match parser::asin::extract(&url) {
            Some(asin) => println!("{}", asin),
            None => anyhow::bail!("no product identifier found in the URL"),
        },
        Commands::Parse { text } => {
            let dims = parser::dimensions::parse(&text)?;
            println!(
                "{:.2} x {:.2} x {:.2} inches (surface area {:.1} sq in)",
                dims.length,
                dims.width,
                dims.height,
                parser::dimensions::surface_area(&dims)
            );
        }
    }

    Ok(())
}
