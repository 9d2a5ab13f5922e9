//! Order Total Example
//!
//! This example prices a fixture order and prints a receipt.
//!
//! Use `-f` to load an order fixture by name
//! Use `-c` to load volume discount settings from a YAML config file
//! Use `--full-price` to skip the volume discount entirely

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally::prelude::*;

/// Arguments for the order total example
#[derive(Debug, Parser)]
struct Args {
    /// Order fixture to price
    #[clap(short, long, default_value = "volume")]
    fixture: String,

    /// Pricing config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Charge the subtotal with no discount policy
    #[clap(long)]
    full_price: bool,

    /// Log level (trace, debug, info, warn, error)
    #[clap(short, long, default_value = "info")]
    log_level: String,
}

fn print_receipt<P: PricingPolicy>(pricer: &OrderPricer<P>) -> Result<()> {
    let receipt = pricer.receipt()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle, pricer.order())?;

    Ok(())
}

/// Order Total Example
pub fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let order = Fixture::new().load_order(&args.fixture)?;

    info!(fixture = %args.fixture, items = order.len(), "loaded order");

    if args.full_price {
        return print_receipt(&OrderPricer::with_policy(order, FullPrice));
    }

    let config = match args.config.as_deref() {
        Some(path) => PricingConfig::from_path(path)?,
        None => PricingConfig::default(),
    };

    let policy = config.volume_discount()?;

    info!(threshold = policy.threshold(), "using volume discount");

    print_receipt(&OrderPricer::with_policy(order, policy))
}
