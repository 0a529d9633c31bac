use anyhow::Context;
use clap::Parser;
use lootworth::config::Config;
use lootworth::models::item::ItemTemplate;
use lootworth::models::offer::Offer;
use lootworth::models::types::TemplateId;
use lootworth::providers::mem::{
    MemCatalog, MemInventory, MemOfferStore, MemPriceTable, RejectingTrades,
};
use lootworth::registry::{Providers, Registry};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// cargo run --bin catalog-scan -- --catalog catalog.json --offers offers.json --baselines baselines.json

#[derive(Debug, Parser)]
#[command(
    name = "catalog-scan",
    version,
    about = "Price every sellable template against an offer snapshot"
)]
struct Args {
    /// Item template catalog (JSON array)
    #[arg(long)]
    catalog: PathBuf,

    /// Active market offers (JSON array)
    #[arg(long)]
    offers: PathBuf,

    /// Baseline feed prices (JSON map of template id to price)
    #[arg(long)]
    baselines: PathBuf,

    /// Valuation config (TOML); falls back to env/defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    let templates: Vec<ItemTemplate> = read_json(&args.catalog)?;
    let offers: Vec<Offer> = read_json(&args.offers)?;
    let baselines: HashMap<TemplateId, f64> = read_json(&args.baselines)?;

    tracing::info!(
        templates = templates.len(),
        offers = offers.len(),
        "snapshot loaded"
    );

    let registry = Registry::new(
        Providers {
            catalog: Arc::new(MemCatalog::new(templates)),
            baseline: Arc::new(MemPriceTable::new(baselines)),
            offers: Arc::new(MemOfferStore::new(offers)),
            inventory: Arc::new(MemInventory::default()),
            trades: Arc::new(RejectingTrades),
        },
        cfg,
    );

    let mut prices = registry.services.pricing.all_prices();
    prices.sort_by(|a, b| b.price.cmp(&a.price));

    for entry in &prices {
        println!("{}\t{}", entry.template, entry.price);
    }

    tracing::info!(priced = prices.len(), "catalog scan finished");

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().unwrap();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
}
