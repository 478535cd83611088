//! Solar Sizer - headless entry point
//!
//! Runs one calculator session: quick-adds the appliances named on the
//! command line (or a fridge and a TV), sizes the system with the configured
//! parameters, and stores the result in the configured sink.

use anyhow::Context;
use solar_sizer_lib::calculator::CalculatorSession;
use solar_sizer_lib::core::Config;
use solar_sizer_lib::i18n::I18n;
use solar_sizer_lib::ledger::{catalog, find_catalog_entry};
use solar_sizer_lib::notify::LogNotifier;
use solar_sizer_lib::sink::build_sink;
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Solar Sizer v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let sink = build_sink(&config.storage).context("failed to open calculation storage")?;
    let i18n = I18n::new(&config.general.language);
    println!("{}\n", i18n.get("app.title"));

    let notifier = Arc::new(LogNotifier::new(i18n));
    let mut session = CalculatorSession::new(config.sizing.to_parameters(), sink, notifier);

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let names: Vec<&str> = if requested.is_empty() {
        vec!["Refrigerator", "LED TV"]
    } else {
        requested.iter().map(String::as_str).collect()
    };

    for name in names {
        match find_catalog_entry(name) {
            Some(entry) => session.quick_add(entry),
            None => {
                let known: Vec<&str> = catalog().iter().map(|e| e.name).collect();
                log::warn!("Unknown appliance '{}', expected one of: {}", name, known.join(", "));
            }
        }
    }

    for appliance in session.ledger().list() {
        println!("  {}", appliance);
    }
    let params = session.params();
    println!(
        "\n  Sun hours: {}  Backup days: {}  Efficiency: {}\n",
        params.sun_hours, params.backup_days, params.efficiency
    );

    let record = session.calculate_power_needs().await?;
    println!("  Solar Panels: {:.2} kW", record.row.solar_size);
    println!("  Battery Bank: {:.2} kWh", record.row.battery_size);
    println!("  Inverter:     {:.2} kW", record.row.inverter_size);
    println!("\n  Stored as #{} at {}", record.id, record.created_at.to_rfc3339());

    Ok(())
}
