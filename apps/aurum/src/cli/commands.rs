//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api::{self, AlloyMixJson, StandardJson};
use crate::config::AppConfig;
use aurum_core::{
    AurumError, GoldStandard, Karat, MixComposition, StandardTable, format_currency,
    format_weight, parse_rupiah, price_from_weight,
};

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn national_range_text(standard: &GoldStandard) -> String {
    match standard.national_range() {
        Some(range) => format!("{:.2}% - {:.2}%", range.min, range.max),
        None => "-".to_string(),
    }
}

fn national_verdict(meets: Option<bool>) -> &'static str {
    match meets {
        Some(true) => "within range",
        Some(false) => "outside range",
        None => "no national range",
    }
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

fn server_banner(config: &AppConfig) -> String {
    let auth = if config.api_key().is_some() {
        "enabled"
    } else {
        "disabled"
    };
    format!(
        "Aurum Gold Calculator Server Starting...

Configuration:
  Host:       {host}
  Port:       {port}
  Rate limit: {rate} req/s
  Auth:       {auth}

Endpoints:
  GET  /standards         - Gold standard table
  GET  /standards/{{karat}} - One karat
  POST /purity            - Convert between karats
  POST /purity/batch      - Convert several masses
  POST /classify          - Classify a blend
  POST /price             - Price from weight
  GET  /metrics           - Prometheus metrics
  GET  /health            - Health check

Press Ctrl+C to stop
",
        host = config.server.host,
        port = config.server.port,
        rate = config.security.rate_limit,
    )
}

/// Start the HTTP server. Flags override the configured host and port.
///
/// The startup banner is skipped in JSON mode so stdout carries no prose.
pub async fn cmd_server(
    json_mode: bool,
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), AurumError> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    if json_mode {
        tracing::info!(
            host = %config.server.host,
            port = config.server.port,
            rate_limit = config.security.rate_limit,
            auth = config.api_key().is_some(),
            "server starting"
        );
    } else {
        println!("{}", server_banner(&config));
    }

    api::run_server(config).await
}

// =============================================================================
// STANDARDS COMMANDS
// =============================================================================

/// Print the full table.
pub fn cmd_standards(json_mode: bool) -> Result<(), AurumError> {
    let table = StandardTable::global();

    if json_mode {
        let standards: Vec<StandardJson> = table.iter().map(StandardJson::from).collect();
        print_json(&serde_json::json!({
            "count": standards.len(),
            "standards": standards,
        }));
        return Ok(());
    }

    println!("Gold Standards (SNI 13-3487-2005)");
    println!("=================================");
    println!("{:>6}  {:>8}  {}", "Karat", "Purity", "National range");
    for standard in table.iter() {
        println!(
            "{:>6}  {:>7.2}%  {}",
            standard.karat.to_string(),
            standard.percentage,
            national_range_text(standard)
        );
    }

    Ok(())
}

/// Show one karat.
pub fn cmd_lookup(json_mode: bool, karat: u32) -> Result<(), AurumError> {
    let standard = StandardTable::global().lookup(Karat::new(karat))?;

    if json_mode {
        print_json(&serde_json::json!(StandardJson::from(standard)));
        return Ok(());
    }

    println!("Karat:          {}", standard.karat);
    println!("Purity:         {:.2}%", standard.percentage);
    println!("Fraction:       {:.4}", standard.purity_fraction());
    println!("National range: {}", national_range_text(standard));

    Ok(())
}

// =============================================================================
// PURITY COMMAND
// =============================================================================

/// Convert a mass between karats.
pub fn cmd_purity(json_mode: bool, weight: f64, from: u32, to: u32) -> Result<(), AurumError> {
    let mix = StandardTable::global().convert_purity(weight, Karat::new(from), Karat::new(to))?;
    tracing::debug!(weight, from, to, total_mass = mix.total_mass, "purity conversion");

    if json_mode {
        print_json(&serde_json::json!(AlloyMixJson::from(&mix)));
        return Ok(());
    }

    println!("Purity Conversion: {}K -> {}K", from, to);
    println!("==========================");
    println!("Starting weight: {}", format_weight(weight));
    println!();
    println!("Pure gold:       {}", format_weight(mix.pure_gold_mass));
    println!("Copper:          {}", format_weight(mix.copper_mass));
    println!("Silver:          {}", format_weight(mix.silver_mass));
    println!("Total:           {}", format_weight(mix.total_mass));

    if mix.requires_removal() {
        println!();
        println!(
            "Note: {}K is purer than {}K; {} of alloy must be removed.",
            to,
            from,
            format_weight(-mix.added_alloy_mass)
        );
    }

    Ok(())
}

// =============================================================================
// CLASSIFY COMMAND
// =============================================================================

/// Classify a blend to its closest karat.
pub fn cmd_classify(json_mode: bool, mix: MixComposition) -> Result<(), AurumError> {
    let table = StandardTable::global();
    let karat = table.classify_mix(&mix)?;
    let standard = table.lookup(karat)?;
    let meets_national = standard.meets_national_standard(mix.gold);

    if json_mode {
        print_json(&serde_json::json!({
            "karat": standard.karat.value(),
            "percentage": standard.percentage,
            "total": mix.total(),
            "meets_national_standard": meets_national,
        }));
        return Ok(());
    }

    println!("Blend Classification");
    println!("====================");
    for (metal, share) in mix.shares() {
        if share != 0.0 {
            println!("  {:<10} {:>6.2}%", metal.name(), share);
        }
    }
    println!();
    println!(
        "Closest karat: {} ({:.2}%)",
        standard.karat, standard.percentage
    );
    println!(
        "National range: {} ({})",
        national_range_text(standard),
        national_verdict(meets_national)
    );

    Ok(())
}

// =============================================================================
// PRICE COMMAND
// =============================================================================

/// Price a piece from its weight and a rupiah price per gram.
pub fn cmd_price(json_mode: bool, weight: f64, price_per_gram: &str) -> Result<(), AurumError> {
    let per_gram = parse_rupiah(price_per_gram)?;
    let price = price_from_weight(weight, per_gram)?;

    if json_mode {
        print_json(&serde_json::json!({
            "weight": weight,
            "price_per_gram": per_gram,
            "price": price,
            "formatted": format_currency(price),
        }));
        return Ok(());
    }

    println!("Weight:        {}", format_weight(weight));
    println!("Price / gram:  {}", format_currency(per_gram));
    println!("Price:         {}", format_currency(price));

    Ok(())
}
