mod args;
mod demo;

use aims_catalog::CartProvider;
use aims_config::Config;
use aims_order::{Checkout, PercentageFeeCalculator, PlaceOrderFlow, RushEligibility, RushOrderRequest};
use anyhow::Context;
use args::CommandLine;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Serialize)]
struct RushSummary {
    item_id: i32,
    eligible: bool,
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct Summary {
    checkout: Checkout,
    total: i64,
    rush: Option<RushSummary>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aims_order=debug,aims_catalog=info,aims_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = CommandLine::parse_args();

    let config = if Path::new(&cli.config_dir).is_dir() {
        Config::load_from(&cli.config_dir)
            .with_context(|| format!("failed to load config from {}", cli.config_dir))?
    } else {
        tracing::warn!("Config directory {} not found, using defaults", cli.config_dir);
        Config::default()
    };

    let info = read_delivery_info(cli.delivery.as_deref())?;
    let cart = demo::build_cart(&cli.items)?;
    let first_item = cart.line_items().first().map(|i| i.media.id);

    let fees = PercentageFeeCalculator::from_rules(&config.shipping);
    let flow = PlaceOrderFlow::new(cart, Arc::new(fees));
    let checkout = flow.checkout(&info).context("checkout failed")?;

    let rush = cli.rush_location.clone().map(|location| {
        let item_id = cli.rush_item.or(first_item).unwrap_or_default();
        let request = RushOrderRequest {
            location: Some(location),
            item_id,
            receive_time: cli.receive_time.clone(),
            info: cli.rush_info.clone(),
            instruction: cli.rush_instruction.clone(),
        };

        let result = RushEligibility::new(config.rush_order.clone()).check_rush_order(&request);
        RushSummary {
            item_id,
            eligible: result.is_ok(),
            reason: result.err().map(|e| e.to_string()),
        }
    });

    let summary = Summary {
        total: checkout.total(),
        checkout,
        rush,
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn read_delivery_info(path: Option<&Path>) -> anyhow::Result<HashMap<String, String>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read delivery info from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("delivery info must be a JSON object of strings")
}
