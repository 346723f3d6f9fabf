use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub rush_order: RushOrderRules,
    #[serde(default)]
    pub shipping: ShippingRules,
}

/// Allow-lists that decide which deliveries qualify for rush handling.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RushOrderRules {
    #[serde(default = "default_provinces")]
    pub provinces: Vec<String>,
    #[serde(default = "default_item_ids")]
    pub item_ids: Vec<i32>,
}

impl Default for RushOrderRules {
    fn default() -> Self {
        Self {
            provinces: default_provinces(),
            item_ids: default_item_ids(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShippingRules {
    /// Upper bound (exclusive) of the shipping fee as a fraction of the order amount.
    #[serde(default = "default_max_fee_rate")]
    pub max_fee_rate: f64,
}

impl Default for ShippingRules {
    fn default() -> Self {
        Self {
            max_fee_rate: default_max_fee_rate(),
        }
    }
}

fn default_provinces() -> Vec<String> {
    vec!["Hà Nội".to_string()]
}

fn default_item_ids() -> Vec<i32> {
    vec![38]
}

fn default_max_fee_rate() -> f64 {
    0.10
}

impl Config {
    /// Layer `default`, the `RUN_MODE` file, `local` and `AIMS_*` variables from `dir`
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        tracing::debug!("Loading configuration from {} (run mode {})", dir, run_mode);

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `AIMS_SHIPPING__MAX_FEE_RATE=0.05`, `AIMS_RUSH_ORDER__ITEM_IDS=38,40`
            .add_source(
                config::Environment::with_prefix("AIMS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("rush_order.provinces")
                    .with_list_parse_key("rush_order.item_ids"),
            )
            .build()?;

        s.try_deserialize()
    }
}
