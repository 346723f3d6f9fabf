use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "aims")]
#[command(about = "Place an order from the demo store's cart.")]
pub struct CommandLine {
    /// JSON object with "Address", "Name" and "Phone number"; read from stdin when omitted
    #[arg(short, long)]
    pub delivery: Option<PathBuf>,

    /// Directory holding default.toml and per-environment overrides
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Cart entries as MEDIA_ID:QUANTITY; the whole demo catalog when omitted
    #[arg(short, long = "item")]
    pub items: Vec<CartEntry>,

    /// Province to check for rush delivery
    #[arg(long)]
    pub rush_location: Option<String>,

    /// Media id to rush; defaults to the first cart entry
    #[arg(long)]
    pub rush_item: Option<i32>,

    /// dd-MM-yyyy HH:mm
    #[arg(long)]
    pub receive_time: Option<String>,

    #[arg(long)]
    pub rush_info: Option<String>,

    #[arg(long)]
    pub rush_instruction: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub media_id: i32,
    pub quantity: u32,
}

impl FromStr for CartEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s
            .split_once(':')
            .ok_or_else(|| format!("expected MEDIA_ID:QUANTITY, got {}", s))?;

        let media_id = id
            .trim()
            .parse()
            .map_err(|e| format!("bad media id {:?}: {}", id, e))?;
        let quantity = quantity
            .trim()
            .parse()
            .map_err(|e| format!("bad quantity {:?}: {}", quantity, e))?;

        Ok(Self { media_id, quantity })
    }
}
