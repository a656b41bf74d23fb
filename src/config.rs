use crate::form::DEFAULT_CONFIRM_DELAY;
use crate::progress::DEFAULT_DAILY_COST_CENTS;
use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/state.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// How long the post-save confirmation stays up before returning home.
    pub confirm_delay: Duration,
    pub daily_cost_cents: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let confirm_delay = lookup("APP_CONFIRM_DELAY_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CONFIRM_DELAY);
        let daily_cost_cents = lookup("APP_DAILY_COST_CENTS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DAILY_COST_CENTS);

        Self {
            port,
            data_path,
            confirm_delay,
            daily_cost_cents,
        }
    }
}
