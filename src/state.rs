use crate::config::Config;
use crate::models::AppData;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub confirm_delay: Duration,
    pub daily_cost_cents: u64,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(config: &Config, data: AppData) -> Self {
        Self {
            data_path: config.data_path.clone(),
            confirm_delay: config.confirm_delay,
            daily_cost_cents: config.daily_cost_cents,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
