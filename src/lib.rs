pub mod achievements;
pub mod app;
pub mod chart;
pub mod chat;
pub mod clock;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod state;
pub mod stats;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod validation;

pub use app::router;
pub use config::Config;
pub use form::{EntrySink, LogForm};
pub use state::AppState;
pub use storage::load_data;
