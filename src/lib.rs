pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod telemetry;

pub use config::RelayConfig;
pub use error::{AppError, Result};
pub use services::chat_relay::ChatRelay;
