mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Account, AuthConfig, Config, MAX_LATENCY_MS};
