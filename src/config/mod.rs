//! Application configuration: TOML file with defaults and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GreetingConfig, UiConfig};
