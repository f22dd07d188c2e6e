use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub greeting: GreetingConfig,
}

/// Presentation-layer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Greeting feature settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Endpoint path the greeting service fetches from.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_tick_ms() -> u64 {
    250
}

fn default_endpoint() -> String {
    "/v1/greeting".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.ui.tick_ms, 250);
        assert_eq!(config.greeting.endpoint, "/v1/greeting");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[ui]\ntick_ms = 100\n").unwrap();
        assert_eq!(config.ui.tick_ms, 100);
        assert_eq!(config.greeting.endpoint, "/v1/greeting");
    }
}
