// Configuration type definitions

use serde::Deserialize;

/// Suggestion endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            base_url: default_base_url(),
        }
    }
}

/// Debounce delays in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_suggest_debounce_ms")]
    pub suggest_debounce_ms: u64,
    #[serde(default = "default_filter_debounce_ms")]
    pub filter_debounce_ms: u64,
}

fn default_suggest_debounce_ms() -> u64 {
    300
}

fn default_filter_debounce_ms() -> u64 {
    1000
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            suggest_debounce_ms: default_suggest_debounce_ms(),
            filter_debounce_ms: default_filter_debounce_ms(),
        }
    }
}

/// Price filter section
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_filter_enabled")]
    pub enabled: bool,
}

fn default_filter_enabled() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            enabled: default_filter_enabled(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}
