use serde::{Deserialize, Serialize};

/// Main Marque configuration
///
/// Configuration is loaded from (in priority order):
/// 1. `marque.jsonc` - JSON with comments
/// 2. `marque.json` - Standard JSON
/// 3. `marque.yml` / `marque.yaml` - YAML format
///
/// Also checks hidden variants (`.marque.*`) and `~/.config/marque/` for global config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarqueConfig {
    /// Generation provider settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

/// Generation provider settings
///
/// # Example
///
/// ```yaml
/// provider:
///   model: gemini-2.5-flash
///   api_key: ${GEMINI_API_KEY}
///   temperature: 0.7
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Model name (default: gemini-2.5-flash)
    #[serde(default)]
    pub model: Option<String>,

    /// API base URL override, mostly for proxies and tests
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key; prefer `${GEMINI_API_KEY}` over a literal value
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// Default filter when `RUST_LOG` is unset (default: warn)
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json_output: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_output: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
