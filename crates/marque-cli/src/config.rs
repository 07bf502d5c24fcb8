//! Maps loaded settings onto the provider and telemetry layers

use marque_config::{MarqueConfig, ProviderSettings};
use marque_providers::ProviderConfig;
use marque_telemetry::TelemetryConfig;

use crate::commands::Cli;

/// Resolved CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub settings: MarqueConfig,
    pub model_override: Option<String>,
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file named by `--config`, or discovers one.
    pub fn load(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = marque_config::load_config_or_default(cli.config.as_deref())?;
        Ok(Self {
            settings,
            model_override: cli.model.clone(),
            verbose: cli.verbose,
        })
    }

    pub fn telemetry(&self) -> TelemetryConfig {
        let level = if self.verbose {
            "debug".to_string()
        } else {
            self.settings.telemetry.level.clone()
        };

        TelemetryConfig {
            level,
            json_output: self.settings.telemetry.json_output,
        }
    }

    /// `--model` beats the config file, which beats the default.
    ///
    /// A key in the config file beats the environment.
    pub fn provider(&self) -> ProviderConfig {
        apply_settings(
            ProviderConfig::from_env(),
            &self.settings.provider,
            self.model_override.as_deref(),
        )
    }
}

fn apply_settings(
    mut config: ProviderConfig,
    settings: &ProviderSettings,
    model_override: Option<&str>,
) -> ProviderConfig {
    if let Some(key) = &settings.api_key {
        config = config.with_api_key(key.clone());
    }
    if let Some(model) = model_override.or(settings.model.as_deref()) {
        config = config.with_model(model);
    }
    if let Some(url) = &settings.base_url {
        config = config.with_base_url(url.clone());
    }
    if let Some(temperature) = settings.temperature {
        config = config.with_temperature(temperature);
    }
    if let Some(max) = settings.max_output_tokens {
        config = config.with_max_output_tokens(max);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use marque_providers::DEFAULT_GEMINI_MODEL;
    use secrecy::ExposeSecret;

    #[test]
    fn cli_model_overrides_settings() {
        let settings = ProviderSettings {
            model: Some("gemini-2.5-pro".to_string()),
            ..Default::default()
        };

        let config = apply_settings(ProviderConfig::default(), &settings, Some("custom-model"));
        assert_eq!(config.model, "custom-model");

        let config = apply_settings(ProviderConfig::default(), &settings, None);
        assert_eq!(config.model, "gemini-2.5-pro");
    }

    #[test]
    fn defaults_survive_empty_settings() {
        let config = apply_settings(ProviderConfig::default(), &ProviderSettings::default(), None);
        assert_eq!(config.model, DEFAULT_GEMINI_MODEL);
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn settings_key_replaces_env_key() {
        let settings = ProviderSettings {
            api_key: Some("from-file".to_string()),
            base_url: Some("http://localhost:9".to_string()),
            max_output_tokens: Some(256),
            ..Default::default()
        };

        let config = apply_settings(ProviderConfig::gemini("from-env"), &settings, None);
        assert_eq!(config.api_key.as_ref().unwrap().expose_secret(), "from-file");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9"));
        assert_eq!(config.max_output_tokens, Some(256));
    }

    #[test]
    fn verbose_forces_debug_level() {
        let config = CliConfig {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(config.telemetry().level, "debug");

        let config = CliConfig::default();
        assert_eq!(config.telemetry().level, "warn");
    }
}
