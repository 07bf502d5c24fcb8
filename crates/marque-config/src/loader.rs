use crate::schema::{MarqueConfig, ProviderSettings};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Jsonc,
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        match ext {
            "jsonc" => Some(Self::Jsonc),
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: MarqueConfig,
    pub path: PathBuf,
    pub format: ConfigFormat,
}

pub fn load_config(config_path: Option<&Path>) -> Result<MarqueConfig> {
    resolve_config(config_path).map(|r| r.config)
}

/// Like [`load_config`], but a missing config file means defaults.
///
/// An explicitly passed path must still exist and parse.
pub fn load_config_or_default(config_path: Option<&Path>) -> Result<MarqueConfig> {
    match config_path {
        Some(path) => load_config_from_file(path).map(|r| r.config),
        None => match find_config_file() {
            Some(path) => load_config_from_file(&path).map(|r| r.config),
            None => Ok(MarqueConfig::default()),
        },
    }
}

pub fn resolve_config(config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let path = config_path
        .map(|p| p.to_path_buf())
        .or_else(find_config_file)
        .ok_or_else(|| anyhow!("No configuration file found"))?;

    load_config_from_file(&path)
}

pub fn load_config_from_file(path: &Path) -> Result<ResolvedConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| anyhow!("Unknown config format for: {}", path.display()))?;

    let config = parse_config_content(&content, format)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(ResolvedConfig {
        config: expand_env_vars(config),
        path: path.to_path_buf(),
        format,
    })
}

fn parse_config_content(content: &str, format: ConfigFormat) -> Result<MarqueConfig> {
    match format {
        ConfigFormat::Jsonc => json5::from_str(content).context("Failed to parse JSONC"),
        ConfigFormat::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content).context("Failed to parse YAML"),
    }
}

const CONFIG_CANDIDATES: &[&str] = &[
    "marque.jsonc",
    "marque.json",
    "marque.yml",
    "marque.yaml",
    ".marque.jsonc",
    ".marque.json",
    ".marque.yml",
    ".marque.yaml",
];

fn global_config_dir() -> Option<PathBuf> {
    env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("marque"))
}

fn find_config_file() -> Option<PathBuf> {
    find_all_config_files().into_iter().next()
}

pub fn find_all_config_files() -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .filter(|path| path.exists())
        .collect();

    if let Some(dir) = global_config_dir() {
        found.extend(
            CONFIG_CANDIDATES
                .iter()
                .map(|candidate| dir.join(candidate))
                .filter(|path| path.exists()),
        );
    }

    found
}

fn expand_env_vars(config: MarqueConfig) -> MarqueConfig {
    MarqueConfig {
        provider: expand_provider_settings(config.provider),
        telemetry: config.telemetry,
    }
}

fn expand_provider_settings(provider: ProviderSettings) -> ProviderSettings {
    ProviderSettings {
        model: provider.model.as_deref().map(expand_env_string),
        base_url: provider.base_url.as_deref().map(expand_env_string),
        api_key: provider
            .api_key
            .as_deref()
            .map(expand_env_string)
            .filter(|key| !key.is_empty() && !key.starts_with('$')),
        ..provider
    }
}

fn expand_env_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' {
            if chars.peek() == Some(&'{') {
                // ${VAR} syntax
                chars.next();
                let mut var_name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    var_name.push(c);
                }
                match env::var(&var_name) {
                    Ok(value) if closed => result.push_str(&value),
                    _ => {
                        result.push_str("${");
                        result.push_str(&var_name);
                        if closed {
                            result.push('}');
                        }
                    }
                }
            } else {
                // $VAR syntax; peek so the delimiter survives
                let mut var_name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        var_name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if var_name.is_empty() {
                    result.push('$');
                } else if let Ok(value) = env::var(&var_name) {
                    result.push_str(&value);
                } else {
                    result.push('$');
                    result.push_str(&var_name);
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
