// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration.
//!
//! Deployment values are injected into the page as a frozen
//! `window.__APP_CONFIG` object and read once at start-up.

use grainlify_types::{truthy, LandingStatsDisplay, Theme};
use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub const APP_CONFIG_KEY: &str = "__APP_CONFIG";
pub const DEFAULT_BRAND_NAME: &str = "Grainlify";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Theme used when the visitor has neither a stored preference nor a
    /// dark colour-scheme preference.
    #[serde(rename = "defaultTheme")]
    pub default_theme: Option<Theme>,
    #[serde(rename = "brandName")]
    pub brand_name: String,
    /// Seed figures for the built-in statistics provider.
    #[serde(rename = "landingStats")]
    pub landing_stats: LandingStatsDisplay,
    #[serde(rename = "persistTheme")]
    pub persist_theme: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            default_theme: None,
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            landing_stats: LandingStatsDisplay::default(),
            persist_theme: "true".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Whether theme toggles should be written to `localStorage`.
    pub fn persist_theme(&self) -> bool {
        truthy(Some(self.persist_theme.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Runtime configuration not found (window.__APP_CONFIG missing)")]
    Missing,
    #[error("Failed to parse __APP_CONFIG: {0}")]
    Invalid(String),
}

pub fn app_config() -> Result<RuntimeConfig, ConfigError> {
    let win = web_sys::window().ok_or(ConfigError::Missing)?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str(APP_CONFIG_KEY))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err(ConfigError::Missing);
    }
    from_js_value::<RuntimeConfig>(config).map_err(|e| ConfigError::Invalid(format!("{e:?}")))
}

/// Like [`app_config`], but a missing object falls back to the defaults.
/// Only a present-but-malformed object is reported as an error.
pub fn app_config_or_default() -> Result<RuntimeConfig, ConfigError> {
    match app_config() {
        Ok(config) => {
            log::info!("Loaded runtime config for {}", config.brand_name);
            Ok(config)
        }
        Err(ConfigError::Missing) => {
            log::warn!("{}; using defaults", ConfigError::Missing);
            Ok(RuntimeConfig::default())
        }
        Err(e) => {
            log::error!("{e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.brand_name, "Grainlify");
        assert!(config.persist_theme());
    }

    #[test]
    fn reads_camel_case_fields() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{
                "defaultTheme": "dark",
                "brandName": "Acme",
                "landingStats": { "activeProjects": 7 },
                "persistTheme": "false"
            }"#,
        )
        .unwrap();
        assert_eq!(config.default_theme, Some(Theme::Dark));
        assert_eq!(config.brand_name, "Acme");
        assert_eq!(config.landing_stats.active_projects, 7);
        assert!(!config.persist_theme());
    }

    #[test]
    fn rejects_unknown_theme() {
        let parsed = serde_json::from_str::<RuntimeConfig>(r#"{ "defaultTheme": "sepia" }"#);
        assert!(parsed.is_err());
    }
}
