/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Site configuration.
//!
//! Defaults are baked in at compile time from `CONVEE_*` environment
//! variables. The page may override any of them at runtime through a
//! `window.__APP_CONFIG` object, decoded into [`ConfigOverrides`].

use reqwest::Url;
use serde::Deserialize;

use crate::error::ConfigError;

/// Value of the `source` field when nothing else is configured.
pub const DEFAULT_SOURCE_TAG: &str = "convee-landing";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Receiver of lead submissions.
    pub webhook_url: String,
    /// Public Turnstile site key.
    pub turnstile_site_key: String,
    /// Tag sent with every submission so the receiver can tell sites apart.
    pub source_tag: String,
    /// Matomo base URL with trailing slash, e.g. `https://matomo.example.com/`.
    pub matomo_base_url: Option<String>,
    pub matomo_site_id: Option<u32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl SiteConfig {
    // This is read at compile time, rebuild after changing these values.
    pub fn from_build_env() -> Self {
        Self {
            webhook_url: option_env!("CONVEE_WEBHOOK_URL")
                .unwrap_or_default()
                .to_string(),
            turnstile_site_key: option_env!("CONVEE_TURNSTILE_SITE_KEY")
                .unwrap_or_default()
                .to_string(),
            source_tag: option_env!("CONVEE_SOURCE_TAG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_SOURCE_TAG)
                .to_string(),
            matomo_base_url: non_empty(option_env!("CONVEE_MATOMO_URL")),
            matomo_site_id: option_env!("CONVEE_MATOMO_SITE_ID").and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Overlay runtime values. Blank strings are ignored.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = non_empty(overrides.webhook_url.as_deref()) {
            self.webhook_url = url;
        }
        if let Some(key) = non_empty(overrides.turnstile_site_key.as_deref()) {
            self.turnstile_site_key = key;
        }
        if let Some(tag) = non_empty(overrides.source_tag.as_deref()) {
            self.source_tag = tag;
        }
        if let Some(base) = non_empty(overrides.matomo_base_url.as_deref()) {
            self.matomo_base_url = Some(base);
        }
        if overrides.matomo_site_id.is_some() {
            self.matomo_site_id = overrides.matomo_site_id;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.webhook_url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingWebhookUrl);
        }
        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError::InvalidWebhookUrl {
                    url: url.to_string(),
                })
            }
        }
        if self.turnstile_site_key.trim().is_empty() {
            return Err(ConfigError::MissingSiteKey);
        }
        Ok(())
    }

    /// Matomo is only wired up when both pieces are present.
    pub fn matomo(&self) -> Option<(&str, u32)> {
        match (&self.matomo_base_url, self.matomo_site_id) {
            (Some(base), Some(site)) => Some((base.as_str(), site)),
            _ => None,
        }
    }
}

/// Runtime overrides, all optional. Keys are camelCase like the rest of
/// `window.__APP_CONFIG`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub webhook_url: Option<String>,
    pub turnstile_site_key: Option<String>,
    pub source_tag: Option<String>,
    pub matomo_base_url: Option<String>,
    pub matomo_site_id: Option<u32>,
}

impl ConfigOverrides {
    #[cfg(test)]
    fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Decode(e.to_string()))
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
