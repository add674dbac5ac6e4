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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Runtime configuration.
//!
//! Build-time defaults from `convee-core`, overlaid with an optional
//! `window.__APP_CONFIG` object injected by the hosting page, e.g.
//!
//! ```html
//! <script>
//!   window.__APP_CONFIG = Object.freeze({
//!     webhookUrl: "https://n8n.example.com/webhook/convee-lead",
//!     turnstileSiteKey: "0x4AAAAAAA...",
//!   });
//! </script>
//! ```

use convee_core::{ConfigError, ConfigOverrides, SiteConfig};
use wasm_bindgen::JsValue;

pub const RUNTIME_CONFIG_KEY: &str = "__APP_CONFIG";

/// Never fails. Problems are returned for logging once the logger is up;
/// the page still renders and a broken webhook URL surfaces as the error
/// screen on submit.
pub fn load_site_config() -> (SiteConfig, Vec<ConfigError>) {
    let mut config = SiteConfig::from_build_env();
    let mut problems = Vec::new();
    match runtime_overrides() {
        Ok(Some(overrides)) => config.apply(overrides),
        Ok(None) => {}
        Err(e) => problems.push(e),
    }
    if let Err(e) = config.validate() {
        problems.push(e);
    }
    (config, problems)
}

fn runtime_overrides() -> Result<Option<ConfigOverrides>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY))
        .map_err(|e| ConfigError::Decode(format!("{e:?}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ConfigError::Decode(e.to_string()))
}
