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

//! Logging and funnel analytics for the Convee site.
//!
//! In the browser [`SiteLogger`] is installed as the global `log` backend:
//! every record above the console threshold goes to `console.*`, every
//! record above the Matomo threshold becomes a `RustLog` event in `_paq`.
//! [`track`] pushes typed [`FunnelEvent`]s. Both are no-ops when Matomo is
//! absent, and native builds only log.

use log::{Level, LevelFilter};

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{track_page_view, SiteLogger};

/// Longest event name pushed to Matomo.
pub const MAX_EVENT_NAME_LEN: usize = 300;

#[derive(Clone, Debug)]
pub struct LoggerConfig {
    /// e.g. `https://matomo.example.com/`
    pub matomo_base_url: Option<String>,
    pub matomo_site_id: Option<u32>,
    pub console_level: LevelFilter,
    pub matomo_level: LevelFilter,
    /// Create `_paq` and load `matomo.js` if the page has not done so.
    pub inject_snippet: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            matomo_base_url: None,
            matomo_site_id: None,
            console_level: LevelFilter::Info,
            matomo_level: LevelFilter::Warn,
            inject_snippet: true,
        }
    }
}

impl LoggerConfig {
    pub fn with_matomo(mut self, base_url: &str, site_id: u32) -> Self {
        self.matomo_base_url = Some(base_url.to_string());
        self.matomo_site_id = Some(site_id);
        self
    }

    /// Most verbose level either sink wants.
    pub fn max_level(&self) -> LevelFilter {
        self.console_level.max(self.matomo_level)
    }
}

/// Steps of the lead funnel worth counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunnelEvent {
    ModalOpened,
    BlockedShown,
    VerificationMissing,
    SubmissionSent,
    SubmissionSucceeded,
    SubmissionFailed,
    RetryClicked,
    CalculatorAdjusted,
}

impl FunnelEvent {
    pub fn category(&self) -> &'static str {
        match self {
            FunnelEvent::CalculatorAdjusted => "RoiCalculator",
            _ => "LeadModal",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            FunnelEvent::ModalOpened => "open",
            FunnelEvent::BlockedShown => "blocked",
            FunnelEvent::VerificationMissing => "verification_missing",
            FunnelEvent::SubmissionSent => "submit",
            FunnelEvent::SubmissionSucceeded => "success",
            FunnelEvent::SubmissionFailed => "error",
            FunnelEvent::RetryClicked => "retry",
            FunnelEvent::CalculatorAdjusted => "adjust",
        }
    }
}

/// Record a funnel step in Matomo. Also logged at debug level.
pub fn track(event: FunnelEvent) {
    log::debug!("funnel: {}/{}", event.category(), event.action());
    #[cfg(target_arch = "wasm32")]
    browser::track_event(event.category(), event.action());
}

/// Matomo event value for a log level; higher is more severe.
pub fn level_weight(level: Level) -> f64 {
    match level {
        Level::Error => 50.0,
        Level::Warn => 40.0,
        Level::Info => 30.0,
        Level::Debug => 20.0,
        Level::Trace => 10.0,
    }
}

/// Target and message as one Matomo event name, cut to [`MAX_EVENT_NAME_LEN`]
/// bytes on a char boundary.
pub fn event_name(target: &str, message: &str) -> String {
    let mut name = format!("{target} — {message}");
    if name.len() > MAX_EVENT_NAME_LEN {
        let mut cut = MAX_EVENT_NAME_LEN;
        while !name.is_char_boundary(cut) {
            cut -= 1;
        }
        name.truncate(cut);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funnel_events_have_stable_names() {
        assert_eq!(FunnelEvent::ModalOpened.category(), "LeadModal");
        assert_eq!(FunnelEvent::ModalOpened.action(), "open");
        assert_eq!(FunnelEvent::SubmissionFailed.action(), "error");
        assert_eq!(FunnelEvent::CalculatorAdjusted.category(), "RoiCalculator");
    }

    #[test]
    fn event_name_is_truncated_on_char_boundary() {
        let long = "ü".repeat(400);
        let name = event_name("convee_website", &long);
        assert!(name.len() <= MAX_EVENT_NAME_LEN);
        assert!(name.starts_with("convee_website — ü"));
    }

    #[test]
    fn short_event_name_is_untouched() {
        assert_eq!(event_name("t", "m"), "t — m");
    }

    #[test]
    fn max_level_covers_both_sinks() {
        let config = LoggerConfig {
            console_level: LevelFilter::Warn,
            matomo_level: LevelFilter::Debug,
            ..Default::default()
        };
        assert_eq!(config.max_level(), LevelFilter::Debug);
        assert!(level_weight(Level::Error) > level_weight(Level::Warn));
    }

    #[test]
    fn with_matomo_sets_both_fields() {
        let config = LoggerConfig::default().with_matomo("https://m.example.com/", 7);
        assert_eq!(config.matomo_site_id, Some(7));
        assert_eq!(config.matomo_base_url.as_deref(), Some("https://m.example.com/"));
    }
}
