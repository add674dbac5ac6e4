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

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::{console, window};

use crate::{event_name, level_weight, LoggerConfig};

pub struct SiteLogger {
    console_level: LevelFilter,
    matomo_level: LevelFilter,
}

impl SiteLogger {
    pub fn init(config: LoggerConfig) -> Result<(), log::SetLoggerError> {
        if config.inject_snippet {
            maybe_inject_snippet(&config);
        }

        let logger = SiteLogger {
            console_level: config.console_level,
            matomo_level: config.matomo_level,
        };
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(config.max_level());
        Ok(())
    }
}

impl Log for SiteLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level().to_level_filter() <= self.console_level.max(self.matomo_level)
    }

    fn log(&self, record: &Record) {
        if record.level().to_level_filter() <= self.console_level {
            log_to_console(record);
        }
        if record.level().to_level_filter() <= self.matomo_level {
            let name = event_name(record.target(), &record.args().to_string());
            push_event("RustLog", record.level().as_str(), Some(&name), level_weight(record.level()));
        }
    }

    fn flush(&self) {}
}

/// Record a single-page view. No-op without `_paq`.
pub fn track_page_view(title: &str, url: &str) {
    push_command(&["setCustomUrl", url]);
    push_command(&["setDocumentTitle", title]);
    push_command(&["trackPageView"]);
}

pub(crate) fn track_event(category: &str, action: &str) {
    if !has_paq() {
        return;
    }
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_str("trackEvent"));
    arr.push(&JsValue::from_str(category));
    arr.push(&JsValue::from_str(action));
    push_to_paq(&arr.into());
}

fn log_to_console(record: &Record) {
    let msg = JsValue::from_str(&format!(
        "{}: {} — {}",
        record.level(),
        record.target(),
        record.args()
    ));
    match record.level() {
        Level::Error => console::error_1(&msg),
        Level::Warn => console::warn_1(&msg),
        Level::Info => console::info_1(&msg),
        Level::Debug => console::log_1(&msg),
        Level::Trace => console::debug_1(&msg),
    }
}

fn push_event(category: &str, action: &str, name: Option<&str>, value: f64) {
    if !has_paq() {
        return;
    }
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_str("trackEvent"));
    arr.push(&JsValue::from_str(category));
    arr.push(&JsValue::from_str(action));
    arr.push(&JsValue::from_str(name.unwrap_or_default()));
    arr.push(&JsValue::from_f64(value));
    push_to_paq(&arr.into());
}

fn push_command(parts: &[&str]) {
    if !has_paq() {
        return;
    }
    let arr = js_sys::Array::new();
    for part in parts {
        arr.push(&JsValue::from_str(part));
    }
    push_to_paq(&arr.into());
}

fn has_paq() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("_paq")).unwrap_or(false))
        .unwrap_or(false)
}

fn push_to_paq(args: &JsValue) {
    let Some(w) = window() else {
        return;
    };
    let Ok(paq) = js_sys::Reflect::get(&w, &JsValue::from_str("_paq")) else {
        return;
    };
    if let Ok(push) = js_sys::Reflect::get(&paq, &JsValue::from_str("push")) {
        if let Some(func) = push.dyn_ref::<js_sys::Function>() {
            let _ = func.call1(&paq, args);
        }
    }
}

fn maybe_inject_snippet(config: &LoggerConfig) {
    let Some(w) = window() else {
        return;
    };
    if has_paq() {
        return;
    }
    let (Some(base), Some(site)) = (config.matomo_base_url.as_ref(), config.matomo_site_id) else {
        return;
    };

    let paq = js_sys::Array::new();
    let _ = js_sys::Reflect::set(&w, &JsValue::from_str("_paq"), &paq);

    push_command(&["setTrackerUrl", &format!("{base}matomo.php")]);
    push_command(&["setSiteId", &site.to_string()]);
    push_command(&["enableLinkTracking"]);

    if let Some(doc) = w.document() {
        if let Ok(script) = doc.create_element("script") {
            script.set_attribute("async", "true").ok();
            script.set_attribute("src", &format!("{base}matomo.js")).ok();
            if let Some(head) = doc.head() {
                let _ = head.append_child(&script);
            }
        }
    }
}
