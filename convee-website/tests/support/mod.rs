// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for convee-website component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use convee_core::rate_limit::LAST_SUBMISSION_KEY;
use convee_core::{MemoryStore, SiteConfig, Webhook};
use convee_website::services::{provide_lead_services, LeadServices};
use convee_website::storage::SiteStore;
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::HtmlElement {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.dyn_into().unwrap()
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::HtmlElement) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Let Leptos flush pending effects.
pub async fn tick() {
    gloo_timers::future::sleep(Duration::ZERO).await;
}

/// Current value of an `<input>`.
pub fn input_value(mount: &web_sys::HtmlElement, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap()
        .value()
}

pub fn click(mount: &web_sys::HtmlElement, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

/// Set an input's value and fire a bubbling `input` event like typing would.
pub fn type_into(mount: &web_sys::HtmlElement, selector: &str, value: &str) {
    let input: web_sys::HtmlInputElement = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into()
        .unwrap();
    input.set_value(value);
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

// ---------------------------------------------------------------------------
// Lead services
// ---------------------------------------------------------------------------

pub fn test_config() -> SiteConfig {
    SiteConfig {
        webhook_url: "http://127.0.0.1:9/webhook".to_string(),
        turnstile_site_key: "1x00000000000000000000AA".to_string(),
        source_tag: "convee-test".to_string(),
        matomo_base_url: None,
        matomo_site_id: None,
    }
}

/// A store whose last submission was `ago` before now.
pub fn store_submitted_ago(ago: Duration) -> MemoryStore {
    let stamp = js_sys::Date::now() as i64 - ago.as_millis() as i64;
    MemoryStore::with_entry(LAST_SUBMISSION_KEY, &stamp.to_string())
}

/// Mount `f` with lead services backed by `store`.
pub fn mount_with_services<F, N>(mount: &web_sys::HtmlElement, store: MemoryStore, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    mount_to(mount.clone(), move || {
        provide_lead_services(LeadServices::new(test_config(), SiteStore::Memory(store)));
        f()
    });
}

/// Like [`mount_with_services`], but deliveries go to `webhook`.
pub fn mount_with_webhook<W, F, N>(
    mount: &web_sys::HtmlElement,
    store: MemoryStore,
    webhook: W,
    f: F,
) where
    W: Webhook + 'static,
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    mount_to(mount.clone(), move || {
        provide_lead_services(LeadServices::with_webhook(
            test_config(),
            SiteStore::Memory(store),
            webhook,
        ));
        f()
    });
}

// ---------------------------------------------------------------------------
// Turnstile stand-in
// ---------------------------------------------------------------------------

/// Install a `window.turnstile` that passes every visitor immediately.
///
/// `render` hands out ids `widget-1`, `widget-2`, ...; ids passed to
/// `remove` are collected for [`removed_widgets`].
pub fn install_passing_turnstile() {
    let window = gloo_utils::window();
    let render = js_sys::Function::new_with_args(
        "el, opts",
        "window.__turnstileRendered = (window.__turnstileRendered || 0) + 1; \
         opts.callback('test-pass-token'); \
         return 'widget-' + window.__turnstileRendered;",
    );
    let remove = js_sys::Function::new_with_args(
        "id",
        "(window.__turnstileRemoved = window.__turnstileRemoved || []).push(id);",
    );
    let turnstile = js_sys::Object::new();
    js_sys::Reflect::set(&turnstile, &"render".into(), &render).unwrap();
    js_sys::Reflect::set(&turnstile, &"remove".into(), &remove).unwrap();
    js_sys::Reflect::set(&window, &"__turnstileRendered".into(), &JsValue::from(0)).unwrap();
    js_sys::Reflect::set(&window, &"__turnstileRemoved".into(), &js_sys::Array::new()).unwrap();
    js_sys::Reflect::set(&window, &"turnstile".into(), &turnstile).unwrap();
}

pub fn removed_widgets() -> Vec<String> {
    let removed =
        js_sys::Reflect::get(&gloo_utils::window(), &"__turnstileRemoved".into()).unwrap();
    js_sys::Array::from(&removed)
        .iter()
        .filter_map(|id| id.as_string())
        .collect()
}
