// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for sending a lead from the modal: the loading screen
// while the webhook is pending, success and error outcomes, retry, and
// cleanup of the verification widget.
//
// Lives in its own test binary because it installs a passing
// `window.turnstile`.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use convee_core::rate_limit::LAST_SUBMISSION_KEY;
use convee_core::{DeliveryError, KeyValueStore, LeadSubmission, MemoryStore, Webhook};
use convee_website::components::CTAButton::LeadButton;
use convee_website::components::LeadModal::LeadModal;
use leptos::*;
use support::{
    cleanup, click, create_mount_point, input_value, install_passing_turnstile, mount_with_webhook,
    removed_widgets, tick, type_into,
};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const DELIVERY_MS: u32 = 200;

/// Answers after a short delay with a fixed outcome.
#[derive(Clone)]
struct SlowWebhook {
    accept: bool,
    calls: Rc<Cell<usize>>,
}

impl SlowWebhook {
    fn new(accept: bool) -> Self {
        Self {
            accept,
            calls: Rc::default(),
        }
    }
}

impl Webhook for SlowWebhook {
    async fn deliver(&self, _submission: &LeadSubmission) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        gloo_timers::future::TimeoutFuture::new(DELIVERY_MS).await;
        if self.accept {
            Ok(())
        } else {
            Err(DeliveryError::Rejected {
                status: 500,
                body: "internal error".to_string(),
            })
        }
    }
}

fn modal_page() -> impl IntoView {
    view! {
        <LeadButton class="open-modal">"Demo ansehen"</LeadButton>
        <LeadModal/>
    }
}

async fn wait_for_delivery() {
    gloo_timers::future::sleep(Duration::from_millis(u64::from(DELIVERY_MS) + 100)).await;
}

fn fill_form(mount: &web_sys::HtmlElement) {
    type_into(mount, "input[name=name]", "Erika Muster");
    type_into(mount, "input[name=email]", "erika@makler.de");
    type_into(mount, "input[name=website]", "https://makler.de");
}

fn submit_label(mount: &web_sys::HtmlElement) -> String {
    mount
        .query_selector("button[type=submit]")
        .unwrap()
        .expect("submit button")
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn failed_delivery_shows_error_and_retry_keeps_the_input() {
    install_passing_turnstile();
    let mount = create_mount_point();
    let store = MemoryStore::default();
    let webhook = SlowWebhook::new(false);
    mount_with_webhook(&mount, store.clone(), webhook.clone(), modal_page);
    tick().await;

    click(&mount, ".open-modal");
    tick().await;
    fill_form(&mount);
    click(&mount, "button[type=submit]");
    tick().await;

    assert!(submit_label(&mount).contains("Wird gesendet"));
    assert_eq!(webhook.calls.get(), 1);

    wait_for_delivery().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Das hat leider nicht geklappt"), "text was {text:?}");
    assert!(store.is_empty(), "a failed send must not start the cooldown");

    click(&mount, "[data-testid=retry]");
    tick().await;

    assert!(mount.query_selector("form").unwrap().is_some());
    assert_eq!(input_value(&mount, "input[name=name]"), "Erika Muster");
    assert_eq!(input_value(&mount, "input[name=email]"), "erika@makler.de");
    assert_eq!(input_value(&mount, "input[name=website]"), "https://makler.de");
    assert!(submit_label(&mount).contains("Anfrage senden"));

    // The widget from the first attempt went away with the form.
    assert_eq!(removed_widgets(), vec!["widget-1".to_string()]);

    click(&mount, "button[type=submit]");
    tick().await;
    assert_eq!(webhook.calls.get(), 2, "retry gets a fresh token and sends again");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn accepted_delivery_shows_thanks_and_starts_the_cooldown() {
    install_passing_turnstile();
    let mount = create_mount_point();
    let store = MemoryStore::default();
    let webhook = SlowWebhook::new(true);
    mount_with_webhook(&mount, store.clone(), webhook.clone(), modal_page);
    tick().await;

    click(&mount, ".open-modal");
    tick().await;
    fill_form(&mount);
    let before = js_sys::Date::now() as i64;
    click(&mount, "button[type=submit]");
    wait_for_delivery().await;

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Vielen Dank!"), "text was {text:?}");
    assert_eq!(webhook.calls.get(), 1);

    let stamp: i64 = store
        .read(LAST_SUBMISSION_KEY)
        .expect("cooldown timestamp written")
        .parse()
        .unwrap();
    assert!(stamp >= before && stamp <= js_sys::Date::now() as i64);

    click(&mount, "button[aria-label=Schließen]");
    tick().await;
    click(&mount, ".open-modal");
    tick().await;

    assert!(mount.query_selector("form").unwrap().is_none());
    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Wir haben Ihre Anfrage bereits"), "text was {text:?}");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn closing_the_modal_removes_the_widget() {
    install_passing_turnstile();
    let mount = create_mount_point();
    mount_with_webhook(&mount, MemoryStore::default(), SlowWebhook::new(true), modal_page);
    tick().await;

    click(&mount, ".open-modal");
    tick().await;
    assert!(removed_widgets().is_empty());

    click(&mount, "button[aria-label=Schließen]");
    tick().await;
    assert_eq!(removed_widgets(), vec!["widget-1".to_string()]);

    click(&mount, ".open-modal");
    tick().await;
    click(&mount, "button[aria-label=Schließen]");
    tick().await;
    assert_eq!(removed_widgets(), vec!["widget-1".to_string(), "widget-2".to_string()]);

    cleanup(&mount);
}
