// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the ROI calculator section.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use convee_core::MemoryStore;
use convee_website::components::sections::RoiCalculator::RoiCalculator;
use leptos::*;
use support::{cleanup, create_mount_point, mount_with_services, tick, type_into};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn text_of(mount: &web_sys::HtmlElement, test_id: &str) -> String {
    mount
        .query_selector(&format!("[data-testid={test_id}]"))
        .unwrap()
        .unwrap_or_else(|| panic!("no element {test_id}"))
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn default_inputs_show_the_reference_estimate() {
    let mount = create_mount_point();
    mount_with_services(&mount, MemoryStore::default(), || view! { <RoiCalculator/> });
    tick().await;

    assert_eq!(text_of(&mount, "roi-yearly"), "2.400.000 €");
    assert_eq!(text_of(&mount, "roi-monthly"), "200.000 €");
    assert_eq!(text_of(&mount, "roi-missed"), "20");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn moving_a_slider_recomputes_the_estimate() {
    let mount = create_mount_point();
    mount_with_services(&mount, MemoryStore::default(), || view! { <RoiCalculator/> });
    tick().await;

    type_into(&mount, "#roi-leads", "100");
    tick().await;

    assert_eq!(text_of(&mount, "roi-monthly"), "400.000 €");
    assert_eq!(text_of(&mount, "roi-yearly"), "4.800.000 €");

    cleanup(&mount);
}
