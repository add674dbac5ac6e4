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

//! Cloudflare Turnstile, rendered explicitly into the lead form.
//!
//! The page loads `https://challenges.cloudflare.com/turnstile/v0/api.js?render=explicit`;
//! each time the form mounts we call `turnstile.render` on a fresh container
//! and `turnstile.remove` when it unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use convee_core::{VerificationToken, Verifier};
use leptos::*;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Error)]
pub enum TurnstileError {
    #[error("window.turnstile is not loaded")]
    ScriptMissing,

    #[error("turnstile call failed: {0}")]
    Call(String),
}

/// The widget's current pass token. Cleared on expiry and when the form
/// is shown again after a failed send.
#[derive(Clone, Copy)]
pub struct TurnstileToken(RwSignal<Option<VerificationToken>>);

impl TurnstileToken {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    fn accept(&self, raw: &str) {
        self.0.set(VerificationToken::parse(raw));
    }
}

impl Default for TurnstileToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Verifier for TurnstileToken {
    fn token(&self) -> Option<VerificationToken> {
        self.0.get_untracked()
    }
}

/// A rendered widget and the callbacks it calls into.
struct Rendered {
    id: JsValue,
    _on_token: Closure<dyn Fn(String)>,
    _on_expired: Closure<dyn Fn()>,
}

#[component]
pub fn TurnstileWidget(#[prop(into)] site_key: String, token: TurnstileToken) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let rendered: Rc<RefCell<Option<Rendered>>> = Rc::default();

    container.on_load({
        let rendered = Rc::clone(&rendered);
        move |el| match render_widget(&el, &site_key, token) {
            Ok(widget) => *rendered.borrow_mut() = Some(widget),
            Err(e) => log::warn!("Verification widget unavailable: {e}"),
        }
    });

    on_cleanup(move || {
        if let Some(widget) = rendered.borrow_mut().take() {
            if let Err(e) = remove_widget(&widget.id) {
                log::debug!("Verification widget not removed: {e}");
            }
        }
    });

    view! { <div node_ref=container class="flex justify-center min-h-[65px]"></div> }
}

fn turnstile_fn(name: &str) -> Result<(JsValue, js_sys::Function), TurnstileError> {
    let window = web_sys::window().ok_or(TurnstileError::ScriptMissing)?;
    let turnstile = js_sys::Reflect::get(&window, &JsValue::from_str("turnstile"))
        .map_err(|_| TurnstileError::ScriptMissing)?;
    if turnstile.is_undefined() {
        return Err(TurnstileError::ScriptMissing);
    }
    let func = js_sys::Reflect::get(&turnstile, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into().ok())
        .ok_or(TurnstileError::ScriptMissing)?;
    Ok((turnstile, func))
}

fn render_widget(
    el: &web_sys::HtmlElement,
    site_key: &str,
    token: TurnstileToken,
) -> Result<Rendered, TurnstileError> {
    let (turnstile, render) = turnstile_fn("render")?;

    let on_token = Closure::<dyn Fn(String)>::new(move |raw: String| token.accept(&raw));
    let on_expired = Closure::<dyn Fn()>::new(move || token.clear());

    let options = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), value)
            .map_err(|e| TurnstileError::Call(format!("{e:?}")))
    };
    set("sitekey", &JsValue::from_str(site_key))?;
    set("callback", on_token.as_ref())?;
    set("expired-callback", on_expired.as_ref())?;
    set("language", &JsValue::from_str("de"))?;

    let id = render
        .call2(&turnstile, el, &options)
        .map_err(|e| TurnstileError::Call(format!("{e:?}")))?;

    Ok(Rendered {
        id,
        _on_token: on_token,
        _on_expired: on_expired,
    })
}

/// Unregister the widget so its callbacks can be dropped.
fn remove_widget(id: &JsValue) -> Result<(), TurnstileError> {
    let (turnstile, remove) = turnstile_fn("remove")?;
    remove
        .call1(&turnstile, id)
        .map(|_| ())
        .map_err(|e| TurnstileError::Call(format!("{e:?}")))
}
