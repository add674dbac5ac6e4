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

//! The lead capture dialog. Renders whatever state the controller is in.

use std::time::Duration;

use crate::components::CTAButton::{button_classes, ButtonSize, ButtonVariant};
use crate::icons::{Icon, IconSvg};
use crate::services::{use_lead_services, LeadServices};
use crate::turnstile::{TurnstileToken, TurnstileWidget};
use convee_core::form::MESSAGE_MAX_CHARS;
use convee_core::{ModalState, SubmissionForm, SubmitError};
use leptos::*;

const INPUT_CLASS: &str = "w-full bg-slate-950 border border-slate-700 rounded-xl px-4 py-3 text-white placeholder-slate-500 focus:outline-none focus:border-blue-500";

/// Whole hours until the cooldown ends, rounded up.
pub fn hours_left(remaining: Duration) -> u64 {
    remaining.as_secs().div_ceil(3600).max(1)
}

#[component]
pub fn LeadModal() -> impl IntoView {
    let services = store_value(use_lead_services());
    let state = services.with_value(|s| s.state);
    let site_key = store_value(services.with_value(|s| s.config.turnstile_site_key.clone()));

    let form = create_rw_signal(SubmissionForm::default());
    let token = TurnstileToken::new();
    let prompt = create_rw_signal(None::<String>);

    // Form and Loading share one view so the widget is not re-rendered
    // when the request starts.
    let editing = create_memo(move |_| matches!(state.get(), ModalState::Form | ModalState::Loading));
    let loading = move || state.get() == ModalState::Loading;

    let close = move |_: ev::MouseEvent| {
        services.with_value(LeadServices::close);
        form.set(SubmissionForm::default());
        token.clear();
        prompt.set(None);
    };

    let retry = move |_: ev::MouseEvent| {
        token.clear();
        prompt.set(None);
        services.with_value(LeadServices::retry);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.with_untracked(|f| services.with_value(|s| s.submit(f, &token)));
        match result {
            Ok(()) => prompt.set(None),
            // A request is already pending.
            Err(SubmitError::NotAccepting(_)) => {}
            Err(e) => {
                log::debug!("Submit rejected locally: {e}");
                prompt.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Show when=move || state.get() != ModalState::Closed>
            <div
                class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm"
                role="dialog"
                aria-modal="true"
            >
                <div class="relative w-full max-w-lg bg-slate-900 border border-slate-800 rounded-3xl p-8 shadow-2xl max-h-[90vh] overflow-y-auto">
                    <button
                        type="button"
                        class="absolute top-4 right-4 text-slate-500 hover:text-white"
                        aria-label="Schließen"
                        on:click=close
                    >
                        <IconSvg icon=Icon::XMark/>
                    </button>

                    <Show when=move || editing.get()>
                        <h3 class="text-2xl font-bold text-white mb-2">"Erstgespräch sichern"</h3>
                        <p class="text-slate-400 mb-6">
                            "Erzählen Sie uns kurz von Ihrem Büro. Wir melden uns innerhalb von 24 Stunden."
                        </p>
                        <form class="space-y-4" on:submit=on_submit novalidate=true>
                            <input
                                type="text"
                                name="name"
                                placeholder="Ihr Name *"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="E-Mail-Adresse *"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                            <input
                                type="url"
                                name="website"
                                placeholder="Website (optional)"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.website.clone())
                                on:input=move |ev| form.update(|f| f.website = event_target_value(&ev))
                            />
                            <div>
                                <textarea
                                    name="message"
                                    rows="4"
                                    maxlength=MESSAGE_MAX_CHARS
                                    placeholder="Wie viele Anfragen bekommen Sie im Monat? (optional)"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.set_message(&event_target_value(&ev)))
                                    }
                                ></textarea>
                                <p class="text-right text-xs text-slate-500 mt-1" data-testid="chars-left">
                                    {move || form.with(SubmissionForm::message_chars_left)}
                                    " Zeichen übrig"
                                </p>
                            </div>

                            <TurnstileWidget site_key=site_key.get_value() token/>

                            {move || {
                                prompt
                                    .get()
                                    .map(|text| {
                                        view! {
                                            <p class="flex items-center gap-2 text-sm text-amber-400" data-testid="prompt">
                                                <IconSvg icon=Icon::Exclamation class="w-5 h-5 shrink-0"/>
                                                {text}
                                            </p>
                                        }
                                    })
                                }}

                            <button
                                type="submit"
                                class=button_classes(ButtonVariant::Primary, ButtonSize::Medium, "w-full")
                                disabled=loading
                            >
                                {move || if loading() { "Wird gesendet…" } else { "Anfrage senden" }}
                            </button>
                        </form>
                    </Show>

                    {move || match state.get() {
                        ModalState::Success => view! {
                            <StatusScreen
                                icon=Icon::CheckCircle
                                tone="text-emerald-400"
                                title="Vielen Dank!"
                                text="Ihre Anfrage ist eingegangen. Wir melden uns in Kürze bei Ihnen.".to_string()
                            />
                            <button type="button" class=button_classes(ButtonVariant::Secondary, ButtonSize::Medium, "w-full mt-6") on:click=close>
                                "Schließen"
                            </button>
                        }
                        .into_view(),
                        ModalState::Error => view! {
                            <StatusScreen
                                icon=Icon::XCircle
                                tone="text-red-400"
                                title="Das hat leider nicht geklappt"
                                text="Ihre Anfrage konnte nicht übermittelt werden. Bitte versuchen Sie es erneut.".to_string()
                            />
                            <button type="button" class=button_classes(ButtonVariant::Primary, ButtonSize::Medium, "w-full mt-6") data-testid="retry" on:click=retry>
                                "Erneut versuchen"
                            </button>
                        }
                        .into_view(),
                        ModalState::Blocked => {
                            let hours = services
                                .with_value(LeadServices::cooldown_remaining)
                                .map_or(24, hours_left);
                            view! {
                                <StatusScreen
                                    icon=Icon::Clock
                                    tone="text-blue-400"
                                    title="Wir haben Ihre Anfrage bereits"
                                    text=format!(
                                        "Sie haben uns in den letzten 24 Stunden schon geschrieben. Eine neue Anfrage ist wieder möglich in {hours} Stunden."
                                    )
                                />
                                <button type="button" class=button_classes(ButtonVariant::Secondary, ButtonSize::Medium, "w-full mt-6") on:click=close>
                                    "Schließen"
                                </button>
                            }
                            .into_view()
                        }
                        ModalState::Closed | ModalState::Form | ModalState::Loading => ().into_view(),
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn StatusScreen(icon: Icon, tone: &'static str, title: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="text-center pt-4" data-testid="status">
            <div class=format!("flex justify-center mb-4 {tone}")>
                <IconSvg icon class="w-16 h-16"/>
            </div>
            <h3 class="text-2xl font-bold text-white mb-3">{title}</h3>
            <p class="text-slate-400 leading-relaxed">{text}</p>
        </div>
    }
}
