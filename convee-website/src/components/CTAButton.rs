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

use crate::services::{use_lead_services, LeadServices};
use leptos::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Blue, glowing. The main call to action.
    Primary,
    /// Translucent slate with border.
    Secondary,
    /// White on dark backgrounds.
    Light,
}

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base = "inline-flex items-center justify-center gap-2 font-bold transition-all duration-200 ease-out focus:outline-none focus:ring-2 focus:ring-blue-500/40 disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-500 text-white shadow-lg shadow-blue-500/25 hover:scale-[1.02]",
        ButtonVariant::Secondary => "bg-slate-800/50 hover:bg-slate-800 border border-slate-700 text-white backdrop-blur-sm",
        ButtonVariant::Light => "bg-white text-slate-950 hover:bg-blue-50",
    };

    let size_classes = match size {
        ButtonSize::Small => "px-6 py-2.5 text-sm rounded-full",
        ButtonSize::Medium => "px-6 py-3 text-base rounded-xl",
        ButtonSize::Large => "px-8 py-4 text-lg rounded-2xl",
    };

    format!("{base} {variant_classes} {size_classes} {extra}")
}

/// A link styled as a button, for in-page anchors.
#[component]
pub fn CTAButton(
    children: Children,
    #[prop(into)] href: String,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new(), into)] class: String,
) -> impl IntoView {
    view! {
        <a href=href class=button_classes(variant, size, &class)>
            {children()}
        </a>
    }
}

/// Opens the lead modal.
#[component]
pub fn LeadButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = String::new(), into)] class: String,
) -> impl IntoView {
    let services = store_value(use_lead_services());

    view! {
        <button
            type="button"
            class=button_classes(variant, size, &class)
            on:click=move |_| services.with_value(LeadServices::open)
        >
            {children()}
        </button>
    }
}
