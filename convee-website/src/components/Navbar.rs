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

use crate::components::CTAButton::{ButtonSize, ButtonVariant, LeadButton};
use crate::icons::{Icon, IconSvg};
use leptos::*;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#vorteile", "Vorteile"),
    ("#vergleich", "Mensch vs. AI"),
    ("#features", "Funktionen"),
    ("#roi", "ROI-Rechner"),
];

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="w-10 h-10 bg-gradient-to-br from-blue-600 to-indigo-600 rounded-xl flex items-center justify-center shadow-lg shadow-blue-500/20">
                <span class="font-bold text-white text-xl">"C"</span>
            </div>
            <span class="text-xl font-bold tracking-tight">"Convee"</span>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="fixed w-full z-50 top-0 bg-[#020617]/80 backdrop-blur-lg border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-20 flex items-center justify-between">
                <a href="#top">
                    <Logo/>
                </a>

                <div class="hidden md:flex gap-8 text-sm font-medium text-slate-400">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="hover:text-white transition-colors">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <LeadButton variant=ButtonVariant::Light size=ButtonSize::Small class="hidden md:inline-flex">
                    "Erstgespräch sichern"
                </LeadButton>

                <button
                    type="button"
                    class="md:hidden text-white"
                    aria-label="Menü"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        let icon = if menu_open.get() { Icon::XMark } else { Icon::Bars };
                        view! { <IconSvg icon/> }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden absolute top-20 left-0 w-full bg-slate-950 border-b border-slate-800 p-6 flex flex-col gap-4 shadow-2xl">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-lg font-medium text-slate-300"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div on:click=move |_| set_menu_open.set(false)>
                        <LeadButton class="w-full mt-2">"Termin buchen"</LeadButton>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
