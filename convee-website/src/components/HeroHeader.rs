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

use crate::components::CTAButton::{ButtonSize, ButtonVariant, CTAButton, LeadButton};
use crate::icons::{Icon, IconSvg};
use leptos::*;

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <div id="vorteile" class="pt-40 pb-20 relative overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-500/20 rounded-full blur-[120px] -z-10 opacity-40"></div>

            <div class="max-w-7xl mx-auto px-6 text-center z-10 relative">
                <div class="inline-flex items-center gap-2 bg-slate-800/50 border border-slate-700/50 rounded-full px-4 py-1.5 mb-8 backdrop-blur-sm">
                    <span class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse"></span>
                    <span class="text-sm font-medium text-slate-300">
                        "Jetzt verfügbar für Immobilienmakler"
                    </span>
                </div>

                <h1 class="text-5xl md:text-7xl font-bold tracking-tight mb-8 leading-[1.1]">
                    "Ihr neuer Mitarbeiter"
                    <br/>
                    <span class="gradient-text">"arbeitet 24/7. Ohne Gehalt."</span>
                </h1>

                <p class="text-xl text-slate-400 max-w-2xl mx-auto mb-10 leading-relaxed">
                    "Automatisieren Sie Vorqualifizierung, Datenerfassung und Terminbuchung. "
                    "Kein \"Ich melde mich später\". Convee antwortet sofort, auch Sonntag nachts."
                </p>

                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <LeadButton size=ButtonSize::Large>
                        "Demo ansehen"
                        <IconSvg icon=Icon::ChevronRight class="w-5 h-5" stroke_width=2.5/>
                    </LeadButton>
                    <CTAButton href="#roi" variant=ButtonVariant::Secondary size=ButtonSize::Large>
                        "ROI berechnen"
                    </CTAButton>
                </div>
            </div>
        </div>
    }
}
