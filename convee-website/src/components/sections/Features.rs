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

use crate::icons::{Icon, IconSvg};
use leptos::*;

const FEATURES: [(Icon, &str, &str); 3] = [
    (
        Icon::Clock,
        "Zeitersparnis",
        "Sparen Sie ca. 15 Stunden Admin-Arbeit pro Woche. Zeit, die Sie für Besichtigungen nutzen können.",
    ),
    (
        Icon::CurrencyEuro,
        "Mehr Umsatz",
        "Kein Lead geht verloren. Schnelle Antworten erhöhen die Abschlusswahrscheinlichkeit um 391%.",
    ),
    (
        Icon::ShieldCheck,
        "Volle Kontrolle",
        "Alle Daten landen sauber in Ihrem CRM (OnOffice, FlowFact). Sie behalten den Überblick.",
    ),
];

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="features" class="py-24 bg-slate-950">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, description)| {
                            view! {
                                <div class="bg-slate-900/50 p-8 rounded-3xl border border-slate-800 hover:border-slate-700 transition-colors">
                                    <div class="text-blue-400 mb-6">
                                        <IconSvg icon=*icon class="w-8 h-8"/>
                                    </div>
                                    <h3 class="text-xl font-bold text-white mb-3">{*title}</h3>
                                    <p class="text-slate-400 leading-relaxed">{*description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
