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

#[component]
pub fn ComparisonSection() -> impl IntoView {
    view! {
        <section id="vergleich" class="py-24 bg-[#020617]">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">"Warum Convee?"</h2>
                    <p class="text-slate-400 max-w-2xl mx-auto text-lg">
                        "Ihr neuer digitaler Mitarbeiter ist nicht nur schneller, sondern auch drastisch günstiger als traditionelles Personal."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    <ComparisonCard
                        title="Traditionell"
                        icon=Icon::Clock
                        points=&[
                            "Verfügbar: Mo-Fr, 9-17 Uhr",
                            "Reaktionszeit: Stunden/Tage",
                            "Kosten: ~3.500€ / Monat",
                            "Krankheit & Urlaub",
                        ]
                        highlighted=false
                    />
                    <ComparisonCard
                        title="Convee AI"
                        icon=Icon::Bolt
                        points=&[
                            "Verfügbar: 24/7 (auch Feiertags)",
                            "Reaktionszeit: < 60 Sekunden",
                            "Kosten: Ein Bruchteil davon",
                            "Niemals krank, immer freundlich",
                        ]
                        highlighted=true
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ComparisonCard(
    title: &'static str,
    icon: Icon,
    points: &'static [&'static str],
    highlighted: bool,
) -> impl IntoView {
    let (card, tile, heading, mark, mark_class, point_class) = if highlighted {
        (
            "bg-slate-800/50 border-blue-500/30 relative overflow-hidden",
            "bg-blue-600 text-white shadow-lg shadow-blue-500/20",
            "text-white",
            Icon::CheckCircle,
            "w-5 h-5 text-emerald-400 shrink-0",
            "text-white font-medium",
        )
    } else {
        (
            "bg-slate-900/50 border-slate-800 opacity-70",
            "bg-slate-800 text-slate-400",
            "text-slate-300",
            Icon::XMark,
            "w-5 h-5 text-red-500 shrink-0",
            "text-slate-400",
        )
    };

    view! {
        <div class=format!("p-8 rounded-3xl border {card}")>
            {highlighted
                .then(|| {
                    view! {
                        <div class="absolute inset-0 bg-gradient-to-br from-blue-500/10 to-transparent"></div>
                    }
                })}
            <div class="relative z-10">
                <div class="flex items-center gap-3 mb-6">
                    <div class=format!("p-3 rounded-xl {tile}")>
                        <IconSvg icon class="w-8 h-8"/>
                    </div>
                    <h3 class=format!("text-2xl font-bold {heading}")>{title}</h3>
                </div>
                <ul class="space-y-4 mb-8">
                    {points
                        .iter()
                        .map(|point| {
                            view! {
                                <li class=format!("flex items-center gap-3 {point_class}")>
                                    <IconSvg icon=mark class=mark_class stroke_width=2.0/>
                                    <span>{*point}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                {highlighted
                    .then(|| {
                        view! {
                            <LeadButton variant=ButtonVariant::Light size=ButtonSize::Medium class="w-full">
                                "Jetzt AI-Assistenten einstellen"
                            </LeadButton>
                        }
                    })}
            </div>
        </div>
    }
}
