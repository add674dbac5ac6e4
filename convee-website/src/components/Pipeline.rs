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

struct Step {
    icon: Icon,
    label: &'static str,
    highlighted: bool,
}

const STEPS: [Step; 4] = [
    Step {
        icon: Icon::Envelope,
        label: "Eingang",
        highlighted: false,
    },
    Step {
        icon: Icon::Sparkles,
        label: "KI-Analyse",
        highlighted: true,
    },
    Step {
        icon: Icon::Database,
        label: "CRM Sync",
        highlighted: false,
    },
    Step {
        icon: Icon::Calendar,
        label: "Termin",
        highlighted: false,
    },
];

/// Inquiry → AI → CRM → appointment, with an animated flow line behind it.
#[component]
pub fn Pipeline() -> impl IntoView {
    view! {
        <div class="py-12 bg-slate-900/30 border-y border-slate-800/50 backdrop-blur-sm">
            <div class="max-w-5xl mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center relative gap-8 md:gap-0">
                    <div class="hidden md:block absolute top-1/2 left-0 w-full h-1 bg-slate-800 rounded-full -z-10"></div>
                    <div class="hidden md:block absolute top-1/2 left-0 w-full h-1 rounded-full -z-10 overflow-hidden">
                        <div class="w-1/2 h-full bg-gradient-to-r from-transparent via-blue-500 to-transparent animate-flow"></div>
                    </div>

                    {STEPS
                        .iter()
                        .map(|step| {
                            let tile = if step.highlighted {
                                "bg-blue-600 shadow-blue-500/20"
                            } else {
                                "bg-slate-800"
                            };
                            view! {
                                <div class="flex flex-col items-center gap-4 bg-[#020617] p-4 rounded-2xl border border-slate-800 relative z-10 w-full md:w-auto">
                                    <div class=format!(
                                        "w-14 h-14 rounded-xl flex items-center justify-center text-white shadow-lg {tile}"
                                    )>
                                        <IconSvg icon=step.icon class="w-7 h-7"/>
                                    </div>
                                    <span class="font-medium text-slate-300">{step.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-center text-slate-500 mt-8 text-sm">
                    "*Durchschnittliche Reaktionszeit: "
                    <span class="text-emerald-400 font-bold">"45 Sekunden"</span>
                </p>
            </div>
        </div>
    }
}
