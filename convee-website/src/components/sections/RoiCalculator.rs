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

//! How much revenue slips away when leads wait for an answer.

use std::ops::RangeInclusive;

use crate::components::CTAButton::{ButtonSize, LeadButton};
use convee_analytics::{track, FunnelEvent};
use convee_core::roi::{
    format_euros, COMMISSION_RANGE, COMMISSION_STEP, LEADS_RANGE, LEADS_STEP, MISSED_RATE_RANGE,
    MISSED_RATE_STEP,
};
use convee_core::RoiInputs;
use leptos::*;

/// One slider of the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoiField {
    Leads,
    Commission,
    MissedRate,
}

impl RoiField {
    fn label(self) -> &'static str {
        match self {
            RoiField::Leads => "Anfragen pro Monat",
            RoiField::Commission => "Durchschnittliche Provision",
            RoiField::MissedRate => "Unbeantwortete Anfragen",
        }
    }

    fn range(self) -> RangeInclusive<u32> {
        match self {
            RoiField::Leads => LEADS_RANGE,
            RoiField::Commission => COMMISSION_RANGE,
            RoiField::MissedRate => MISSED_RATE_RANGE,
        }
    }

    fn step(self) -> u32 {
        match self {
            RoiField::Leads => LEADS_STEP,
            RoiField::Commission => COMMISSION_STEP,
            RoiField::MissedRate => MISSED_RATE_STEP,
        }
    }

    pub fn value(self, inputs: &RoiInputs) -> u32 {
        match self {
            RoiField::Leads => inputs.leads_per_month(),
            RoiField::Commission => inputs.avg_commission(),
            RoiField::MissedRate => inputs.missed_rate(),
        }
    }

    /// Clamps like `RoiInputs::new`.
    pub fn apply(self, inputs: RoiInputs, value: u32) -> RoiInputs {
        match self {
            RoiField::Leads => inputs.with_leads_per_month(value),
            RoiField::Commission => inputs.with_avg_commission(value),
            RoiField::MissedRate => inputs.with_missed_rate(value),
        }
    }

    pub fn display(self, value: u32) -> String {
        match self {
            RoiField::Leads => value.to_string(),
            RoiField::Commission => format_euros(u64::from(value)),
            RoiField::MissedRate => format!("{value} %"),
        }
    }
}

#[component]
pub fn RoiCalculator() -> impl IntoView {
    let inputs = create_rw_signal(RoiInputs::default());
    let estimate = create_memo(move |_| inputs.with(RoiInputs::estimate));

    view! {
        <section id="roi" class="py-24 bg-[#020617]">
            <div class="max-w-5xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">"Was kostet Sie Langsamkeit?"</h2>
                    <p class="text-slate-400 max-w-2xl mx-auto text-lg">
                        "Jede unbeantwortete Anfrage ist eine verlorene Provision. Rechnen Sie nach."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <div class="p-8 rounded-3xl bg-slate-900/50 border border-slate-800 space-y-8">
                        <RoiSlider field=RoiField::Leads inputs/>
                        <RoiSlider field=RoiField::Commission inputs/>
                        <RoiSlider field=RoiField::MissedRate inputs/>
                    </div>

                    <div class="p-8 rounded-3xl bg-slate-800/50 border border-blue-500/30 flex flex-col justify-between gap-8">
                        <div>
                            <p class="text-slate-400 mb-2">"Entgangener Umsatz pro Jahr"</p>
                            <p class="text-4xl md:text-5xl font-bold text-red-400" data-testid="roi-yearly">
                                {move || format_euros(estimate.get().yearly_loss)}
                            </p>
                        </div>
                        <div class="grid grid-cols-2 gap-4 text-sm">
                            <div>
                                <p class="text-slate-500">"Pro Monat"</p>
                                <p class="text-xl font-semibold text-white" data-testid="roi-monthly">
                                    {move || format_euros(estimate.get().monthly_loss)}
                                </p>
                            </div>
                            <div>
                                <p class="text-slate-500">"Verpasste Leads / Monat"</p>
                                <p class="text-xl font-semibold text-white" data-testid="roi-missed">
                                    {move || estimate.get().missed_leads}
                                </p>
                            </div>
                        </div>
                        <LeadButton size=ButtonSize::Large class="w-full">
                            "Verluste stoppen"
                        </LeadButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn RoiSlider(field: RoiField, inputs: RwSignal<RoiInputs>) -> impl IntoView {
    let range = field.range();
    let id = format!("roi-{field:?}").to_lowercase();
    let value = move || inputs.with(|i| field.value(i));

    view! {
        <div>
            <div class="flex justify-between items-baseline mb-3">
                <label for=id.clone() class="text-slate-300 font-medium">
                    {field.label()}
                </label>
                <span class="text-white font-bold">{move || field.display(value())}</span>
            </div>
            <input
                id=id
                type="range"
                class="w-full accent-blue-500"
                min=*range.start()
                max=*range.end()
                step=field.step()
                prop:value=move || value().to_string()
                on:input=move |ev| {
                    if let Ok(raw) = event_target_value(&ev).parse::<u32>() {
                        inputs.update(|i| *i = field.apply(*i, raw));
                    }
                }
                on:change=move |_| track(FunnelEvent::CalculatorAdjusted)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_clamps_out_of_range_slider_values() {
        let inputs = RoiField::Leads.apply(RoiInputs::default(), 10_000);
        assert_eq!(inputs.leads_per_month(), 500);
        let inputs = RoiField::MissedRate.apply(inputs, 0);
        assert_eq!(inputs.missed_rate(), 10);
        assert_eq!(inputs.avg_commission(), 10_000);
    }

    #[test]
    fn display_matches_the_unit_of_each_slider() {
        assert_eq!(RoiField::Leads.display(50), "50");
        assert_eq!(RoiField::Commission.display(10_000), "10.000 €");
        assert_eq!(RoiField::MissedRate.display(40), "40 %");
    }
}
