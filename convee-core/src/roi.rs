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
 */

//! Revenue-loss estimate behind the ROI sliders.
//!
//! `monthly_loss = round(leads × missed_rate / 100 × commission)` and
//! `yearly_loss = monthly_loss × 12`. Integer arithmetic keeps the result
//! exact; rounding is half-up like `Math.round` for positive values.

use std::ops::RangeInclusive;

pub const LEADS_RANGE: RangeInclusive<u32> = 10..=500;
pub const COMMISSION_RANGE: RangeInclusive<u32> = 3_000..=50_000;
pub const MISSED_RATE_RANGE: RangeInclusive<u32> = 10..=90;

pub const LEADS_STEP: u32 = 10;
pub const COMMISSION_STEP: u32 = 500;
pub const MISSED_RATE_STEP: u32 = 5;

/// Slider values. Always within the ranges above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiInputs {
    leads_per_month: u32,
    avg_commission: u32,
    missed_rate: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            leads_per_month: 50,
            avg_commission: 10_000,
            missed_rate: 40,
        }
    }
}

impl RoiInputs {
    /// Out-of-range values are clamped to the nearest bound.
    pub fn new(leads_per_month: u32, avg_commission: u32, missed_rate: u32) -> Self {
        Self {
            leads_per_month: clamp(leads_per_month, &LEADS_RANGE),
            avg_commission: clamp(avg_commission, &COMMISSION_RANGE),
            missed_rate: clamp(missed_rate, &MISSED_RATE_RANGE),
        }
    }

    pub fn with_leads_per_month(self, leads: u32) -> Self {
        Self::new(leads, self.avg_commission, self.missed_rate)
    }

    pub fn with_avg_commission(self, commission: u32) -> Self {
        Self::new(self.leads_per_month, commission, self.missed_rate)
    }

    pub fn with_missed_rate(self, rate: u32) -> Self {
        Self::new(self.leads_per_month, self.avg_commission, rate)
    }

    pub fn leads_per_month(&self) -> u32 {
        self.leads_per_month
    }

    pub fn avg_commission(&self) -> u32 {
        self.avg_commission
    }

    pub fn missed_rate(&self) -> u32 {
        self.missed_rate
    }

    pub fn estimate(&self) -> RoiEstimate {
        let leads = u64::from(self.leads_per_month);
        let rate = u64::from(self.missed_rate);
        let commission = u64::from(self.avg_commission);

        let monthly_loss = div_round(leads * rate * commission, 100);
        RoiEstimate {
            missed_leads: div_round(leads * rate, 100),
            monthly_loss,
            yearly_loss: monthly_loss * 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiEstimate {
    /// Leads per month that go unanswered.
    pub missed_leads: u64,
    /// Commission lost per month, in euros.
    pub monthly_loss: u64,
    /// Commission lost per year, in euros.
    pub yearly_loss: u64,
}

/// German-style euro amount: `2.400.000 €`.
pub fn format_euros(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out.push_str(" €");
    out
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

fn div_round(numerator: u64, denominator: u64) -> u64 {
    (numerator + denominator / 2) / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_example() {
        let estimate = RoiInputs::default().estimate();
        assert_eq!(estimate.monthly_loss, 200_000);
        assert_eq!(estimate.yearly_loss, 2_400_000);
        assert_eq!(estimate.missed_leads, 20);
    }

    #[test]
    fn matches_float_formula_across_ranges() {
        for leads in (10..=500).step_by(70) {
            for rate in (10..=90).step_by(15) {
                for commission in (3_000..=50_000).step_by(4_700) {
                    let estimate = RoiInputs::new(leads, commission, rate).estimate();
                    let expected = (leads as f64 * (rate as f64 / 100.0) * commission as f64)
                        .round() as u64;
                    assert_eq!(estimate.monthly_loss, expected, "{leads} {rate} {commission}");
                    assert_eq!(estimate.yearly_loss, expected * 12);
                }
            }
        }
    }

    #[test]
    fn rounds_half_up() {
        // 15 × 15% × 3 010 = 6 772.5
        let estimate = RoiInputs::new(15, 3_010, 15).estimate();
        assert_eq!(estimate.monthly_loss, 6_773);
        // 15 × 15% = 2.25 missed leads
        assert_eq!(estimate.missed_leads, 2);
    }

    #[test]
    fn inputs_are_clamped() {
        let inputs = RoiInputs::new(0, 1_000_000, 100);
        assert_eq!(inputs.leads_per_month(), 10);
        assert_eq!(inputs.avg_commission(), 50_000);
        assert_eq!(inputs.missed_rate(), 90);

        let inputs = inputs.with_leads_per_month(9_999).with_missed_rate(1);
        assert_eq!(inputs.leads_per_month(), 500);
        assert_eq!(inputs.missed_rate(), 10);
    }

    #[test]
    fn extremes() {
        let max = RoiInputs::new(500, 50_000, 90).estimate();
        assert_eq!(max.monthly_loss, 22_500_000);
        assert_eq!(max.yearly_loss, 270_000_000);

        let min = RoiInputs::new(10, 3_000, 10).estimate();
        assert_eq!(min.monthly_loss, 3_000);
        assert_eq!(min.yearly_loss, 36_000);
    }

    #[test]
    fn estimate_is_deterministic() {
        let inputs = RoiInputs::new(120, 8_500, 35);
        assert_eq!(inputs.estimate(), inputs.estimate());
    }

    #[test]
    fn euro_formatting() {
        assert_eq!(format_euros(0), "0 €");
        assert_eq!(format_euros(999), "999 €");
        assert_eq!(format_euros(3_000), "3.000 €");
        assert_eq!(format_euros(2_400_000), "2.400.000 €");
        assert_eq!(format_euros(270_000_000), "270.000.000 €");
    }
}
