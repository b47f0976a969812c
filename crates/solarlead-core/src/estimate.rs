//! Rooftop solar savings estimator.
//!
//! Turns a monthly electricity bill and the usable roof area into a
//! recommended plant size, the PM Surya Ghar subsidy for that size, and a
//! simple payback figure.

use serde::Serialize;

use crate::validation::{FieldErrors, REQUIRED};

/// Grid tariff, rupees per unit (kWh).
pub const TARIFF_PER_UNIT: f64 = 7.5;
/// Monthly generation of one kW of panels, in units.
pub const UNITS_PER_KW_MONTH: f64 = 135.0;
/// Shadow-free roof area needed per kW, in square feet.
pub const SQFT_PER_KW: f64 = 100.0;
/// Installed cost per kW, in rupees.
pub const COST_PER_KW: u64 = 65_000;

/// Accepted monthly bill range, rupees.
pub const BILL_RANGE: (f64, f64) = (500.0, 50_000.0);
/// Accepted roof area range, square feet.
pub const AREA_RANGE: (f64, f64) = (100.0, 5_000.0);

/// Validated estimator input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateInput {
    /// Average monthly electricity bill, rupees.
    pub monthly_bill: f64,
    /// Usable roof area, square feet.
    pub roof_area: f64,
}

impl EstimateInput {
    /// Parses raw query values, reporting every bad field.
    pub fn parse(monthly_bill: Option<&str>, roof_area: Option<&str>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let bill = number_field(&mut errors, "monthly_bill", monthly_bill, BILL_RANGE);
        let area = number_field(&mut errors, "roof_area", roof_area, AREA_RANGE);
        match (bill, area) {
            (Some(monthly_bill), Some(roof_area)) => Ok(Self {
                monthly_bill,
                roof_area,
            }),
            _ => Err(errors),
        }
    }

    /// Runs the estimate.
    pub fn estimate(&self) -> SavingsEstimate {
        let monthly_units = self.monthly_bill / TARIFF_PER_UNIT;
        let by_consumption = (monthly_units / UNITS_PER_KW_MONTH).round() as u32;
        let by_roof = (self.roof_area / SQFT_PER_KW).floor() as u32;
        let kw = by_consumption.min(by_roof).max(1);

        let subsidy = subsidy_for(kw);
        let total_cost = u64::from(kw) * COST_PER_KW;
        let investment = total_cost.saturating_sub(subsidy);

        let monthly_generation = f64::from(kw) * UNITS_PER_KW_MONTH;
        let monthly_savings = monthly_generation * TARIFF_PER_UNIT;
        let yearly_savings = monthly_savings * 12.0;
        let payback_years = (investment as f64 / yearly_savings * 10.0).round() / 10.0;

        SavingsEstimate {
            recommended_kw: kw,
            subsidy,
            total_cost,
            investment,
            monthly_generation_units: monthly_generation,
            monthly_savings,
            yearly_savings,
            payback_years,
        }
    }
}

/// Central financial assistance for a residential plant of `kw` kilowatts.
pub const fn subsidy_for(kw: u32) -> u64 {
    match kw {
        0 => 0,
        1 => 30_000,
        2 => 60_000,
        _ => 78_000,
    }
}

fn number_field(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: Option<&str>,
    (min, max): (f64, f64),
) -> Option<f64> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        errors.push(field, REQUIRED);
        return None;
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && (min..=max).contains(&v) => Some(v),
        Ok(v) if v.is_finite() => {
            errors.push(
                field,
                format!("Ensure this value is between {min} and {max}."),
            );
            None
        }
        _ => {
            errors.push(field, "Enter a number.");
            None
        }
    }
}

/// Result of [`EstimateInput::estimate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsEstimate {
    /// Recommended plant size, kW.
    pub recommended_kw: u32,
    /// Subsidy, rupees.
    pub subsidy: u64,
    /// Installed cost before subsidy, rupees.
    pub total_cost: u64,
    /// Customer's own outlay, rupees.
    pub investment: u64,
    /// Expected monthly generation, units.
    pub monthly_generation_units: f64,
    /// Expected monthly bill reduction, rupees.
    pub monthly_savings: f64,
    /// Expected yearly bill reduction, rupees.
    pub yearly_savings: f64,
    /// Years to recover the investment, one decimal.
    pub payback_years: f64,
}
