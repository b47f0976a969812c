//! Rooftop solar savings estimate.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use serde::Deserialize;
use solarlead_core::{EstimateInput, SavingsEstimate};

use crate::Result;

/// Raw query string; numbers are parsed by [`EstimateInput::parse`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EstimateQuery {
    /// Monthly electricity bill, rupees.
    pub monthly_bill: Option<String>,
    /// Shadow-free roof area, square feet.
    pub roof_area: Option<String>,
}

/// `GET /api/solar-estimate?monthly_bill=..&roof_area=..`
pub async fn solar_estimate(
    query: std::result::Result<Query<EstimateQuery>, QueryRejection>,
) -> Result<Json<SavingsEstimate>> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let input = EstimateInput::parse(query.monthly_bill.as_deref(), query.roof_area.as_deref())?;
    Ok(Json(input.estimate()))
}
