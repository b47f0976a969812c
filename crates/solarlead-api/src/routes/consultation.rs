//! Consultation form intake.

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use serde::Serialize;
use solarlead_core::ConsultationForm;

use crate::Result;
use crate::state::AppState;

/// Message returned after a lead is stored.
pub const SUCCESS_MESSAGE: &str = "Thank you! Our team will contact you shortly.";

/// Body of a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation shown to the visitor.
    pub message: &'static str,
}

/// `POST /submit-consultation/`: validates and stores one lead.
///
/// A body that cannot be decoded is validated as an empty form, so the
/// visitor still gets per-field messages.
pub async fn submit_consultation(
    State(state): State<AppState>,
    form: std::result::Result<Form<ConsultationForm>, FormRejection>,
) -> Result<Json<SubmitResponse>> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "undecodable consultation body");
            ConsultationForm::default()
        }
    };

    let lead = form.validate()?;
    let stored = state.store.insert_lead(lead).await?;
    tracing::info!(lead_id = %stored.id, district = %stored.district, "consultation request stored");

    Ok(Json(SubmitResponse {
        success: true,
        message: SUCCESS_MESSAGE,
    }))
}
