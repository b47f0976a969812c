//! Consultation requests (leads).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::LeadId;

/// A consultation request that has passed validation.
///
/// Only [`ConsultationForm::validate`](crate::ConsultationForm::validate)
/// builds one, so a `NewLead` always carries a 10-digit mobile number and a
/// 6-digit PIN code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    full_name: String,
    mobile_number: String,
    district: String,
    pin_code: String,
    message: Option<String>,
}

impl NewLead {
    pub(crate) fn new(
        full_name: String,
        mobile_number: String,
        district: String,
        pin_code: String,
        message: Option<String>,
    ) -> Self {
        Self {
            full_name,
            mobile_number,
            district,
            pin_code,
            message,
        }
    }

    /// Applicant's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Ten-digit mobile number.
    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    /// District the installation would be in.
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Six-digit PIN code.
    pub fn pin_code(&self) -> &str {
        &self.pin_code
    }

    /// Optional free-text message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Attaches the store-assigned id and timestamp.
    pub fn into_stored(self, id: LeadId, created_at: DateTime<Utc>) -> LeadRequest {
        LeadRequest {
            id,
            full_name: self.full_name,
            mobile_number: self.mobile_number,
            district: self.district,
            pin_code: self.pin_code,
            message: self.message,
            created_at,
        }
    }
}

/// A persisted consultation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    /// Store-assigned id.
    pub id: LeadId,
    /// Applicant's full name.
    pub full_name: String,
    /// Ten-digit mobile number.
    pub mobile_number: String,
    /// District.
    pub district: String,
    /// Six-digit PIN code.
    pub pin_code: String,
    /// Optional free-text message.
    pub message: Option<String>,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for LeadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.full_name, self.mobile_number)
    }
}
