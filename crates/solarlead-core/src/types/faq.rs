//! Frequently-asked-question records.
//!
//! The site groups its FAQs into four fixed categories. Every entry carries
//! an `is_active` flag: inactive entries stay in the store but are never
//! shown on the public page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::FaqId;
use crate::Error;

/// Fixed partition of FAQ content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    /// Scheme overview, eligibility, savings.
    General,
    /// Subsidy timing, documents, coverage.
    Subsidy,
    /// Roof space, outages, weather.
    Technical,
    /// Timelines, warranty, maintenance.
    Installation,
}

impl FaqCategory {
    /// All categories in display order.
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::General,
        FaqCategory::Subsidy,
        FaqCategory::Technical,
        FaqCategory::Installation,
    ];

    /// Stable lowercase name used in storage, URLs and templates.
    pub const fn as_str(self) -> &'static str {
        match self {
            FaqCategory::General => "general",
            FaqCategory::Subsidy => "subsidy",
            FaqCategory::Technical => "technical",
            FaqCategory::Installation => "installation",
        }
    }

    /// Human-readable tab label.
    pub const fn label(self) -> &'static str {
        match self {
            FaqCategory::General => "General",
            FaqCategory::Subsidy => "Subsidy",
            FaqCategory::Technical => "Technical",
            FaqCategory::Installation => "Installation",
        }
    }
}

impl fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaqCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FaqCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(wanted.to_string()))
    }
}

/// A persisted FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Store-assigned id.
    pub id: FaqId,
    /// Category the entry belongs to.
    pub category: FaqCategory,
    /// The question, at most 255 characters.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Whether the entry is shown on the public page.
    pub is_active: bool,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for FaqItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question)
    }
}

/// Question/answer projection handed to the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

impl From<FaqItem> for FaqEntry {
    fn from(item: FaqItem) -> Self {
        Self {
            question: item.question,
            answer: item.answer,
        }
    }
}

/// Active FAQs grouped by category, as the landing page renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FaqSections {
    /// General questions.
    pub general: Vec<FaqEntry>,
    /// Subsidy questions.
    pub subsidy: Vec<FaqEntry>,
    /// Technical questions.
    pub technical: Vec<FaqEntry>,
    /// Installation questions.
    pub installation: Vec<FaqEntry>,
}

impl FaqSections {
    /// Entries of one category.
    pub fn get(&self, category: FaqCategory) -> &[FaqEntry] {
        match category {
            FaqCategory::General => &self.general,
            FaqCategory::Subsidy => &self.subsidy,
            FaqCategory::Technical => &self.technical,
            FaqCategory::Installation => &self.installation,
        }
    }

    /// Mutable entries of one category.
    pub fn get_mut(&mut self, category: FaqCategory) -> &mut Vec<FaqEntry> {
        match category {
            FaqCategory::General => &mut self.general,
            FaqCategory::Subsidy => &mut self.subsidy,
            FaqCategory::Technical => &mut self.technical,
            FaqCategory::Installation => &mut self.installation,
        }
    }

    /// Number of entries across all categories.
    pub fn total(&self) -> usize {
        FaqCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// An FAQ entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFaq {
    /// Target category.
    pub category: FaqCategory,
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
    /// Initial visibility.
    pub is_active: bool,
}

impl NewFaq {
    /// Creates an active FAQ entry.
    pub fn new(
        category: FaqCategory,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            category,
            question: question.into(),
            answer: answer.into(),
            is_active: true,
        }
    }

    /// Sets the initial visibility.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
