//! Store abstractions.
//!
//! Handlers depend on these traits, never on a concrete backend, so the
//! HTTP layer can be exercised against [`MemoryStore`](crate::MemoryStore)
//! or a failing double in tests.

use async_trait::async_trait;
use solarlead_core::{
    FaqCategory, FaqEntry, FaqId, FaqItem, FaqSections, LeadRequest, NewFaq, NewLead,
};

use crate::Result;

/// Counts reported by [`FaqStore::replace_faqs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceSummary {
    /// Entries removed.
    pub deleted: u64,
    /// Entries inserted.
    pub inserted: u64,
}

/// FAQ persistence.
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Question/answer pairs of active entries in `category`, in store order.
    async fn active_faqs(&self, category: FaqCategory) -> Result<Vec<FaqEntry>>;

    /// Every entry, active or not, optionally limited to one category.
    async fn list_faqs(&self, category: Option<FaqCategory>) -> Result<Vec<FaqItem>>;

    /// Stores one entry.
    async fn insert_faq(&self, faq: NewFaq) -> Result<FaqItem>;

    /// Shows or hides an entry without deleting it.
    async fn set_faq_active(&self, id: FaqId, active: bool) -> Result<FaqItem>;

    /// Deletes every entry in every category, then inserts `faqs`, atomically.
    async fn replace_faqs(&self, faqs: &[NewFaq]) -> Result<ReplaceSummary>;

    /// Active entries of all four categories.
    async fn active_faq_sections(&self) -> Result<FaqSections> {
        let mut sections = FaqSections::default();
        for category in FaqCategory::ALL {
            *sections.get_mut(category) = self.active_faqs(category).await?;
        }
        Ok(sections)
    }
}

/// Consultation request persistence.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Stores a validated lead in a single insert.
    async fn insert_lead(&self, lead: NewLead) -> Result<LeadRequest>;

    /// Number of stored leads.
    async fn count_leads(&self) -> Result<u64>;

    /// Most recent leads first.
    async fn recent_leads(&self, limit: u32) -> Result<Vec<LeadRequest>>;
}

/// Everything the application needs from a backend.
pub trait Store: FaqStore + LeadStore {}

impl<T: FaqStore + LeadStore> Store for T {}
