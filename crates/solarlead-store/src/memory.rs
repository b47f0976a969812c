//! In-memory store, for tests and local previews.

use async_trait::async_trait;
use chrono::Utc;
use solarlead_core::{FaqCategory, FaqEntry, FaqId, FaqItem, LeadId, LeadRequest, NewFaq, NewLead};
use tokio::sync::RwLock;

use crate::traits::{FaqStore, LeadStore, ReplaceSummary};
use crate::{Result, StoreError};

/// A store that keeps every record in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    faqs: Vec<FaqItem>,
    leads: Vec<LeadRequest>,
    last_faq_id: i64,
    last_lead_id: i64,
}

impl Inner {
    fn push_faq(&mut self, faq: NewFaq) -> FaqItem {
        self.last_faq_id += 1;
        let item = FaqItem {
            id: FaqId::new(self.last_faq_id),
            category: faq.category,
            question: faq.question,
            answer: faq.answer,
            is_active: faq.is_active,
            created_at: Utc::now(),
        };
        self.faqs.push(item.clone());
        item
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FaqStore for MemoryStore {
    async fn active_faqs(&self, category: FaqCategory) -> Result<Vec<FaqEntry>> {
        let inner = self.inner.read().await;
        Ok(inner
            .faqs
            .iter()
            .filter(|f| f.category == category && f.is_active)
            .cloned()
            .map(FaqEntry::from)
            .collect())
    }

    async fn list_faqs(&self, category: Option<FaqCategory>) -> Result<Vec<FaqItem>> {
        let inner = self.inner.read().await;
        Ok(inner
            .faqs
            .iter()
            .filter(|f| category.is_none_or(|c| f.category == c))
            .cloned()
            .collect())
    }

    async fn insert_faq(&self, faq: NewFaq) -> Result<FaqItem> {
        Ok(self.inner.write().await.push_faq(faq))
    }

    async fn set_faq_active(&self, id: FaqId, active: bool) -> Result<FaqItem> {
        let mut inner = self.inner.write().await;
        let item = inner
            .faqs
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(StoreError::NotFound {
                kind: "FAQ",
                id: id.get(),
            })?;
        item.is_active = active;
        Ok(item.clone())
    }

    async fn replace_faqs(&self, faqs: &[NewFaq]) -> Result<ReplaceSummary> {
        let mut inner = self.inner.write().await;
        let deleted = inner.faqs.len() as u64;
        inner.faqs.clear();
        for faq in faqs {
            inner.push_faq(faq.clone());
        }
        Ok(ReplaceSummary {
            deleted,
            inserted: faqs.len() as u64,
        })
    }
}

#[async_trait]
impl LeadStore for MemoryStore {
    async fn insert_lead(&self, lead: NewLead) -> Result<LeadRequest> {
        let mut inner = self.inner.write().await;
        inner.last_lead_id += 1;
        let stored = lead.into_stored(LeadId::new(inner.last_lead_id), Utc::now());
        inner.leads.push(stored.clone());
        Ok(stored)
    }

    async fn count_leads(&self) -> Result<u64> {
        Ok(self.inner.read().await.leads.len() as u64)
    }

    async fn recent_leads(&self, limit: u32) -> Result<Vec<LeadRequest>> {
        let inner = self.inner.read().await;
        Ok(inner
            .leads
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
