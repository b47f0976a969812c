//! Record types held by the store.

mod faq;
mod ids;
mod lead;

pub use faq::{FaqCategory, FaqEntry, FaqItem, FaqSections, NewFaq};
pub use ids::{FaqId, LeadId};
pub use lead::{LeadRequest, NewLead};
