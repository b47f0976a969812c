//! `solarlead faq`: list, hide and show FAQ entries.

use std::io::Write;

use anyhow::Result;
use solarlead_core::FaqId;
use solarlead_store::FaqStore;

use crate::cli::FaqAction;

/// Runs one FAQ subcommand.
pub async fn run(store: &dyn FaqStore, action: FaqAction, out: &mut dyn Write) -> Result<()> {
    match action {
        FaqAction::List { category } => {
            let faqs = store.list_faqs(category).await?;
            for faq in &faqs {
                let marker = if faq.is_active { ' ' } else { '-' };
                writeln!(out, "{:>4} {marker} {:<12} {faq}", faq.id.get(), faq.category.as_str())?;
            }
            writeln!(out, "{} FAQ(s)", faqs.len())?;
        }
        FaqAction::Activate { id } => set_active(store, FaqId::new(id), true, out).await?,
        FaqAction::Deactivate { id } => set_active(store, FaqId::new(id), false, out).await?,
    }
    Ok(())
}

async fn set_active(store: &dyn FaqStore, id: FaqId, active: bool, out: &mut dyn Write) -> Result<()> {
    let faq = store.set_faq_active(id, active).await?;
    let verb = if active { "Activated" } else { "Deactivated" };
    tracing::info!(faq_id = %faq.id, active, "FAQ visibility changed");
    writeln!(out, "{verb} FAQ {}: {faq}", faq.id)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use solarlead_core::{FaqCategory, NewFaq};
    use solarlead_store::MemoryStore;

    async fn store_with_two() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_faq(NewFaq::new(FaqCategory::General, "First?", "One"))
            .await
            .unwrap();
        store
            .insert_faq(NewFaq::new(FaqCategory::Technical, "Second?", "Two"))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let store = store_with_two().await;
        let mut out = Vec::new();
        run(&store, FaqAction::List { category: Some(FaqCategory::Technical) }, &mut out)
            .await
            .unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Second?"));
        assert!(!printed.contains("First?"));
        assert!(printed.ends_with("1 FAQ(s)\n"));
    }

    #[tokio::test]
    async fn test_deactivate_then_activate() {
        let store = store_with_two().await;
        let id = store.list_faqs(None).await.unwrap()[0].id;
        let mut out = Vec::new();

        run(&store, FaqAction::Deactivate { id: id.get() }, &mut out)
            .await
            .unwrap();
        assert!(store.active_faqs(FaqCategory::General).await.unwrap().is_empty());

        run(&store, FaqAction::Activate { id: id.get() }, &mut out)
            .await
            .unwrap();
        assert_eq!(store.active_faqs(FaqCategory::General).await.unwrap().len(), 1);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains(&format!("Deactivated FAQ {id}: First?")));
    }

    #[tokio::test]
    async fn test_unknown_id_is_an_error() {
        let store = store_with_two().await;
        let mut out = Vec::new();
        let err = run(&store, FaqAction::Activate { id: 999 }, &mut out)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
