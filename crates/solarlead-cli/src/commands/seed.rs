//! `solarlead seed`: destructive FAQ catalog reset.

use std::io::Write;

use anyhow::Result;
use solarlead_store::{FaqStore, reset_faqs};

/// Printed once the catalog is in place.
pub const SEED_COMPLETE: &str = "Successfully populated FAQs.";

/// Deletes every FAQ and installs the built-in catalog.
pub async fn run(store: &dyn FaqStore, out: &mut dyn Write) -> Result<()> {
    let summary = reset_faqs(store).await?;
    tracing::info!(
        deleted = summary.deleted,
        inserted = summary.inserted,
        "FAQ catalog replaced"
    );
    writeln!(out, "{SEED_COMPLETE}")?;
    Ok(())
}
