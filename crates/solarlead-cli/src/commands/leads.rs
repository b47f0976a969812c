//! `solarlead leads`: recent consultation requests.

use std::io::Write;

use anyhow::Result;
use solarlead_store::LeadStore;

/// Prints the total and the `limit` newest requests.
pub async fn run(store: &dyn LeadStore, limit: u32, out: &mut dyn Write) -> Result<()> {
    let total = store.count_leads().await?;
    let leads = store.recent_leads(limit).await?;
    writeln!(out, "{total} consultation request(s), showing {}", leads.len())?;
    for lead in leads {
        writeln!(
            out,
            "{:>6}  {}  {}  {} {}{}",
            lead.id.get(),
            lead.created_at.format("%Y-%m-%d %H:%M"),
            lead,
            lead.district,
            lead.pin_code,
            lead.message
                .as_deref()
                .map(|m| format!("  \"{m}\""))
                .unwrap_or_default(),
        )?;
    }
    Ok(())
}
