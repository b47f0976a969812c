//! SQLite backend.
//!
//! One pool per process, created at startup and handed to the HTTP layer.
//! The schema is embedded and migrated on connect.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use solarlead_core::config::DatabaseConfig;
use solarlead_core::{
    FaqCategory, FaqEntry, FaqId, FaqItem, LeadId, LeadRequest, NewFaq, NewLead,
};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Executor, FromRow};

use crate::traits::{FaqStore, LeadStore, ReplaceSummary};
use crate::{Result, StoreError};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SELECT_FAQ: &str =
    "SELECT id, category, question, answer, is_active, created_at FROM faqs";
const SELECT_LEAD: &str = "SELECT id, full_name, mobile_number, district, pin_code, message, \
     created_at FROM consultation_requests";

/// Store backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects using the configured URL and applies migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;
        tracing::debug!(url = %config.url, "connected to sqlite");
        Self::with_pool(pool).await
    }

    /// A private in-memory database.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool
    /// holds exactly one connection and never recycles it.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::with_pool(pool).await
    }

    /// Wraps an existing pool, applying pending migrations.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        MIGRATOR.run(&pool).await?;
        Ok(Self { pool })
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every connection. Later calls fail as unavailable.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn fetch_faq(&self, id: FaqId) -> Result<FaqItem> {
        let row: Option<FaqRow> = sqlx::query_as(&format!("{SELECT_FAQ} WHERE id = ?"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or(StoreError::NotFound {
            kind: "FAQ",
            id: id.get(),
        })?
        .try_into()
    }
}

async fn insert_faq_row<'e, E>(executor: E, faq: &NewFaq, created_at: DateTime<Utc>) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO faqs (category, question, answer, is_active, created_at) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(faq.category.as_str())
    .bind(&faq.question)
    .bind(&faq.answer)
    .bind(faq.is_active)
    .bind(created_at)
    .fetch_one(executor)
    .await?;
    Ok(id)
}

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, FromRow)]
struct FaqRow {
    id: i64,
    category: String,
    question: String,
    answer: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<FaqRow> for FaqItem {
    type Error = StoreError;

    fn try_from(row: FaqRow) -> Result<Self> {
        let category = FaqCategory::from_str(&row.category).map_err(|e| StoreError::CorruptRow {
            table: "faqs",
            id: row.id,
            reason: e.to_string(),
        })?;
        Ok(FaqItem {
            id: FaqId::new(row.id),
            category,
            question: row.question,
            answer: row.answer,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct LeadRow {
    id: i64,
    full_name: String,
    mobile_number: String,
    district: String,
    pin_code: String,
    message: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<LeadRow> for LeadRequest {
    fn from(row: LeadRow) -> Self {
        LeadRequest {
            id: LeadId::new(row.id),
            full_name: row.full_name,
            mobile_number: row.mobile_number,
            district: row.district,
            pin_code: row.pin_code,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

// ============================================================================
// Trait impls
// ============================================================================

#[async_trait]
impl FaqStore for SqliteStore {
    async fn active_faqs(&self, category: FaqCategory) -> Result<Vec<FaqEntry>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT question, answer FROM faqs \
             WHERE category = ? AND is_active = 1 ORDER BY id",
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(question, answer)| FaqEntry { question, answer })
            .collect())
    }

    async fn list_faqs(&self, category: Option<FaqCategory>) -> Result<Vec<FaqItem>> {
        let rows: Vec<FaqRow> = match category {
            Some(category) => {
                sqlx::query_as(&format!("{SELECT_FAQ} WHERE category = ? ORDER BY id"))
                    .bind(category.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as(&format!("{SELECT_FAQ} ORDER BY id"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        rows.into_iter().map(FaqItem::try_from).collect()
    }

    async fn insert_faq(&self, faq: NewFaq) -> Result<FaqItem> {
        let created_at = Utc::now();
        let id = insert_faq_row(&self.pool, &faq, created_at).await?;
        Ok(FaqItem {
            id: FaqId::new(id),
            category: faq.category,
            question: faq.question,
            answer: faq.answer,
            is_active: faq.is_active,
            created_at,
        })
    }

    async fn set_faq_active(&self, id: FaqId, active: bool) -> Result<FaqItem> {
        let updated = sqlx::query("UPDATE faqs SET is_active = ? WHERE id = ?")
            .bind(active)
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();
        if updated == 0 {
            return Err(StoreError::NotFound {
                kind: "FAQ",
                id: id.get(),
            });
        }
        self.fetch_faq(id).await
    }

    async fn replace_faqs(&self, faqs: &[NewFaq]) -> Result<ReplaceSummary> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM faqs")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let created_at = Utc::now();
        for faq in faqs {
            insert_faq_row(&mut *tx, faq, created_at).await?;
        }
        tx.commit().await?;
        tracing::info!(deleted, inserted = faqs.len(), "replaced FAQ catalog");
        Ok(ReplaceSummary {
            deleted,
            inserted: faqs.len() as u64,
        })
    }
}

#[async_trait]
impl LeadStore for SqliteStore {
    async fn insert_lead(&self, lead: NewLead) -> Result<LeadRequest> {
        let created_at = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO consultation_requests \
             (full_name, mobile_number, district, pin_code, message, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(lead.full_name())
        .bind(lead.mobile_number())
        .bind(lead.district())
        .bind(lead.pin_code())
        .bind(lead.message())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(lead.into_stored(LeadId::new(id), created_at))
    }

    async fn count_leads(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM consultation_requests")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn recent_leads(&self, limit: u32) -> Result<Vec<LeadRequest>> {
        let rows: Vec<LeadRow> = sqlx::query_as(&format!("{SELECT_LEAD} ORDER BY id DESC LIMIT ?"))
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(LeadRequest::from).collect())
    }
}
