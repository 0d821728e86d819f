use crate::core::directory::{DirectoryError, ListingDirectory};
use crate::core::engine::canonical_pair;
use crate::models::{Listing, Match};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL-backed listing directory
///
/// Owns the listing and match tables. Listings are read with the owner's
/// location joined in, so the engine always receives fully populated values.
/// Matches are stored with their pair canonicalized to (least, greatest) and
/// a uniqueness index on that pair, which is the actual guarantee against
/// duplicate matches under concurrent creation.
pub struct PostgresDirectory {
    pool: PgPool,
}

impl PostgresDirectory {
    /// Create a new PostgreSQL directory from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL directory from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    fn listing_from_row(row: &sqlx::postgres::PgRow) -> Listing {
        Listing {
            id: row.get("id"),
            user_id: row.get("user_id"),
            title: row.get("title"),
            have_item: row.get("have_item"),
            want_item: row.get("want_item"),
            have_description: row.get("have_description"),
            want_description: row.get("want_description"),
            location: row.get("location"),
            status: row.get("status"),
            created_at: row.get("created_at"),
        }
    }
}

const LISTING_COLUMNS: &str = r#"
    l.id, l.user_id, l.title, l.have_item, l.want_item,
    l.have_description, l.want_description, l.status, l.created_at,
    u.location
"#;

#[async_trait]
impl ListingDirectory for PostgresDirectory {
    async fn fetch_listing(&self, id: i64) -> Result<Option<Listing>, DirectoryError> {
        let query = format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM listings l
            JOIN users u ON u.id = l.user_id
            WHERE l.id = $1
            "#
        );

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;

        Ok(row.as_ref().map(Self::listing_from_row))
    }

    async fn find_candidate_pool(
        &self,
        exclude_id: i64,
        want_term: &str,
        have_term: &str,
    ) -> Result<Vec<Listing>, DirectoryError> {
        // Coarse textual pre-screen only: substring relation in either
        // direction between the source's want/have terms and the candidate's
        // have/want items. The engine re-scores every row precisely, so this
        // may over-select but must never under-select.
        let query = format!(
            r#"
            SELECT {LISTING_COLUMNS}
            FROM listings l
            JOIN users u ON u.id = l.user_id
            WHERE l.status = 'active'
              AND l.id <> $1
              AND (
                   l.have_item ILIKE '%' || $2 || '%'
                OR $2 ILIKE '%' || l.have_item || '%'
                OR l.want_item ILIKE '%' || $3 || '%'
                OR $3 ILIKE '%' || l.want_item || '%'
              )
            "#
        );

        let rows = sqlx::query(&query)
            .bind(exclude_id)
            .bind(want_term)
            .bind(have_term)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;

        tracing::debug!(
            "Candidate pool for listing {}: {} rows",
            exclude_id,
            rows.len()
        );

        Ok(rows.iter().map(Self::listing_from_row).collect())
    }

    async fn match_exists(
        &self,
        listing_a_id: i64,
        listing_b_id: i64,
    ) -> Result<bool, DirectoryError> {
        let (a, b) = canonical_pair(listing_a_id, listing_b_id);

        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM matches
                WHERE listing_a_id = $1 AND listing_b_id = $2
            ) AS found
        "#;

        let row = sqlx::query(query)
            .bind(a)
            .bind(b)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DirectoryError::Backend(e.to_string()))?;

        Ok(row.get("found"))
    }

    async fn save_match(&self, candidate: Match) -> Result<Match, DirectoryError> {
        let (a, b) = canonical_pair(candidate.listing_a_id, candidate.listing_b_id);

        let query = r#"
            INSERT INTO matches (listing_a_id, listing_b_id, score, status, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, created_at
        "#;

        let row = sqlx::query(query)
            .bind(a)
            .bind(b)
            .bind(candidate.score)
            .bind(candidate.status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DirectoryError::Conflict,
                _ => DirectoryError::Backend(e.to_string()),
            })?;

        Ok(Match {
            id: Some(row.get("id")),
            listing_a_id: a,
            listing_b_id: b,
            score: candidate.score,
            status: candidate.status,
            created_at: Some(row.get("created_at")),
        })
    }
}
