use crate::models::{NewSubmission, StatsCounts, Submission, SubmissionStatus};
use sqlx::PgPool;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;
const SEARCH_LIMIT: i64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Page request for `GET /submissions`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub status: Option<SubmissionStatus>,
    /// Keyset cursor: return rows strictly older than this id.
    pub start_after: Option<i64>,
}

/// Filters for `GET /submissions/search`. At least one must be set;
/// the handler enforces that.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub difficulty: Option<String>,
    pub answer_type: Option<String>,
}

/// A page of submissions plus the cursor for the next page.
#[derive(Debug, Clone)]
pub struct SubmissionPage {
    pub submissions: Vec<Submission>,
    pub has_more: bool,
    pub last_id: Option<i64>,
}

pub(crate) fn clamp_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

pub(crate) fn like_pattern(term: &str) -> String {
    // Escape LIKE metacharacters so a search for "50%" matches literally.
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Postgres-backed submission store. Rows are append-mostly; only the
/// status column is ever updated.
#[derive(Clone)]
pub struct SubmissionStore {
    pool: PgPool,
}

impl SubmissionStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the schema if it does not exist yet. Runs at startup.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS submissions (
                id BIGSERIAL PRIMARY KEY,
                difficulty TEXT NOT NULL,
                answer_type TEXT NOT NULL,
                question_text TEXT NOT NULL,
                required_data TEXT NOT NULL,
                answer TEXT NOT NULL,
                explanation TEXT NOT NULL,
                source_reference TEXT NOT NULL,
                thematic_direction TEXT NOT NULL,
                contributor_name TEXT NOT NULL,
                contributor_affiliation TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                user_agent TEXT,
                submitted_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS submissions_status_id_idx
             ON submissions (status, id DESC)",
        )
        .execute(&self.pool)
        .await?;

        info!("submission schema ready");
        Ok(())
    }

    /// Insert a validated submission as `pending` and return its id.
    pub async fn insert(
        &self,
        submission: &NewSubmission,
        user_agent: Option<&str>,
    ) -> Result<i64, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO submissions (
                difficulty, answer_type, question_text, required_data,
                answer, explanation, source_reference, thematic_direction,
                contributor_name, contributor_affiliation, status, user_agent
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'pending', $11)
            RETURNING id",
        )
        .bind(&submission.difficulty)
        .bind(&submission.answer_type)
        .bind(&submission.question_text)
        .bind(&submission.required_data)
        .bind(&submission.answer)
        .bind(&submission.explanation)
        .bind(&submission.source_reference)
        .bind(&submission.thematic_direction)
        .bind(&submission.contributor_name)
        .bind(&submission.contributor_affiliation)
        .bind(user_agent)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Newest-first page with an optional status filter and keyset cursor.
    pub async fn list(&self, query: &ListQuery) -> Result<SubmissionPage, StoreError> {
        let limit = clamp_limit(query.limit);
        let status = query.status.map(SubmissionStatus::as_str);

        let submissions: Vec<Submission> = sqlx::query_as(
            "SELECT * FROM submissions
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::bigint IS NULL OR id < $2)
             ORDER BY id DESC
             LIMIT $3",
        )
        .bind(status)
        .bind(query.start_after)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let has_more = submissions.len() as i64 == limit;
        let last_id = submissions.last().map(|s| s.id);
        Ok(SubmissionPage {
            submissions,
            has_more,
            last_id,
        })
    }

    /// Structured filters in SQL; the free-text term is matched against
    /// question, answer, explanation, and contributor name.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Submission>, StoreError> {
        let pattern = query.term.as_deref().map(like_pattern);

        let submissions: Vec<Submission> = sqlx::query_as(
            "SELECT * FROM submissions
             WHERE ($1::text IS NULL OR difficulty = $1)
               AND ($2::text IS NULL OR answer_type = $2)
               AND ($3::text IS NULL
                    OR question_text ILIKE $3
                    OR answer ILIKE $3
                    OR explanation ILIKE $3
                    OR contributor_name ILIKE $3)
             ORDER BY id DESC
             LIMIT $4",
        )
        .bind(query.difficulty.as_deref())
        .bind(query.answer_type.as_deref())
        .bind(pattern.as_deref())
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    pub async fn stats(&self) -> Result<StatsCounts, StoreError> {
        let (total, pending, processed, emailed): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT count(*),
                    count(*) FILTER (WHERE status = 'pending'),
                    count(*) FILTER (WHERE status = 'processed'),
                    count(*) FILTER (WHERE status = 'emailed')
             FROM submissions",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StatsCounts {
            total,
            pending,
            processed,
            emailed,
        })
    }

    /// All pending submissions, newest first, for the digest job.
    pub async fn fetch_pending(&self) -> Result<Vec<Submission>, StoreError> {
        let submissions = sqlx::query_as(
            "SELECT * FROM submissions WHERE status = 'pending' ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(submissions)
    }

    pub async fn mark_status(
        &self,
        ids: &[i64],
        status: SubmissionStatus,
    ) -> Result<(), StoreError> {
        if ids.is_empty() {
            return Ok(());
        }
        sqlx::query("UPDATE submissions SET status = $1 WHERE id = ANY($2)")
            .bind(status.as_str())
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None), 10);
        assert_eq!(clamp_limit(Some(25)), 25);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(5000)), 100);
    }

    #[test]
    fn like_patterns_escape_metacharacters() {
        assert_eq!(like_pattern("silk"), "%silk%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }
}
