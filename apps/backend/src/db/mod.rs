//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that only connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    // === Question Repository ===

    /// Insert a question; id and timestamps are assigned by the database
    pub async fn insert_question(&self, data: &QuestionData) -> Result<DbQuestion> {
        let (kind, body) = split_payload(data)?;

        let question = sqlx::query_as::<_, DbQuestion>(
            r#"
            INSERT INTO questions (question_type, data)
            VALUES ($1, $2)
            RETURNING id, question_type, data, created_at, updated_at
            "#,
        )
        .bind(kind.as_str())
        .bind(Json(&body))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = %question.id, kind = %kind, "Inserted question");
        Ok(question)
    }

    /// Get all questions, oldest first
    pub async fn list_questions(&self) -> Result<Vec<DbQuestion>> {
        let questions = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, question_type, data, created_at, updated_at
            FROM questions
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Get question by ID
    pub async fn get_question(&self, id: Uuid) -> Result<Option<DbQuestion>> {
        let question = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, question_type, data, created_at, updated_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Delete one question
    pub async fn delete_question(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(%id, rows = result.rows_affected(), "Deleted question row");
        Ok(result.rows_affected() > 0)
    }

    /// Delete every question, returning how many were removed
    pub async fn delete_all_questions(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM questions")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
