use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::db::error::DatabaseError;
use crate::models::{Assignment, AssignmentDocument, AssignmentKey};
use crate::traits::AssignmentStore;
use crate::utils::generate_ulid;

/// Assignment collection stored as JSONB documents in Postgres.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: &PgPool) -> Self {
        Self { pool: pool.clone() }
    }

    pub async fn find_by_key(&self, key: &AssignmentKey) -> Result<Vec<Assignment>, DatabaseError> {
        let rows = sqlx::query_as::<_, (String, Json<AssignmentDocument>)>(
            r#"
            SELECT id, document
            FROM assignments
            WHERE document->>'title' = $1
              AND document->>'course' = $2
              AND document->>'due' = $3
            ORDER BY seq
            "#,
        )
        .bind(&key.title)
        .bind(&key.course)
        .bind(&key.due)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(document))| Assignment::from_document(id, document))
            .collect())
    }
}

#[async_trait]
impl AssignmentStore for AssignmentRepository {
    async fn list(&self) -> Result<Vec<Assignment>, DatabaseError> {
        let rows = sqlx::query_as::<_, (String, Json<AssignmentDocument>)>(
            "SELECT id, document FROM assignments ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(document))| Assignment::from_document(id, document))
            .collect())
    }

    async fn insert(&self, document: AssignmentDocument) -> Result<Assignment, DatabaseError> {
        let id = generate_ulid();

        sqlx::query("INSERT INTO assignments (id, document) VALUES ($1, $2)")
            .bind(&id)
            .bind(Json(&document))
            .execute(&self.pool)
            .await?;

        Ok(Assignment::from_document(id, document))
    }

    async fn set_done(&self, key: &AssignmentKey, done: bool) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE assignments
            SET document = jsonb_set(document, '{done}', to_jsonb($4::boolean))
            WHERE id = (
                SELECT id
                FROM assignments
                WHERE document->>'title' = $1
                  AND document->>'course' = $2
                  AND document->>'due' = $3
                ORDER BY seq
                LIMIT 1
            )
            "#,
        )
        .bind(&key.title)
        .bind(&key.course)
        .bind(&key.due)
        .bind(done)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, key: &AssignmentKey) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            DELETE FROM assignments
            WHERE document->>'title' = $1
              AND document->>'course' = $2
              AND document->>'due' = $3
            "#,
        )
        .bind(&key.title)
        .bind(&key.course)
        .bind(&key.due)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
