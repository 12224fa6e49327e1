// src/infrastructure/repositories/sqlite_author.rs
use super::error::map_sqlx;
use crate::domain::author::{Author, AuthorId, AuthorRepository, AuthorUpsert, PersonName};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAuthorRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    first_name: String,
    last_name: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            first_name: PersonName::new(row.first_name)?,
            last_name: PersonName::new(row.last_name)?,
        })
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, first_name, last_name FROM authors WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, first_name, last_name FROM authors ORDER BY id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }

    async fn upsert(&self, author: AuthorUpsert) -> DomainResult<Author> {
        let AuthorUpsert {
            id,
            first_name,
            last_name,
        } = author;

        // A NULL id lets SQLite assign the next key.
        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (id, first_name, last_name) VALUES (?, ?, ?) \
             ON CONFLICT (id) DO UPDATE SET first_name = excluded.first_name, last_name = excluded.last_name \
             RETURNING id, first_name, last_name",
        )
        .bind(id.map(i64::from))
        .bind(first_name.as_str())
        .bind(last_name.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn delete(&self, id: AuthorId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
