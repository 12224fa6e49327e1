// src/infrastructure/repositories/sqlite_article.rs
use super::error::map_sqlx;
use super::sqlite_region::RegionRow;
use crate::domain::article::{Article, ArticleId, ArticleRepository, ArticleTitle, ArticleUpsert};
use crate::domain::author::{Author, AuthorId, PersonName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::region::{NewRegion, Region, RegionReference};
use async_trait::async_trait;
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "SELECT articles.id, articles.title, articles.content, articles.author_id, \
     authors.first_name AS author_first_name, authors.last_name AS author_last_name \
     FROM articles JOIN authors ON authors.id = articles.author_id";

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    author_first_name: String,
    author_last_name: String,
}

#[derive(Debug, FromRow)]
struct AssociatedRegionRow {
    article_id: i64,
    #[sqlx(flatten)]
    region: RegionRow,
}

impl ArticleRow {
    fn into_article(self, regions: Vec<Region>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            content: self.content,
            author: Author {
                id: AuthorId::new(self.author_id)?,
                first_name: PersonName::new(self.author_first_name)?,
                last_name: PersonName::new(self.author_last_name)?,
            },
            regions,
        })
    }
}

async fn load_article(conn: &mut SqliteConnection, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_COLUMNS} WHERE articles.id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    let Some(row) = row else {
        return Ok(None);
    };

    let regions = sqlx::query_as::<_, RegionRow>(
        "SELECT regions.id, regions.code, regions.name FROM article_regions \
         JOIN regions ON regions.id = article_regions.region_id \
         WHERE article_regions.article_id = ? ORDER BY article_regions.position",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?
    .into_iter()
    .map(Region::try_from)
    .collect::<DomainResult<Vec<_>>>()?;

    row.into_article(regions).map(Some)
}

/// Regions described inline carry no id, so each one becomes a new row even
/// when another region already has the same code and name.
async fn insert_region(conn: &mut SqliteConnection, region: &NewRegion) -> DomainResult<i64> {
    let id: i64 = sqlx::query_scalar("INSERT INTO regions (code, name) VALUES (?, ?) RETURNING id")
        .bind(region.code.as_str())
        .bind(region.name.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    tracing::debug!(region_id = id, code = %region.code, "region created for article");
    Ok(id)
}

/// Replaces the region association of `article_id` with `references`, in
/// order.
pub(crate) async fn replace_regions(
    conn: &mut SqliteConnection,
    article_id: i64,
    references: Vec<RegionReference>,
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_regions WHERE article_id = ?")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for (position, reference) in references.into_iter().enumerate() {
        let region_id = match reference {
            RegionReference::Existing(id) => i64::from(id),
            RegionReference::New(region) => insert_region(conn, &region).await?,
        };

        sqlx::query("INSERT INTO article_regions (article_id, region_id, position) VALUES (?, ?, ?)")
            .bind(article_id)
            .bind(region_id)
            .bind(position as i64)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }

    Ok(())
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        load_article(&mut *conn, i64::from(id)).await
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_COLUMNS} ORDER BY articles.id"))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let associations = sqlx::query_as::<_, AssociatedRegionRow>(
            "SELECT article_regions.article_id, regions.id, regions.code, regions.name \
             FROM article_regions JOIN regions ON regions.id = article_regions.region_id \
             ORDER BY article_regions.article_id, article_regions.position",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut regions_by_article: HashMap<i64, Vec<Region>> = HashMap::new();
        for association in associations {
            regions_by_article
                .entry(association.article_id)
                .or_default()
                .push(Region::try_from(association.region)?);
        }

        rows.into_iter()
            .map(|row| {
                let regions = regions_by_article.remove(&row.id).unwrap_or_default();
                row.into_article(regions)
            })
            .collect()
    }

    async fn save(&self, article: ArticleUpsert) -> DomainResult<Article> {
        let ArticleUpsert {
            id,
            title,
            content,
            author_id,
            regions,
        } = article;
        let title = title.as_ref().map(ArticleTitle::as_str);
        let content = content.as_deref();

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Absent title/content default to '' on insert and keep their stored
        // values on update.
        let article_id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (id, title, content, author_id) \
             VALUES (?, COALESCE(?, ''), COALESCE(?, ''), ?) \
             ON CONFLICT (id) DO UPDATE SET title = COALESCE(?, articles.title), \
             content = COALESCE(?, articles.content), author_id = excluded.author_id \
             RETURNING id",
        )
        .bind(id.map(i64::from))
        .bind(title)
        .bind(content)
        .bind(i64::from(author_id))
        .bind(title)
        .bind(content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if let Some(references) = regions {
            replace_regions(&mut *tx, article_id, references).await?;
        }

        let saved = load_article(&mut *tx, article_id).await?.ok_or_else(|| {
            DomainError::Persistence(format!("article {article_id} vanished during save"))
        })?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(saved)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}
