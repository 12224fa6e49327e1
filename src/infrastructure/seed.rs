// src/infrastructure/seed.rs
use crate::domain::errors::DomainResult;
use crate::domain::region::{NewRegion, RegionCode, RegionName, RegionReference};
use crate::infrastructure::repositories::{map_sqlx, replace_regions};
use sqlx::{SqliteConnection, SqlitePool};

const FAKE_TITLE: &str = "Fake Article";
const FAKE_CONTENT: &str = "Fake Content";

/// Row counts after seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub authors: i64,
    pub articles: i64,
    pub regions: i64,
}

/// Wipes every table and inserts the demo data set. Runs as one transaction,
/// so a failure leaves the previous contents in place.
pub async fn seed_demo_data(pool: &SqlitePool) -> DomainResult<SeedSummary> {
    let mut tx = pool.begin().await.map_err(map_sqlx)?;

    for table in ["article_regions", "articles", "regions", "authors"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
    }

    let first = insert_author(&mut *tx, "user1", "foo").await?;
    let second = insert_author(&mut *tx, "user2", "bar").await?;

    let article = insert_article(&mut *tx, first).await?;
    let regions = vec![region("AL", "Albania")?, region("UK", "United Kingdom")?];
    replace_regions(&mut *tx, article, regions).await?;

    for _ in 0..3 {
        insert_article(&mut *tx, first).await?;
    }

    let article = insert_article(&mut *tx, second).await?;
    let regions = vec![
        region("AU", "Austria")?,
        region("US", "United States of America")?,
    ];
    replace_regions(&mut *tx, article, regions).await?;

    let summary = SeedSummary {
        authors: count(&mut *tx, "authors").await?,
        articles: count(&mut *tx, "articles").await?,
        regions: count(&mut *tx, "regions").await?,
    };

    tx.commit().await.map_err(map_sqlx)?;
    tracing::info!(?summary, "demo data seeded");
    Ok(summary)
}

async fn insert_author(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
) -> DomainResult<i64> {
    sqlx::query_scalar("INSERT INTO authors (first_name, last_name) VALUES (?, ?) RETURNING id")
        .bind(first_name)
        .bind(last_name)
        .fetch_one(conn)
        .await
        .map_err(map_sqlx)
}

async fn insert_article(conn: &mut SqliteConnection, author_id: i64) -> DomainResult<i64> {
    sqlx::query_scalar(
        "INSERT INTO articles (title, content, author_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(FAKE_TITLE)
    .bind(FAKE_CONTENT)
    .bind(author_id)
    .fetch_one(conn)
    .await
    .map_err(map_sqlx)
}

async fn count(conn: &mut SqliteConnection, table: &str) -> DomainResult<i64> {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(conn)
        .await
        .map_err(map_sqlx)
}

fn region(code: &str, name: &str) -> DomainResult<RegionReference> {
    Ok(RegionReference::New(NewRegion {
        code: RegionCode::new(code)?,
        name: RegionName::new(name)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleRepository;
    use crate::domain::author::AuthorRepository;
    use crate::domain::region::RegionRepository;
    use crate::infrastructure::database::{init_memory_pool, run_migrations};
    use crate::infrastructure::repositories::{
        SqliteArticleRepository, SqliteAuthorRepository, SqliteRegionRepository,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn seeding_twice_leaves_one_copy_of_the_demo_data() {
        let pool = Arc::new(init_memory_pool().await.unwrap());
        run_migrations(&pool).await.unwrap();

        seed_demo_data(&pool).await.unwrap();
        let summary = seed_demo_data(&pool).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                authors: 2,
                articles: 5,
                regions: 4
            }
        );

        let articles = SqliteArticleRepository::new(pool.clone()).list().await.unwrap();
        let regions = SqliteRegionRepository::new(pool.clone()).list().await.unwrap();
        let authors = SqliteAuthorRepository::new(pool).list().await.unwrap();

        assert_eq!(articles.len(), 5);
        assert_eq!(regions.len(), 4);
        assert_eq!(authors.len(), 2);

        let first = &articles[0];
        assert_eq!(first.author.first_name.as_str(), "user1");
        let codes: Vec<_> = first.regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["AL", "UK"]);

        let last = articles.last().unwrap();
        assert_eq!(last.author.last_name.as_str(), "bar");
        assert_eq!(last.regions[1].name.as_str(), "United States of America");
        assert!(articles[1..4].iter().all(|a| a.regions.is_empty()));
    }

    #[tokio::test]
    async fn failed_seed_keeps_existing_rows() {
        let pool = Arc::new(init_memory_pool().await.unwrap());
        run_migrations(&pool).await.unwrap();
        seed_demo_data(&pool).await.unwrap();
        sqlx::query(
            "CREATE TRIGGER reject_links BEFORE INSERT ON article_regions \
             BEGIN SELECT RAISE(ABORT, 'rejected'); END",
        )
        .execute(&*pool)
        .await
        .unwrap();

        assert!(seed_demo_data(&pool).await.is_err());

        let articles = SqliteArticleRepository::new(pool.clone()).list().await.unwrap();
        assert_eq!(articles.len(), 5);
        assert_eq!(articles[0].regions.len(), 2);
        let regions = SqliteRegionRepository::new(pool).list().await.unwrap();
        assert_eq!(regions.len(), 4);
    }
}
