// src/infrastructure/repositories/sqlite_region.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::region::{
    Region, RegionCode, RegionId, RegionName, RegionRepository, RegionUpsert,
};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteRegionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteRegionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct RegionRow {
    pub(super) id: i64,
    pub(super) code: String,
    pub(super) name: String,
}

impl TryFrom<RegionRow> for Region {
    type Error = DomainError;

    fn try_from(row: RegionRow) -> Result<Self, Self::Error> {
        Ok(Region {
            id: RegionId::new(row.id)?,
            code: RegionCode::new(row.code)?,
            name: RegionName::new(row.name)?,
        })
    }
}

#[async_trait]
impl RegionRepository for SqliteRegionRepository {
    async fn find_by_id(&self, id: RegionId) -> DomainResult<Option<Region>> {
        let row = sqlx::query_as::<_, RegionRow>("SELECT id, code, name FROM regions WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Region::try_from).transpose()
    }

    async fn exists_with_code(&self, code: &RegionCode) -> DomainResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM regions WHERE code = ? LIMIT 1")
            .bind(code.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(found.is_some())
    }

    async fn list(&self) -> DomainResult<Vec<Region>> {
        let rows = sqlx::query_as::<_, RegionRow>("SELECT id, code, name FROM regions ORDER BY id")
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Region::try_from).collect()
    }

    async fn upsert(&self, region: RegionUpsert) -> DomainResult<Region> {
        let RegionUpsert { id, code, name } = region;
        let name = name.as_ref().map(RegionName::as_str);

        // An absent name is stored as '' on insert and left alone on update.
        let row = sqlx::query_as::<_, RegionRow>(
            "INSERT INTO regions (id, code, name) VALUES (?, ?, COALESCE(?, '')) \
             ON CONFLICT (id) DO UPDATE SET code = excluded.code, name = COALESCE(?, regions.name) \
             RETURNING id, code, name",
        )
        .bind(id.map(i64::from))
        .bind(code.as_str())
        .bind(name)
        .bind(name)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Region::try_from(row)
    }

    async fn delete(&self, id: RegionId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM regions WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::{init_memory_pool, run_migrations};

    async fn repository() -> SqliteRegionRepository {
        let pool = init_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteRegionRepository::new(Arc::new(pool))
    }

    fn upsert(id: Option<i64>, code: &str, name: Option<&str>) -> RegionUpsert {
        RegionUpsert {
            id: id.map(|id| RegionId::new(id).unwrap()),
            code: RegionCode::new(code).unwrap(),
            name: name.map(|name| RegionName::new(name).unwrap()),
        }
    }

    #[tokio::test]
    async fn absent_name_is_empty_on_insert_and_kept_on_update() {
        let repo = repository().await;
        let created = repo.upsert(upsert(None, "AU", None)).await.unwrap();
        assert_eq!(created.name.as_str(), "");

        let named = repo
            .upsert(upsert(Some(created.id.into()), "AU", Some("Austria")))
            .await
            .unwrap();
        let recoded = repo
            .upsert(upsert(Some(created.id.into()), "AT", None))
            .await
            .unwrap();

        assert_eq!(named.id, created.id);
        assert_eq!(recoded.code.as_str(), "AT");
        assert_eq!(recoded.name.as_str(), "Austria");
    }

    #[tokio::test]
    async fn duplicate_codes_are_allowed_through_update() {
        let repo = repository().await;
        let us = repo.upsert(upsert(None, "US", None)).await.unwrap();
        let au = repo.upsert(upsert(None, "AU", None)).await.unwrap();

        repo.upsert(upsert(Some(au.id.into()), "US", None)).await.unwrap();

        assert!(repo.exists_with_code(&us.code).await.unwrap());
        assert!(!repo.exists_with_code(&RegionCode::new("AU").unwrap()).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn upsert_with_unknown_id_inserts_with_that_id() {
        let repo = repository().await;
        let region = repo.upsert(upsert(Some(7), "AL", Some("Albania"))).await.unwrap();

        assert_eq!(i64::from(region.id), 7);
        assert_eq!(repo.find_by_id(region.id).await.unwrap(), Some(region.clone()));
        assert!(repo.delete(region.id).await.unwrap());
        assert!(!repo.delete(region.id).await.unwrap());
    }
}
