use crate::domain::errors::DomainResult;
use crate::domain::region::entity::{Region, RegionUpsert};
use crate::domain::region::value_objects::{RegionCode, RegionId};
use async_trait::async_trait;

#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn find_by_id(&self, id: RegionId) -> DomainResult<Option<Region>>;
    async fn exists_with_code(&self, code: &RegionCode) -> DomainResult<bool>;
    async fn list(&self) -> DomainResult<Vec<Region>>;
    async fn upsert(&self, region: RegionUpsert) -> DomainResult<Region>;
    /// Returns `false` when no row matched. Article associations pointing at
    /// the region are dropped with it.
    async fn delete(&self, id: RegionId) -> DomainResult<bool>;
}
