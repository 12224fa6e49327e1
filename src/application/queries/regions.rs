// src/application/queries/regions.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::RegionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::region::{Region, RegionId, RegionRepository},
};

pub struct GetRegionQuery {
    pub id: i64,
}

pub struct RegionQueryService {
    repo: Arc<dyn RegionRepository>,
}

impl RegionQueryService {
    pub fn new(repo: Arc<dyn RegionRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_regions(&self) -> ApplicationResult<Vec<RegionDto>> {
        let regions = self.repo.list().await?;
        Ok(regions.into_iter().map(Into::into).collect())
    }

    pub async fn get_region(&self, query: GetRegionQuery) -> ApplicationResult<RegionDto> {
        let id = RegionId::new(query.id).map_err(|_| ApplicationError::not_found(Region::ENTITY))?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(Region::ENTITY))
    }
}
