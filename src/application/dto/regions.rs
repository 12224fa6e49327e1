use crate::domain::region::Region;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionDto {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id.into(),
            code: region.code.into_inner(),
            name: region.name.into_inner(),
        }
    }
}
