use crate::domain::region::value_objects::{RegionCode, RegionId, RegionName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: RegionId,
    pub code: RegionCode,
    pub name: RegionName,
}

impl Region {
    pub const ENTITY: &'static str = "Region";
}

/// Write model for the region endpoints. `name: None` keeps the stored name
/// on update and stores an empty name on creation.
#[derive(Debug, Clone)]
pub struct RegionUpsert {
    pub id: Option<RegionId>,
    pub code: RegionCode,
    pub name: Option<RegionName>,
}

/// Field values of a region that may not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegion {
    pub code: RegionCode,
    pub name: RegionName,
}

/// One element of an article's region list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionReference {
    /// A region that must already be stored.
    Existing(RegionId),
    /// Inserted as a new row, even when an equal region is stored.
    New(NewRegion),
}
