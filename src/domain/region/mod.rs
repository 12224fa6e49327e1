pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewRegion, Region, RegionReference, RegionUpsert};
pub use repository::RegionRepository;
pub use value_objects::{RegionCode, RegionId, RegionName};
