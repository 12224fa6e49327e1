use super::{RegionCommandService, SaveRegionCommand};
use crate::application::{
    commands::with_path_id,
    dto::RegionDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::region::{Region, RegionId};
use serde_json::Value;

pub struct UpdateRegionCommand {
    pub id: i64,
    pub payload: Value,
}

impl RegionCommandService {
    pub async fn update_region(&self, command: UpdateRegionCommand) -> ApplicationResult<RegionDto> {
        let id = RegionId::new(command.id).map_err(|_| ApplicationError::not_found(Region::ENTITY))?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(Region::ENTITY));
        }

        self.save_region(SaveRegionCommand {
            payload: with_path_id(command.payload, command.id),
        })
        .await
    }
}
