use super::RegionCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::region::{Region, RegionId};

pub struct DeleteRegionCommand {
    pub id: i64,
}

impl RegionCommandService {
    pub async fn delete_region(&self, command: DeleteRegionCommand) -> ApplicationResult<()> {
        let id = RegionId::new(command.id).map_err(|_| ApplicationError::not_found(Region::ENTITY))?;
        if !self.repo.delete(id).await? {
            return Err(ApplicationError::not_found(Region::ENTITY));
        }
        tracing::info!(region_id = %id, "region deleted");
        Ok(())
    }
}
