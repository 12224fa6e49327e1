use super::RegionCommandService;
use crate::application::{
    dto::RegionDto,
    error::ApplicationResult,
    validation::{FieldErrors, messages, validate_region},
};
use serde_json::Value;

pub struct SaveRegionCommand {
    pub payload: Value,
}

impl RegionCommandService {
    /// Creating a region (no `id`) requires an unused code. Updates keep
    /// whatever code they are given.
    pub async fn save_region(&self, command: SaveRegionCommand) -> ApplicationResult<RegionDto> {
        let upsert = validate_region(&command.payload)?;

        if upsert.id.is_none() && self.repo.exists_with_code(&upsert.code).await? {
            return Err(FieldErrors::single("code", messages::REGION_CODE_EXISTS).into());
        }

        let region = self.repo.upsert(upsert).await?;
        tracing::info!(region_id = %region.id, code = %region.code, "region saved");
        Ok(region.into())
    }
}
