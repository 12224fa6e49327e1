use super::AuthorCommandService;
use crate::application::{dto::AuthorDto, error::ApplicationResult, validation::validate_author};
use serde_json::Value;

/// Upsert from a raw payload: with an `id` the author is updated, without
/// one it is created.
pub struct SaveAuthorCommand {
    pub payload: Value,
}

impl AuthorCommandService {
    pub async fn save_author(&self, command: SaveAuthorCommand) -> ApplicationResult<AuthorDto> {
        let upsert = validate_author(&command.payload)?;
        let author = self.repo.upsert(upsert).await?;
        tracing::info!(author_id = %author.id, "author saved");
        Ok(author.into())
    }
}
