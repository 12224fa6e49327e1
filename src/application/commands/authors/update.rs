use super::{AuthorCommandService, SaveAuthorCommand};
use crate::application::{
    commands::with_path_id,
    dto::AuthorDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::author::{Author, AuthorId};
use serde_json::Value;

pub struct UpdateAuthorCommand {
    pub id: i64,
    pub payload: Value,
}

impl AuthorCommandService {
    pub async fn update_author(&self, command: UpdateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(command.id).map_err(|_| ApplicationError::not_found(Author::ENTITY))?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(Author::ENTITY));
        }

        self.save_author(SaveAuthorCommand {
            payload: with_path_id(command.payload, command.id),
        })
        .await
    }
}
