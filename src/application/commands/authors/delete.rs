use super::AuthorCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::author::{Author, AuthorId};

pub struct DeleteAuthorCommand {
    pub id: i64,
}

impl AuthorCommandService {
    /// Deleting an author also deletes the articles written by it.
    pub async fn delete_author(&self, command: DeleteAuthorCommand) -> ApplicationResult<()> {
        let id = AuthorId::new(command.id).map_err(|_| ApplicationError::not_found(Author::ENTITY))?;
        if !self.repo.delete(id).await? {
            return Err(ApplicationError::not_found(Author::ENTITY));
        }
        tracing::info!(author_id = %id, "author deleted");
        Ok(())
    }
}
