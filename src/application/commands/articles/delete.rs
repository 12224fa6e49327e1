// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{Article, ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Regions referenced by the article are kept; only the association goes.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found(Article::ENTITY))?;
        if !self.article_repo.delete(id).await? {
            return Err(ApplicationError::not_found(Article::ENTITY));
        }
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
