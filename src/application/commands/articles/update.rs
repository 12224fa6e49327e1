use super::{ArticleCommandService, SaveArticleCommand};
use crate::application::{
    commands::with_path_id,
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::{Article, ArticleId};
use serde_json::Value;

pub struct UpdateArticleCommand {
    pub id: i64,
    pub payload: Value,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found(Article::ENTITY))?;
        if self.article_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(Article::ENTITY));
        }

        self.save_article(SaveArticleCommand {
            payload: with_path_id(command.payload, command.id),
        })
        .await
    }
}
