// src/application/commands/articles/save.rs
use super::ArticleCommandService;
use crate::application::{
    dto::ArticleDto,
    error::ApplicationResult,
    validation::{ensure_regions_exist, resolve_author, validate_article},
};
use serde_json::Value;

pub struct SaveArticleCommand {
    pub payload: Value,
}

impl ArticleCommandService {
    /// Validates the payload, resolves its author and region references, then
    /// upserts the article.
    ///
    /// Nothing is written unless every check passes. The article row, any new
    /// regions and the association are written in one transaction by the
    /// repository. When the payload carries `regions` (even an empty list)
    /// the association is replaced by exactly that sequence; without the key
    /// it is left as stored.
    pub async fn save_article(&self, command: SaveArticleCommand) -> ApplicationResult<ArticleDto> {
        let draft = validate_article(&command.payload)?;
        let author = resolve_author(self.author_repo.as_ref(), draft.author_id).await?;
        if let Some(references) = &draft.regions {
            ensure_regions_exist(self.region_repo.as_ref(), references).await?;
        }

        let replaces_regions = draft.regions.is_some();
        let article = self.article_repo.save(draft.into_upsert(&author)).await?;

        tracing::info!(
            article_id = %article.id,
            author_id = %author.id(),
            regions = article.regions.len(),
            replaces_regions,
            "article saved"
        );
        Ok(article.into())
    }
}
