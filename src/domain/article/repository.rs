use crate::domain::article::entity::{Article, ArticleUpsert};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
    /// Upserts the article row, inserts `New` region references and
    /// replaces the association, all in a single transaction.
    async fn save(&self, article: ArticleUpsert) -> DomainResult<Article>;
    /// Returns `false` when no row matched.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}
