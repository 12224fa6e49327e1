use crate::domain::author::entity::{Author, AuthorUpsert};
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
    async fn list(&self) -> DomainResult<Vec<Author>>;
    async fn upsert(&self, author: AuthorUpsert) -> DomainResult<Author>;
    /// Returns `false` when no row matched. Articles of the author are
    /// removed with it.
    async fn delete(&self, id: AuthorId) -> DomainResult<bool>;
}
