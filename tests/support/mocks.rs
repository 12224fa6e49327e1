// tests/support/mocks.rs
use techtest_api::domain::article::{Article, ArticleId, ArticleRepository, ArticleUpsert};
use techtest_api::domain::errors::{DomainError, DomainResult};

/// Article store whose every call fails like a broken database.
pub struct BrokenArticleRepo;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database is locked".into()))
}

#[async_trait::async_trait]
impl ArticleRepository for BrokenArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        broken()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        broken()
    }

    async fn save(&self, _article: ArticleUpsert) -> DomainResult<Article> {
        broken()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<bool> {
        broken()
    }
}
