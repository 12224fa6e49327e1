// src/application/queries/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleRepository},
};

pub struct GetArticleQuery {
    pub id: i64,
}

pub struct ArticleQueryService {
    repo: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found(Article::ENTITY))?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(Article::ENTITY))
    }
}
