// src/application/queries/authors.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{Author, AuthorId, AuthorRepository},
};

pub struct GetAuthorQuery {
    pub id: i64,
}

pub struct AuthorQueryService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorQueryService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_authors(&self) -> ApplicationResult<Vec<AuthorDto>> {
        let authors = self.repo.list().await?;
        Ok(authors.into_iter().map(Into::into).collect())
    }

    pub async fn get_author(&self, query: GetAuthorQuery) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(query.id).map_err(|_| ApplicationError::not_found(Author::ENTITY))?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(Author::ENTITY))
    }
}
