// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::{
    article::ArticleRepository, author::AuthorRepository, region::RegionRepository,
};

pub struct ArticleCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) region_repo: Arc<dyn RegionRepository>,
}

impl ArticleCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        region_repo: Arc<dyn RegionRepository>,
    ) -> Self {
        Self {
            article_repo,
            author_repo,
            region_repo,
        }
    }
}
