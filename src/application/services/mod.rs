// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, authors::AuthorCommandService,
            regions::RegionCommandService,
        },
        queries::{
            articles::ArticleQueryService, authors::AuthorQueryService,
            regions::RegionQueryService,
        },
    },
    domain::{article::ArticleRepository, author::AuthorRepository, region::RegionRepository},
};

pub struct ApplicationServices {
    pub author_commands: Arc<AuthorCommandService>,
    pub region_commands: Arc<RegionCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub region_queries: Arc<RegionQueryService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        region_repo: Arc<dyn RegionRepository>,
        article_repo: Arc<dyn ArticleRepository>,
    ) -> Self {
        let author_commands = Arc::new(AuthorCommandService::new(Arc::clone(&author_repo)));
        let region_commands = Arc::new(RegionCommandService::new(Arc::clone(&region_repo)));
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&author_repo),
            Arc::clone(&region_repo),
        ));

        let author_queries = Arc::new(AuthorQueryService::new(author_repo));
        let region_queries = Arc::new(RegionQueryService::new(region_repo));
        let article_queries = Arc::new(ArticleQueryService::new(article_repo));

        Self {
            author_commands,
            region_commands,
            article_commands,
            author_queries,
            region_queries,
            article_queries,
        }
    }
}
