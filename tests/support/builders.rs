// tests/support/builders.rs
use sqlx::SqlitePool;
use std::sync::Arc;
use techtest_api::domain::article::{Article, ArticleRepository, ArticleTitle, ArticleUpsert};
use techtest_api::domain::author::{Author, AuthorId, AuthorRepository, AuthorUpsert, PersonName};
use techtest_api::domain::region::{
    Region, RegionCode, RegionId, RegionName, RegionReference, RegionRepository, RegionUpsert,
};
use techtest_api::infrastructure::repositories::{
    SqliteArticleRepository, SqliteAuthorRepository, SqliteRegionRepository,
};

pub async fn insert_author(pool: &Arc<SqlitePool>, first_name: &str, last_name: &str) -> Author {
    SqliteAuthorRepository::new(Arc::clone(pool))
        .upsert(AuthorUpsert {
            id: None,
            first_name: PersonName::new(first_name).unwrap(),
            last_name: PersonName::new(last_name).unwrap(),
        })
        .await
        .unwrap()
}

pub async fn insert_region(pool: &Arc<SqlitePool>, code: &str, name: &str) -> Region {
    SqliteRegionRepository::new(Arc::clone(pool))
        .upsert(RegionUpsert {
            id: None,
            code: RegionCode::new(code).unwrap(),
            name: Some(RegionName::new(name).unwrap()),
        })
        .await
        .unwrap()
}

pub async fn count_regions(pool: &Arc<SqlitePool>) -> usize {
    SqliteRegionRepository::new(Arc::clone(pool))
        .list()
        .await
        .unwrap()
        .len()
}

pub struct ArticleBuilder {
    author_id: AuthorId,
    title: String,
    content: String,
    regions: Vec<RegionId>,
}

impl ArticleBuilder {
    pub fn by(author: &Author) -> Self {
        Self {
            author_id: author.id,
            title: "Fake Article".into(),
            content: "Fake Content".into(),
            regions: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn region(mut self, region: &Region) -> Self {
        self.regions.push(region.id);
        self
    }

    pub async fn insert(self, pool: &Arc<SqlitePool>) -> Article {
        let references = self
            .regions
            .into_iter()
            .map(RegionReference::Existing)
            .collect();
        SqliteArticleRepository::new(Arc::clone(pool))
            .save(
                ArticleUpsert::new(self.author_id)
                    .with_title(ArticleTitle::new(self.title).unwrap())
                    .with_content(self.content)
                    .with_regions(references),
            )
            .await
            .unwrap()
    }
}
