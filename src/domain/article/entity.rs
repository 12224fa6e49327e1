// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use crate::domain::region::{Region, RegionReference};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: String,
    pub author: Author,
    /// Association order, duplicates included.
    pub regions: Vec<Region>,
}

impl Article {
    pub const ENTITY: &'static str = "Article";

    pub fn region_ids(&self) -> Vec<i64> {
        self.regions.iter().map(|region| region.id.into()).collect()
    }
}

/// Write model handed to [`ArticleRepository::save`](super::ArticleRepository::save).
///
/// `title` and `content` left as `None` keep their stored values on update
/// and default to empty strings on creation. `regions: None` leaves the
/// association untouched; `Some` replaces it entirely, in order.
#[derive(Debug, Clone)]
pub struct ArticleUpsert {
    pub id: Option<ArticleId>,
    pub title: Option<ArticleTitle>,
    pub content: Option<String>,
    pub author_id: AuthorId,
    pub regions: Option<Vec<RegionReference>>,
}

impl ArticleUpsert {
    pub fn new(author_id: AuthorId) -> Self {
        Self {
            id: None,
            title: None,
            content: None,
            author_id,
            regions: None,
        }
    }

    pub fn with_id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_regions(mut self, regions: Vec<RegionReference>) -> Self {
        self.regions = Some(regions);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::PersonName;
    use crate::domain::region::{RegionCode, RegionId, RegionName};

    fn sample_article() -> Article {
        let region = |id: i64, code: &str| Region {
            id: RegionId::new(id).unwrap(),
            code: RegionCode::new(code).unwrap(),
            name: RegionName::default(),
        };
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: String::new(),
            author: Author {
                id: AuthorId::new(1).unwrap(),
                first_name: PersonName::new("user1").unwrap(),
                last_name: PersonName::new("foo").unwrap(),
            },
            regions: vec![region(4, "AU"), region(2, "US"), region(4, "AU")],
        }
    }

    #[test]
    fn region_ids_keep_association_order() {
        assert_eq!(sample_article().region_ids(), vec![4, 2, 4]);
    }

    #[test]
    fn upsert_builder_leaves_regions_untouched_by_default() {
        let upsert = ArticleUpsert::new(AuthorId::new(1).unwrap())
            .with_title(ArticleTitle::new("t").unwrap())
            .with_content("body");
        assert!(upsert.regions.is_none());
        assert!(upsert.id.is_none());
        assert_eq!(upsert.content.as_deref(), Some("body"));

        let cleared = upsert.with_regions(Vec::new());
        assert_eq!(cleared.regions, Some(Vec::new()));
    }
}
