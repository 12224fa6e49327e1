use super::{AuthorDto, RegionDto};
use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outgoing article with its author and regions nested, regions in
/// association order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    pub regions: Vec<RegionDto>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content,
            author: article.author.into(),
            regions: article.regions.into_iter().map(Into::into).collect(),
        }
    }
}
