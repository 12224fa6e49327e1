// src/application/validation/articles.rs
use super::fields::{FieldErrors, messages};
use super::payload::Payload;
use super::regions::validate_region_reference;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{ArticleId, ArticleTitle, ArticleUpsert};
use crate::domain::author::{Author, AuthorId, AuthorRepository};
use crate::domain::region::{RegionReference, RegionRepository};
use serde_json::Value;

const ARTICLE_FIELDS: &[&str] = &["id", "title", "content", "author_id", "regions"];

/// Article payload that passed every local check. `author_id` is still a raw
/// key until [`resolve_author`] confirms it.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub id: Option<ArticleId>,
    pub title: Option<ArticleTitle>,
    pub content: Option<String>,
    pub author_id: i64,
    pub regions: Option<Vec<RegionReference>>,
}

impl ArticleDraft {
    pub fn into_upsert(self, author: &ResolvedAuthor) -> ArticleUpsert {
        ArticleUpsert {
            id: self.id,
            title: self.title,
            content: self.content,
            author_id: author.id(),
            regions: self.regions,
        }
    }
}

/// An author known to exist. Only [`resolve_author`] produces one.
#[derive(Debug, Clone)]
pub struct ResolvedAuthor(Author);

impl ResolvedAuthor {
    pub fn id(&self) -> AuthorId {
        self.0.id
    }
}

pub fn validate_article(value: &Value) -> Result<ArticleDraft, FieldErrors> {
    let mut payload = Payload::parse(value, ARTICLE_FIELDS)?;

    let id = payload
        .integer("id", false)
        .and_then(|raw| payload.check("id", ArticleId::new(raw)));
    let title = payload
        .string("title", false)
        .and_then(|raw| payload.check("title", ArticleTitle::new(raw)));
    let content = payload.string("content", false).map(str::to_owned);
    let author_id = payload.integer("author_id", true);
    let regions = payload
        .list("regions")
        .map(|items| region_references(&mut payload, items));

    let errors = payload.into_errors();
    match author_id {
        Some(author_id) if errors.is_empty() => Ok(ArticleDraft {
            id,
            title,
            content,
            author_id,
            regions,
        }),
        _ => Err(errors),
    }
}

fn region_references(payload: &mut Payload<'_>, items: &[Value]) -> Vec<RegionReference> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match validate_region_reference(item) {
            Ok(reference) => Some(reference),
            Err(errors) => {
                payload.nest("regions", index, errors);
                None
            }
        })
        .collect()
}

/// Looks up the author an article payload points at.
pub async fn resolve_author(
    repo: &dyn AuthorRepository,
    author_id: i64,
) -> ApplicationResult<ResolvedAuthor> {
    let invalid = || ApplicationError::from(FieldErrors::single("author_id", messages::INVALID_AUTHOR_ID));
    let Ok(id) = AuthorId::new(author_id) else {
        return Err(invalid());
    };

    repo.find_by_id(id)
        .await?
        .map(ResolvedAuthor)
        .ok_or_else(invalid)
}

/// Every `{id}` element of a region list must name a stored region.
pub async fn ensure_regions_exist(
    repo: &dyn RegionRepository,
    references: &[RegionReference],
) -> ApplicationResult<()> {
    let mut errors = FieldErrors::new();
    for (index, reference) in references.iter().enumerate() {
        if let RegionReference::Existing(id) = reference {
            if repo.find_by_id(*id).await?.is_none() {
                errors.add_nested(
                    "regions",
                    index,
                    FieldErrors::single("id", messages::INVALID_REGION_ID),
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}
