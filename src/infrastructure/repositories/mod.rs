// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_author;
mod sqlite_region;

pub use error::map_sqlx;
pub(crate) use sqlite_article::replace_regions;
pub use sqlite_article::SqliteArticleRepository;
pub use sqlite_author::SqliteAuthorRepository;
pub use sqlite_region::SqliteRegionRepository;
