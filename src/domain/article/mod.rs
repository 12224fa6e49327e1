pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpsert};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleTitle};
