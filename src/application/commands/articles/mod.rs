// src/application/commands/articles/mod.rs
mod delete;
mod save;
mod service;
mod update;

pub use delete::DeleteArticleCommand;
pub use save::SaveArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
