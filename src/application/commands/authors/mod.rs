// src/application/commands/authors/mod.rs
mod delete;
mod save;
mod service;
mod update;

pub use delete::DeleteAuthorCommand;
pub use save::SaveAuthorCommand;
pub use service::AuthorCommandService;
pub use update::UpdateAuthorCommand;
