// src/application/commands/regions/mod.rs
mod delete;
mod save;
mod service;
mod update;

pub use delete::DeleteRegionCommand;
pub use save::SaveRegionCommand;
pub use service::RegionCommandService;
pub use update::UpdateRegionCommand;
