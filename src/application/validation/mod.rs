// src/application/validation/mod.rs
//! Stateless validators turning JSON payloads into domain write models.
//!
//! Every field-level failure of a payload is collected into [`FieldErrors`]
//! before anything is persisted. Checks that need the store (author lookup,
//! region existence, region code uniqueness) run afterwards and are exposed
//! as separate functions whose results are threaded into the commands.
mod articles;
mod authors;
mod fields;
mod payload;
mod regions;

pub use articles::{ArticleDraft, ResolvedAuthor, ensure_regions_exist, resolve_author, validate_article};
pub use authors::validate_author;
pub use fields::{FieldErrors, SCHEMA_KEY, messages};
pub use regions::{validate_region, validate_region_reference};
