// src/domain/mod.rs
pub mod article;
pub mod author;
pub mod constraints;
pub mod errors;
pub mod region;
