//! Core data types for the Feuilleton novel generation library.
//!
//! This crate provides the foundation data types used across all Feuilleton
//! interfaces: conversation roles and messages, generation request/response
//! shapes, the static novel description, and chapter records with the
//! bounded context window.

mod chapter;
mod message;
mod novel;
mod request;
mod role;

pub use chapter::{ChapterRecord, ContextWindow};
pub use message::Message;
pub use novel::{Character, NovelConfig, NovelConfigBuilder};
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
